// brewnix-core/src/build/cask/artifacts/binary.rs

use brewnix_common::error::LoweringError;
use brewnix_common::model::artifact::FileSpec;
use brewnix_common::model::cask::Cask;
use tracing::debug;

use crate::build::cask::helpers::{
    join_normalized, link_into, substitute_binary_source, target_or_basename, OUT,
};

/// `binary` stanzas are symlinked into `$out/bin`. The source may live inside
/// an app bundle (`$APPDIR`), the versioned Caskroom, or a shell-completion
/// directory; those prefixes are rewritten to their `$out` equivalents. The
/// link path is normalized, so a target may step out of `bin` with `..`.
pub fn lower_binary(cask: &Cask, file: &FileSpec) -> Result<String, LoweringError> {
    let src = substitute_binary_source(&file.name, &cask.token, cask.version.as_str());
    let target = target_or_basename(file, &format!("{}'s binary", cask.token))?;
    let bin_dir = format!("{OUT}/bin");
    let link = join_normalized(&bin_dir, target);
    debug!("Linking binary '{}' → '{}'", src, link);
    Ok(link_into(&bin_dir, &src, &link))
}
