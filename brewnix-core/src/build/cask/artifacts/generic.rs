// brewnix-core/src/build/cask/artifacts/generic.rs

use brewnix_common::error::LoweringError;
use brewnix_common::model::artifact::FileSpec;
use tracing::debug;

use crate::build::cask::helpers::OUT;

/// Generic `artifact` stanzas copy straight to `$out/<target>`. Homebrew
/// always gives them a target, so there is no base-name fallback and no
/// directory is created first.
pub fn lower_generic(file: &FileSpec) -> Result<String, LoweringError> {
    let target = file.target.as_deref().ok_or_else(|| {
        LoweringError::Unreachable(format!("artifact {} has missing target", file.name))
    })?;
    debug!("Copying artifact '{}' → '{}/{}'", file.name, OUT, target);
    Ok(format!("cp -r \"{}\" \"{OUT}/{target}\"", file.name))
}
