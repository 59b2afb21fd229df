// brewnix-core/src/build/cask/artifacts/manpage.rs

use brewnix_common::error::LoweringError;
use brewnix_common::model::cask::Cask;
use tracing::debug;

use crate::build::cask::helpers::{basename, link_into, substitute_appdir, OUT};

/// Man pages are symlinked into `$out/usr/local/share/man/man<section>`, the
/// section being the second dot-separated part of the file name (`tool.1` → `1`).
/// A file name without a section cannot be placed and makes the cask
/// unsupported.
pub fn lower_manpage(cask: &Cask, source: &str) -> Result<String, LoweringError> {
    let src = substitute_appdir(source);
    let name = basename(source).ok_or_else(|| {
        LoweringError::Unreachable(format!(
            "{}'s manpage {source} has missing name",
            cask.token
        ))
    })?;
    let section = name
        .split('.')
        .nth(1)
        .ok_or_else(|| LoweringError::Unsupported {
            token: cask.token.clone(),
            kind: "manpage",
            message: format!("{}'s manpage {source} has no section suffix", cask.token),
        })?;
    let dir = format!("{OUT}/usr/local/share/man/man{section}");
    let link = format!("{dir}/{name}");
    debug!("Linking manpage '{}' → '{}'", src, link);
    Ok(link_into(&dir, &src, &link))
}
