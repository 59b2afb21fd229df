// brewnix-core/src/build/cask/artifacts/app.rs

use brewnix_common::error::LoweringError;
use brewnix_common::model::artifact::FileSpec;
use tracing::debug;

use crate::build::cask::helpers::{copy_into, target_or_basename, OUT};

/// `app` and `suite` stanzas: the bundle (or suite directory) is copied into
/// `$out/Applications/<target>`.
pub fn lower_app(file: &FileSpec, what: &str) -> Result<String, LoweringError> {
    let target = target_or_basename(file, what)?;
    let dest = format!("{OUT}/Applications/{target}");
    debug!("Lowering {} '{}' → '{}'", what, file.name, dest);
    Ok(copy_into(&file.name, &dest))
}
