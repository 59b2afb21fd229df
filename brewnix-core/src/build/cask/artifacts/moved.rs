// brewnix-core/src/build/cask/artifacts/moved.rs

use brewnix_common::error::LoweringError;
use brewnix_common::model::artifact::{FileSpec, MovedKind};
use tracing::debug;

use crate::build::cask::helpers::{copy_into, target_or_basename, OUT};

/// Mirrors Homebrew's `Moved` artifacts (fonts, plugins, prefpanes, ...):
/// each kind has one fixed directory under `$out/Library`.
pub fn lower_moved(kind: MovedKind, file: &FileSpec) -> Result<String, LoweringError> {
    let target = target_or_basename(file, kind.key())?;
    let dest = format!("{OUT}/Library/{}/{target}", kind.library_subdir());
    debug!("Lowering {} '{}' → '{}'", kind.key(), file.name, dest);
    Ok(copy_into(&file.name, &dest))
}
