// brewnix-common/src/model/mod.rs
pub mod artifact;
pub mod cask;
pub mod de;
pub mod nix;

// Re-export
pub use artifact::{Artifact, FileSpec, MovedKind};
pub use cask::{Cask, CaskChecksum, CaskVersion, Container, ContainerType};
pub use nix::{NixMeta, NixPackage, NixSource, PackageRecord, GENERATOR_VERSION};
