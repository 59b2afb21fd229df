// brewnix-core/src/lib.rs

// Declare the top-level modules within the library crate
pub mod build;
pub mod catalog;
pub mod decode;

// Re-export the pipeline entry points for the CLI crate
pub use build::{install_phase, lower, lower_record};
pub use catalog::{decode_catalog, translate_catalog, CatalogPartition, TranslationReport};
pub use decode::{decode_cask, decode_cask_str};

#[cfg(test)]
pub(crate) mod testing;
