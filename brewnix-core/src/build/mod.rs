// brewnix-core/src/build/mod.rs
// Lowering of decoded package definitions into Nix install manifests.

pub mod cask;

pub use cask::{install_phase, lower, lower_record};
