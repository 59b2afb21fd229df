// brewnix-core/src/build/cask/artifacts/installer.rs
//! `pkg` and `installer` stanzas need Apple's installer or a vendor script at
//! install time, which a Nix build cannot run.

use brewnix_common::error::LoweringError;
use brewnix_common::model::artifact::{InstallerStep, PkgSpec};
use brewnix_common::model::cask::Cask;

pub fn reject_pkg(cask: &Cask, pkg: &PkgSpec) -> LoweringError {
    LoweringError::Unsupported {
        token: cask.token.clone(),
        kind: "pkg",
        message: format!("{}'s pkg {} is not supported", cask.token, pkg.pkg),
    }
}

pub fn reject_installer(cask: &Cask, steps: &[InstallerStep]) -> LoweringError {
    let described: Vec<String> = steps
        .iter()
        .map(|step| match step {
            InstallerStep::Script(script) => format!("script {}", script.executable),
            InstallerStep::Manual(path) => format!("manual {path}"),
        })
        .collect();
    LoweringError::Unsupported {
        token: cask.token.clone(),
        kind: "installer",
        message: format!(
            "{}'s installer [{}] is not supported",
            cask.token,
            described.join(", ")
        ),
    }
}
