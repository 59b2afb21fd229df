// brewnix-core/src/build/cask/mod.rs
//! Nix Lowering Engine: turns a decoded [`Cask`] into a [`NixPackage`].

pub mod artifacts;
pub mod helpers;

use brewnix_common::config::Config;
use brewnix_common::error::{LoweringError, Result};
use brewnix_common::model::artifact::Artifact;
use brewnix_common::model::cask::{Cask, CaskChecksum, CaskVersion};
use brewnix_common::model::nix::{NixMeta, NixPackage, NixSource, PackageRecord, GENERATOR_VERSION};
use tracing::debug;

use self::helpers::sanitize_pname;

/// Lowers `cask` into a Nix package manifest.
///
/// Sentinel checks run first (`latest` version, then `no_check` checksum), so
/// they win over anything the artifacts would report. The result depends on
/// nothing but `cask`: lowering the same value twice gives identical output.
pub fn lower(cask: &Cask) -> std::result::Result<NixPackage, LoweringError> {
    let version = match &cask.version {
        CaskVersion::Latest => return Err(LoweringError::InvalidVersion(cask.token.clone())),
        CaskVersion::Versioned(v) => v.clone(),
    };
    let sha256 = match &cask.sha256 {
        CaskChecksum::NoCheck => return Err(LoweringError::InvalidChecksum(cask.token.clone())),
        CaskChecksum::Sha256(s) => s.clone(),
    };

    let install_phase = install_phase(cask)?;
    debug!(
        "Lowered cask '{}' {} into {} install steps",
        cask.token,
        version,
        install_phase.len()
    );

    Ok(NixPackage {
        pname: sanitize_pname(&cask.token),
        version,
        src: NixSource {
            url: cask.url.clone(),
            sha256,
        },
        install_phase,
        meta: NixMeta {
            description: cask.desc.clone(),
            homepage: cask.homepage.clone(),
        },
    })
}

/// One shell step per non-lifecycle artifact, in declaration order. Later
/// steps may write into directories earlier ones created; nothing is sorted
/// or deduplicated, so colliding targets simply overwrite each other.
pub fn install_phase(cask: &Cask) -> std::result::Result<Vec<String>, LoweringError> {
    cask.artifacts
        .iter()
        .filter(|artifact| !artifact.is_lifecycle())
        .map(|artifact| install_step(cask, artifact))
        .collect()
}

fn install_step(cask: &Cask, artifact: &Artifact) -> std::result::Result<String, LoweringError> {
    match artifact {
        Artifact::App(file) => artifacts::lower_app(file, "app"),
        Artifact::Suite(file) => artifacts::lower_app(file, "suite"),
        Artifact::Pkg(pkg) => Err(artifacts::reject_pkg(cask, pkg)),
        Artifact::Installer(steps) => Err(artifacts::reject_installer(cask, steps)),
        Artifact::Binary(file) => artifacts::lower_binary(cask, file),
        Artifact::Manpage(source) => artifacts::lower_manpage(cask, source),
        Artifact::Moved(kind, file) => artifacts::lower_moved(*kind, file),
        Artifact::Generic(file) => artifacts::lower_generic(file),
        lifecycle => Err(LoweringError::Unreachable(format!(
            "{} artifact of {} reached install step generation",
            lifecycle.key(),
            cask.token
        ))),
    }
}

/// Lowers `cask` and wraps the result with the provenance and identity the
/// persistence layer stores alongside it.
pub fn lower_record(cask: &Cask, config: &Config) -> Result<PackageRecord> {
    let nix = lower(cask)?;
    let hash = nix.content_hash()?;
    Ok(PackageRecord {
        name: cask.display_name().to_string(),
        url: config.cask_api_url(&cask.token),
        pname: nix.pname.clone(),
        version: nix.version.clone(),
        hash,
        generator_version: GENERATOR_VERSION,
        nix,
    })
}
