// brewnix-common/src/model/nix.rs
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::Result;

/// Revision of the Cask-to-Nix lowering rules. Bump when generated output changes.
pub const GENERATOR_VERSION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NixSource {
    pub url: String,
    pub sha256: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NixMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub homepage: String,
}

/// What the Nix side needs to fetch, verify and install a translated Cask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NixPackage {
    pub pname: String,
    pub version: String,
    pub src: NixSource,
    #[serde(rename = "installPhase")]
    pub install_phase: Vec<String>,
    pub meta: NixMeta,
}

impl NixPackage {
    /// Canonical JSON form: fields in declaration order, no whitespace.
    pub fn canonical_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Lowercase hex SHA-256 of [`NixPackage::canonical_json`]. Not comparable
    /// with base64 digests stored by earlier generators.
    pub fn content_hash(&self) -> Result<String> {
        let bytes = self.canonical_json()?;
        Ok(hex::encode(Sha256::digest(&bytes)))
    }
}

/// A translated package as handed to the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRecord {
    /// First display name of the Cask.
    pub name: String,
    /// Registry endpoint the Cask was read from.
    pub url: String,
    pub pname: String,
    pub version: String,
    pub hash: String,
    pub generator_version: u32,
    pub nix: NixPackage,
}
