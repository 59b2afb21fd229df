// brewnix-common/src/model/cask.rs
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{self, Deserializer, Unexpected};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::artifact::Artifact;
use super::de::{null, validated_string};

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9\-@+]+$").unwrap());
// Unanchored: a version only has to contain one such character.
static VERSION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9.,+]+").unwrap());
static SHA256_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-f0-9]{64}$").unwrap());
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// The `version` field: a concrete version string or Homebrew's `latest` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaskVersion {
    Latest,
    Versioned(String),
}

impl CaskVersion {
    pub fn as_str(&self) -> &str {
        match self {
            CaskVersion::Latest => "latest",
            CaskVersion::Versioned(v) => v,
        }
    }
}

impl fmt::Display for CaskVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CaskVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let version = validated_string(
            deserializer,
            |v| v == "latest" || VERSION_RE.is_match(v),
            "version string or \"latest\"",
        )?;
        Ok(if version == "latest" {
            CaskVersion::Latest
        } else {
            CaskVersion::Versioned(version)
        })
    }
}

/// The `sha256` field: a lowercase hex digest or Homebrew's `no_check` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaskChecksum {
    NoCheck,
    Sha256(String),
}

impl CaskChecksum {
    pub fn as_str(&self) -> &str {
        match self {
            CaskChecksum::NoCheck => "no_check",
            CaskChecksum::Sha256(s) => s,
        }
    }
}

impl<'de> Deserialize<'de> for CaskChecksum {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let sha256 = validated_string(
            deserializer,
            |s| s == "no_check" || SHA256_RE.is_match(s),
            "64 lowercase hex characters or \"no_check\"",
        )?;
        Ok(if sha256 == "no_check" {
            CaskChecksum::NoCheck
        } else {
            CaskChecksum::Sha256(sha256)
        })
    }
}

/// Represents conflicts with other casks or formulae
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConflictsWith {
    pub cask: Option<Vec<String>>,
    pub formula: Option<Vec<String>>,
}

/// How the downloaded source is packaged: `{"nested": path}` or `{"type": kind}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Container {
    /// An archive nested inside the download, by relative path.
    Nested(String),
    Type(ContainerType),
}

/// The container types Homebrew knows how to unpack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerType {
    Air,
    Bz2,
    Cab,
    Dmg,
    GenericUnar,
    Gzip,
    Otf,
    Pkg,
    Rar,
    SevenZip,
    Sit,
    Tar,
    Ttf,
    Xar,
    Zip,
    Naked,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RubySourceChecksum {
    pub sha256: String,
}

/// A validated Homebrew Cask (API JSON v2 shape).
///
/// Keys marked `Option` may be absent or `null`; any key not listed here is
/// rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cask {
    #[serde(deserialize_with = "token")]
    pub token: String,
    pub full_token: String,
    pub old_tokens: Vec<String>,
    pub tap: String,
    #[serde(deserialize_with = "names")]
    pub name: Vec<String>,
    pub desc: Option<String>,
    pub homepage: String,
    #[serde(deserialize_with = "absolute_url")]
    pub url: String,
    pub url_specs: Option<Value>,
    pub version: CaskVersion,
    pub bundle_version: Option<String>,
    pub bundle_short_version: Option<String>,
    pub sha256: CaskChecksum,
    pub artifacts: Vec<Artifact>,
    pub caveats: Option<String>,
    pub depends_on: Option<Value>,
    pub conflicts_with: Option<ConflictsWith>,
    pub container: Option<Container>,
    pub auto_updates: Option<bool>,
    pub deprecated: bool,
    pub deprecation_date: Option<String>,
    pub deprecation_reason: Option<String>,
    pub deprecation_replacement: Option<String>,
    pub disabled: bool,
    pub disable_date: Option<String>,
    pub disable_reason: Option<String>,
    pub disable_replacement: Option<String>,
    pub tap_git_head: Option<String>,
    pub languages: Vec<String>,
    pub ruby_source_path: String,
    pub ruby_source_checksum: RubySourceChecksum,
    pub variations: Map<String, Value>,
    /// Registry documents are never installed; present and always `null`.
    #[serde(deserialize_with = "null")]
    pub installed: (),
    #[serde(deserialize_with = "null")]
    pub installed_time: (),
    #[serde(deserialize_with = "not_outdated")]
    pub outdated: bool,
    #[serde(default, deserialize_with = "iso_date")]
    pub generated_date: Option<String>,
    pub analytics: Option<Value>,
}

fn token<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    validated_string(
        deserializer,
        |t| TOKEN_RE.is_match(t),
        "token matching ^[a-z0-9-@+]+$",
    )
}

fn names<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let names = Vec::<String>::deserialize(deserializer)?;
    if names.is_empty() {
        return Err(de::Error::invalid_length(0, &"at least one name"));
    }
    Ok(names)
}

fn absolute_url<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    validated_string(
        deserializer,
        |u| url::Url::parse(u).is_ok(),
        "absolute URL",
    )
}

fn not_outdated<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let outdated = bool::deserialize(deserializer)?;
    if outdated {
        return Err(de::Error::invalid_value(Unexpected::Bool(true), &"false"));
    }
    Ok(outdated)
}

fn iso_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    validated_string(deserializer, |d| DATE_RE.is_match(d), "date YYYY-MM-DD").map(Some)
}

impl Cask {
    /// Get a friendly name for display purposes
    pub fn display_name(&self) -> &str {
        self.name
            .first()
            .map(String::as_str)
            .unwrap_or(self.token.as_str())
    }

    /// False when either sentinel (`latest`, `no_check`) is present.
    pub fn is_translatable(&self) -> bool {
        self.version != CaskVersion::Latest && self.sha256 != CaskChecksum::NoCheck
    }
}
