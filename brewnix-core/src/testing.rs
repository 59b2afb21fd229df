// brewnix-core/src/testing.rs
use brewnix_common::model::artifact::Artifact;
use brewnix_common::model::cask::{Cask, CaskChecksum, CaskVersion, RubySourceChecksum};
use serde_json::Map;

pub(crate) const SHA: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

/// A translatable cask with the given artifacts.
pub(crate) fn cask(token: &str, version: &str, artifacts: Vec<Artifact>) -> Cask {
    Cask {
        token: token.to_string(),
        full_token: token.to_string(),
        old_tokens: vec![],
        tap: "homebrew/cask".into(),
        name: vec![token.to_string()],
        desc: Some("A tool".into()),
        homepage: format!("https://{token}.example"),
        url: format!("https://example.com/{token}.dmg"),
        url_specs: None,
        version: CaskVersion::Versioned(version.to_string()),
        bundle_version: None,
        bundle_short_version: None,
        sha256: CaskChecksum::Sha256(SHA.into()),
        artifacts,
        caveats: None,
        depends_on: None,
        conflicts_with: None,
        container: None,
        auto_updates: None,
        deprecated: false,
        deprecation_date: None,
        deprecation_reason: None,
        deprecation_replacement: None,
        disabled: false,
        disable_date: None,
        disable_reason: None,
        disable_replacement: None,
        tap_git_head: None,
        languages: vec![],
        ruby_source_path: format!("Casks/{token}.rb"),
        ruby_source_checksum: RubySourceChecksum { sha256: SHA.into() },
        variations: Map::new(),
        installed: (),
        installed_time: (),
        outdated: false,
        generated_date: None,
        analytics: None,
    }
}
