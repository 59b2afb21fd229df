#![allow(dead_code)]

use serde_json::{json, Value};

pub const SHA: &str = "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08";

/// A registry cask entry with every required key present.
pub fn cask_json(token: &str, artifacts: Value) -> Value {
    json!({
        "token": token,
        "full_token": token,
        "old_tokens": [],
        "tap": "homebrew/cask",
        "name": [format!("{token} app")],
        "desc": "Does things",
        "homepage": format!("https://{token}.example"),
        "url": format!("https://example.com/{token}-1.2.3.dmg"),
        "url_specs": {},
        "version": "1.2.3",
        "bundle_version": null,
        "bundle_short_version": null,
        "sha256": SHA,
        "artifacts": artifacts,
        "caveats": null,
        "depends_on": {},
        "conflicts_with": null,
        "container": null,
        "auto_updates": null,
        "deprecated": false,
        "deprecation_date": null,
        "deprecation_reason": null,
        "deprecation_replacement": null,
        "disabled": false,
        "disable_date": null,
        "disable_reason": null,
        "disable_replacement": null,
        "tap_git_head": "0123abcd",
        "languages": [],
        "ruby_source_path": format!("Casks/{}/{token}.rb", &token[..1]),
        "ruby_source_checksum": { "sha256": SHA },
        "variations": {},
        "analytics": { "install": { "30d": { "installs": 10 } } },
        "generated_date": "2024-05-01",
        "installed": null,
        "installed_time": null,
        "outdated": false
    })
}

pub fn with(mut raw: Value, key: &str, value: Value) -> Value {
    raw[key] = value;
    raw
}
