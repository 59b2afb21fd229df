// brewnix-common/src/model/artifact.rs
//! Typed artifacts of a Cask.
//!
//! Every artifact is an object keyed by its stanza name. Stanzas are tried in
//! the fixed order of [`ARTIFACT_STANZAS`]; the first one present whose payload
//! has the right shape wins, so `{"app": [...], "artifact": [...]}` is an app.

use std::fmt;

use serde::de::{self, DeserializeOwned, Deserializer, IgnoredAny, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::de::{one_or_many, optional_one_or_many, unexpected};
use crate::error::json_path;

/// A relative source path plus the optional name it should be installed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub name: String,
    pub target: Option<String>,
}

impl FileSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: None,
        }
    }

    pub fn with_target(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: Some(target.into()),
        }
    }
}

const FILE_SHAPE: &str = "[path] or [path, {target}]";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TargetOptions {
    target: String,
}

impl<'de> Deserialize<'de> for FileSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FileSpecVisitor;

        impl<'de> Visitor<'de> for FileSpecVisitor {
            type Value = FileSpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(FILE_SHAPE)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<FileSpec, A::Error> {
                let name: String = seq
                    .next_element()?
                    .ok_or_else(|| <A::Error as de::Error>::invalid_length(0, &self))?;
                let target = seq.next_element::<TargetOptions>()?.map(|o| o.target);
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(3, &self));
                }
                Ok(FileSpec { name, target })
            }
        }

        deserializer.deserialize_seq(FileSpecVisitor)
    }
}

/// Bundles Homebrew moves into a fixed `Library` subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovedKind {
    ColorPicker,
    Dictionary,
    Font,
    InputMethod,
    InternetPlugin,
    KeyboardLayout,
    PrefPane,
    QlPlugin,
    MdImporter,
    ScreenSaver,
    Service,
    AudioUnitPlugin,
    VstPlugin,
    Vst3Plugin,
}

impl MovedKind {
    /// All kinds, in the order the decoder tries them.
    pub const ALL: [MovedKind; 14] = [
        MovedKind::ColorPicker,
        MovedKind::Dictionary,
        MovedKind::Font,
        MovedKind::InputMethod,
        MovedKind::InternetPlugin,
        MovedKind::KeyboardLayout,
        MovedKind::PrefPane,
        MovedKind::QlPlugin,
        MovedKind::MdImporter,
        MovedKind::ScreenSaver,
        MovedKind::Service,
        MovedKind::AudioUnitPlugin,
        MovedKind::VstPlugin,
        MovedKind::Vst3Plugin,
    ];

    /// The stanza name in Cask JSON.
    pub fn key(self) -> &'static str {
        match self {
            MovedKind::ColorPicker => "colorpicker",
            MovedKind::Dictionary => "dictionary",
            MovedKind::Font => "font",
            MovedKind::InputMethod => "input_method",
            MovedKind::InternetPlugin => "internet_plugin",
            MovedKind::KeyboardLayout => "keyboard_layout",
            MovedKind::PrefPane => "prefpane",
            MovedKind::QlPlugin => "qlplugin",
            MovedKind::MdImporter => "mdimporter",
            MovedKind::ScreenSaver => "screen_saver",
            MovedKind::Service => "service",
            MovedKind::AudioUnitPlugin => "audio_unit_plugin",
            MovedKind::VstPlugin => "vst_plugin",
            MovedKind::Vst3Plugin => "vst3_plugin",
        }
    }

    /// Destination directory, relative to `$out/Library`.
    pub fn library_subdir(self) -> &'static str {
        match self {
            MovedKind::ColorPicker => "ColorPickers",
            MovedKind::Dictionary => "Dictionaries",
            MovedKind::Font => "Fonts",
            MovedKind::InputMethod => "Input Methods",
            MovedKind::InternetPlugin => "Internet Plug-Ins",
            MovedKind::KeyboardLayout => "Keyboard Layouts",
            MovedKind::PrefPane => "PreferencePanes",
            MovedKind::QlPlugin => "QuickLook",
            MovedKind::MdImporter => "Spotlight",
            MovedKind::ScreenSaver => "Screen Savers",
            MovedKind::Service => "Services",
            MovedKind::AudioUnitPlugin => "Audio/Components",
            MovedKind::VstPlugin => "Audio/VST",
            MovedKind::Vst3Plugin => "Audio/VST3",
        }
    }
}

/// One `choices` entry of a `pkg` stanza (`-applyChoiceChangesXML` override).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PkgChoice {
    pub choice_identifier: String,
    pub choice_attribute: String,
    #[serde(default)]
    pub attribute_setting: Value,
}

/// `"x.pkg"`, `["x.pkg"]` or `["x.pkg", {choices?}]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "PkgForm")]
pub struct PkgSpec {
    pub pkg: String,
    pub choices: Option<Vec<PkgChoice>>,
}

#[derive(Deserialize)]
struct PkgOptions {
    choices: Option<Vec<PkgChoice>>,
}

#[derive(Deserialize)]
#[serde(untagged, expecting = "pkg path, [path] or [path, {choices}]")]
enum PkgForm {
    Bare(String),
    Single((String,)),
    WithOptions((String, PkgOptions)),
}

impl From<PkgForm> for PkgSpec {
    fn from(form: PkgForm) -> Self {
        let (pkg, choices) = match form {
            PkgForm::Bare(pkg) | PkgForm::Single((pkg,)) => (pkg, None),
            PkgForm::WithOptions((pkg, options)) => (pkg, options.choices),
        };
        PkgSpec { pkg, choices }
    }
}

/// Scalar accepted as script `input`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged, expecting = "string, number or boolean")]
pub enum Literal {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    pub executable: String,
    pub args: Option<Vec<String>>,
    #[serde(default, deserialize_with = "optional_one_or_many")]
    pub input: Option<Vec<Literal>>,
    pub must_succeed: Option<bool>,
    pub sudo: Option<bool>,
    pub print_stderr: Option<bool>,
}

/// A step of an `installer` stanza.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallerStep {
    Script(Script),
    Manual(String),
}

/// `[signal, bundle id]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct Signal {
    pub signal: String,
    pub pid: String,
}

impl From<(String, String)> for Signal {
    fn from((signal, pid): (String, String)) -> Self {
        Signal { signal, pid }
    }
}

/// One entry of a `zap` or `uninstall` stanza, a single-key object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UninstallDirective {
    EarlyScript(Script),
    Launchctl(#[serde(deserialize_with = "one_or_many")] Vec<String>),
    Quit(#[serde(deserialize_with = "one_or_many")] Vec<String>),
    /// `[sig, pid]` or a list of such pairs.
    Signal(#[serde(deserialize_with = "one_or_many")] Vec<Signal>),
    LoginItem(#[serde(deserialize_with = "one_or_many")] Vec<String>),
    Kext(#[serde(deserialize_with = "one_or_many")] Vec<String>),
    Script(#[serde(deserialize_with = "one_or_many")] Vec<Script>),
    Pkgutil(#[serde(deserialize_with = "one_or_many")] Vec<String>),
    Delete(#[serde(deserialize_with = "one_or_many")] Vec<String>),
    Rmdir(#[serde(deserialize_with = "one_or_many")] Vec<String>),
    Trash(#[serde(deserialize_with = "one_or_many")] Vec<String>),
}

/// One entry of a Cask's `artifacts` array.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    App(FileSpec),
    Suite(FileSpec),
    Pkg(PkgSpec),
    Installer(Vec<InstallerStep>),
    Binary(FileSpec),
    /// Only the source path survives decoding; Homebrew never retargets man pages.
    Manpage(String),
    Moved(MovedKind, FileSpec),
    Generic(FileSpec),
    StageOnly,
    Zap(Vec<UninstallDirective>),
    Uninstall(Vec<UninstallDirective>),
    Preflight,
    Postflight,
    UninstallPreflight,
    UninstallPostflight,
}

/// Why one stanza's payload did not decode; `path` is relative to the payload.
struct StanzaError {
    path: String,
    message: String,
}

impl StanzaError {
    /// `at <key><path>: <message>`, which `DecodeError` turns back into a location.
    fn within(self, key: &str) -> String {
        format!("at {key}{}: {}", self.path, self.message)
    }
}

type Stanza = fn(&Value) -> Result<Artifact, StanzaError>;

fn payload<T: DeserializeOwned>(value: &Value) -> Result<T, StanzaError> {
    serde_path_to_error::deserialize(value).map_err(|err| StanzaError {
        path: json_path("", err.path()),
        message: err.into_inner().to_string(),
    })
}

fn moved(kind: MovedKind, value: &Value) -> Result<Artifact, StanzaError> {
    payload(value).map(|file| Artifact::Moved(kind, file))
}

/// `stage_only` only ever appears as `[true]`.
fn stage_only(value: &Value) -> Result<Artifact, StanzaError> {
    let (staged,): (bool,) = payload(value)?;
    if !staged {
        return Err(StanzaError {
            path: "[0]".into(),
            message: "invalid value: boolean `false`, expected true".into(),
        });
    }
    Ok(Artifact::StageOnly)
}

fn marker(value: &Value, artifact: Artifact) -> Result<Artifact, StanzaError> {
    if !value.is_null() {
        return Err(StanzaError {
            path: String::new(),
            message: format!("invalid type: {}, expected null", unexpected(value)),
        });
    }
    Ok(artifact)
}

/// Stanza keys in priority order.
const ARTIFACT_STANZAS: &[(&str, Stanza)] = &[
    ("app", |v| payload(v).map(Artifact::App)),
    ("suite", |v| payload(v).map(Artifact::Suite)),
    ("pkg", |v| payload(v).map(Artifact::Pkg)),
    ("installer", |v| payload(v).map(Artifact::Installer)),
    ("binary", |v| payload(v).map(Artifact::Binary)),
    ("manpage", |v| payload::<FileSpec>(v).map(|f| Artifact::Manpage(f.name))),
    ("colorpicker", |v| moved(MovedKind::ColorPicker, v)),
    ("dictionary", |v| moved(MovedKind::Dictionary, v)),
    ("font", |v| moved(MovedKind::Font, v)),
    ("input_method", |v| moved(MovedKind::InputMethod, v)),
    ("internet_plugin", |v| moved(MovedKind::InternetPlugin, v)),
    ("keyboard_layout", |v| moved(MovedKind::KeyboardLayout, v)),
    ("prefpane", |v| moved(MovedKind::PrefPane, v)),
    ("qlplugin", |v| moved(MovedKind::QlPlugin, v)),
    ("mdimporter", |v| moved(MovedKind::MdImporter, v)),
    ("screen_saver", |v| moved(MovedKind::ScreenSaver, v)),
    ("service", |v| moved(MovedKind::Service, v)),
    ("audio_unit_plugin", |v| moved(MovedKind::AudioUnitPlugin, v)),
    ("vst_plugin", |v| moved(MovedKind::VstPlugin, v)),
    ("vst3_plugin", |v| moved(MovedKind::Vst3Plugin, v)),
    ("artifact", |v| payload(v).map(Artifact::Generic)),
    ("stage_only", stage_only),
    ("zap", |v| payload(v).map(Artifact::Zap)),
    ("uninstall", |v| payload(v).map(Artifact::Uninstall)),
    ("preflight", |v| marker(v, Artifact::Preflight)),
    ("postflight", |v| marker(v, Artifact::Postflight)),
    ("uninstall_preflight", |v| marker(v, Artifact::UninstallPreflight)),
    ("uninstall_postflight", |v| marker(v, Artifact::UninstallPostflight)),
];

impl<'de> Deserialize<'de> for Artifact {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stanzas = Map::<String, Value>::deserialize(deserializer)?;
        let mut first_failure: Option<String> = None;
        for (key, stanza) in ARTIFACT_STANZAS {
            let Some(value) = stanzas.get(*key) else {
                continue;
            };
            match stanza(value) {
                Ok(artifact) => return Ok(artifact),
                Err(e) => {
                    first_failure.get_or_insert_with(|| e.within(key));
                }
            }
        }
        Err(de::Error::custom(first_failure.unwrap_or_else(|| {
            let keys: Vec<&str> = stanzas.keys().map(String::as_str).collect();
            format!(
                "invalid value: object with keys [{}], expected a known artifact stanza",
                keys.join(", ")
            )
        })))
    }
}

impl Artifact {
    /// The stanza name this artifact was decoded from.
    pub fn key(&self) -> &'static str {
        match self {
            Artifact::App(_) => "app",
            Artifact::Suite(_) => "suite",
            Artifact::Pkg(_) => "pkg",
            Artifact::Installer(_) => "installer",
            Artifact::Binary(_) => "binary",
            Artifact::Manpage(_) => "manpage",
            Artifact::Moved(kind, _) => kind.key(),
            Artifact::Generic(_) => "artifact",
            Artifact::StageOnly => "stage_only",
            Artifact::Zap(_) => "zap",
            Artifact::Uninstall(_) => "uninstall",
            Artifact::Preflight => "preflight",
            Artifact::Postflight => "postflight",
            Artifact::UninstallPreflight => "uninstall_preflight",
            Artifact::UninstallPostflight => "uninstall_postflight",
        }
    }

    /// Uninstall and lifecycle stanzas, which produce no install step.
    pub fn is_lifecycle(&self) -> bool {
        matches!(
            self,
            Artifact::StageOnly
                | Artifact::Zap(_)
                | Artifact::Uninstall(_)
                | Artifact::Preflight
                | Artifact::Postflight
                | Artifact::UninstallPreflight
                | Artifact::UninstallPostflight
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::DecodeError;

    fn decode<T: DeserializeOwned>(value: Value) -> Result<T, DecodeError> {
        serde_path_to_error::deserialize(&value).map_err(DecodeError::from)
    }

    fn artifact(value: Value) -> Result<Artifact, DecodeError> {
        decode(value)
    }

    #[test]
    fn moved_kind_keys_are_unique() {
        let mut keys: Vec<_> = MovedKind::ALL.iter().map(|k| k.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), MovedKind::ALL.len());
    }

    #[test]
    fn lifecycle_stanzas_are_flagged() {
        assert!(Artifact::Zap(vec![]).is_lifecycle());
        assert!(Artifact::UninstallPostflight.is_lifecycle());
        assert!(!Artifact::App(FileSpec::new("Foo.app")).is_lifecycle());
        assert!(!Artifact::Installer(vec![]).is_lifecycle());
    }

    #[test]
    fn moved_artifacts_report_their_own_key() {
        let font = Artifact::Moved(MovedKind::Font, FileSpec::new("Foo.ttf"));
        assert_eq!(font.key(), "font");
        assert_eq!(MovedKind::AudioUnitPlugin.library_subdir(), "Audio/Components");
    }

    #[test]
    fn every_stanza_key_matches_the_artifact_it_builds() {
        for (key, _) in ARTIFACT_STANZAS {
            assert!(
                MovedKind::ALL.iter().any(|k| k.key() == *key)
                    || [
                        "app", "suite", "pkg", "installer", "binary", "manpage", "artifact",
                        "stage_only", "zap", "uninstall", "preflight", "postflight",
                        "uninstall_preflight", "uninstall_postflight",
                    ]
                    .contains(key),
                "{key}"
            );
        }
        assert_eq!(ARTIFACT_STANZAS.len(), 28);
    }

    #[test]
    fn file_shapes_normalise() {
        assert_eq!(
            artifact(json!({ "app": ["Foo.app"] })).unwrap(),
            Artifact::App(FileSpec::new("Foo.app"))
        );
        assert_eq!(
            artifact(json!({ "suite": ["Foo", { "target": "Foo Suite" }] })).unwrap(),
            Artifact::Suite(FileSpec::with_target("Foo", "Foo Suite"))
        );
    }

    #[test]
    fn file_tuple_length_is_enforced() {
        let err = artifact(json!({ "app": [] })).unwrap_err();
        assert_eq!(err.path, "$.app");
        assert_eq!(err.expected, FILE_SHAPE);
        assert_eq!(err.received, "length 0");

        let err = artifact(json!({ "app": ["a", { "target": "b" }, "c"] })).unwrap_err();
        assert_eq!(err.expected, FILE_SHAPE);
    }

    #[test]
    fn file_target_must_be_a_string() {
        let err = artifact(json!({ "binary": ["tool", { "target": 3 }] })).unwrap_err();
        assert_eq!(err.path, "$.binary[1].target");
        assert_eq!(err.received, "integer `3`");

        let err = artifact(json!({ "binary": ["tool", { "target": "t", "mode": 1 }] })).unwrap_err();
        assert_eq!(err.path, "$.binary[1].mode");
        assert_eq!(err.expected, "no such key");
    }

    #[test]
    fn every_moved_kind_decodes_under_its_key() {
        for kind in MovedKind::ALL {
            let mut raw = Map::new();
            raw.insert(kind.key().to_string(), json!(["Thing"]));
            assert_eq!(
                artifact(Value::Object(raw)).unwrap(),
                Artifact::Moved(kind, FileSpec::new("Thing"))
            );
        }
    }

    #[test]
    fn manpage_keeps_only_the_source() {
        assert_eq!(
            artifact(json!({ "manpage": ["tool.1", { "target": "ignored.1" }] })).unwrap(),
            Artifact::Manpage("tool.1".into())
        );
    }

    #[test]
    fn earlier_stanzas_win() {
        let raw = json!({ "artifact": ["x", { "target": "y" }], "app": ["Foo.app"] });
        assert_eq!(artifact(raw).unwrap(), Artifact::App(FileSpec::new("Foo.app")));
    }

    #[test]
    fn malformed_stanza_falls_through_to_a_later_one() {
        let raw = json!({ "app": "Foo.app", "binary": ["foo"] });
        assert_eq!(artifact(raw).unwrap(), Artifact::Binary(FileSpec::new("foo")));
    }

    #[test]
    fn first_failure_is_reported_when_nothing_matches() {
        let err = artifact(json!({ "app": "Foo.app", "binary": 7 })).unwrap_err();
        assert_eq!(err.path, "$.app");
        assert_eq!(err.expected, FILE_SHAPE);
    }

    #[test]
    fn unknown_stanza_fails() {
        let err = artifact(json!({ "teleport": ["x"] })).unwrap_err();
        assert_eq!(err.path, "$");
        assert_eq!(err.expected, "a known artifact stanza");
        assert_eq!(err.received, "object with keys [teleport]");

        let err = artifact(json!(["app", "Foo.app"])).unwrap_err();
        assert_eq!(err.expected, "a map");
    }

    #[test]
    fn pkg_accepts_all_three_forms() {
        assert_eq!(
            artifact(json!({ "pkg": "Foo.pkg" })).unwrap(),
            Artifact::Pkg(PkgSpec { pkg: "Foo.pkg".into(), choices: None })
        );
        assert_eq!(
            artifact(json!({ "pkg": ["Foo.pkg"] })).unwrap(),
            Artifact::Pkg(PkgSpec { pkg: "Foo.pkg".into(), choices: None })
        );
        let with_choices = artifact(json!({
            "pkg": ["Foo.pkg", { "choices": [{
                "choiceIdentifier": "com.foo.extras",
                "choiceAttribute": "selected",
                "attributeSetting": 0
            }] }]
        }))
        .unwrap();
        let Artifact::Pkg(spec) = with_choices else {
            panic!("expected pkg");
        };
        let choices = spec.choices.unwrap();
        assert_eq!(choices[0].choice_identifier, "com.foo.extras");
        assert_eq!(choices[0].attribute_setting, json!(0));

        let err = artifact(json!({ "pkg": 1 })).unwrap_err();
        assert_eq!(err.path, "$.pkg");
    }

    #[test]
    fn installer_steps_decode() {
        let raw = json!({ "installer": [
            { "manual": "Foo Installer.app" },
            { "script": { "executable": "install.sh", "args": ["--silent"], "input": "y", "sudo": true } }
        ] });
        let Artifact::Installer(steps) = artifact(raw).unwrap() else {
            panic!("expected installer");
        };
        assert_eq!(steps[0], InstallerStep::Manual("Foo Installer.app".into()));
        let InstallerStep::Script(script) = &steps[1] else {
            panic!("expected script");
        };
        assert_eq!(script.executable, "install.sh");
        assert_eq!(script.args.as_deref(), Some(&["--silent".to_string()][..]));
        assert_eq!(script.input, Some(vec![Literal::String("y".into())]));
        assert_eq!(script.sudo, Some(true));
        assert_eq!(script.must_succeed, None);
    }

    #[test]
    fn script_rejects_unknown_keys() {
        let err = artifact(json!({ "installer": [
            { "script": { "executable": "install.sh", "timeout": 5 } }
        ] }))
        .unwrap_err();
        assert_eq!(err.path, "$.installer[0].script.timeout");
        assert_eq!(err.expected, "no such key");
    }

    #[test]
    fn lifecycle_markers_require_null() {
        assert_eq!(artifact(json!({ "preflight": null })).unwrap(), Artifact::Preflight);
        assert_eq!(
            artifact(json!({ "uninstall_postflight": null })).unwrap(),
            Artifact::UninstallPostflight
        );
        let err = artifact(json!({ "postflight": "echo hi" })).unwrap_err();
        assert_eq!(err.path, "$.postflight");
        assert_eq!(err.expected, "null");
    }

    #[test]
    fn stage_only_is_a_single_true() {
        assert_eq!(artifact(json!({ "stage_only": [true] })).unwrap(), Artifact::StageOnly);
        let err = artifact(json!({ "stage_only": [false] })).unwrap_err();
        assert_eq!(err.path, "$.stage_only[0]");
        assert!(artifact(json!({ "stage_only": true })).is_err());
    }

    #[test]
    fn string_or_list_directives_normalise() {
        let directives: Vec<UninstallDirective> = decode(json!([
            { "quit": "com.example.Foo" },
            { "delete": ["/Library/Foo", "/Library/Bar"] }
        ]))
        .unwrap();
        assert_eq!(
            directives,
            vec![
                UninstallDirective::Quit(vec!["com.example.Foo".into()]),
                UninstallDirective::Delete(vec!["/Library/Foo".into(), "/Library/Bar".into()]),
            ]
        );
    }

    #[test]
    fn directives_hold_exactly_one_key() {
        let err = decode::<Vec<UninstallDirective>>(json!([
            { "trash": "~/x", "launchctl": "com.example.agent" }
        ]))
        .unwrap_err();
        assert_eq!(err.path, "$[0]");
    }

    #[test]
    fn signals_accept_one_pair_or_many() {
        let one: Vec<UninstallDirective> =
            decode(json!([{ "signal": ["TERM", "com.example.Foo"] }])).unwrap();
        assert_eq!(
            one,
            vec![UninstallDirective::Signal(vec![Signal {
                signal: "TERM".into(),
                pid: "com.example.Foo".into()
            }])]
        );

        let many: Vec<UninstallDirective> =
            decode(json!([{ "signal": [["TERM", "a"], ["KILL", "b"]] }])).unwrap();
        let UninstallDirective::Signal(signals) = &many[0] else {
            panic!("expected signal");
        };
        assert_eq!(signals.len(), 2);
        assert_eq!(signals[1].signal, "KILL");
    }

    #[test]
    fn script_accepts_one_or_many() {
        let one: Vec<UninstallDirective> =
            decode(json!([{ "script": { "executable": "uninstall.sh" } }])).unwrap();
        let UninstallDirective::Script(scripts) = &one[0] else {
            panic!("expected script");
        };
        assert_eq!(scripts[0].executable, "uninstall.sh");

        let many: Vec<UninstallDirective> =
            decode(json!([{ "script": [{ "executable": "a" }, { "executable": "b" }] }])).unwrap();
        let UninstallDirective::Script(scripts) = &many[0] else {
            panic!("expected script");
        };
        assert_eq!(scripts.len(), 2);
    }

    #[test]
    fn unknown_directive_fails_with_path() {
        let err = artifact(json!({ "uninstall": [{ "quit": "a" }, { "explode": true }] }))
            .unwrap_err();
        assert_eq!(err.path, "$.uninstall[1]");
        assert_eq!(err.received, "`explode`");
    }
}
