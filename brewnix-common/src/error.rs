use std::sync::Arc;

use serde_path_to_error::Segment;
use thiserror::Error;

/// Root of every [`DecodeError`] path.
pub const ROOT: &str = "$";

/// A schema violation found while decoding a Cask document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("at {path}: expected {expected}, received {received}")]
pub struct DecodeError {
    /// Location of the offending value, e.g. `$.artifacts[2].app[0]`.
    pub path: String,
    /// The shape that was expected at `path`.
    pub expected: String,
    /// Short rendering of what was actually found (`undefined` for a missing key).
    pub received: String,
}

impl DecodeError {
    pub fn new(
        path: impl Into<String>,
        expected: impl Into<String>,
        received: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            expected: expected.into(),
            received: received.into(),
        }
    }

    /// Splits a serde message found at `path` into its expected and received
    /// parts. Messages of the form `at <rel>: <message>` come from nested
    /// artifact decoding and extend `path` by `rel`.
    pub fn from_message(path: &str, message: &str) -> Self {
        if let Some((rel, inner)) = message
            .strip_prefix("at ")
            .and_then(|rest| rest.split_once(": "))
        {
            return Self::from_message(&format!("{path}.{rel}"), inner);
        }
        if let Some(field) = message.strip_prefix("missing field `") {
            let field = field.split('`').next().unwrap_or_default();
            return Self::new(format!("{path}.{field}"), "required field", "undefined");
        }
        if let Some(field) = message.strip_prefix("unknown field `") {
            let field = field.split('`').next().unwrap_or_default();
            return Self::new(format!("{path}.{field}"), "no such key", format!("key `{field}`"));
        }
        if let Some(variant) = message.strip_prefix("unknown variant `") {
            let (variant, expected) = variant.split_once("`, expected ").unwrap_or((variant, ""));
            return Self::new(path, expected, format!("`{}`", variant.trim_end_matches('`')));
        }
        for prefix in ["invalid type: ", "invalid value: "] {
            if let Some((received, expected)) = message
                .strip_prefix(prefix)
                .and_then(|rest| rest.split_once(", expected "))
            {
                return Self::new(path, expected, received);
            }
        }
        if let Some((len, expected)) = message
            .strip_prefix("invalid length ")
            .and_then(|rest| rest.split_once(", expected "))
        {
            return Self::new(path, expected, format!("length {len}"));
        }
        Self::new(path, message, "a value of another shape")
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for DecodeError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = json_path(ROOT, err.path());
        DecodeError::from_message(&path, &err.into_inner().to_string())
    }
}

/// Renders a tracked serde path as `root.key[index]...`.
pub fn json_path(root: &str, path: &serde_path_to_error::Path) -> String {
    let mut rendered = root.to_string();
    for segment in path.iter() {
        match segment {
            Segment::Seq { index } => rendered.push_str(&format!("[{index}]")),
            Segment::Map { key } => rendered.push_str(&format!(".{key}")),
            Segment::Enum { variant } => rendered.push_str(&format!(".{variant}")),
            Segment::Unknown => rendered.push_str(".?"),
        }
    }
    rendered
}

/// Reasons a decoded Cask cannot be lowered to a Nix package.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoweringError {
    #[error("Invalid version: cask '{0}' has no fixed version (\"latest\")")]
    InvalidVersion(String),

    #[error("Invalid checksum: cask '{0}' has no checksum (\"no_check\")")]
    InvalidChecksum(String),

    #[error("Unsupported {kind} artifact: {message}")]
    Unsupported {
        token: String,
        kind: &'static str,
        message: String,
    },

    #[error("Unreachable: {0}")]
    Unreachable(String),
}

impl LoweringError {
    /// Business-rule failures a batch caller may skip. `Unreachable` is a defect.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, LoweringError::Unreachable(_))
    }

    /// Stable short name of the error kind, used in logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            LoweringError::InvalidVersion(_) => "invalid_version",
            LoweringError::InvalidChecksum(_) => "invalid_checksum",
            LoweringError::Unsupported { .. } => "unsupported",
            LoweringError::Unreachable(_) => "unreachable",
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum BrewnixError {
    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] Arc<serde_json::Error>),

    #[error("Invalid cask definition {0}")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Lowering(#[from] LoweringError),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Generic Error: {0}")]
    Generic(String),
}

impl BrewnixError {
    /// Process exit status for this error: 2 for rejected input, 1 for defects
    /// and environment failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            BrewnixError::Decode(_) => 2,
            BrewnixError::Lowering(e) if e.is_recoverable() => 2,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for BrewnixError {
    fn from(err: std::io::Error) -> Self {
        BrewnixError::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for BrewnixError {
    fn from(err: serde_json::Error) -> Self {
        BrewnixError::Json(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, BrewnixError>;
