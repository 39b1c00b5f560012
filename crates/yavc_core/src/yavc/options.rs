//! Import configuration.
//!
//! Options can be built in code or deserialized from JSON; every field has a
//! default so a config file only needs the keys it changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default metadata namespace.
pub const DEFAULT_NAMESPACE: &str = "yavc";

/// Which revision of the scene file format to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneFormat {
    /// JSON if the content starts with `{`, legacy lines otherwise
    #[default]
    Auto,

    /// JSON document
    Json,

    /// Legacy whitespace-delimited lines
    Lines,
}

impl fmt::Display for SceneFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SceneFormat::Auto => "auto",
            SceneFormat::Json => "json",
            SceneFormat::Lines => "lines",
        };
        write!(f, "{}", s)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown scene format '{0}'. Use auto, json or lines.")]
pub struct UnknownFormat(pub String);

impl FromStr for SceneFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(SceneFormat::Auto),
            "json" => Ok(SceneFormat::Json),
            "lines" | "legacy" => Ok(SceneFormat::Lines),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// Options controlling a YAVC import.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Scene file format revision
    pub format: SceneFormat,

    /// Prefix of metadata keys (`<namespace>:model`, ...)
    pub namespace: String,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            format: SceneFormat::Auto,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl ImportOptions {
    /// Parse options from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Set the format.
    pub fn with_format(mut self, format: SceneFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the metadata namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}
