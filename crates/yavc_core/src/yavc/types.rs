//! YAVC record types.
//!
//! These mirror the scene file one-to-one and are converted to creation
//! requests by the loader. Field names follow the file's PascalCase keys.

use std::fmt;

use serde::{Deserialize, Serialize};
use yavc_math::Rgb255;

use crate::metadata::PropertyValue;

/// Skin identifier of a prop entity.
///
/// Exporters write either a skin index or a skin name.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Skin {
    Index(i64),
    Name(String),
}

impl fmt::Display for Skin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skin::Index(i) => write!(f, "{}", i),
            Skin::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<&Skin> for PropertyValue {
    fn from(skin: &Skin) -> Self {
        match skin {
            Skin::Index(i) => PropertyValue::Int(*i),
            Skin::Name(s) => PropertyValue::String(s.clone()),
        }
    }
}

/// A prop entity (`Entities`).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityRecord {
    /// Model path, usually `models/...`
    pub model: String,

    /// Skin identifier
    pub skin: Skin,

    /// Tint (0-255)
    pub color: Rgb255,

    pub location: [f32; 3],

    pub rotation: [f32; 3],
}

/// A map instance (`Instances`).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceRecord {
    /// Instanced file path, usually `instances/...`
    pub file: String,

    pub location: [f32; 3],

    pub rotation: [f32; 3],
}

/// A cubemap capture point (`EnvCubemaps`).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvCubemapRecord {
    pub location: [f32; 3],

    /// Faces the cubemap applies to; kept verbatim
    pub sides: serde_json::Value,
}

/// A point light (`Lights`).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LightRecord {
    /// Light color (0-255)
    pub color: Rgb255,

    /// Brightness
    pub strength: f32,

    pub location: [f32; 3],
}

/// An ambient sound emitter (`Ambients`).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AmbientRecord {
    /// Playback pitch
    pub pitch: f32,

    /// Audible radius
    pub radius: f32,

    /// Sound file path
    pub path: String,

    pub location: [f32; 3],
}

/// A complete YAVC document.
///
/// All five collections are required; any of them may be empty.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct YavcDocument {
    pub entities: Vec<EntityRecord>,
    pub instances: Vec<InstanceRecord>,
    pub env_cubemaps: Vec<EnvCubemapRecord>,
    pub lights: Vec<LightRecord>,
    pub ambients: Vec<AmbientRecord>,
}

impl YavcDocument {
    /// Total number of records across all collections.
    pub fn record_count(&self) -> usize {
        self.entities.len()
            + self.instances.len()
            + self.env_cubemaps.len()
            + self.lights.len()
            + self.ambients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

/// One line of the legacy whitespace-delimited format:
/// `name r g b loc_x loc_y loc_z rot_x rot_y rot_z`.
#[derive(Clone, Debug, PartialEq)]
pub struct LegacyEntity {
    /// Object name, used verbatim
    pub name: String,

    /// Tint (0-255)
    pub color: Rgb255,

    pub location: [f32; 3],

    pub rotation: [f32; 3],
}

/// A parsed scene file in either revision of the format.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneFile {
    /// JSON document
    Document(YavcDocument),

    /// Legacy line format (entities only)
    Legacy(Vec<LegacyEntity>),
}

impl SceneFile {
    /// Total number of records.
    pub fn record_count(&self) -> usize {
        match self {
            SceneFile::Document(doc) => doc.record_count(),
            SceneFile::Legacy(entities) => entities.len(),
        }
    }
}
