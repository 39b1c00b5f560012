//! Creation requests: what the importer wants created in the host scene.
//!
//! A request is a plain value built without touching any host. Applying it
//! is the job of a [`SceneSink`](crate::sink::SceneSink).

use serde::Serialize;
use yavc_math::{Transform, Vec3, Vec4};

use crate::metadata::Metadata;

/// Clip end distance of imported reflection probes.
pub const PROBE_CLIP_END: f32 = 20000.0;

/// Influence distance of imported reflection probes.
pub const PROBE_INFLUENCE_DISTANCE: f32 = 200.0;

/// Influence volume shape of a reflection probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeShape {
    Box,
}

/// Reflection probe (cubemap capture point) settings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReflectionProbe {
    /// Influence volume shape
    pub shape: ProbeShape,

    /// Far clipping distance used while capturing
    pub clip_end: f32,

    /// Distance over which the probe affects surrounding surfaces
    pub influence_distance: f32,
}

impl Default for ReflectionProbe {
    fn default() -> Self {
        Self {
            shape: ProbeShape::Box,
            clip_end: PROBE_CLIP_END,
            influence_distance: PROBE_INFLUENCE_DISTANCE,
        }
    }
}

/// Point light settings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PointLight {
    /// Light color (RGB, 0-1, no alpha)
    pub color: Vec3,

    /// Emitted power
    pub energy: f32,
}

/// Speaker (sound emitter) settings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Speaker {
    /// Playback pitch
    pub pitch: f32,

    /// Maximum audible distance
    pub distance_max: f32,

    /// Path of the sound resource, resolved by the sink
    pub sound_path: String,
}

/// The kind of object to create.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectKind {
    /// An empty with collection instancing enabled.
    ///
    /// The instanced collection is left unassigned.
    CollectionInstance,

    /// A reflection probe
    ReflectionProbe(ReflectionProbe),

    /// A point light
    PointLight(PointLight),

    /// A speaker
    Speaker(Speaker),
}

impl ObjectKind {
    /// Short label used in logs and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::CollectionInstance => "collection instance",
            ObjectKind::ReflectionProbe(_) => "reflection probe",
            ObjectKind::PointLight(_) => "point light",
            ObjectKind::Speaker(_) => "speaker",
        }
    }
}

/// A request to create one named object and link it into the scene.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreationRequest {
    /// Display name
    pub name: String,

    /// Object kind and type-specific settings
    pub kind: ObjectKind,

    /// Location and rotation
    pub transform: Transform,

    /// Viewport tint (RGBA, 0-1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec4>,

    /// Namespaced custom properties
    #[serde(skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl CreationRequest {
    /// Create a request with no tint and no metadata.
    pub fn new(name: impl Into<String>, kind: ObjectKind, transform: Transform) -> Self {
        Self {
            name: name.into(),
            kind,
            transform,
            color: None,
            metadata: Metadata::new(),
        }
    }

    /// Set the viewport tint.
    pub fn with_color(mut self, color: Vec4) -> Self {
        self.color = Some(color);
        self
    }

    /// Replace the metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}
