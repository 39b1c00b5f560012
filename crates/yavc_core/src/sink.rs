//! Host-facing scene interface.
//!
//! The importer never touches a host scene directly. It builds
//! [`CreationRequest`]s and hands them to a [`SceneSink`], which knows how to
//! turn each kind into a native object. [`Scene`](crate::scene::Scene) is the
//! in-memory implementation shipped with the crate.

use thiserror::Error;

use crate::request::{CreationRequest, ObjectKind, PointLight, ReflectionProbe, Speaker};

/// Handle to an object created by a sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

/// Handle to a sound resource loaded by a sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SoundId(pub usize);

/// Errors raised by a host while creating objects.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Unknown object: {0:?}")]
    UnknownObject(ObjectId),

    #[error("Could not load sound '{path}': {message}")]
    Sound { path: String, message: String },

    #[error("Host error: {0}")]
    Host(String),
}

/// Result type for sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

/// Object factory and container of the host scene.
///
/// Every `create_*` method receives the full request (name, transform, tint,
/// metadata) plus the kind-specific settings and returns an unlinked object.
pub trait SceneSink {
    /// Create an empty with collection instancing enabled.
    fn create_collection_instance(&mut self, request: &CreationRequest) -> SinkResult<ObjectId>;

    /// Create a reflection probe.
    fn create_reflection_probe(
        &mut self,
        request: &CreationRequest,
        probe: &ReflectionProbe,
    ) -> SinkResult<ObjectId>;

    /// Create a point light.
    fn create_point_light(
        &mut self,
        request: &CreationRequest,
        light: &PointLight,
    ) -> SinkResult<ObjectId>;

    /// Create a speaker playing an already loaded sound.
    fn create_speaker(
        &mut self,
        request: &CreationRequest,
        speaker: &Speaker,
        sound: SoundId,
    ) -> SinkResult<ObjectId>;

    /// Load a sound by path, returning the existing resource if the path
    /// was loaded before.
    fn load_sound(&mut self, path: &str) -> SinkResult<SoundId>;

    /// Link an object into the active scene container.
    fn link(&mut self, object: ObjectId) -> SinkResult<()>;
}

/// Create the object described by `request` and link it into the scene.
pub fn apply_request<S: SceneSink + ?Sized>(
    sink: &mut S,
    request: &CreationRequest,
) -> SinkResult<ObjectId> {
    let id = match &request.kind {
        ObjectKind::CollectionInstance => sink.create_collection_instance(request)?,
        ObjectKind::ReflectionProbe(probe) => sink.create_reflection_probe(request, probe)?,
        ObjectKind::PointLight(light) => sink.create_point_light(request, light)?,
        ObjectKind::Speaker(speaker) => {
            let sound = sink.load_sound(&speaker.sound_path)?;
            sink.create_speaker(request, speaker, sound)?
        }
    };

    sink.link(id)?;
    log::debug!("Created {} '{}'", request.kind.label(), request.name);

    Ok(id)
}
