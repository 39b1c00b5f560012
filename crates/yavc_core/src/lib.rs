//! YAVC Core - Scene import and mass instancing for YAVC exports.
//!
//! This crate provides:
//!
//! - **YAVC support**: `.yavc` scene file parsing and import planning
//! - **Scene sink**: the host-facing interface imports are applied to
//! - **Scene graph types**: an in-memory `Scene` implementing the sink
//! - **Mass instancing**: copying one instancer's collection to many empties
//! - **Operators**: the editor commands wrapping the above
//!
//! # Example
//!
//! ```ignore
//! use yavc_core::{import_yavc, ImportOptions, Scene};
//!
//! let mut scene = Scene::new("map");
//! let summary = import_yavc("map.yavc", &mut scene, &ImportOptions::default())?;
//! println!("Imported {} objects, {} sounds",
//!     summary.total(),
//!     scene.sounds.len());
//! ```

pub mod instancing;
pub mod metadata;
pub mod operators;
pub mod request;
pub mod scene;
pub mod sink;
pub mod yavc;

// Re-export commonly used types
pub use metadata::{Metadata, PropertyValue};
pub use request::{CreationRequest, ObjectKind};
pub use scene::{CollectionId, ObjectType, Scene, SceneObject};
pub use sink::{ObjectId, SceneSink, SoundId};
pub use yavc::{import_yavc, import_yavc_from_string, ImportOptions, ImportSummary};
