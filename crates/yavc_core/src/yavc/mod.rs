//! YAVC scene file support.
//!
//! This module parses `.yavc` scene descriptions and converts them into
//! creation requests for a [`SceneSink`](crate::sink::SceneSink).
//!
//! ## Supported Records
//!
//! - `Entities`: prop models, imported as collection-instance empties
//! - `Instances`: map instances, imported as collection-instance empties
//! - `EnvCubemaps`: imported as box reflection probes
//! - `Lights`: imported as point lights
//! - `Ambients`: imported as speakers
//!
//! The legacy line format (entities only) is detected automatically.
//!
//! # Example
//!
//! ```ignore
//! use yavc_core::yavc::{import_yavc, ImportOptions};
//! use yavc_core::Scene;
//!
//! let mut scene = Scene::new("map");
//! let summary = import_yavc("path/to/map.yavc", &mut scene, &ImportOptions::default())?;
//! println!("Created {} objects", summary.total());
//! ```

mod types;
mod options;
mod naming;
mod parser;
mod loader;

pub use types::*;
pub use options::*;
pub use naming::*;
pub use parser::*;
pub use loader::*;
