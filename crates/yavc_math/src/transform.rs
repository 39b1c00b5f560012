// Object transform as stored in scene files.
//
// Rotation is an Euler triple in the host's convention. It is carried
// verbatim and never converted here.

use glam::Vec3;
use serde::Serialize;

/// Location and Euler rotation of a scene object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Transform {
    /// Translation
    pub location: Vec3,

    /// Euler rotation (XYZ)
    pub rotation: Vec3,
}

impl Transform {
    /// Create a transform from location and rotation triples.
    pub fn new(location: [f32; 3], rotation: [f32; 3]) -> Self {
        Self {
            location: Vec3::from(location),
            rotation: Vec3::from(rotation),
        }
    }

    /// Create a transform with only a location; rotation stays at zero.
    pub fn from_location(location: [f32; 3]) -> Self {
        Self {
            location: Vec3::from(location),
            ..Default::default()
        }
    }
}
