//! 8-bit color conversion.
//!
//! Scene files store colors as three channels in the 0-255 range. The scene
//! side works with normalized floats, so every channel is divided by 255.

use glam::{Vec3, Vec4};

/// An RGB color with channels in the 0-255 range.
///
/// Channels are kept as floats: exporters are free to write `128` or `128.0`
/// and out-of-range values are passed through unchanged.
pub type Rgb255 = [f32; 3];

/// Normalize an 8-bit color to a 3-channel color (no alpha).
#[inline]
pub fn rgb255_to_rgb(color: Rgb255) -> Vec3 {
    Vec3::from(color) / 255.0
}

/// Normalize an 8-bit color to a 4-channel color with alpha fixed to 1.0.
#[inline]
pub fn rgb255_to_rgba(color: Rgb255) -> Vec4 {
    rgb255_to_rgb(color).extend(1.0)
}
