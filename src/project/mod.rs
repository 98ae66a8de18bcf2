//! Pixel ⇄ angle conversions along a single image axis.
//!
//! Two models cover the same mapping. The field-of-view model in [`fov`]
//! pays a tan/atan pair per call and needs no precomputation; the
//! linear-scale model in [`linear`] replaces the trigonometry with one
//! precomputed pixel-to-tangent coefficient. The validated, precomputed
//! forms of both live in [`model`].

pub mod fov;
pub mod linear;
pub mod model;

pub use fov::{pixel_tan_from_fov, tan_2_pixel_by_fov};
pub use linear::{
    angle_tan_to_pixel, pixel_2_tan_from_fov, pixel_tan_by_pixel_2_tan,
    pixel_tan_by_pixel_2_tan_clipped, tan_2_pixel_by_pixel_2_tan,
};
pub use model::{FovProjector, LinearProjector};

/// Policy for converting a continuous pixel coordinate back to an integer
/// index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundMode {
    /// Round to the nearest pixel, halves away from zero.
    Nearest,
    /// Drop the fractional part, truncating toward zero.
    Truncate,
}
