//! Single-axis pixel ⇄ body-frame angle conversions for a pinhole camera.
//!
//! A pinhole lens samples the scene linearly in the tangent of the viewing
//! angle, not in the angle itself. This crate maps a pixel coordinate along
//! one image axis to the corresponding angular offset from the optical axis
//! and back, either from a field of view (trigonometric, no precomputation)
//! or from a precomputed linear pixel-to-tangent coefficient (cheap, for
//! repeated calls against a fixed lens). A clipped variant suppresses
//! jitter near the image center, and inverse mappings choose between
//! rounding and truncation.
//!
//! The free functions perform no validation and propagate non-finite input
//! through the arithmetic; [`FovProjector`] and [`LinearProjector`] are the
//! validated, precomputed forms.

pub mod angle;
pub mod geom;
pub mod project;
mod trace;
pub mod util;

pub use angle::{Angle, AngleUnit, Deg, Degrees, Rad, Radians};
pub use geom::{ImageSize, PixelIndex};
pub use project::{
    angle_tan_to_pixel, pixel_2_tan_from_fov, pixel_tan_by_pixel_2_tan,
    pixel_tan_by_pixel_2_tan_clipped, pixel_tan_from_fov, tan_2_pixel_by_fov,
    tan_2_pixel_by_pixel_2_tan, FovProjector, LinearProjector, RoundMode,
};
pub use util::{ProjectionError, ProjectionResult};
