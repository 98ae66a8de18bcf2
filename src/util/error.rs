//! Error types for pix2body.

use thiserror::Error;

/// Result alias for fallible projector operations.
pub type ProjectionResult<T> = std::result::Result<T, ProjectionError>;

/// Errors reported by the validated projector layer.
///
/// The free conversion functions never return these; they let non-finite
/// arithmetic flow to the caller instead.
#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    /// The image has no extent along the projected axis.
    #[error("degenerate image: width must be positive")]
    DegenerateImage,
    /// The field of view does not lie strictly inside `(0, pi)` radians.
    #[error("field of view out of range: {fov_rad} rad, expected within (0, pi)")]
    FovOutOfRange {
        /// Offending field of view in radians.
        fov_rad: f64,
    },
    /// The pixel-to-tangent coefficient is zero or non-finite.
    #[error("invalid pixel-to-tangent scale: {value}")]
    InvalidPixelScale {
        /// Offending coefficient.
        value: f64,
    },
    /// The clipping threshold is negative or non-finite.
    #[error("invalid clipping threshold: {value}")]
    InvalidClippingThreshold {
        /// Offending threshold.
        value: f64,
    },
    /// An inverse mapping produced a pixel outside the representable range.
    #[error("projected pixel out of range: {value}")]
    PixelOutOfRange {
        /// Continuous pixel coordinate before integer conversion.
        value: f64,
    },
}
