//! Linear-scale conversions.
//!
//! These replace the trigonometric model with a single pixel-to-tangent
//! coefficient, for repeated calls against a fixed field of view where
//! recomputing `tan(fov / 2)` every time would be wasteful. The coefficient
//! is treated as opaque; [`pixel_2_tan_from_fov`] derives the value that
//! makes the two models agree in tangent space.

use crate::angle::{Angle, AngleUnit, Radians};
use crate::geom::{ImageSize, PixelIndex};

use super::RoundMode;

/// Tangent-space offset of `pixel` under a linear pixel-to-tangent scale:
/// `(pixel - half_width) * pixel_2_tan`.
pub fn pixel_tan_by_pixel_2_tan(
    pixel: PixelIndex,
    image_size: ImageSize,
    pixel_2_tan: f64,
) -> f64 {
    (pixel.value as f64 - image_size.half_width()) * pixel_2_tan
}

/// Like [`pixel_tan_by_pixel_2_tan`], with a dead zone around the image
/// center.
///
/// Pixels closer to the center than `clipping_threshold * half_width` map to
/// exactly `0.0`, suppressing jitter from near-axis detections; everything
/// else follows the unclipped linear formula.
pub fn pixel_tan_by_pixel_2_tan_clipped(
    pixel: PixelIndex,
    image_size: ImageSize,
    pixel_2_tan: f64,
    clipping_threshold: f64,
) -> f64 {
    let half_width = image_size.half_width();
    let diff = (pixel.value as f64 - half_width).abs();

    if diff < clipping_threshold * half_width {
        return 0.0;
    }

    (pixel.value as f64 - half_width) * pixel_2_tan
}

/// Pixel index for the tangent carried by `angle_tan`, always rounded to
/// the nearest pixel.
pub fn angle_tan_to_pixel(
    angle_tan: Radians,
    image_size: ImageSize,
    pixel_2_tan: f64,
) -> PixelIndex {
    PixelIndex::new((angle_tan.value() / pixel_2_tan + image_size.half_width()).round() as usize)
}

/// Pixel index for the tangent carried by `pixel_tan`, under a selectable
/// rounding policy.
///
/// [`RoundMode::Nearest`] rounds halves away from zero;
/// [`RoundMode::Truncate`] drops the fraction toward zero. Kept separate
/// from [`angle_tan_to_pixel`], which always rounds.
pub fn tan_2_pixel_by_pixel_2_tan(
    pixel_tan: Radians,
    image_size: ImageSize,
    pixel_2_tan: f64,
    round: RoundMode,
) -> PixelIndex {
    let pixel_v = pixel_tan.value() / pixel_2_tan + image_size.half_width();
    let pixel_value = match round {
        RoundMode::Nearest => pixel_v.round() as usize,
        RoundMode::Truncate => pixel_v as usize,
    };

    PixelIndex::new(pixel_value)
}

/// Pixel-to-tangent coefficient equivalent to `fov` for `image_size`:
/// `tan(fov / 2) / half_width`.
///
/// With this coefficient the linear model reproduces the tangent-space
/// positions of the field-of-view model to floating-point precision.
pub fn pixel_2_tan_from_fov<U: AngleUnit>(image_size: ImageSize, fov: Angle<U>) -> f64 {
    (fov / 2.0).tan() / image_size.half_width()
}
