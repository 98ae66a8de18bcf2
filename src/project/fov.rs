//! Field-of-view based conversions.
//!
//! A pinhole lens samples the scene linearly in the tangent of the viewing
//! angle, not in the angle itself. The forward mapping therefore recovers
//! the true angular offset with `atan`, and the inverse divides a raw
//! tangent by `tan(fov / 2)` before mapping back into pixel space.

use crate::angle::{Angle, AngleUnit, Radians};
use crate::geom::{ImageSize, PixelIndex};

/// Angular offset of `pixel` from the optical axis of a sensor spanning
/// `fov` along the width axis.
///
/// The pixel is normalized to `[-1, 1]`, scaled by `tan(fov / 2)` into
/// tangent space, and mapped back to an angle with `atan`. No validation is
/// performed: a zero-width image or a field of view at ±π propagates
/// non-finite values through the arithmetic.
pub fn pixel_tan_from_fov<U: AngleUnit>(
    pixel: PixelIndex,
    image_size: ImageSize,
    fov: Angle<U>,
) -> Radians {
    let norm = pixel.normalized(image_size);
    let half_fov_tan = (fov / 2.0).tan();
    Radians::new((norm * half_fov_tan).atan())
}

/// Pixel index whose tangent-space position is `pixel_tan` under `fov`.
///
/// Inverse of [`pixel_tan_from_fov`], taking the raw tangent value rather
/// than an angle. The continuous coordinate is rounded to the nearest pixel
/// (halves away from zero) and converted with a saturating cast; a tangent
/// mapping left of pixel zero clamps to zero rather than failing.
pub fn tan_2_pixel_by_fov<U: AngleUnit>(
    pixel_tan: f64,
    image_size: ImageSize,
    fov: Angle<U>,
) -> PixelIndex {
    let half_fov_tan = (fov / 2.0).tan();
    let norm = pixel_tan / half_fov_tan;
    let half_width = image_size.half_width();
    PixelIndex::new((norm * half_width + half_width).round() as usize)
}

#[cfg(test)]
mod tests {
    use super::{pixel_tan_from_fov, tan_2_pixel_by_fov};
    use crate::angle::Degrees;
    use crate::geom::{ImageSize, PixelIndex};
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-5;

    #[test]
    fn center_pixel_has_zero_tangent() {
        let tan = pixel_tan_from_fov(PixelIndex::new(12), ImageSize::new(24, 0), Degrees::new(23.0)).tan();
        assert!(tan.abs() < EPSILON);
    }

    #[test]
    fn right_edge_pixel_sees_half_the_fov() {
        let angle = pixel_tan_from_fov(PixelIndex::new(20), ImageSize::new(20, 0), Degrees::new(30.0));
        assert!((angle.tan() - (PI / 12.0).tan()).abs() < EPSILON);
    }

    #[test]
    fn left_edge_pixel_sees_negative_half_fov() {
        let angle = pixel_tan_from_fov(PixelIndex::new(0), ImageSize::new(480, 0), Degrees::new(50.0));
        assert!((angle.tan() - (-PI / 7.2).tan()).abs() < EPSILON);
    }

    #[test]
    fn quarter_offset_pixel_matches_reference_angle() {
        let angle = pixel_tan_from_fov(PixelIndex::new(15), ImageSize::new(20, 0), Degrees::new(30.0));
        let expected = (7.630740212430057f64).to_radians().tan();
        assert!((angle.tan() - expected).abs() < EPSILON);
    }

    #[test]
    fn zero_tangent_maps_to_center_pixel() {
        let pixel = tan_2_pixel_by_fov(0.0, ImageSize::new(640, 480), Degrees::new(32.0));
        assert_eq!(pixel.value, 320);
    }

    #[test]
    fn inverse_matches_scalar_reference() {
        // round((tan / tan(fov/2) + 1) * half_width) spelled out directly.
        let reference = |pixel_tan: f64, width: usize, fov_deg: f64| -> usize {
            let half_width = width as f64 / 2.0;
            ((pixel_tan / (fov_deg * PI / 360.0).tan() + 1.0) * half_width).round() as usize
        };

        for pixel_tan in [(PI / 12.0).tan(), (PI / 30.0).tan(), (-PI / 6.0).tan()] {
            let pixel = tan_2_pixel_by_fov(pixel_tan, ImageSize::new(640, 480), Degrees::new(32.0));
            assert_eq!(pixel.value, reference(pixel_tan, 640, 32.0));
        }
    }

    #[test]
    fn forward_then_inverse_recovers_the_pixel() {
        let size = ImageSize::new(640, 480);
        let fov = Degrees::new(32.0);
        for value in [1, 17, 320, 481, 639] {
            let tan = pixel_tan_from_fov(PixelIndex::new(value), size, fov).tan();
            let back = tan_2_pixel_by_fov(tan, size, fov);
            assert!(back.value.abs_diff(value) <= 1);
        }
    }
}
