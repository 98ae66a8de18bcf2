//! Precomputed, validated projector types.
//!
//! The free functions in [`fov`](super::fov) and [`linear`](super::linear)
//! recompute derived scalars on every call and let bad input flow through
//! the arithmetic. The projectors validate once at construction, cache the
//! derived scalars, and report inverse mappings that leave the pixel range
//! as typed errors instead of saturating.

use std::f64::consts::PI;

use crate::angle::{Angle, AngleUnit, Radians};
use crate::geom::{ImageSize, PixelIndex};
use crate::trace::trace_event;
use crate::util::{ProjectionError, ProjectionResult};

use super::{linear, RoundMode};

/// Field-of-view projector with the half-FOV tangent cached.
#[derive(Clone, Copy, Debug)]
pub struct FovProjector {
    half_width: f64,
    half_fov_tan: f64,
}

impl FovProjector {
    /// Builds a projector for `image_size` spanning `fov` along the width
    /// axis.
    ///
    /// Fails with [`ProjectionError::DegenerateImage`] for a zero-width
    /// image and [`ProjectionError::FovOutOfRange`] for a field of view
    /// outside `(0, pi)` radians.
    pub fn new<U: AngleUnit>(image_size: ImageSize, fov: Angle<U>) -> ProjectionResult<Self> {
        if image_size.width == 0 {
            return Err(ProjectionError::DegenerateImage);
        }
        let fov_rad = checked_fov_rad(fov)?;

        let half_width = image_size.half_width();
        let half_fov_tan = (fov_rad / 2.0).tan();
        trace_event!(
            "fov_projector",
            half_width = half_width,
            half_fov_tan = half_fov_tan,
        );

        Ok(Self {
            half_width,
            half_fov_tan,
        })
    }

    /// Angular offset of `pixel` from the optical axis.
    pub fn pixel_to_angle(&self, pixel: PixelIndex) -> Radians {
        let norm = pixel.value as f64 / self.half_width - 1.0;
        Radians::new((norm * self.half_fov_tan).atan())
    }

    /// Pixel index whose tangent-space position is `pixel_tan`, rounded to
    /// the nearest pixel.
    ///
    /// Fails with [`ProjectionError::PixelOutOfRange`] when the continuous
    /// coordinate is non-finite or leaves the pixel range.
    pub fn tan_to_pixel(&self, pixel_tan: f64) -> ProjectionResult<PixelIndex> {
        let norm = pixel_tan / self.half_fov_tan;
        checked_pixel(norm * self.half_width + self.half_width, RoundMode::Nearest)
    }
}

/// Linear-scale projector with an optional dead zone around the center.
#[derive(Clone, Copy, Debug)]
pub struct LinearProjector {
    half_width: f64,
    pixel_2_tan: f64,
    clip_radius: f64,
}

impl LinearProjector {
    /// Builds a projector from an explicit pixel-to-tangent coefficient.
    ///
    /// Fails with [`ProjectionError::DegenerateImage`] for a zero-width
    /// image and [`ProjectionError::InvalidPixelScale`] for a zero or
    /// non-finite coefficient.
    pub fn new(image_size: ImageSize, pixel_2_tan: f64) -> ProjectionResult<Self> {
        if image_size.width == 0 {
            return Err(ProjectionError::DegenerateImage);
        }
        if !pixel_2_tan.is_finite() || pixel_2_tan == 0.0 {
            return Err(ProjectionError::InvalidPixelScale { value: pixel_2_tan });
        }

        let half_width = image_size.half_width();
        trace_event!(
            "linear_projector",
            half_width = half_width,
            pixel_2_tan = pixel_2_tan,
        );

        Ok(Self {
            half_width,
            pixel_2_tan,
            clip_radius: 0.0,
        })
    }

    /// Builds a projector whose coefficient reproduces `fov` in tangent
    /// space, via [`pixel_2_tan_from_fov`](linear::pixel_2_tan_from_fov).
    pub fn from_fov<U: AngleUnit>(image_size: ImageSize, fov: Angle<U>) -> ProjectionResult<Self> {
        if image_size.width == 0 {
            return Err(ProjectionError::DegenerateImage);
        }
        checked_fov_rad(fov)?;
        Self::new(image_size, linear::pixel_2_tan_from_fov(image_size, fov))
    }

    /// Adds a dead zone of `clipping_threshold * half_width` pixels around
    /// the center; forward mappings inside it return exactly `0.0`.
    ///
    /// Fails with [`ProjectionError::InvalidClippingThreshold`] for a
    /// negative or non-finite threshold.
    pub fn with_clipping(mut self, clipping_threshold: f64) -> ProjectionResult<Self> {
        if !clipping_threshold.is_finite() || clipping_threshold < 0.0 {
            return Err(ProjectionError::InvalidClippingThreshold {
                value: clipping_threshold,
            });
        }
        self.clip_radius = clipping_threshold * self.half_width;
        Ok(self)
    }

    /// Tangent-space offset of `pixel`; exactly `0.0` inside the dead zone.
    pub fn pixel_to_tan(&self, pixel: PixelIndex) -> f64 {
        let offset = pixel.value as f64 - self.half_width;
        if offset.abs() < self.clip_radius {
            return 0.0;
        }
        offset * self.pixel_2_tan
    }

    /// Pixel index for `pixel_tan` under the selected rounding policy.
    ///
    /// Fails with [`ProjectionError::PixelOutOfRange`] when the continuous
    /// coordinate is non-finite or leaves the pixel range.
    pub fn tan_to_pixel(&self, pixel_tan: f64, round: RoundMode) -> ProjectionResult<PixelIndex> {
        checked_pixel(pixel_tan / self.pixel_2_tan + self.half_width, round)
    }
}

fn checked_fov_rad<U: AngleUnit>(fov: Angle<U>) -> ProjectionResult<f64> {
    let fov_rad = fov.to_radians().value();
    // the negated comparison also rejects NaN
    if !(fov_rad > 0.0 && fov_rad < PI) {
        return Err(ProjectionError::FovOutOfRange { fov_rad });
    }
    Ok(fov_rad)
}

fn checked_pixel(pixel_v: f64, round: RoundMode) -> ProjectionResult<PixelIndex> {
    let mapped = match round {
        RoundMode::Nearest => pixel_v.round(),
        RoundMode::Truncate => pixel_v.trunc(),
    };
    if !mapped.is_finite() || mapped < 0.0 || mapped > usize::MAX as f64 {
        return Err(ProjectionError::PixelOutOfRange { value: pixel_v });
    }
    Ok(PixelIndex::new(mapped as usize))
}
