//! Image-plane value types.
//!
//! `ImageSize` and `PixelIndex` are plain `Copy` values with derived
//! quantities computed on demand. Accessors perform no validation:
//! normalizing a pixel against a zero-width size yields non-finite values
//! under IEEE-754 semantics, and callers that need a guarantee should go
//! through the validated projectors instead.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Image dimensions in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImageSize {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
}

impl ImageSize {
    /// Creates a size from width and height in pixels.
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Half the width as a float; `0.0` for a zero-width image.
    pub fn half_width(&self) -> f64 {
        self.width as f64 / 2.0
    }

    /// Half the height as a float; `0.0` for a zero-height image.
    pub fn half_height(&self) -> f64 {
        self.height as f64 / 2.0
    }
}

impl From<(usize, usize)> for ImageSize {
    fn from(dimensions: (usize, usize)) -> Self {
        Self::new(dimensions.0, dimensions.1)
    }
}

impl From<ImageSize> for (usize, usize) {
    fn from(size: ImageSize) -> Self {
        (size.width, size.height)
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A pixel coordinate along a single image axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PixelIndex {
    /// Coordinate in pixels from the low edge of the axis.
    pub value: usize,
}

impl PixelIndex {
    /// Wraps a raw pixel coordinate.
    pub const fn new(value: usize) -> Self {
        Self { value }
    }

    /// Maps the coordinate into `[-1, 1]` relative to `size` measured along
    /// the same axis: `value / half_width - 1`.
    ///
    /// Unguarded for `size.width == 0`; the division then produces
    /// infinity or NaN.
    pub fn normalized(&self, size: ImageSize) -> f64 {
        self.value as f64 / size.half_width() - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::{ImageSize, PixelIndex};

    #[test]
    fn half_dimensions() {
        let size = ImageSize::new(1920, 1080);
        assert_eq!(size.half_width(), 960.0);
        assert_eq!(size.half_height(), 540.0);
    }

    #[test]
    fn half_dimensions_of_empty_size() {
        let size = ImageSize::default();
        assert_eq!(size.half_width(), 0.0);
        assert_eq!(size.half_height(), 0.0);
    }

    #[test]
    fn odd_widths_keep_the_fractional_half() {
        let size = ImageSize::new(7, 5);
        assert_eq!(size.half_width(), 3.5);
        assert_eq!(size.half_height(), 2.5);
    }

    #[test]
    fn normalized_spans_minus_one_to_one() {
        let size = ImageSize::new(640, 480);
        assert_eq!(PixelIndex::new(0).normalized(size), -1.0);
        assert_eq!(PixelIndex::new(320).normalized(size), 0.0);
        assert_eq!(PixelIndex::new(640).normalized(size), 1.0);
    }

    #[test]
    fn normalized_against_zero_width_is_not_finite() {
        let size = ImageSize::new(0, 480);
        assert!(PixelIndex::new(10).normalized(size).is_infinite());
        assert!(PixelIndex::new(0).normalized(size).is_nan());
    }

    #[test]
    fn tuple_conversions() {
        let size: ImageSize = (800, 600).into();
        assert_eq!(size, ImageSize::new(800, 600));
        let tuple: (usize, usize) = size.into();
        assert_eq!(tuple, (800, 600));
    }

    #[test]
    fn display_formats_as_width_by_height() {
        assert_eq!(format!("{}", ImageSize::new(640, 480)), "640x480");
    }
}
