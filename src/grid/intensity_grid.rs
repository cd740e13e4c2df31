use image::GrayImage;
use thiserror::Error;

/// Errors raised when building a grid from an external buffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("buffer holds {actual} samples, expected {expected} for a {width}x{height} grid")]
    LengthMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
}

/// A single-channel 8-bit image stored row-major.
///
/// Used both for the grayscale input of the filter and for its magnitude
/// output. Sample `(x, y)` lives at `data[y * width + x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl IntensityGrid {
    /// Creates a `width × height` grid with every sample set to 0.
    pub fn new(width: usize, height: usize) -> IntensityGrid {
        IntensityGrid {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Wraps an existing row-major buffer.
    ///
    /// Fails when `samples.len() != width * height`.
    pub fn from_raw(width: usize, height: usize, samples: Vec<u8>) -> Result<IntensityGrid, GridError> {
        let expected = width * height;
        if samples.len() != expected {
            return Err(GridError::LengthMismatch {
                width,
                height,
                expected,
                actual: samples.len(),
            });
        }
        Ok(IntensityGrid { width, height, data: samples })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the grid has no samples at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the sample at `(x, y)`.
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        debug_assert!(x < self.width && y < self.height);
        self.data[y * self.width + x] = value;
    }

    /// A coordinate is interior when its whole 3×3 neighbourhood is in bounds.
    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        x > 0 && y > 0 && x + 1 < self.width && y + 1 < self.height
    }

    /// Number of interior coordinates; 0 when either side is 2 or less.
    pub fn interior_count(&self) -> usize {
        self.width.saturating_sub(2) * self.height.saturating_sub(2)
    }

    /// One row of samples.
    pub fn row(&self, y: usize) -> &[u8] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Converts into an `image` buffer for encoding.
    pub fn into_gray_image(self) -> GrayImage {
        let (w, h) = (self.width as u32, self.height as u32);
        // The buffer length always equals width * height.
        GrayImage::from_raw(w, h, self.data).unwrap_or_else(|| GrayImage::new(w, h))
    }
}

impl From<GrayImage> for IntensityGrid {
    fn from(img: GrayImage) -> Self {
        let (w, h) = img.dimensions();
        IntensityGrid {
            width: w as usize,
            height: h as usize,
            data: img.into_raw(),
        }
    }
}
