use crate::grid::{GridError, IntensityGrid};

// BT.601 weights scaled to 16 bits; they sum to 65536 so white maps to 255.
const WEIGHT_R: u32 = 19_595;
const WEIGHT_G: u32 = 38_470;
const WEIGHT_B: u32 = 7_471;
const ROUND: u32 = 1 << 15;

/// Perceptual luma of an 8-bit RGB triple, rounded to nearest.
///
/// `0.299·R + 0.587·G + 0.114·B` in fixed point.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((WEIGHT_R * r as u32 + WEIGHT_G * g as u32 + WEIGHT_B * b as u32 + ROUND) >> 16) as u8
}

/// Interleaved 8-bit channel layouts accepted by [`reduce_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    Gray,
    GrayAlpha,
    Rgb,
    Rgba,
}

impl ChannelLayout {
    pub fn channels(self) -> usize {
        match self {
            ChannelLayout::Gray      => 1,
            ChannelLayout::GrayAlpha => 2,
            ChannelLayout::Rgb       => 3,
            ChannelLayout::Rgba      => 4,
        }
    }

    /// Intensity of one pixel; alpha is ignored and gray passes through.
    #[inline]
    fn intensity(self, px: &[u8]) -> u8 {
        match self {
            ChannelLayout::Gray | ChannelLayout::GrayAlpha => px[0],
            ChannelLayout::Rgb | ChannelLayout::Rgba => luma(px[0], px[1], px[2]),
        }
    }
}

/// Reduces an interleaved 8-bit buffer to a grayscale grid.
///
/// Fails only when `samples` does not hold exactly
/// `width * height * layout.channels()` bytes.
pub fn reduce_raw(
    width: usize,
    height: usize,
    layout: ChannelLayout,
    samples: &[u8],
) -> Result<IntensityGrid, GridError> {
    let expected = width * height * layout.channels();
    if samples.len() != expected {
        return Err(GridError::LengthMismatch {
            width,
            height,
            expected,
            actual: samples.len(),
        });
    }
    Ok(reduce_samples(width, height, layout, samples))
}

/// Unchecked variant for buffers whose length is already guaranteed.
pub(crate) fn reduce_samples(
    width: usize,
    height: usize,
    layout: ChannelLayout,
    samples: &[u8],
) -> IntensityGrid {
    if width == 0 || height == 0 {
        return IntensityGrid::new(width, height);
    }
    let data: Vec<u8> = samples
        .chunks_exact(layout.channels())
        .map(|px| layout.intensity(px))
        .collect();
    IntensityGrid::from_raw(width, height, data)
        .unwrap_or_else(|_| IntensityGrid::new(width, height))
}
