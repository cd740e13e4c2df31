use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ColorType, DynamicImage, ImageEncoder};
use thiserror::Error;

use crate::codec::format::ImageFormat;
use crate::grid::IntensityGrid;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unsupported image format")]
    UnsupportedFormat,
    #[error("failed to decode {format} image: {source}")]
    Decode {
        format: ImageFormat,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode {format} image: {source}")]
    Encode {
        format: ImageFormat,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot encode an empty {width}x{height} image")]
    Empty { width: usize, height: usize },
}

impl CodecError {
    /// True when the error stems from the caller's input rather than from us.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CodecError::Encode { .. })
    }
}

/// Output encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// JPEG quality in 1..=100; ignored for PNG.
    pub jpeg_quality: u8,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions { jpeg_quality: 75 }
    }
}

/// Decodes PNG or JPEG bytes, detecting the format from the content.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, CodecError> {
    let format = ImageFormat::sniff(bytes).ok_or(CodecError::UnsupportedFormat)?;
    decode_as(bytes, format)
}

/// Decodes bytes as `format` without looking at the content first.
pub fn decode_as(bytes: &[u8], format: ImageFormat) -> Result<DynamicImage, CodecError> {
    image::load_from_memory_with_format(bytes, format.as_image_format())
        .map_err(|source| CodecError::Decode { format, source })
}

/// Encodes a single-channel grid in the requested container format.
pub fn encode(grid: &IntensityGrid, format: ImageFormat, options: &EncodeOptions) -> Result<Vec<u8>, CodecError> {
    let (width, height) = (grid.width(), grid.height());
    if grid.is_empty() {
        return Err(CodecError::Empty { width, height });
    }
    let (w, h) = (width as u32, height as u32);

    let mut buf = Vec::new();
    let result = match format {
        ImageFormat::Png => PngEncoder::new(&mut buf).write_image(grid.as_raw(), w, h, ColorType::L8),
        ImageFormat::Jpeg => {
            let quality = options.jpeg_quality.clamp(1, 100);
            JpegEncoder::new_with_quality(&mut buf, quality).encode(grid.as_raw(), w, h, ColorType::L8)
        }
    };
    result.map_err(|source| CodecError::Encode { format, source })?;
    Ok(buf)
}
