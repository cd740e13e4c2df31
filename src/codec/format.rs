use std::fmt;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_SIGNATURE: &[u8] = b"\xFF\xD8\xFF";

/// Container formats accepted on input and produced on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Detects the format from the leading magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<ImageFormat> {
        if bytes.starts_with(PNG_SIGNATURE) {
            Some(ImageFormat::Png)
        } else if bytes.starts_with(JPEG_SIGNATURE) {
            Some(ImageFormat::Jpeg)
        } else {
            None
        }
    }

    /// Maps a file name or bare extension (`png`, `jpg`, `jpeg`) to a format.
    pub fn from_extension(name: &str) -> Option<ImageFormat> {
        let ext = name.rsplit('.').next().unwrap_or(name);
        match ext.to_ascii_lowercase().as_str() {
            "png"          => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            _              => None,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ImageFormat::Png  => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }

    pub(crate) fn as_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Png  => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageFormat::Png  => write!(f, "PNG"),
            ImageFormat::Jpeg => write!(f, "JPEG"),
        }
    }
}
