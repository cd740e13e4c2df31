use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use sobel_edge::{EncodeOptions, FilterOptions};

/// Server settings, read from an optional JSON file.
///
/// Every field has a default, so `{}` is a valid config and a missing file
/// simply means "all defaults". Unknown keys are rejected to catch typos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address to bind.
    pub addr: String,
    /// Multipart field carrying the uploaded image.
    pub field_name: String,
    /// Request bodies above this size are refused with 413.
    pub max_upload_bytes: u64,
    /// Quality used when the response is a JPEG.
    pub jpeg_quality: u8,
    /// Worker pool and saturation settings for the filter.
    pub filter: FilterOptions,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr:             "0.0.0.0:8080".to_owned(),
            field_name:       "img".to_owned(),
            max_upload_bytes: 32 * 1024 * 1024,
            jpeg_quality:     75,
            filter:           FilterOptions::default(),
        }
    }
}

impl ServerConfig {
    /// Deserializes and validates a config file.
    pub fn load_json(path: &Path) -> Result<ServerConfig> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: ServerConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            bail!("jpeg_quality must be within 1..=100, got {}", self.jpeg_quality);
        }
        if self.field_name.is_empty() {
            bail!("field_name must not be empty");
        }
        if self.max_upload_bytes == 0 {
            bail!("max_upload_bytes must be positive");
        }
        Ok(())
    }

    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions { jpeg_quality: self.jpeg_quality }
    }
}
