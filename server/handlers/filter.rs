use std::io::{Cursor, Read};

use log::{debug, warn};
use tiny_http::{Request, Response};

use sobel_edge::{decode_as, detect_edges, encode, CodecError, ImageFormat};

use crate::config::ServerConfig;
use crate::routes::{image_response, json_error};
use crate::util::multipart::{extract_boundary, extract_file};

/// A rejected upload: HTTP status plus the message placed in the JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub message: &'static str,
}

impl ApiError {
    pub const NO_IMAGE: ApiError      = ApiError { status: 400, message: "No image provided" };
    pub const UNSUPPORTED: ApiError   = ApiError { status: 400, message: "Unsupported image format" };
    pub const DECODE_FAILED: ApiError = ApiError { status: 400, message: "Failed to decode image" };
    pub const TOO_LARGE: ApiError     = ApiError { status: 413, message: "Image too large" };
    pub const ENCODE_FAILED: ApiError = ApiError { status: 500, message: "Failed to encode image" };
}

/// The encoded edge image and the format it was written in.
#[derive(Debug)]
pub struct Filtered {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

// ---------------------------------------------------------------------------
// POST /filter
// ---------------------------------------------------------------------------

pub fn handle(request: &mut Request, config: &ServerConfig) -> Response<Cursor<Vec<u8>>> {
    let content_type = request.headers().iter()
        .find(|h| h.field.equiv("Content-Type"))
        .map(|h| h.value.as_str().to_owned())
        .unwrap_or_default();

    let body = match read_body(request, config.max_upload_bytes) {
        Ok(body) => body,
        Err(err) => return json_error(err.status, err.message),
    };

    match filter_upload(&content_type, &body, config) {
        Ok(filtered) => image_response(filtered.format, filtered.bytes),
        Err(err)     => json_error(err.status, err.message),
    }
}

/// Reads the request body, refusing anything above `limit` bytes.
fn read_body(request: &mut Request, limit: u64) -> Result<Vec<u8>, ApiError> {
    if request.body_length().is_some_and(|len| len as u64 > limit) {
        return Err(ApiError::TOO_LARGE);
    }
    read_limited(request.as_reader(), limit)
}

fn read_limited(reader: impl Read, limit: u64) -> Result<Vec<u8>, ApiError> {
    let mut body = Vec::new();
    if let Err(e) = reader.take(limit.saturating_add(1)).read_to_end(&mut body) {
        warn!("failed to read request body: {e}");
        return Err(ApiError::NO_IMAGE);
    }
    if body.len() as u64 > limit {
        return Err(ApiError::TOO_LARGE);
    }
    Ok(body)
}

/// Empty output means the upload had no pixels; anything else is ours.
fn encode_failure(format: ImageFormat, e: CodecError) -> ApiError {
    if e.is_client_error() {
        debug!("rejecting upload: {e}");
        ApiError::DECODE_FAILED
    } else {
        warn!("encoding {format} response failed: {e}");
        ApiError::ENCODE_FAILED
    }
}

/// Runs the whole upload pipeline on an already-read request body.
///
/// Format comes from the file content, falling back to the uploaded file
/// name; the response uses the same format as the upload.
pub fn filter_upload(content_type: &str, body: &[u8], config: &ServerConfig) -> Result<Filtered, ApiError> {
    let boundary = extract_boundary(content_type).ok_or(ApiError::NO_IMAGE)?;
    let part = extract_file(body, &boundary, &config.field_name)
        .filter(|p| !p.data.is_empty())
        .ok_or(ApiError::NO_IMAGE)?;

    let format = ImageFormat::sniff(&part.data)
        .or_else(|| part.filename.as_deref().and_then(ImageFormat::from_extension))
        .ok_or(ApiError::UNSUPPORTED)?;

    let image = decode_as(&part.data, format).map_err(|e| {
        debug!("rejecting upload: {e}");
        ApiError::DECODE_FAILED
    })?;

    let edges = detect_edges(&image, &config.filter);
    let bytes = encode(&edges, format, &config.encode_options())
        .map_err(|e| encode_failure(format, e))?;

    debug!(
        "filtered {} upload {}x{} -> {} bytes",
        format,
        image.width(),
        image.height(),
        bytes.len()
    );
    Ok(Filtered { format, bytes })
}
