use std::io::Cursor;
use std::time::Instant;

use log::info;
use serde_json::{json, Value};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use sobel_edge::ImageFormat;

use crate::config::ServerConfig;
use crate::handlers;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn header(name: &str, value: &str) -> Option<Header> {
    Header::from_bytes(name.as_bytes(), value.as_bytes()).ok()
}

fn bytes_response(status: u16, content_type: &str, bytes: Vec<u8>) -> Response<Cursor<Vec<u8>>> {
    let len = bytes.len();
    Response::new(
        StatusCode(status),
        header("Content-Type", content_type).into_iter().collect(),
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn json_response(status: u16, body: &Value) -> Response<Cursor<Vec<u8>>> {
    bytes_response(status, "application/json", body.to_string().into_bytes())
}

/// `{"error": message}` with the given status.
pub fn json_error(status: u16, message: &str) -> Response<Cursor<Vec<u8>>> {
    json_response(status, &json!({ "error": message }))
}

pub fn image_response(format: ImageFormat, bytes: Vec<u8>) -> Response<Cursor<Vec<u8>>> {
    bytes_response(200, format.content_type(), bytes)
}

pub fn not_found() -> Response<Cursor<Vec<u8>>> {
    json_error(404, "Not found")
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Routes one request, responds, and logs the outcome.
pub fn dispatch(mut request: Request, config: &ServerConfig) {
    let started = Instant::now();
    let method  = request.method().clone();
    let url     = request.url().to_owned();
    let path    = url.split('?').next().unwrap_or("").to_owned();

    let response = match (&method, path.as_str()) {
        (Method::Post, "/filter") => handlers::filter::handle(&mut request, config),
        (Method::Get,  "/health") => handlers::health::handle(),
        _ => not_found(),
    };

    let status = response.status_code().0;
    if let Err(e) = request.respond(response) {
        log::warn!("{method} {path}: failed to send response: {e}");
    }
    info!("{method} {path} -> {status} in {:?}", started.elapsed());
}
