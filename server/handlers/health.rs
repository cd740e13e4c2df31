use std::io::Cursor;

use serde_json::json;
use tiny_http::Response;

use crate::routes::json_response;

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

pub fn handle() -> Response<Cursor<Vec<u8>>> {
    json_response(200, &json!({ "status": "ok" }))
}
