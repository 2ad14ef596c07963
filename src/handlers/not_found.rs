//! Default response for paths with no route and no static file.
//! Used by: server.

use axum::http::{StatusCode, Uri};
use axum::Json;
use serde_json::{json, Value};

pub async fn not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    tracing::debug!(path = %uri.path(), "no route or static file");
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "not found", "path": uri.path() })),
    )
}
