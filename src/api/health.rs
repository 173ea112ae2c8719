use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let executor = &state.ctx.executor;
    let available = executor.check_availability().await;
    let version = if available {
        executor.version().await.ok().map(Value::String).unwrap_or(Value::Null)
    } else {
        Value::Null
    };

    Json(json!({
        "status": "ok",
        "cli": {
            "program": executor.program(),
            "available": available,
            "version": version
        },
        "tools": state.registry.len(),
        "timestamp": Utc::now().to_rfc3339()
    }))
}
