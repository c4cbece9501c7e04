use axum::extract::{Query, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct MessageQuery {
    pub total: usize,
    pub finished: usize,
}

/// GET /api/message?total=&finished=: motivation message for arbitrary counts.
pub async fn get_message(
    State(app): State<AppState>,
    Query(q): Query<MessageQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    if q.finished > q.total {
        return Err(AppError::bad_request(format!(
            "finished ({}) exceeds total ({})",
            q.finished, q.total
        )));
    }
    let message = app.service.motivation().compute(q.total, q.finished);
    Ok(Json(serde_json::json!({
        "total": q.total,
        "finished": q.finished,
        "message": message,
    })))
}
