use axum::extract::{Path, Query, State};
use axum::Json;
use sitodo_core::{SitodoError, TodoList, TodoListService};

use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct NewItemBody {
    #[serde(default)]
    pub title: String,
}

#[derive(serde::Deserialize)]
pub struct FinishedQuery {
    pub finished: bool,
}

fn ok_body(service: &TodoListService, list: &TodoList) -> serde_json::Value {
    serde_json::json!({
        "status": "OK",
        "list": service.view(list),
    })
}

/// GET /api/list/:id: fetch a list with its motivation message.
pub async fn get_list(
    State(app): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let service = app.service.clone();
    let result = tokio::task::spawn_blocking(move || {
        let list = service.get_by_id(id)?;
        Ok::<_, SitodoError>(ok_body(&service, &list))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// POST /api/list: start a new list with one item.
pub async fn create_list(
    State(app): State<AppState>,
    Json(body): Json<NewItemBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    tracing::debug!(title = %body.title, "new item");
    let service = app.service.clone();
    let result = tokio::task::spawn_blocking(move || {
        let list = service.create_with_item(body.title)?;
        Ok::<_, SitodoError>(ok_body(&service, &list))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// POST /api/list/:id: append an item to an existing list.
pub async fn append_item(
    State(app): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<NewItemBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    tracing::debug!(id, title = %body.title, "new item");
    let service = app.service.clone();
    let result = tokio::task::spawn_blocking(move || {
        let list = service.append_item(id, body.title)?;
        Ok::<_, SitodoError>(ok_body(&service, &list))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// POST /api/list/:id/update/:item_id?finished=bool: set an item's finished flag.
pub async fn update_item(
    State(app): State<AppState>,
    Path((id, item_id)): Path<(u64, u64)>,
    Query(q): Query<FinishedQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let service = app.service.clone();
    let result = tokio::task::spawn_blocking(move || {
        let list = service.set_item_finished(id, item_id, q.finished)?;
        Ok::<_, SitodoError>(ok_body(&service, &list))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
