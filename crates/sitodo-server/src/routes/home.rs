use axum::response::Html;

/// GET /: landing page.
pub async fn home() -> Html<&'static str> {
    Html("<html><head><title>Sitodo</title></head><body></body></html>")
}
