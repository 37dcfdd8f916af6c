//! Embedded single-page UI.

use axum::response::Html;

/// Serve the embedded front page.
pub async fn page() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}
