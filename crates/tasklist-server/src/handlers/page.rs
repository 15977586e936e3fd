//! Main page handler

use axum::response::Html;

/// Serve the task list page. Tasks are fetched from `/api/tasks` by the page
/// itself; filtering by marker happens in the browser.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
