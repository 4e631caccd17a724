use axum::response::Html;

/// GET /
/// The single-page form: Home, Students and Recruiters sections.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
