use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET / — the board page, embedded at compile time so the binary ships
/// self-contained.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
