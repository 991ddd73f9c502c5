pub mod ai;
pub mod divine;

use axum::response::{Html, IntoResponse};

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="zh">
<head><meta charset="utf-8"><title>易经 Yijing</title></head>
<body>
<h1>易经 · 铜钱起卦</h1>
<p>Web UI: <a href="/static/index.html">/static/index.html</a></p>
<ul>
<li><code>POST /api/divine/coin</code> {seed?, topic?}</li>
<li><code>GET /api/divine/hex/{code}</code></li>
<li><code>POST /api/divine/interpret</code> {hexagram, question}</li>
<li><code>POST /api/divine/line</code> {code, line, llm?}</li>
<li><code>POST /api/ai</code> {question, hexagram, model?}</li>
</ul>
</body>
</html>
"#;

/// Landing page listing the API.
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "Yijing is running"
}
