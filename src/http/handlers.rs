//! Endpoint handlers.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Static HTML page consuming the stream |
//! | `GET` | `/timer_stream` | Timer/random-number event stream |

use std::convert::Infallible;

use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use futures_util::StreamExt;

use crate::http::server::AppState;
use crate::timer::Timer;

/// Serve the index page.
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// Stream timer lines to the client.
///
/// A fresh [`Timer`] is built per request, so concurrent clients get
/// independent sequences. The body is the raw concatenation of the
/// stream elements under the `text/event-stream` content type; the
/// demo error is surfaced inside the body as plain text, never as an
/// HTTP error status.
pub async fn timer_stream(State(state): State<AppState>) -> impl IntoResponse {
    let stream = Timer::new(state.timer.clone())
        .into_stream()
        .map(Ok::<_, Infallible>);

    (
        [
            (header::CONTENT_TYPE, "text/event-stream"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(stream),
    )
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Timer Stream</title>
    <style>
        body {
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 700px;
            margin: 0 auto;
        }
        h1 { color: #58a6ff; margin-bottom: 0.25rem; }
        .subtitle { color: #8b949e; margin-top: 0; }
        pre {
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            min-height: 10rem;
            white-space: pre-wrap;
        }
        button {
            background: #238636;
            color: #fff;
            border: none;
            border-radius: 6px;
            padding: 0.5rem 1.25rem;
            font: inherit;
            cursor: pointer;
        }
    </style>
</head>
<body>
    <h1>Timer Stream</h1>
    <p class="subtitle">timestamps and random numbers, pushed as an event stream</p>
    <button id="start">Start stream</button>
    <pre id="output"></pre>
    <script>
        const output = document.getElementById('output');
        document.getElementById('start').addEventListener('click', async () => {
            output.textContent = '';
            const response = await fetch('/timer_stream');
            const reader = response.body.getReader();
            const decoder = new TextDecoder();
            for (;;) {
                const { done, value } = await reader.read();
                if (done) break;
                output.textContent += decoder.decode(value, { stream: true });
            }
        });
    </script>
</body>
</html>
"#;
