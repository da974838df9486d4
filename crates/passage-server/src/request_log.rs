use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use passage_shared::constants::API_PREFIX;

/// Settings for [`request_log_middleware`].
#[derive(Debug, Clone, Copy)]
pub struct RequestLog {
    /// Characters of the response body echoed per line; 0 disables.
    pub body_preview: usize,
}

/// Log one line per `/api` request: method, path, status, latency and a
/// short preview of the JSON response body. Other paths pass through.
pub async fn request_log_middleware(
    State(log): State<RequestLog>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    if !is_api_path(&path) {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let started = Instant::now();
    let response = next.run(req).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let status = response.status();

    if log.body_preview == 0 {
        info!(%method, %path, status = status.as_u16(), elapsed_ms, "API request");
        return response;
    }

    // The body has to be buffered to preview it; API responses are small
    // JSON envelopes.
    let (parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(%method, %path, error = %e, "Failed to buffer response body");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let preview = truncate_preview(&String::from_utf8_lossy(&bytes), log.body_preview);
    info!(
        %method,
        %path,
        status = status.as_u16(),
        elapsed_ms,
        body = %preview,
        "API request"
    );

    Response::from_parts(parts, Body::from(bytes))
}

fn is_api_path(path: &str) -> bool {
    path.strip_prefix(API_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Cut `text` to at most `max` characters, marking the cut with `…`.
fn truncate_preview(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
