//! Decompression middleware implementation

use crate::config::DecompressConfig;
use crate::inflate::{inflate, InflateError};
use async_trait::async_trait;
use decompress_core::middleware::{Body, Middleware, Next};
use decompress_core::response::responses;
use decompress_core::Result;
use http::{HeaderValue, Request, Response};
use http_body_util::BodyExt;
use tracing::{debug, warn};

/// Header that signals a gzip-encoded request body
///
/// The value must be exactly `true` (case-sensitive) to trigger
/// decompression.
pub const GZIP_TRIGGER: &str = "x-sensedia-gzip";

/// Header whose value, when present, replaces `Content-Type` after a
/// successful decompression
pub const CONTENT_TYPE_SOURCE: &str = "x-sensedia-content-type";

/// Request-body decompression middleware
///
/// Requests without the trigger header pass through byte-for-byte untouched.
/// Triggered requests have their body decompressed in place before the
/// downstream handler runs; if the body is not valid gzip, the request is
/// answered with 400 and the downstream handler is never invoked.
#[derive(Debug)]
pub struct DecompressMiddleware {
    config: DecompressConfig,
}

impl DecompressMiddleware {
    /// Create a new decompression middleware with the default config
    pub fn new() -> Self {
        Self::with_config(DecompressConfig::default())
    }

    /// Create a new decompression middleware with a custom config
    pub fn with_config(config: DecompressConfig) -> Self {
        Self { config }
    }

    /// The middleware configuration
    pub fn config(&self) -> &DecompressConfig {
        &self.config
    }
}

impl Default for DecompressMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Middleware for DecompressMiddleware {
    async fn call(&self, req: Request<Body>, next: Next) -> Result<Response<Body>> {
        debug!(method = %req.method(), uri = %req.uri(), "request received");

        let triggered = req
            .headers()
            .get(GZIP_TRIGGER)
            .map(|value| value == "true")
            .unwrap_or(false);

        if !triggered {
            debug!("gzip trigger absent, passing request through");
            return next.run(req).await;
        }

        debug!("gzip trigger detected");

        let (mut parts, body) = req.into_parts();
        let compressed = body
            .collect()
            .await
            .map_err(|e| decompress_core::Error::Internal(format!("Failed to read body: {}", e)))?
            .to_bytes();

        let decompressed = match inflate(&compressed) {
            Ok(bytes) => bytes,
            Err(e @ InflateError::InvalidHeader(_)) => {
                warn!(error = %e, "failed to open gzip stream");
                return responses::bad_request("Failed to decompress request body");
            }
            Err(e @ InflateError::Truncated(_)) => {
                warn!(error = %e, "failed to read gzip stream");
                return responses::bad_request("Failed to read decompressed data");
            }
        };

        debug!(size = decompressed.len(), "request body decompressed");

        parts.headers.remove(http::header::CONTENT_ENCODING);
        parts.headers.insert(
            http::header::CONTENT_LENGTH,
            HeaderValue::from_str(&decompressed.len().to_string()).map_err(|e| {
                decompress_core::Error::Internal(format!("Invalid content length: {}", e))
            })?,
        );

        // The upstream sends the plaintext media type out of band; only
        // rewrite Content-Type when it actually did.
        if let Some(content_type) = parts.headers.get(CONTENT_TYPE_SOURCE).cloned() {
            parts
                .headers
                .insert(http::header::CONTENT_TYPE, content_type);
        }

        let req = Request::from_parts(parts, Body::from(decompressed));

        debug!("passing request to downstream handler");
        next.run(req).await
    }
}
