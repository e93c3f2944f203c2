//! Gzip request-body decompression middleware
//!
//! Inspects inbound requests for the `x-sensedia-gzip` signaling header and,
//! when its value is exactly `true`, decompresses the gzip-encoded request
//! body in place before handing the request to the downstream handler.
//!
//! Behavior:
//! - Trigger header absent or not `true`: the request passes through untouched
//! - Valid gzip body: the body is replaced with the plaintext,
//!   `Content-Length` is set to the decoded byte count, and
//!   `Content-Encoding` is removed
//! - Invalid or truncated gzip body: the request is answered with 400 and
//!   never reaches the downstream handler

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod config;
pub mod inflate;
pub mod middleware;
pub mod plugin;

pub use config::DecompressConfig;
pub use inflate::{inflate, InflateError};
pub use middleware::DecompressMiddleware;
pub use plugin::DecompressHandler;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::DecompressConfig;
    pub use crate::middleware::DecompressMiddleware;
    pub use crate::plugin::DecompressHandler;
    pub use decompress_core::middleware::{Body, HandlerFn, Middleware, Next};
}
