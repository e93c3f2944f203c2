//! Host adapter binding the middleware to a downstream handler
//!
//! Gateway hosts hand a plugin its downstream handler and configuration at
//! construction time. This adapter satisfies that contract while keeping
//! [`DecompressMiddleware`] a plain middleware with no host lifecycle hooks.

use crate::config::DecompressConfig;
use crate::middleware::DecompressMiddleware;
use decompress_core::middleware::{Body, HandlerFn, Middleware, Next};
use decompress_core::Result;
use http::{Request, Response};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A decompression middleware bound to its downstream handler
pub struct DecompressHandler {
    name: String,
    stack: Arc<[Arc<dyn Middleware>]>,
    downstream: Arc<HandlerFn>,
}

impl DecompressHandler {
    /// Bind the middleware to `next` with the given configuration
    ///
    /// Construction cannot fail today; the `Result` keeps the host contract
    /// stable if a future configuration adds fallible validation.
    pub fn new(
        next: HandlerFn,
        config: DecompressConfig,
        name: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        debug!(plugin = %name, "decompression handler created");

        let stack: Arc<[Arc<dyn Middleware>]> =
            Arc::new([Arc::new(DecompressMiddleware::with_config(config)) as Arc<dyn Middleware>]);

        Ok(Self {
            name,
            stack,
            downstream: Arc::new(next),
        })
    }

    /// The instance name given by the host
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Serve one request through the middleware and on to the downstream
    /// handler
    pub async fn serve(&self, req: Request<Body>) -> Result<Response<Body>> {
        let stack = Arc::clone(&self.stack);
        let downstream = Arc::clone(&self.downstream);
        let next = Next::new(stack, Box::new(move |req| (downstream)(req)));
        next.run(req).await
    }
}

impl fmt::Debug for DecompressHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecompressHandler")
            .field("name", &self.name)
            .finish()
    }
}
