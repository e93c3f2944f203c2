//! Middleware trait and handler chain

use crate::Result;
use async_trait::async_trait;
use bytes::Bytes;
use http::{Request, Response};
use http_body_util::Full;
use std::fmt;
use std::sync::Arc;

/// Body type alias
///
/// Bodies are fully buffered; the decompressor reads the whole payload into
/// memory before handing it downstream.
pub type Body = Full<Bytes>;

/// Middleware trait for request/response processing
#[async_trait]
pub trait Middleware: Send + Sync + fmt::Debug {
    /// Process a request
    ///
    /// # Arguments
    ///
    /// * `req` - The incoming HTTP request
    /// * `next` - The next middleware/handler in the chain
    ///
    /// # Returns
    ///
    /// Returns the HTTP response or an error
    async fn call(&self, req: Request<Body>, next: Next) -> Result<Response<Body>>;
}

/// Type alias for the final handler function
pub type HandlerFn = Box<
    dyn Fn(
            Request<Body>,
        )
            -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response<Body>>> + Send>>
        + Send
        + Sync,
>;

/// Represents the next middleware/handler in the chain
///
/// Every chain terminates in a downstream handler; a request that reaches
/// the end of the middleware stack is always handed to it.
pub struct Next {
    middleware_stack: Arc<[Arc<dyn Middleware>]>,
    index: usize,
    downstream: Arc<HandlerFn>,
}

impl Next {
    /// Create a new chain over a middleware stack ending in `downstream`
    pub fn new(middleware_stack: Arc<[Arc<dyn Middleware>]>, downstream: HandlerFn) -> Self {
        Self {
            middleware_stack,
            index: 0,
            downstream: Arc::new(downstream),
        }
    }

    /// Create a chain that goes straight to the downstream handler
    pub fn handler(downstream: HandlerFn) -> Self {
        Self::new(Arc::new([]), downstream)
    }

    /// Run the next middleware, or the downstream handler once the stack is
    /// exhausted
    pub async fn run(self, req: Request<Body>) -> Result<Response<Body>> {
        if let Some(middleware) = self.middleware_stack.get(self.index) {
            let next = Self {
                middleware_stack: Arc::clone(&self.middleware_stack),
                index: self.index + 1,
                downstream: Arc::clone(&self.downstream),
            };
            middleware.call(req, next).await
        } else {
            (self.downstream)(req).await
        }
    }
}

impl Clone for Next {
    fn clone(&self) -> Self {
        Self {
            middleware_stack: Arc::clone(&self.middleware_stack),
            index: self.index,
            downstream: Arc::clone(&self.downstream),
        }
    }
}

impl fmt::Debug for Next {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("index", &self.index)
            .field("remaining", &(self.middleware_stack.len() - self.index))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[derive(Debug)]
    struct TagMiddleware {
        header: &'static str,
    }

    #[async_trait]
    impl Middleware for TagMiddleware {
        async fn call(&self, mut req: Request<Body>, next: Next) -> Result<Response<Body>> {
            req.headers_mut()
                .insert(self.header, "seen".parse().unwrap());
            next.run(req).await
        }
    }

    fn echo_headers_handler() -> HandlerFn {
        Box::new(|req| {
            Box::pin(async move {
                let tags = req
                    .headers()
                    .iter()
                    .filter(|(_, v)| *v == "seen")
                    .count()
                    .to_string();
                Ok(Response::builder()
                    .status(StatusCode::OK)
                    .body(Body::from(Bytes::from(tags)))?)
            })
        })
    }

    #[tokio::test]
    async fn test_chain_reaches_downstream() {
        let next = Next::handler(echo_headers_handler());
        let req = Request::builder().uri("/test").body(Body::from("")).unwrap();

        let response = next.run(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_chain_runs_every_middleware() {
        let stack: Arc<[Arc<dyn Middleware>]> = Arc::new([
            Arc::new(TagMiddleware { header: "x-first" }),
            Arc::new(TagMiddleware { header: "x-second" }),
        ]);
        let next = Next::new(stack, echo_headers_handler());

        let req = Request::builder().uri("/test").body(Body::from("")).unwrap();
        let response = next.run(req).await.unwrap();

        use http_body_util::BodyExt;
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"2");
    }
}
