//! Response builder and utilities

use crate::Result;
use bytes::Bytes;
use http::{header, Response, StatusCode};
use http_body_util::Full;

/// Body type alias
pub type Body = Full<Bytes>;

/// Response builder for convenient response construction
#[derive(Debug)]
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(header::HeaderName, String)>,
}

impl ResponseBuilder {
    /// Create a new response builder
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
        }
    }

    /// Set a header
    pub fn header(mut self, name: header::HeaderName, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Build response with text body
    pub fn text(self, body: impl Into<String>) -> Result<Response<Body>> {
        let mut response = Response::builder().status(self.status);

        response = response.header(header::CONTENT_TYPE, "text/plain; charset=utf-8");

        for (name, value) in self.headers {
            response = response.header(name, value);
        }

        Ok(response.body(Full::new(Bytes::from(body.into())))?)
    }
}

/// Convenience functions for common responses
pub mod responses {
    use super::*;

    /// 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Result<Response<Body>> {
        ResponseBuilder::new(StatusCode::BAD_REQUEST).text(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_builder() {
        let response = ResponseBuilder::new(StatusCode::OK)
            .header(header::HeaderName::from_static("x-custom"), "value")
            .text("Hello, World!")
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get("x-custom").unwrap(), "value");
    }

    #[test]
    fn test_bad_request() {
        let response = responses::bad_request("Failed to decompress request body").unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }
}
