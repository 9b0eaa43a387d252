//! Inbound invocation.

use lambda_http::http::Method;
use lambda_http::Request;

/// The parts of an inbound request the handler looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub method: Method,
    body: Option<Vec<u8>>,
}

impl Invocation {
    /// Create an invocation. An empty body is treated as absent.
    pub fn new(method: Method, body: Option<impl Into<Vec<u8>>>) -> Self {
        Self {
            method,
            body: body.map(Into::into).filter(|b| !b.is_empty()),
        }
    }

    /// Build from a Lambda HTTP request.
    pub fn from_request(request: &Request) -> Self {
        let body: &[u8] = request.body();
        Self::new(request.method().clone(), Some(body))
    }

    /// Raw request body, if one was sent.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// True for CORS preflight requests.
    pub fn is_preflight(&self) -> bool {
        self.method == Method::OPTIONS
    }
}

#[cfg(test)]
mod tests {
    use lambda_http::Body;

    use super::*;

    #[test]
    fn test_empty_body_is_absent() {
        let invocation = Invocation::new(Method::POST, Some(""));
        assert_eq!(invocation.body(), None);

        let invocation = Invocation::new(Method::POST, None::<&str>);
        assert_eq!(invocation.body(), None);
    }

    #[test]
    fn test_from_request() {
        let request = lambda_http::http::Request::builder()
            .method(Method::POST)
            .uri("/content")
            .body(Body::Text(r#"{"password":"correct"}"#.to_string()))
            .unwrap();

        let invocation = Invocation::from_request(&request);
        assert_eq!(invocation.method, Method::POST);
        assert_eq!(invocation.body(), Some(br#"{"password":"correct"}"#.as_slice()));
        assert!(!invocation.is_preflight());
    }

    #[test]
    fn test_from_request_without_body() {
        let request = lambda_http::http::Request::builder()
            .method(Method::OPTIONS)
            .uri("/content")
            .body(Body::Empty)
            .unwrap();

        let invocation = Invocation::from_request(&request);
        assert!(invocation.is_preflight());
        assert_eq!(invocation.body(), None);
    }
}
