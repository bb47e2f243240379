//! HTTP request handlers and routing.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::parser::{HttpRequest, Method};
use crate::server::{HttpResponse, Error};

/// Type alias for a boxed future that returns a Result<HttpResponse, Error>.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<HttpResponse, Error>> + Send>>;

/// Type alias for a handler function that takes an HttpRequest and returns a HandlerFuture.
pub type HandlerFn = Arc<dyn Fn(HttpRequest) -> HandlerFuture + Send + Sync>;

/// Represents a route in the HTTP server.
pub struct Route {
    /// The path pattern to match. Segments wrapped in braces, like the
    /// `{id}` in `/users/{id}`, capture the corresponding request segment
    /// as a path parameter.
    pub pattern: String,
    /// The HTTP methods to match.
    pub methods: Vec<Method>,
    /// The handler function.
    pub handler: HandlerFn,
}

impl Route {
    /// Match a request path against this route's pattern.
    ///
    /// The query string is stripped before matching. Patterns match
    /// segment-wise: a literal segment must compare equal, a `{name}`
    /// segment captures any non-empty segment under that name. Returns the
    /// captured parameters on a match, `None` otherwise.
    pub fn match_path(&self, path: &str) -> Option<HashMap<String, String>> {
        let path = path.split_once('?').map_or(path, |(p, _)| p);

        let pattern_segments: Vec<&str> = self.pattern.split('/').collect();
        let path_segments: Vec<&str> = path.split('/').collect();

        if pattern_segments.len() != path_segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (pattern_segment, path_segment) in pattern_segments.iter().zip(path_segments.iter()) {
            if let Some(name) = pattern_segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                if path_segment.is_empty() {
                    return None;
                }
                params.insert(name.to_string(), (*path_segment).to_string());
            } else if pattern_segment != path_segment {
                return None;
            }
        }

        Some(params)
    }
}
