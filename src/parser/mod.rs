//! HTTP parser module.
//!
//! Parses HTTP/1.x requests from raw bytes: request line, headers, query
//! parameters, and the request body (sized by `Content-Length` when present).

mod request;
mod method;
mod version;
mod error;

// Re-export public items
pub use request::HttpRequest;
pub use method::Method;
pub use version::HttpVersion;
pub use error::Error;

// Re-export the parse_request function
pub use request::parse_request;
