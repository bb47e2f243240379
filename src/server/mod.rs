//! HTTP server implementation.
//!
//! A small tokio-based server: accept loop with connection limiting,
//! one task per connection, pattern-based routing with path parameters,
//! and graceful shutdown on Ctrl+C.

mod response;
mod config;
mod error;
mod handler;
mod http_server;

// Re-export public items
pub use response::{HttpResponse, StatusCode};
pub use config::ServerConfig;
pub use error::Error;
pub use http_server::HttpServer;
