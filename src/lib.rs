//! A minimal in-memory user store served over HTTP.
//!
//! The heart of this crate is [`store::UserStore`]: a concurrent mapping
//! from integer identifiers to user records, guarded by a single
//! reader/writer lock. Around it sit an HTTP/1.x request parser, a small
//! tokio server with pattern-based routing, and the REST handlers that
//! translate store results into status codes.
//!
//! # Features
//!
//! - Thread-safe Create/Get/Delete on user records, with identifiers
//!   allocated by the store and never reused within a process lifetime
//! - REST surface: `POST /users`, `GET /users/{id}`, `DELETE /users/{id}`
//! - HTTP request parsing with JSON body support
//! - Connection limiting and graceful shutdown
//!
//! # Examples
//!
//! ## Using the store directly
//!
//! ```
//! use userstore_rs::store::{User, UserStore};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let store = UserStore::new();
//!
//!     let id = store.create(User::new("Alice")).await;
//!     assert_eq!(store.get(id).await.unwrap().name, "Alice");
//!
//!     store.delete(id).await.unwrap();
//!     assert!(store.get(id).await.is_err());
//! }
//! ```
//!
//! ## Parsing a request
//!
//! ```
//! use userstore_rs::parse_request;
//!
//! let request_bytes = b"GET /users/1 HTTP/1.1\r\nHost: example.com\r\n\r\n";
//!
//! let request = parse_request(request_bytes).unwrap();
//! assert_eq!(request.path, "/users/1");
//! ```
//!
//! ## Serving the REST API
//!
//! ```no_run
//! use std::sync::Arc;
//! use userstore_rs::api;
//! use userstore_rs::server::{HttpServer, ServerConfig};
//! use userstore_rs::store::UserStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), userstore_rs::ServerError> {
//!     let server = HttpServer::new(ServerConfig::default());
//!     let store = Arc::new(UserStore::new());
//!
//!     api::register_routes(&server, store).await;
//!
//!     server.start().await
//! }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Export the store module
pub mod store;

// Export the REST API module
pub mod api;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, HttpRequest, HttpVersion, Method, parse_request};
pub use server::{Error as ServerError, HttpResponse, HttpServer, ServerConfig, StatusCode};
pub use store::{Error as StoreError, User, UserStore};
