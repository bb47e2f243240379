//! REST surface for the user store.
//!
//! Owns all input validation the store relies on: unparseable bodies,
//! empty names, and non-numeric identifiers are answered with 400 without
//! touching the store.

mod handlers;
mod tests;

pub use handlers::register_routes;
