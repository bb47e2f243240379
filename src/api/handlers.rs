//! Request handlers for the user store REST API.

use std::sync::Arc;

use log::debug;

use crate::parser::{HttpRequest, Method};
use crate::server::{Error, HttpResponse, HttpServer, StatusCode};
use crate::store::{Error as StoreError, User, UserStore};

/// Plain-text line served from the root path.
pub const ROOT_BANNER: &str = "userstore-rs: in-memory user store";

/// Register the REST routes on the given server.
///
/// The store is shared into each handler closure; handlers are the only
/// callers the store ever sees.
pub async fn register_routes(server: &HttpServer, store: Arc<UserStore>) {
    server.add_route("/", vec![Method::GET], handle_root).await;

    let create_store = store.clone();
    server.add_route("/users", vec![Method::POST], move |req| {
        let store = create_store.clone();
        async move { create_user(req, store).await }
    }).await;

    let get_store = store.clone();
    server.add_route("/users/{id}", vec![Method::GET], move |req| {
        let store = get_store.clone();
        async move { get_user(req, store).await }
    }).await;

    let delete_store = store;
    server.add_route("/users/{id}", vec![Method::DELETE], move |req| {
        let store = delete_store.clone();
        async move { delete_user(req, store).await }
    }).await;
}

/// `GET /` - liveness banner.
pub(crate) async fn handle_root(_req: HttpRequest) -> Result<HttpResponse, Error> {
    Ok(HttpResponse::new(StatusCode::Ok)
        .with_content_type("text/plain")
        .with_body_string(ROOT_BANNER))
}

/// `POST /users` - create a record from a `{"name": string}` body.
///
/// Validation happens here, before the store is involved: an unparseable
/// body or a blank name is a 400 and mutates nothing.
pub(crate) async fn create_user(req: HttpRequest, store: Arc<UserStore>) -> Result<HttpResponse, Error> {
    let user: User = match req.json() {
        Ok(user) => user,
        Err(e) => return Ok(bad_request(format!("invalid request body: {e}"))),
    };

    if user.name.trim().is_empty() {
        return Ok(bad_request("name is required"));
    }

    let id = store.create(user).await;
    debug!("created user {id}");

    Ok(HttpResponse::new(StatusCode::NoContent))
}

/// `GET /users/{id}` - fetch a record as `{"name": string}`.
///
/// A non-numeric id is a 400; an absent one is a 404.
pub(crate) async fn get_user(req: HttpRequest, store: Arc<UserStore>) -> Result<HttpResponse, Error> {
    let id = match parse_id(&req) {
        Some(id) => id,
        None => return Ok(bad_request("invalid user id")),
    };

    match store.get(id).await {
        Ok(user) => HttpResponse::new(StatusCode::Ok).with_json(&user),
        Err(StoreError::NotFound(_)) => Ok(HttpResponse::new(StatusCode::NotFound)
            .with_content_type("text/plain")
            .with_body_string("user not found")),
    }
}

/// `DELETE /users/{id}` - remove a record.
///
/// Both a non-numeric and an absent id answer 400.
pub(crate) async fn delete_user(req: HttpRequest, store: Arc<UserStore>) -> Result<HttpResponse, Error> {
    let id = match parse_id(&req) {
        Some(id) => id,
        None => return Ok(bad_request("invalid user id")),
    };

    match store.delete(id).await {
        Ok(()) => {
            debug!("deleted user {id}");
            Ok(HttpResponse::new(StatusCode::NoContent))
        }
        Err(StoreError::NotFound(_)) => Ok(bad_request("user not found")),
    }
}

/// The `{id}` path parameter as a u64, if present and numeric.
fn parse_id(req: &HttpRequest) -> Option<u64> {
    req.get_path_param("id").and_then(|raw| raw.parse::<u64>().ok())
}

fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::new(StatusCode::BadRequest)
        .with_content_type("text/plain")
        .with_body_string(message)
}
