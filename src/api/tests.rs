//! Tests for the REST API surface.

#[cfg(test)]
mod api_tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    use crate::api::handlers::{self, ROOT_BANNER};
    use crate::parser::{HttpRequest, HttpVersion, Method};
    use crate::server::{HttpServer, ServerConfig, StatusCode};
    use crate::store::{User, UserStore};

    async fn test_server() -> (HttpServer, Arc<UserStore>) {
        let server = HttpServer::new(ServerConfig::default());
        let store = Arc::new(UserStore::new());
        crate::api::register_routes(&server, store.clone()).await;
        (server, store)
    }

    /// Push raw request bytes through the connection handler and collect
    /// the raw response.
    async fn roundtrip(server: &HttpServer, raw: &[u8]) -> String {
        let (mut client, mut conn) = tokio::io::duplex(8192);
        client.write_all(raw).await.unwrap();

        let _ = HttpServer::handle_connection(&mut conn, server.routes.clone(), 8192).await;
        drop(conn);

        let mut out = Vec::new();
        client.read_to_end(&mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    fn post_users(body: &str) -> Vec<u8> {
        format!(
            "POST /users HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {len}\r\n\r\n{body}",
            len = body.len()
        )
        .into_bytes()
    }

    fn get(path: &str) -> Vec<u8> {
        format!("GET {path} HTTP/1.1\r\nHost: localhost\r\n\r\n").into_bytes()
    }

    fn delete(path: &str) -> Vec<u8> {
        format!("DELETE {path} HTTP/1.1\r\nHost: localhost\r\n\r\n").into_bytes()
    }

    #[tokio::test]
    async fn test_root_serves_banner() {
        let (server, _store) = test_server().await;

        let response = roundtrip(&server, &get("/")).await;
        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.contains("Content-Type: text/plain\r\n"));
        assert!(response.contains(ROOT_BANNER));
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let (server, store) = test_server().await;

        let response = roundtrip(&server, &post_users(r#"{"name":"Alice"}"#)).await;
        assert!(response.starts_with("HTTP/1.1 204 No Content\r\n"));
        assert_eq!(store.len().await, 1);

        let response = roundtrip(&server, &get("/users/1")).await;
        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.contains("Content-Type: application/json\r\n"));
        assert!(response.contains(r#"{"name":"Alice"}"#));
    }

    #[tokio::test]
    async fn test_create_rejects_unparseable_body() {
        let (server, store) = test_server().await;

        let response = roundtrip(&server, &post_users(r#"{"name":"#)).await;
        assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
        assert!(response.contains("invalid request body"));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_content_type() {
        let (server, store) = test_server().await;

        let body = r#"{"name":"Alice"}"#;
        let raw = format!(
            "POST /users HTTP/1.1\r\nHost: localhost\r\nContent-Length: {len}\r\n\r\n{body}",
            len = body.len()
        );
        let response = roundtrip(&server, raw.as_bytes()).await;
        assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let (server, store) = test_server().await;

        let response = roundtrip(&server, &post_users(r#"{"name":""}"#)).await;
        assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
        assert!(response.contains("name is required"));

        // Rejection performs no mutation
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_rejects_whitespace_name() {
        let (server, store) = test_server().await;

        let response = roundtrip(&server, &post_users(r#"{"name":"   "}"#)).await;
        assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_is_bad_request() {
        let (server, _store) = test_server().await;

        let response = roundtrip(&server, &get("/users/abc")).await;
        assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
        assert!(response.contains("invalid user id"));
    }

    #[tokio::test]
    async fn test_get_negative_id_is_bad_request() {
        // Identifiers are unsigned; a signed value is malformed input
        let (server, _store) = test_server().await;

        let response = roundtrip(&server, &get("/users/-1")).await;
        assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found() {
        let (server, _store) = test_server().await;

        let response = roundtrip(&server, &get("/users/999")).await;
        assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(response.contains("user not found"));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let (server, store) = test_server().await;

        roundtrip(&server, &post_users(r#"{"name":"Alice"}"#)).await;

        let response = roundtrip(&server, &delete("/users/1")).await;
        assert!(response.starts_with("HTTP/1.1 204 No Content\r\n"));
        assert!(store.is_empty().await);

        let response = roundtrip(&server, &get("/users/1")).await;
        assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_bad_request() {
        let (server, store) = test_server().await;

        let response = roundtrip(&server, &delete("/users/999")).await;
        assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
        assert!(response.contains("user not found"));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_delete_non_numeric_id_is_bad_request() {
        let (server, _store) = test_server().await;

        let response = roundtrip(&server, &delete("/users/abc")).await;
        assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
        assert!(response.contains("invalid user id"));
    }

    #[tokio::test]
    async fn test_identifiers_survive_deletion_at_the_surface() {
        let (server, _store) = test_server().await;

        roundtrip(&server, &post_users(r#"{"name":"Alice"}"#)).await;
        roundtrip(&server, &delete("/users/1")).await;
        roundtrip(&server, &post_users(r#"{"name":"Carol"}"#)).await;

        // Carol gets a fresh identifier; the deleted one stays dead
        let response = roundtrip(&server, &get("/users/2")).await;
        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.contains(r#"{"name":"Carol"}"#));

        let response = roundtrip(&server, &get("/users/1")).await;
        assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (server, _store) = test_server().await;

        let response = roundtrip(&server, &get("/nope")).await;
        assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
    }

    #[tokio::test]
    async fn test_unsupported_method_on_users_id() {
        let (server, _store) = test_server().await;

        let raw = b"PUT /users/1 HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let response = roundtrip(&server, raw).await;
        assert!(response.starts_with("HTTP/1.1 405 Method Not Allowed\r\n"));
        assert!(response.contains("Allow: GET, DELETE\r\n"));
    }

    // Direct handler tests, bypassing the wire format

    fn request_with_id(method: Method, raw_id: &str) -> HttpRequest {
        let mut headers = HashMap::new();
        headers.insert("Host".to_string(), "localhost".to_string());
        let mut req = HttpRequest::new(method, format!("/users/{raw_id}"), HttpVersion::Http11, headers);
        req.path_params.insert("id".to_string(), raw_id.to_string());
        req
    }

    #[tokio::test]
    async fn test_get_user_handler_statuses() {
        let store = Arc::new(UserStore::new());
        store.create(User::new("Alice")).await;

        let resp = handlers::get_user(request_with_id(Method::GET, "1"), store.clone()).await.unwrap();
        assert_eq!(resp.status, StatusCode::Ok);
        assert_eq!(resp.body, br#"{"name":"Alice"}"#.to_vec());

        let resp = handlers::get_user(request_with_id(Method::GET, "2"), store.clone()).await.unwrap();
        assert_eq!(resp.status, StatusCode::NotFound);

        let resp = handlers::get_user(request_with_id(Method::GET, "abc"), store).await.unwrap();
        assert_eq!(resp.status, StatusCode::BadRequest);
    }

    #[tokio::test]
    async fn test_delete_user_handler_statuses() {
        let store = Arc::new(UserStore::new());
        store.create(User::new("Alice")).await;

        let resp = handlers::delete_user(request_with_id(Method::DELETE, "1"), store.clone()).await.unwrap();
        assert_eq!(resp.status, StatusCode::NoContent);
        assert!(store.is_empty().await);

        // Gone now, and a repeat delete mutates nothing
        let resp = handlers::delete_user(request_with_id(Method::DELETE, "1"), store.clone()).await.unwrap();
        assert_eq!(resp.status, StatusCode::BadRequest);
        assert!(store.is_empty().await);
    }
}
