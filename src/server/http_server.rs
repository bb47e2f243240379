//! HTTP server implementation.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::{RwLock, mpsc};
use tokio::task::JoinSet;
use tokio::signal;
use log::{info, warn, error};
use std::net::SocketAddr;

use crate::parser::{HttpRequest, Method, parse_request};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::handler::Route;
use crate::server::response::{HttpResponse, StatusCode};

/// An HTTP server.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    /// The routes.
    pub routes: Arc<RwLock<Vec<Route>>>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            routes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Add a route to the server.
    ///
    /// `pattern` may contain `{name}` segments that capture the matching
    /// request segment as a path parameter, e.g. `/users/{id}`.
    pub async fn add_route<F, Fut>(&self, pattern: impl Into<String>, methods: Vec<Method>, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        let pattern = pattern.into();
        let handler = Arc::new(move |req: HttpRequest| -> Pin<Box<dyn Future<Output = Result<HttpResponse, Error>> + Send>> {
            Box::pin(handler(req))
        });

        let route = Route {
            pattern,
            methods,
            handler,
        };

        self.routes.write().await.push(route);
    }

    /// Display the server banner and registered endpoints.
    async fn display_server_info(&self) -> Result<(), Error> {
        let banner = include_str!("../banner.txt");
        info!("\n{banner}");

        let routes = self.routes.read().await;
        info!("Registered endpoints:");
        for route in routes.iter() {
            let methods = route.methods.iter()
                .map(|m| format!("{m}"))
                .collect::<Vec<String>>()
                .join(", ");
            info!("  {methods} {}", route.pattern);
        }

        Ok(())
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = self.config.addr);
        Ok(listener)
    }

    /// Set up a Ctrl+C handler for graceful shutdown.
    fn setup_ctrl_c_handler(shutdown_tx: Arc<mpsc::Sender<()>>, tasks: &mut JoinSet<()>) {
        tasks.spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C, initiating graceful shutdown");
                    let _ = shutdown_tx.send(()).await;
                }
                Err(e) => {
                    error!("Error setting up Ctrl+C handler: {e}");
                }
            }
        });
    }

    /// Handle a new connection.
    async fn handle_new_connection(
        mut socket: tokio::net::TcpStream,
        addr: SocketAddr,
        semaphore: Arc<tokio::sync::Semaphore>,
        routes: Arc<RwLock<Vec<Route>>>,
        read_buffer_size: usize,
        tasks: &mut JoinSet<()>,
    ) {
        // Try to acquire a permit from the semaphore
        let permit = match semaphore.clone().try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => {
                warn!("Connection limit reached, rejecting connection from {addr}");
                let response = HttpResponse::new(StatusCode::ServiceUnavailable)
                    .with_content_type("text/plain")
                    .with_body_string("Server is at capacity, please try again later");
                let _ = socket.write_all(&response.to_bytes()).await;
                return;
            }
        };

        let routes = routes.clone();

        tasks.spawn(async move {
            // The permit is dropped when the task completes, releasing the semaphore slot
            let _permit = permit;

            // Request failures are terminal for this connection only; the
            // server keeps serving
            if let Err(e) = Self::handle_connection(&mut socket, routes, read_buffer_size).await {
                error!("Error handling connection from {addr}: {e}");
            }
        });
    }

    /// Handle connection errors. Returns true when the accept loop should stop.
    async fn handle_connection_error(e: std::io::Error) -> bool {
        error!("Error accepting connection: {e}");

        if e.kind() == std::io::ErrorKind::BrokenPipe {
            error!("Critical error accepting connection, shutting down");
            return true;
        }

        // For other errors, wait a bit before retrying
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
        false
    }

    /// Perform graceful shutdown.
    async fn perform_shutdown(tasks: &mut JoinSet<()>) {
        info!("Waiting for {len} active connections to complete...", len = tasks.len());
        let shutdown_timeout = tokio::time::Duration::from_secs(30);
        let _ = tokio::time::timeout(shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                if let Err(e) = res {
                    error!("Task failed during shutdown: {e}");
                }
            }
        }).await;

        info!("Server shutdown complete");
    }

    /// Start the server and listen for incoming connections.
    pub async fn start(&self) -> Result<(), Error> {
        self.display_server_info().await?;

        let listener = self.setup_listener().await?;

        // Limit concurrent connections
        let semaphore = Arc::new(tokio::sync::Semaphore::new(self.config.max_connections));

        // Channel for shutdown signaling
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let shutdown_tx = Arc::new(shutdown_tx);

        // Track all spawned tasks
        let mut tasks = JoinSet::new();

        Self::setup_ctrl_c_handler(shutdown_tx.clone(), &mut tasks);

        loop {
            tokio::select! {
                // Check for shutdown signal
                _ = shutdown_rx.recv() => {
                    info!("Shutting down server...");
                    break;
                }

                // Accept new connections
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            Self::handle_new_connection(
                                socket,
                                addr,
                                semaphore.clone(),
                                self.routes.clone(),
                                self.config.read_buffer_size,
                                &mut tasks
                            ).await;
                        },
                        Err(e) => {
                            if Self::handle_connection_error(e).await {
                                break;
                            }
                        }
                    }
                }
            }
        }

        Self::perform_shutdown(&mut tasks).await;

        Ok(())
    }

    /// Handle a single connection: read, parse, dispatch, respond.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        routes: Arc<RwLock<Vec<Route>>>,
        read_buffer_size: usize,
    ) -> Result<(), Error> {
        let mut buf = vec![0; read_buffer_size];

        let n = socket.read(&mut buf).await?;
        if n == 0 {
            return Ok(()); // Connection closed
        }

        // Parse the HTTP request
        let mut request = match parse_request(&buf[..n]) {
            Ok(req) => req,
            Err(e) => {
                let response = HttpResponse::new(StatusCode::BadRequest)
                    .with_content_type("text/plain")
                    .with_body_string(format!("Error parsing request: {e}"));
                socket.write_all(&response.to_bytes()).await?;
                return Err(Error::ParseError(e));
            }
        };

        // Collect routes whose pattern matches the path, with their captures
        let routes_guard = routes.read().await;
        let matching: Vec<(&Route, _)> = routes_guard
            .iter()
            .filter_map(|route| route.match_path(&request.path).map(|params| (route, params)))
            .collect();

        if matching.is_empty() {
            let response = HttpResponse::new(StatusCode::NotFound)
                .with_content_type("text/plain")
                .with_body_string(format!("Not found: {path}", path = request.path));
            socket.write_all(&response.to_bytes()).await?;
            return Err(Error::NotFound(request.path));
        }

        // Of those, find one that also matches the method
        let selected = matching
            .iter()
            .find(|(route, _)| route.methods.contains(&request.method));

        match selected {
            Some((route, params)) => {
                request.path_params = params.clone();

                let response = match (route.handler)(request).await {
                    Ok(resp) => resp,
                    Err(e) => {
                        let response = HttpResponse::new(StatusCode::InternalServerError)
                            .with_content_type("text/plain")
                            .with_body_string(format!("Internal server error: {e}"));
                        socket.write_all(&response.to_bytes()).await?;
                        return Err(e);
                    }
                };

                socket.write_all(&response.to_bytes()).await?;
            }
            None => {
                // Method not allowed
                let allowed_methods: Vec<String> = matching
                    .iter()
                    .flat_map(|(route, _)| route.methods.iter().map(|m| m.to_string()))
                    .collect();

                let response = HttpResponse::new(StatusCode::MethodNotAllowed)
                    .with_header("Allow", allowed_methods.join(", "))
                    .with_content_type("text/plain")
                    .with_body_string(format!(
                        "Method {method} not allowed for path: {path}. Allowed methods: {allowed}",
                        method = request.method,
                        path = request.path,
                        allowed = allowed_methods.join(", ")
                    ));

                socket.write_all(&response.to_bytes()).await?;
                return Err(Error::MethodNotAllowed(request.method, request.path));
            }
        }

        Ok(())
    }
}
