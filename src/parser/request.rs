//! HTTP request parsing and representation.

use std::collections::HashMap;
use std::str::FromStr;
use serde::de::DeserializeOwned;

use crate::parser::error::Error;
use crate::parser::method::Method;
use crate::parser::version::HttpVersion;

/// Represents an HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path, including any query string
    pub path: String,
    /// The HTTP version
    pub version: HttpVersion,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
    /// The request body
    pub body: Vec<u8>,
    /// Query parameters parsed from the path
    pub query_params: HashMap<String, String>,
    /// Parameters captured from `{name}` segments of the matched route
    /// pattern. Empty until the router has matched the request.
    pub path_params: HashMap<String, String>,
}

impl HttpRequest {
    /// Create a new HTTP request with an empty body.
    pub fn new(method: Method, path: String, version: HttpVersion, headers: HashMap<String, String>) -> Self {
        // Parse query parameters from the path
        let query_params: HashMap<String, String> = path
            .split_once('?')
            .map(|(_, query)| query
                .split('&')
                .filter(|s| !s.is_empty())
                .map(|pair| {
                    if let Some((k, v)) = pair.split_once('=') {
                        (k.to_string(), v.to_string())
                    } else {
                        (pair.to_string(), String::new())
                    }
                })
                .collect())
            .unwrap_or_default();

        Self {
            method,
            path,
            version,
            headers,
            body: Vec::new(),
            query_params,
            path_params: HashMap::new(),
        }
    }

    /// Create a new HTTP request with the given body.
    pub fn with_body(method: Method, path: String, version: HttpVersion, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        let mut request = Self::new(method, path, version, headers);
        request.body = body;
        request
    }

    /// Get a header value. Header names are compared case-insensitively.
    pub fn get_header(&self, name: &str) -> Option<&String> {
        self.headers.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                Some(v)
            } else {
                None
            }
        })
    }

    /// Check if a header exists.
    pub fn has_header(&self, name: &str) -> bool {
        self.get_header(name).is_some()
    }

    /// Parse the request body as JSON.
    ///
    /// Requires a `Content-Type: application/json` header.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        if !self.is_json() {
            return Err(Error::MissingHeader("Content-Type: application/json".to_string()));
        }

        let json = serde_json::from_slice(&self.body)?;
        Ok(json)
    }

    /// Check if the request declares a JSON body.
    pub fn is_json(&self) -> bool {
        if let Some(content_type) = self.get_header("Content-Type") {
            content_type.starts_with("application/json")
        } else {
            false
        }
    }

    /// Get a query parameter value.
    pub fn get_query_param(&self, name: &str) -> Option<&String> {
        self.query_params.get(name)
    }

    /// Check if a query parameter exists.
    pub fn has_query_param(&self, name: &str) -> bool {
        self.query_params.contains_key(name)
    }

    /// Get a path parameter captured by the matched route pattern.
    pub fn get_path_param(&self, name: &str) -> Option<&String> {
        self.path_params.get(name)
    }
}

/// Split a raw request into its head (request line + headers) and body at
/// the first blank line. The split happens at the byte level so that
/// non-UTF-8 bodies survive parsing. Both CRLF and bare LF separators are
/// recognized, whichever comes first.
fn split_head_body(input: &[u8]) -> (&[u8], &[u8]) {
    let crlf = input.windows(4).position(|w| w == b"\r\n\r\n");
    let lf = input.windows(2).position(|w| w == b"\n\n");

    match (crlf, lf) {
        (Some(c), Some(l)) if l < c => (&input[..l], &input[l + 2..]),
        (Some(c), _) => (&input[..c], &input[c + 4..]),
        (None, Some(l)) => (&input[..l], &input[l + 2..]),
        (None, None) => (input, &[]),
    }
}

/// Parse an HTTP request from a byte slice.
///
/// The head (request line and headers) must be valid UTF-8; the body is
/// kept as raw bytes. When a well-formed `Content-Length` header is present
/// the body is truncated to the declared length, so trailing bytes from a
/// pipelined read do not leak into it.
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, Error> {
    let (head, body) = split_head_body(input);

    // The head is line-oriented text; reject anything that is not UTF-8
    let head_str = match std::str::from_utf8(head) {
        Ok(s) => s,
        Err(_) => return Err(Error::InvalidEncoding),
    };

    let mut lines = head_str.lines();

    // Parse the request line
    let request_line = match lines.next() {
        Some(line) => line,
        None => return Err(Error::EmptyRequest),
    };

    // Split the request line into method, path, and version
    let parts: Vec<&str> = request_line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(Error::MalformedRequestLine(request_line.to_string()));
    }

    let method = Method::from_str(parts[0])?;
    let path = parts[1].to_string();
    let version = HttpVersion::from_str(parts[2])?;

    // Parse the headers
    let mut headers = HashMap::new();
    for line in lines {
        if line.is_empty() {
            break;
        }

        let parts: Vec<&str> = line.splitn(2, ':').collect();
        if parts.len() != 2 {
            return Err(Error::InvalidHeaderFormat);
        }

        let name = parts[0].trim().to_string();
        let value = parts[1].trim().to_string();
        headers.insert(name, value);
    }

    // HTTP/1.1 requires a Host header
    if version == HttpVersion::Http11 && !headers.iter().any(|(k, _)| k.eq_ignore_ascii_case("Host")) {
        return Err(Error::MissingHeader("Host".to_string()));
    }

    // Size the body by Content-Length when the header is usable; a missing
    // or malformed value leaves the body as whatever followed the head
    let declared_len = headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("Content-Length"))
        .and_then(|(_, value)| value.parse::<usize>().ok());

    let body = match declared_len {
        Some(len) if len < body.len() => body[..len].to_vec(),
        _ => body.to_vec(),
    };

    Ok(HttpRequest::with_body(method, path, version, headers, body))
}
