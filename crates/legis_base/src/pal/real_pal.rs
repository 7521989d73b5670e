use std::fs;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::time::Duration;

use tracing::{debug, error, info, instrument, warn};

use crate::{LegisError, LegisResult, error::ErrorKind};

use super::FilePath;
use super::http::{
    HttpBody, HttpMethod, HttpRequest, HttpResponse, HttpServerConfig, HttpServerHandle,
    HttpService,
};
use super::traits::{Pal, ReadSeek};

/// Concrete PAL implementation backed by the real platform.
///
/// File paths are resolved relative to a configured base directory; the
/// HTTP server runs on a background thread using tiny_http.
#[derive(Debug)]
pub struct RealPal {
    base_dir: PathBuf,
}

impl RealPal {
    /// Create a new RealPal with the given base directory.
    ///
    /// # Arguments
    /// * `base_dir` - All paths will be resolved relative to this directory
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Resolve a FilePath to an absolute filesystem path.
    fn resolve_path(&self, path: &FilePath) -> PathBuf {
        self.base_dir.join(path.as_path())
    }
}

/// Convert a tiny_http request into a PAL HttpRequest, draining the body.
/// Returns `None` for methods outside the supported set.
fn convert_request(request: &mut tiny_http::Request) -> Option<HttpRequest> {
    let method = HttpMethod::parse(&request.method().to_string())?;
    let mut converted = HttpRequest::new(method, request.url());
    for header in request.headers() {
        converted = converted.with_header(header.field.as_str().as_str(), header.value.as_str());
    }
    let mut body = Vec::new();
    if let Err(e) = std::io::Read::read_to_end(request.as_reader(), &mut body) {
        debug!(error = %e, "failed to read request body");
    }
    if !body.is_empty() {
        converted = converted.with_body(HttpBody::from_bytes(body));
    }
    Some(converted)
}

/// HTTP 405 body for methods the service surface does not support.
fn method_not_allowed_response() -> HttpResponse {
    HttpResponse::method_not_allowed()
        .with_content_type("application/json")
        .with_body(r#"{"message":"Method not allowed"}"#)
}

/// Convert a PAL HttpResponse into a tiny_http response.
fn convert_response(
    response: HttpResponse,
    server_name: &str,
) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let status = response.status().as_u16();
    let headers = response.headers().all().clone();
    let mut converted =
        tiny_http::Response::from_data(response.into_body().into_bytes()).with_status_code(status);
    for (key, value) in &headers {
        if let Ok(header) = tiny_http::Header::from_bytes(key.as_bytes(), value.as_bytes()) {
            converted = converted.with_header(header);
        }
    }
    if let Ok(header) = tiny_http::Header::from_bytes(&b"Server"[..], server_name.as_bytes()) {
        converted = converted.with_header(header);
    }
    converted
}

/// Generic HTTP 500 body used when a service returns an unexpected fault.
/// No internal detail is exposed to the caller.
fn internal_failure_response() -> HttpResponse {
    HttpResponse::internal_error()
        .with_content_type("application/json")
        .with_body(r#"{"message":"Internal server error"}"#)
}

impl Pal for RealPal {
    #[instrument(skip(self), fields(path = %path))]
    fn file_exists(&self, path: &FilePath) -> LegisResult<bool> {
        let resolved = self.resolve_path(path);
        let exists = resolved.exists();
        debug!(exists, resolved = %resolved.display(), "checked file existence");
        Ok(exists)
    }

    #[instrument(skip(self), fields(path = %path))]
    fn read_file(&self, path: &FilePath) -> LegisResult<Box<dyn ReadSeek + 'static>> {
        let resolved = self.resolve_path(path);
        debug!(resolved = %resolved.display(), "opening file for reading");
        let file = fs::File::open(&resolved).map_err(|e| {
            debug!(error = %e, "failed to open file");
            Box::new(LegisError::new(ErrorKind::FileError {
                path: resolved,
                source: e,
            }))
        })?;
        Ok(Box::new(file))
    }

    #[instrument(skip(self, service))]
    fn start_http_server(
        &self,
        service: Box<dyn HttpService>,
        config: HttpServerConfig,
    ) -> LegisResult<HttpServerHandle> {
        let address = config.address();
        let server = tiny_http::Server::http(address.as_str()).map_err(|e| {
            crate::err!("Failed to bind HTTP server on {}: {}", address, e)
        })?;
        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .unwrap_or(0);
        info!(port, "HTTP server listening");

        let handle = HttpServerHandle::new(port);
        let shutdown = handle.shutdown_flag().clone();
        let server_name = config.server_name.clone();

        std::thread::Builder::new()
            .name("legis-http".to_string())
            .spawn(move || {
                loop {
                    if shutdown.load(Ordering::SeqCst) {
                        debug!("HTTP server shutting down");
                        break;
                    }
                    let mut request = match server.recv_timeout(Duration::from_millis(200)) {
                        Ok(Some(request)) => request,
                        Ok(None) => continue,
                        Err(e) => {
                            warn!(error = %e, "HTTP server receive failed, stopping");
                            break;
                        }
                    };

                    let Some(converted) = convert_request(&mut request) else {
                        warn!(method = %request.method(), "unsupported HTTP method");
                        if let Err(e) =
                            request.respond(convert_response(method_not_allowed_response(), &server_name))
                        {
                            debug!(error = %e, "failed to send response");
                        }
                        continue;
                    };
                    debug!(method = %converted.method(), path = converted.path(), "handling request");
                    let response = match service.handle_request(converted) {
                        Ok(response) => response,
                        Err(e) => {
                            error!(error = %e, "service failed to handle request");
                            internal_failure_response()
                        }
                    };
                    if let Err(e) = request.respond(convert_response(response, &server_name)) {
                        debug!(error = %e, "failed to send response");
                    }
                }
            })
            .map_err(|e| crate::err!("Failed to spawn HTTP server thread: {}", e))?;

        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use std::fs;
    use std::io::{Read, Write};
    use std::net::TcpStream;
    use tempfile::TempDir;

    fn setup_test_dir() -> (TempDir, RealPal) {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let pal = RealPal::new(temp_dir.path().to_path_buf());
        (temp_dir, pal)
    }

    #[test]
    fn test_file_exists_true() {
        let (temp_dir, pal) = setup_test_dir();
        fs::write(temp_dir.path().join("legis.toml"), "title = \"x\"").unwrap();

        assert!(pal.file_exists(&FilePath::from("legis.toml")).unwrap());
    }

    #[test]
    fn test_file_exists_false() {
        let (_temp_dir, pal) = setup_test_dir();

        assert!(!pal.file_exists(&FilePath::from("nonexistent.toml")).unwrap());
    }

    #[test]
    fn test_read_file_to_string() {
        let (temp_dir, pal) = setup_test_dir();
        let content = "title = \"Legislative Proposals\"";
        fs::write(temp_dir.path().join("legis.toml"), content).unwrap();

        let result = pal.read_file_to_string(&FilePath::from("legis.toml")).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_file_not_found() {
        let (_temp_dir, pal) = setup_test_dir();

        let result = pal.read_file(&FilePath::from("nonexistent.toml"));
        assert!(result.is_err());
    }

    #[derive(Debug)]
    struct PingService;
    impl HttpService for PingService {
        fn handle_request(&self, request: HttpRequest) -> LegisResult<HttpResponse> {
            match request.path() {
                "/ping" => Ok(HttpResponse::json(r#"{"status":"ok"}"#)),
                "/fault" => Err(crate::err!("store unreachable")),
                _ => Ok(HttpResponse::not_found()),
            }
        }
    }

    fn raw_request(port: u16, method: &str, path: &str) -> String {
        let mut stream = TcpStream::connect(("127.0.0.1", port)).unwrap();
        stream
            .write_all(
                format!("{} {} HTTP/1.0\r\nHost: localhost\r\n\r\n", method, path).as_bytes(),
            )
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        response
    }

    fn raw_get(port: u16, path: &str) -> String {
        raw_request(port, "GET", path)
    }

    fn body_of(response: &str) -> &str {
        response.split("\r\n\r\n").nth(1).unwrap_or("")
    }

    #[test]
    fn test_http_server_serves_requests() {
        let (_temp_dir, pal) = setup_test_dir();
        let config = HttpServerConfig::new("127.0.0.1");

        let handle = pal
            .start_http_server(Box::new(PingService), config)
            .unwrap();
        assert!(handle.port() > 0);

        let response = raw_get(handle.port(), "/ping");
        assert!(response.contains("200"));
        assert!(response.contains(r#"{"status":"ok"}"#));

        handle.shutdown();
    }

    #[test]
    fn test_http_server_maps_service_fault_to_500() {
        let (_temp_dir, pal) = setup_test_dir();
        let config = HttpServerConfig::new("127.0.0.1");

        let handle = pal
            .start_http_server(Box::new(PingService), config)
            .unwrap();

        let response = raw_get(handle.port(), "/fault");
        assert!(response.contains("500"));
        expect![[r#"{"message":"Internal server error"}"#]].assert_eq(body_of(&response));
        // Internal detail must not leak
        assert!(!response.contains("store unreachable"));

        handle.shutdown();
    }

    #[test]
    fn test_http_server_rejects_nonstandard_method() {
        let (_temp_dir, pal) = setup_test_dir();
        let config = HttpServerConfig::new("127.0.0.1");

        let handle = pal
            .start_http_server(Box::new(PingService), config)
            .unwrap();

        // An unsupported method must not be served as a GET
        let response = raw_request(handle.port(), "TRACE", "/ping");
        assert!(response.contains("405"));
        expect![[r#"{"message":"Method not allowed"}"#]].assert_eq(body_of(&response));
        assert!(!response.contains(r#"{"status":"ok"}"#));

        handle.shutdown();
    }
}
