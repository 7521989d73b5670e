use std::collections::HashMap;
use std::io::Cursor;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::ErrorKind;
use crate::{LegisError, LegisResult};

use super::FilePath;
use super::http::{HttpRequest, HttpResponse, HttpServerConfig, HttpServerHandle, HttpService};
use super::traits::{Pal, ReadSeek};

/// In-memory PAL implementation for testing.
///
/// File contents live in a HashMap; "started" HTTP servers are registered
/// in-process and driven through `simulate_request` instead of real sockets.
/// This keeps unit tests deterministic and side-effect free.
///
/// # Examples
///
/// ```
/// use legis_base::{FilePath, MockPal, Pal};
///
/// let mock = MockPal::new();
/// mock.add_file(FilePath::from("legis.toml"), b"title = \"x\"".to_vec());
/// let content = mock.read_file_to_string(&FilePath::from("legis.toml")).unwrap();
/// assert_eq!(content, "title = \"x\"");
/// ```
#[derive(Debug, Clone)]
pub struct MockPal {
    files: Arc<Mutex<HashMap<FilePath, Vec<u8>>>>,
    http_servers: Arc<Mutex<HashMap<u16, Box<dyn HttpService>>>>,
    next_port: Arc<AtomicU16>,
}

impl MockPal {
    /// Create a new empty MockPal.
    pub fn new() -> Self {
        Self {
            files: Arc::new(Mutex::new(HashMap::new())),
            http_servers: Arc::new(Mutex::new(HashMap::new())),
            next_port: Arc::new(AtomicU16::new(10000)),
        }
    }

    /// Add a file to the mock storage.
    pub fn add_file(&self, path: FilePath, content: Vec<u8>) {
        self.files.lock().unwrap().insert(path, content);
    }

    /// Simulate an HTTP request to a registered server.
    ///
    /// Looks up the service registered for `port` and invokes it directly,
    /// without real network traffic.
    pub fn simulate_request(
        &self,
        port: u16,
        request: HttpRequest,
    ) -> LegisResult<HttpResponse> {
        let servers = self.http_servers.lock().unwrap();
        let service = servers.get(&port).ok_or_else(|| {
            crate::err!("No HTTP server registered on port {}", port)
        })?;
        service.handle_request(request)
    }

    /// Get the number of registered HTTP servers.
    pub fn http_server_count(&self) -> usize {
        self.http_servers.lock().unwrap().len()
    }
}

impl Default for MockPal {
    fn default() -> Self {
        Self::new()
    }
}

impl Pal for MockPal {
    fn file_exists(&self, path: &FilePath) -> LegisResult<bool> {
        Ok(self.files.lock().unwrap().contains_key(path))
    }

    fn read_file(&self, path: &FilePath) -> LegisResult<Box<dyn ReadSeek + 'static>> {
        let files = self.files.lock().unwrap();
        let content = files
            .get(path)
            .ok_or_else(|| {
                Box::new(LegisError::new(ErrorKind::FileError {
                    path: path.as_path().to_path_buf(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("File not found: {}", path),
                    ),
                }))
            })?
            .clone();
        Ok(Box::new(Cursor::new(content)))
    }

    fn start_http_server(
        &self,
        service: Box<dyn HttpService>,
        config: HttpServerConfig,
    ) -> LegisResult<HttpServerHandle> {
        let port = config
            .port
            .unwrap_or_else(|| self.next_port.fetch_add(1, Ordering::SeqCst));
        self.http_servers.lock().unwrap().insert(port, service);
        Ok(HttpServerHandle::new(port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pal::http::HttpMethod;

    #[test]
    fn test_file_exists() {
        let mock = MockPal::new();
        mock.add_file(FilePath::from("legis.toml"), b"title = \"x\"".to_vec());

        assert!(mock.file_exists(&FilePath::from("legis.toml")).unwrap());
        assert!(!mock.file_exists(&FilePath::from("other.toml")).unwrap());
    }

    #[test]
    fn test_read_file_to_string() {
        let mock = MockPal::new();
        mock.add_file(FilePath::from("legis.toml"), b"port = 8080".to_vec());

        let content = mock.read_file_to_string(&FilePath::from("legis.toml")).unwrap();
        assert_eq!(content, "port = 8080");
    }

    #[test]
    fn test_read_file_not_found() {
        let mock = MockPal::new();
        let result = mock.read_file(&FilePath::from("nonexistent.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_file_invalid_utf8() {
        let mock = MockPal::new();
        mock.add_file(FilePath::from("binary.dat"), vec![0xff, 0xfe, 0x80]);

        let result = mock.read_file_to_string(&FilePath::from("binary.dat"));
        assert!(result.is_err());
    }

    #[derive(Debug)]
    struct TestService;
    impl HttpService for TestService {
        fn handle_request(&self, request: HttpRequest) -> LegisResult<HttpResponse> {
            match request.path() {
                "/api/test" => Ok(HttpResponse::json(r#"{"status":"ok"}"#)),
                _ => Ok(HttpResponse::not_found()),
            }
        }
    }

    #[test]
    fn test_start_http_server_auto_port() {
        let mock = MockPal::new();
        let config = HttpServerConfig::new("127.0.0.1");

        let handle = mock
            .start_http_server(Box::new(TestService), config)
            .unwrap();
        assert!(handle.port() >= 10000);
        assert_eq!(mock.http_server_count(), 1);
    }

    #[test]
    fn test_start_http_server_with_specific_port() {
        let mock = MockPal::new();
        let config = HttpServerConfig::new("127.0.0.1").with_port(8080);

        let handle = mock
            .start_http_server(Box::new(TestService), config)
            .unwrap();
        assert_eq!(handle.port(), 8080);
    }

    #[test]
    fn test_simulate_request_success() {
        let mock = MockPal::new();
        let config = HttpServerConfig::new("127.0.0.1").with_port(8080);
        mock.start_http_server(Box::new(TestService), config).unwrap();

        let request = HttpRequest::new(HttpMethod::Get, "/api/test");
        let response = mock.simulate_request(8080, request).unwrap();

        assert_eq!(response.status().as_u16(), 200);
        assert!(response.body().as_string().unwrap().contains("ok"));
    }

    #[test]
    fn test_simulate_request_unknown_path() {
        let mock = MockPal::new();
        let config = HttpServerConfig::new("127.0.0.1").with_port(8080);
        mock.start_http_server(Box::new(TestService), config).unwrap();

        let request = HttpRequest::new(HttpMethod::Get, "/api/unknown");
        let response = mock.simulate_request(8080, request).unwrap();

        assert_eq!(response.status().as_u16(), 404);
    }

    #[test]
    fn test_simulate_request_invalid_port() {
        let mock = MockPal::new();
        let request = HttpRequest::new(HttpMethod::Get, "/api/test");

        let result = mock.simulate_request(9999, request);
        assert!(result.is_err());
    }
}
