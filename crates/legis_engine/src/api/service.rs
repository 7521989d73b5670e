use serde::Serialize;
use tracing::{debug, warn};

use legis_base::LegisResult;
use legis_base::pal::http::{
    HttpMethod, HttpRequest, HttpResponse, HttpService, HttpStatusCode,
};

use crate::bill::BillId;
use crate::store::StoreHandle;

/// Wire shape of error responses: `{"message": "..."}`.
#[derive(Serialize)]
struct ErrorMessage<'a> {
    message: &'a str,
}

/// HTTP service exposing the read-only bill retrieval API.
///
/// Routes handled:
/// - `GET /api/bills` - all bills as a JSON array (trailing slash accepted)
/// - `GET /api/bills/{id}` - a single bill by identifier
///
/// Expected failures come back as `Ok` responses carrying their status
/// code: a missing bill is 404 `{"message": "Bill not found"}`, an
/// unknown path is 404 `{"message": "Not found"}`, a non-GET method is
/// 405. A store fault maps to 500 with a fixed per-endpoint message so
/// no internal detail reaches the client. `Err` is reserved for faults
/// the service itself cannot express as a response (serialization); the
/// PAL turns those into a generic 500.
#[derive(Debug, Clone)]
pub struct ApiService {
    store: StoreHandle,
}

impl ApiService {
    /// Create a new ApiService over the given store.
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Serialize data to JSON and wrap in an HTTP 200 response.
    fn json_response<T: Serialize>(data: &T) -> LegisResult<HttpResponse> {
        let json = serde_json::to_string(data)
            .map_err(|error| legis_base::err!("JSON serialization error: {error}"))?;
        Ok(HttpResponse::json(json))
    }

    /// Build an error response with the given status and fixed message.
    fn error_response(status: HttpStatusCode, message: &str) -> LegisResult<HttpResponse> {
        let json = serde_json::to_string(&ErrorMessage { message })
            .map_err(|error| legis_base::err!("JSON serialization error: {error}"))?;
        Ok(HttpResponse::new(status)
            .with_content_type("application/json")
            .with_body(json))
    }

    /// Handle `GET /api/bills`.
    fn handle_list_bills(&self) -> LegisResult<HttpResponse> {
        match self.store.list() {
            Ok(bills) => Self::json_response(&bills),
            Err(error) => {
                warn!(%error, "listing bills failed");
                Self::error_response(
                    HttpStatusCode::InternalServerError,
                    "Failed to fetch bills",
                )
            }
        }
    }

    /// Handle `GET /api/bills/{id}`.
    fn handle_get_bill(&self, id: &str) -> LegisResult<HttpResponse> {
        let bill_id = BillId::from_string(id);
        match self.store.get(&bill_id) {
            Ok(Some(bill)) => Self::json_response(&bill),
            Ok(None) => {
                debug!(id, "bill not found");
                Self::error_response(HttpStatusCode::NotFound, "Bill not found")
            }
            Err(error) => {
                warn!(%error, id, "fetching bill failed");
                Self::error_response(HttpStatusCode::InternalServerError, "Failed to fetch bill")
            }
        }
    }
}

impl HttpService for ApiService {
    fn handle_request(&self, request: HttpRequest) -> LegisResult<HttpResponse> {
        if request.method() != &HttpMethod::Get {
            return Self::error_response(
                HttpStatusCode::MethodNotAllowed,
                "Method not allowed",
            );
        }

        // Query parameters carry no meaning for these endpoints
        let path = request.path().split('?').next().unwrap_or(request.path());

        // Non-strict routing: a trailing slash still addresses the collection
        if path == "/api/bills" || path == "/api/bills/" {
            self.handle_list_bills()
        } else if let Some(id) = path.strip_prefix("/api/bills/") {
            self.handle_get_bill(id)
        } else {
            debug!(path, "unknown path");
            Self::error_response(HttpStatusCode::NotFound, "Not found")
        }
    }
}
