//! In-process double of the product API for wire-level adapter tests.
//!
//! The double records each request's raw query string and serves scripted
//! responses, so tests can pin exactly what the adapter put on the wire.

use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};

/// One canned response served for a products request.
pub struct CannedResponse {
    status: u16,
    body: String,
}

impl CannedResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Records request query strings and serves scripted responses in order.
#[derive(Default)]
pub struct RecordingProductApi {
    responses: Mutex<VecDeque<CannedResponse>>,
    queries: Mutex<Vec<String>>,
}

impl RecordingProductApi {
    pub fn with_responses(responses: Vec<CannedResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn recorded_queries(&self) -> Vec<String> {
        self.queries.lock().expect("queries mutex").clone()
    }

    fn next_response(&self) -> CannedResponse {
        self.responses
            .lock()
            .expect("responses mutex")
            .pop_front()
            .unwrap_or_else(|| CannedResponse::ok("[]"))
    }
}

async fn products(request: HttpRequest, api: web::Data<Arc<RecordingProductApi>>) -> HttpResponse {
    api.queries
        .lock()
        .expect("queries mutex")
        .push(request.query_string().to_owned());

    let response = api.next_response();
    HttpResponse::build(StatusCode::from_u16(response.status).expect("valid scripted status"))
        .content_type("application/json")
        .body(response.body)
}

/// Bind an ephemeral port and serve the recording double from it.
pub async fn spawn_product_api(
    api: Arc<RecordingProductApi>,
) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;

    let data = web::Data::new(api);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/api/products", web::get().to(products))
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}
