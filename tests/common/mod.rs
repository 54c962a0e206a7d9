//! Shared test fixtures
//!
//! - `StubBackend`: an in-process actix-web server speaking the backend's
//!   REST contract on an ephemeral port
//! - `FakeApi`: an in-memory `UrlApi` with call counters

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use actix_web::{App, HttpResponse, HttpServer, web};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;

use linkdeck::client::UrlApi;
use linkdeck::errors::{LinkdeckError, Result};
use linkdeck::structs::{ShortenRequest, ShortenResponse, UrlEntry};

/// Alias the stub hands out first when none is requested
pub const GENERATED_ALIAS: &str = "abc123";

pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(10, 15, 30))
        .unwrap()
}

pub fn entry(id: i64, base_url: &str, alias: &str, original_url: &str) -> UrlEntry {
    UrlEntry {
        id,
        alias: alias.to_string(),
        short_url: format!("{}/{}", base_url, alias),
        original_url: original_url.to_string(),
        created_at: fixed_time(),
    }
}

// =============================================================================
// Stub backend
// =============================================================================

pub struct StubState {
    base_url: String,
    urls: Mutex<Vec<UrlEntry>>,
    next_id: AtomicI64,
    pub list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
}

impl StubState {
    fn generate_alias(&self, urls: &[UrlEntry], id: i64) -> String {
        if urls.iter().any(|u| u.alias == GENERATED_ALIAS) {
            format!("gen{}", id)
        } else {
            GENERATED_ALIAS.to_string()
        }
    }
}

pub struct StubBackend {
    pub base_url: String,
    pub state: web::Data<StubState>,
}

impl StubBackend {
    /// Endpoint root the client should use
    pub fn endpoint(&self) -> String {
        format!("{}/api/v1", self.base_url)
    }

    pub fn seed(&self, alias: &str, original_url: &str) {
        let id = self.state.next_id.fetch_add(1, Ordering::SeqCst);
        self.state
            .urls
            .lock()
            .unwrap()
            .push(entry(id, &self.base_url, alias, original_url));
    }

    pub fn aliases(&self) -> Vec<String> {
        self.state
            .urls
            .lock()
            .unwrap()
            .iter()
            .map(|u| u.alias.clone())
            .collect()
    }
}

fn error_body(status: u16, error: &str, message: &str) -> serde_json::Value {
    json!({
        "timestamp": "2024-05-01T10:15:30",
        "status": status,
        "error": error,
        "message": message,
    })
}

async fn list_urls(state: web::Data<StubState>) -> HttpResponse {
    state.list_calls.fetch_add(1, Ordering::SeqCst);
    let urls = state.urls.lock().unwrap().clone();
    HttpResponse::Ok().json(urls)
}

async fn shorten(state: web::Data<StubState>, body: web::Json<ShortenRequest>) -> HttpResponse {
    state.create_calls.fetch_add(1, Ordering::SeqCst);
    let request = body.into_inner();

    if request.original_url.contains(' ') {
        return HttpResponse::BadRequest().json(error_body(400, "Bad Request", "Invalid URL"));
    }

    let mut urls = state.urls.lock().unwrap();
    let id = state.next_id.fetch_add(1, Ordering::SeqCst);
    let alias = match request.custom_alias {
        Some(alias) if urls.iter().any(|u| u.alias == alias) => {
            return HttpResponse::Conflict().json(error_body(
                409,
                "Conflict",
                &format!("Alias already exists: {}", alias),
            ));
        }
        Some(alias) => alias,
        None => state.generate_alias(&urls, id),
    };

    let created = entry(id, &state.base_url, &alias, &request.original_url);
    urls.push(created.clone());

    HttpResponse::Created().json(json!({
        "id": created.id,
        "alias": created.alias,
        "shortUrl": created.short_url,
        "originalUrl": created.original_url,
        "createdAt": "2024-05-01T10:15:30",
    }))
}

async fn delete_url(state: web::Data<StubState>, path: web::Path<String>) -> HttpResponse {
    state.delete_calls.fetch_add(1, Ordering::SeqCst);
    let alias = path.into_inner();
    let mut urls = state.urls.lock().unwrap();
    match urls.iter().position(|u| u.alias == alias) {
        Some(idx) => {
            urls.remove(idx);
            HttpResponse::NoContent().finish()
        }
        None => HttpResponse::NotFound().json(error_body(
            404,
            "Not Found",
            &format!("URL not found: {}", alias),
        )),
    }
}

async fn broken() -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type("text/plain")
        .body("upstream exploded")
}

async fn garbled() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body("this is not json")
}

/// Start the stub on its own actix system thread.
///
/// The listener is bound before the thread starts, so requests made right
/// after this returns queue until the server accepts them.
pub fn spawn_backend() -> StubBackend {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let base_url = format!("http://127.0.0.1:{}", port);

    let state = web::Data::new(StubState {
        base_url: base_url.clone(),
        urls: Mutex::new(Vec::new()),
        next_id: AtomicI64::new(1),
        list_calls: AtomicUsize::new(0),
        create_calls: AtomicUsize::new(0),
        delete_calls: AtomicUsize::new(0),
    });

    let data = state.clone();
    std::thread::spawn(move || {
        let _ = actix_rt::System::new().block_on(async move {
            HttpServer::new(move || {
                App::new()
                    .app_data(data.clone())
                    .service(
                        web::scope("/api/v1")
                            .route("/urls", web::get().to(list_urls))
                            .route("/shorten", web::post().to(shorten))
                            .route("/{alias}", web::delete().to(delete_url)),
                    )
                    .route("/broken/urls", web::get().to(broken))
                    .route("/garbled/urls", web::get().to(garbled))
            })
            .workers(1)
            .disable_signals()
            .listen(listener)?
            .run()
            .await
        });
    });

    StubBackend { base_url, state }
}

// =============================================================================
// In-memory fake
// =============================================================================

#[derive(Default)]
pub struct FakeApi {
    urls: Mutex<Vec<UrlEntry>>,
    next_id: AtomicI64,
    pub list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub remove_calls: AtomicUsize,
    /// Artificial latency of `list`, in milliseconds
    pub list_delay_ms: AtomicU64,
    list_error: Mutex<Option<LinkdeckError>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list_delay(self, delay: Duration) -> Self {
        self.list_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
        self
    }

    pub fn seed(&self, alias: &str, original_url: &str) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.urls
            .lock()
            .unwrap()
            .push(entry(id, "http://localhost:8080", alias, original_url));
    }

    pub fn fail_list_with(&self, error: Option<LinkdeckError>) {
        *self.list_error.lock().unwrap() = error;
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UrlApi for FakeApi {
    async fn list(&self) -> Result<Vec<UrlEntry>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.list_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        if let Some(error) = self.list_error.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.urls.lock().unwrap().clone())
    }

    async fn create(&self, request: ShortenRequest) -> Result<ShortenResponse> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut urls = self.urls.lock().unwrap();

        let alias = match request.custom_alias {
            Some(alias) if urls.iter().any(|u| u.alias == alias) => {
                return Err(LinkdeckError::api(
                    409,
                    format!("Alias already exists: {}", alias),
                ));
            }
            Some(alias) => alias,
            None if urls.iter().any(|u| u.alias == GENERATED_ALIAS) => {
                format!("gen{}", urls.len())
            }
            None => GENERATED_ALIAS.to_string(),
        };

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created = entry(id, "http://localhost:8080", &alias, &request.original_url);
        urls.push(created.clone());

        Ok(ShortenResponse {
            alias: created.alias,
            short_url: created.short_url,
            original_url: created.original_url,
        })
    }

    async fn remove(&self, alias: &str) -> Result<()> {
        self.remove_calls.fetch_add(1, Ordering::SeqCst);
        let mut urls = self.urls.lock().unwrap();
        match urls.iter().position(|u| u.alias == alias) {
            Some(idx) => {
                urls.remove(idx);
                Ok(())
            }
            None => Err(LinkdeckError::api(404, format!("URL not found: {}", alias))),
        }
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
