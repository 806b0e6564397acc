use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
struct AppState {
    site: Arc<SiteConfig>,
}

#[derive(Clone, Debug)]
struct SiteConfig {
    /// Directory holding `index.html`, `detail.html` and the wasm `pkg/`.
    web_root: PathBuf,
    /// CSV served at `/data.csv`.
    data_path: PathBuf,
}

impl SiteConfig {
    fn from_env() -> Self {
        let web_root = env::var("VIEWER_WEB_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("crates/apps/viewer_web/www"));
        let data_path = env::var("VIEWER_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| web_root.join("data.csv"));
        Self {
            web_root,
            data_path,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let addr: SocketAddr = env::var("VIEWER_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()
        .expect("invalid VIEWER_ADDR");
    let site = SiteConfig::from_env();

    // The pages surface load errors themselves, so a bad dataset is not fatal here.
    match formats::load_dataset(&site.data_path) {
        Ok(ds) => info!(
            "dataset {} loaded: {} rows, {} columns",
            site.data_path.display(),
            ds.len(),
            ds.columns().len()
        ),
        Err(err) => warn!("dataset {} unusable: {err}", site.data_path.display()),
    }
    if tokio::fs::metadata(site.web_root.join("index.html")).await.is_err() {
        warn!("web root {} has no index.html", site.web_root.display());
    }

    let state = AppState {
        site: Arc::new(site),
    };
    let app = router(state);

    info!("volcano viewer listening on http://{addr}");
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("bind {addr} failed: {err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = axum::serve(listener, app).await {
        error!("server stopped: {err}");
    }
}

fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::OPTIONS]);

    let pages = ServeDir::new(&state.site.web_root).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/data.csv", get(get_data))
        .fallback_service(pages)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> Response {
    (StatusCode::OK, "ok").into_response()
}

async fn get_data(State(state): State<AppState>) -> Response {
    serve_file(&state.site.data_path, "text/csv; charset=utf-8").await
}

async fn serve_file(path: &Path, content_type: &str) -> Response {
    match tokio::fs::read(path).await {
        Ok(data) => {
            let mut headers = HeaderMap::new();
            headers.insert(
                http::header::CONTENT_TYPE,
                HeaderValue::from_str(content_type)
                    .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream")),
            );
            (StatusCode::OK, headers, Body::from(data)).into_response()
        }
        Err(err) => {
            warn!("file read failed: {path:?} -> {err}");
            (StatusCode::NOT_FOUND, "not found").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{router, AppState, SiteConfig};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state(dir: &std::path::Path) -> AppState {
        AppState {
            site: Arc::new(SiteConfig {
                web_root: dir.to_path_buf(),
                data_path: dir.join("data.csv"),
            }),
        }
    }

    async fn get(state: AppState, uri: &str) -> (StatusCode, String) {
        let resp = router(state)
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn serves_health_data_and_pages() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("data.csv"), "Volcano Name\nEtna\n").expect("csv");
        std::fs::write(dir.path().join("detail.html"), "<h1>detail</h1>").expect("html");

        let (status, body) = get(state(dir.path()), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");

        let (status, body) = get(state(dir.path()), "/data.csv").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("Volcano Name"));

        let (status, body) = get(state(dir.path()), "/detail.html?id=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<h1>detail</h1>");
    }

    #[tokio::test]
    async fn missing_dataset_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (status, _) = get(state(dir.path()), "/data.csv").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
