mod config;

use std::net::SocketAddr;
use std::path::Path;

use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Serves the device probe page and its wasm bundle.
fn app(config: &config::ServerConfig) -> Router {
    let static_dir = Path::new(&config.static_dir);

    Router::new()
        .route("/health", get(health_check))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::load_or_default();

    tracing_subscriber::fmt()
        .with_max_level(config.logging.max_level())
        .init();

    tracing::info!("Starting devprobe server");
    tracing::info!("  Host: {}, port: {}", config.server.host, config.server.http_port);
    tracing::info!("  Static files: {}", config.server.static_dir);
    tracing::info!("  Log level: {}", config.logging.level);

    if !Path::new(&config.server.static_dir).join("pkg").is_dir() {
        tracing::warn!(
            "No pkg/ under {}; build the client with wasm-pack first",
            config.server.static_dir
        );
    }

    let ip_addr = config.server.host.parse::<std::net::IpAddr>().unwrap_or_else(|e| {
        tracing::warn!("Failed to parse host '{}': {}. Using 127.0.0.1", config.server.host, e);
        [127, 0, 0, 1].into()
    });
    let addr = SocketAddr::from((ip_addr, config.server.http_port));

    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .serve(app(&config.server).into_make_service())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_config(dir: &Path) -> config::ServerConfig {
        config::ServerConfig {
            static_dir: dir.to_str().unwrap().to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(&test_config(dir.path()))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

        let response = app(&test_config(dir.path()))
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_bundle_is_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let response = app(&test_config(dir.path()))
            .oneshot(
                Request::get("/static/pkg/devprobe_client.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
