//! Native entry point: a static file server for the built frontend.
//!
//! Serves the trunk `dist/` bundle and rewrites unknown paths to
//! `index.html`, so deep links into client-side routes (`/about`,
//! `/projects`, ...) always reach the router in the wasm bundle. There is no
//! application API here beyond a liveness probe; the site itself is fully
//! client-rendered.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";

fn parse_env_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn dist_dir() -> String {
    std::env::var("DIST_DIR")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIST_DIR.to_string())
}

#[derive(Clone, Copy, Serialize)]
struct HealthPayload {
    ok: bool,
}

async fn health() -> Json<HealthPayload> {
    Json(HealthPayload { ok: true })
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let port = parse_env_port();
    let dist = dist_dir();
    let bind_address = format!("0.0.0.0:{port}");

    let index = format!("{dist}/index.html");
    let static_service = ServeDir::new(&dist).not_found_service(ServeFile::new(index));

    let app = Router::new()
        .route("/api/health", get(health))
        .fallback_service(static_service);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log::info!("serving {dist} on http://127.0.0.1:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_falls_back_to_default() {
        std::env::remove_var("PORT");
        assert_eq!(parse_env_port(), DEFAULT_PORT);
    }

    #[test]
    fn health_payload_shape() {
        let json = serde_json::to_string(&HealthPayload { ok: true }).unwrap();
        assert_eq!(json, r#"{"ok":true}"#);
    }

    #[tokio::test]
    async fn health_handler_reports_ok() {
        let Json(payload) = health().await;
        assert!(payload.ok);
    }
}
