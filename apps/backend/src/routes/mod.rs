pub mod session;

/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
