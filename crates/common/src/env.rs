//! Environment/runtime helpers
//!
//! Sanity checks for optional directories at startup.

use tracing::warn;

/// Warn when the dashboard asset directory is missing.
///
/// Returns whether the directory exists so callers can skip mounting it.
pub async fn check_frontend_dir(frontend_dir: &str) -> bool {
    match tokio::fs::metadata(frontend_dir).await {
        Ok(meta) if meta.is_dir() => true,
        _ => {
            warn!(%frontend_dir, "frontend assets directory not found; dashboard will not be served");
            false
        }
    }
}
