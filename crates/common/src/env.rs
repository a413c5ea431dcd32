//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the database is touched.

use tracing::warn;

/// Warn when the configuration file is missing (env fallbacks will be used)
/// and make sure the directory of a file-backed SQLite database exists.
pub async fn ensure_env(config_path: &str, database_url: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(config_path).await.is_err() {
        warn!(%config_path, "configuration file not found; falling back to environment variables");
    }
    if let Some(dir) = sqlite_parent_dir(database_url) {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {dir}: {e}"))?;
    }
    Ok(())
}

/// Parent directory of a `sqlite://path/to/file.db` url, if it has one.
fn sqlite_parent_dir(url: &str) -> Option<&str> {
    let rest = url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next()?;
    if path.is_empty() || path.contains(":memory:") {
        return None;
    }
    let idx = path.rfind('/')?;
    let dir = &path[..idx];
    (!dir.is_empty()).then_some(dir)
}
