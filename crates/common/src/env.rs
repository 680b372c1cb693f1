//! Environment/runtime helpers
//!
//! Sanity checks to ensure the on-disk locations a configuration points at exist at startup.

use std::path::{Path, PathBuf};

use tracing::info;

/// Resolve the file behind a `sqlite:` database URL.
///
/// Returns `None` for in-memory databases and for non-SQLite URLs.
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Ensure the parent directory of a file-backed SQLite database exists.
pub async fn ensure_database_dir(url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(url) else { return Ok(()) };
    let Some(dir) = file.parent().filter(|d| !d.as_os_str().is_empty()) else { return Ok(()) };
    ensure_dir(dir).await
}

async fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    if tokio::fs::metadata(dir).await.is_ok() {
        return Ok(());
    }
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    info!(dir = %dir.display(), "created database directory");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_file_path_variants() {
        assert_eq!(sqlite_file_path("sqlite://data/employees.db?mode=rwc"), Some(PathBuf::from("data/employees.db")));
        assert_eq!(sqlite_file_path("sqlite:local.db"), Some(PathBuf::from("local.db")));
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://u:p@localhost/db"), None);
    }

    #[tokio::test]
    async fn ensure_database_dir_creates_parent() -> anyhow::Result<()> {
        let root = std::env::temp_dir().join(format!("employee_api_env_{}", uuid::Uuid::new_v4()));
        let url = format!("sqlite://{}/nested/employees.db?mode=rwc", root.display());
        ensure_database_dir(&url).await?;
        assert!(tokio::fs::metadata(root.join("nested")).await?.is_dir());
        // idempotent
        ensure_database_dir(&url).await?;
        let _ = tokio::fs::remove_dir_all(&root).await;
        Ok(())
    }

    #[tokio::test]
    async fn ensure_database_dir_ignores_memory_and_postgres() -> anyhow::Result<()> {
        ensure_database_dir("sqlite::memory:").await?;
        ensure_database_dir("postgres://localhost/db").await?;
        Ok(())
    }
}
