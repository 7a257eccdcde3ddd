//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::debug;

/// Ensure the data directory holding the database file exists.
pub async fn ensure_data_dir(data_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(data_dir).await.is_err() {
        debug!(%data_dir, "creating data directory");
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_nested_dir_and_is_idempotent() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("lodging_env_{}", uuid::Uuid::new_v4())).join("data");
        let path = dir.to_string_lossy().to_string();
        ensure_data_dir(&path).await?;
        ensure_data_dir(&path).await?;
        assert!(tokio::fs::metadata(&dir).await?.is_dir());
        Ok(())
    }
}
