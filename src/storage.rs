//! Artifact persistence.
//!
//! Every conversion gets its own directory `<prefix>_<YYYYmmdd_HHMMSS>` under
//! the output root, holding a single `converted_test.<ext>` file.

use chrono::{DateTime, Local};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::info;

use crate::engine::Dialect;
use crate::types::{Error, Result};

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Upper bound on `_N` suffixes tried for one timestamp.
const MAX_SUFFIX: u32 = 1000;

/// Writes converted documents below a root directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Persist `code` now. Returns the path of the written file.
    pub async fn save(&self, code: &str, dialect: Dialect, prefix: &str) -> Result<PathBuf> {
        self.save_at(code, dialect, prefix, Local::now()).await
    }

    /// Persist `code` as if written at `at`.
    pub async fn save_at(
        &self,
        code: &str,
        dialect: Dialect,
        prefix: &str,
        at: DateTime<Local>,
    ) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.root).await?;

        let base = format!("{}_{}", prefix, at.format(TIMESTAMP_FORMAT));
        let dir = self.create_unique_dir(&base).await?;
        let path = dir.join(dialect.artifact_name());
        tokio::fs::write(&path, code).await?;

        info!(path = %path.display(), bytes = code.len(), "artifact written");
        Ok(path)
    }

    async fn create_unique_dir(&self, base: &str) -> Result<PathBuf> {
        for n in 0..MAX_SUFFIX {
            let name = if n == 0 {
                base.to_string()
            } else {
                format!("{}_{}", base, n)
            };
            let candidate = self.root.join(name);
            match tokio::fs::create_dir(&candidate).await {
                Ok(()) => return Ok(candidate),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Err(Error::internal(format!(
            "no free artifact directory for '{}' after {} attempts",
            base, MAX_SUFFIX
        )))
    }
}
