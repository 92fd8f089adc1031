use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::verification::EvidenceFile;

#[derive(Debug, Error)]
pub enum EvidenceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is empty")]
    Empty { path: PathBuf },

    #[error("{path} is not a supported image")]
    NotAnImage { path: PathBuf },
}

/// Loads a user-selected image into memory so the wizard can preview and
/// later upload it.
#[async_trait]
pub trait EvidenceSourcePort: Send + Sync {
    async fn read(&self, path: &Path) -> Result<EvidenceFile, EvidenceError>;
}
