//! Local image file reader
//!
//! Loads a user-selected photo into memory and tags it with the MIME type
//! sniffed from its magic bytes. The file extension is not trusted.

use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;
use tt_core::ports::{EvidenceError, EvidenceSourcePort};
use tt_core::verification::EvidenceFile;

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalImageFileSource;

impl LocalImageFileSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EvidenceSourcePort for LocalImageFileSource {
    async fn read(&self, path: &Path) -> Result<EvidenceFile, EvidenceError> {
        let raw = tokio::fs::read(path).await.map_err(|source| EvidenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if raw.is_empty() {
            return Err(EvidenceError::Empty {
                path: path.to_path_buf(),
            });
        }

        let format = image::guess_format(&raw).map_err(|_| EvidenceError::NotAnImage {
            path: path.to_path_buf(),
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        debug!(
            file_name = %file_name,
            format = ?format,
            size = raw.len(),
            "loaded evidence file"
        );

        Ok(EvidenceFile::new(
            file_name,
            format.to_mime_type(),
            Bytes::from(raw),
        ))
    }
}
