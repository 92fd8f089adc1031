use std::fmt;

use base64::Engine;
use bytes::Bytes;

/// An image selected by the user (ID document or selfie), held in memory.
///
/// The wizard owns the blob until it is replaced, removed, or handed to the
/// submission call. Clones share the same immutable buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct EvidenceFile {
    file_name: String,
    content_type: String,
    bytes: Bytes,
}

impl EvidenceFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Bytes,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Inline `data:` URL used to preview the selected image.
    pub fn preview_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

impl fmt::Debug for EvidenceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvidenceFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_omits_image_bytes() {
        let file = EvidenceFile::new("passport.png", "image/png", Bytes::from_static(b"secret"));
        let rendered = format!("{file:?}");
        assert!(rendered.contains("passport.png"));
        assert!(rendered.contains("len: 6"));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn preview_is_base64_data_url() {
        let file = EvidenceFile::new("selfie.jpg", "image/jpeg", Bytes::from_static(b"hi"));
        assert_eq!(file.preview_data_url(), "data:image/jpeg;base64,aGk=");
    }
}
