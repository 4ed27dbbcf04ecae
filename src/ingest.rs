use crate::{
    domain::item::ContentRef,
    error::{Result, TierListError},
};
use async_trait::async_trait;
use base64::Engine as _;
use std::path::Path;
use tokio::fs;

/// Turns a user-selected file into a content reference for a new item
#[async_trait]
pub trait ContentEncoder: Send + Sync {
    async fn encode(&self, path: &Path) -> Result<ContentRef>;
}

/// Encodes whole files inline as `data:<mime>;base64,<payload>` URIs
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUriEncoder;

impl DataUriEncoder {
    const FALLBACK_MIME: &'static str = "application/octet-stream";

    /// Guesses the MIME type from the file extension
    pub fn mime_for(path: &Path) -> &'static str {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("svg") => "image/svg+xml",
            Some("bmp") => "image/bmp",
            Some("avif") => "image/avif",
            _ => Self::FALLBACK_MIME,
        }
    }

    pub fn encode_bytes(mime: &str, bytes: &[u8]) -> ContentRef {
        let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
        ContentRef::new(format!("data:{};base64,{}", mime, payload))
    }
}

#[async_trait]
impl ContentEncoder for DataUriEncoder {
    async fn encode(&self, path: &Path) -> Result<ContentRef> {
        let bytes = fs::read(path).await.map_err(|e| TierListError::IngestError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::encode_bytes(Self::mime_for(path), &bytes))
    }
}
