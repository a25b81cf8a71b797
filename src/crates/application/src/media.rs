use crate::error::AppError;
use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;

/// Content types accepted for track uploads. Covers are stored as-is,
/// without a type check.
pub const ALLOWED_AUDIO_TYPES: [&str; 4] = ["audio/mpeg", "audio/mp3", "audio/wav", "audio/ogg"];

pub fn is_allowed_audio_type(content_type: &str) -> bool {
    ALLOWED_AUDIO_TYPES
        .iter()
        .any(|t| t.eq_ignore_ascii_case(content_type))
}

/// Bounded-chunk byte stream of a stored audio blob.
pub type TrackStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

#[derive(Debug, Clone)]
pub struct CoverData {
    pub data: Vec<u8>,
    pub mime_type: String,
}

/// Filesystem-backed blob store for uploaded audio and cover images.
/// Paths handed back by the store are relative storage keys and are what
/// ends up in the `file_path`/`cover_path` columns.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Persist an uploaded audio blob. The declared content type must be
    /// in [`ALLOWED_AUDIO_TYPES`], otherwise `InvalidInput`.
    async fn store_track(
        &self,
        file_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<String, AppError>;

    /// Persist a cover image blob under a generated storage key.
    async fn store_cover(&self, file_name: &str, data: &[u8]) -> Result<String, AppError>;

    /// Open a stored audio blob as a chunked byte stream. A row whose path
    /// no longer resolves on disk yields `MediaNotFound`.
    async fn open_track_stream(&self, path: &str) -> Result<TrackStream, AppError>;

    /// Read a cover image, falling back to the placeholder when the path is
    /// absent or the file is gone. `MediaNotFound` when the placeholder is
    /// missing too.
    async fn read_cover(&self, cover_path: Option<&str>) -> Result<CoverData, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_allow_list() {
        assert!(is_allowed_audio_type("audio/mpeg"));
        assert!(is_allowed_audio_type("AUDIO/WAV"));
        assert!(!is_allowed_audio_type("text/plain"));
        assert!(!is_allowed_audio_type("video/mp4"));
    }
}
