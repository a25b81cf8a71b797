use std::sync::Arc;

use super::shared::IdGenerator;
use crate::error::AppError;
use crate::media::MediaStore;
use domain::track::{Track, TrackRepository};
use domain::value::{TrackId, UserId};
use log::info;

/// Upload command. The blob is written before the row so a crash mid-way
/// leaves at worst an orphaned file, never a row without a file.
#[derive(Debug)]
pub struct UploadTrackCmd {
    pub title: String,
    pub artist: String,
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
    pub cover: Option<UploadedCover>,
    pub owner_id: UserId,
}

#[derive(Debug)]
pub struct UploadedCover {
    pub file_name: String,
    pub data: Vec<u8>,
}

pub struct TrackService {
    track_repo: Arc<dyn TrackRepository>,
    media_store: Arc<dyn MediaStore>,
    id_generator: Arc<dyn IdGenerator>,
}

impl TrackService {
    pub fn new(
        track_repo: Arc<dyn TrackRepository>,
        media_store: Arc<dyn MediaStore>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            track_repo,
            media_store,
            id_generator,
        }
    }

    pub async fn upload(&self, cmd: UploadTrackCmd) -> Result<Track, AppError> {
        let file_path = self
            .media_store
            .store_track(&cmd.file_name, &cmd.content_type, &cmd.data)
            .await?;

        let cover_path = match &cmd.cover {
            Some(cover) => Some(
                self.media_store
                    .store_cover(&cover.file_name, &cover.data)
                    .await?,
            ),
            None => None,
        };

        let id = TrackId::from(self.id_generator.next_id().await?);
        let track = Track::new(
            id,
            &cmd.title,
            &cmd.artist,
            &file_path,
            cover_path.as_deref(),
            cmd.owner_id,
        );
        self.track_repo.save(&track).await?;

        info!(
            "track {} uploaded by user {} ({} bytes)",
            track.id,
            cmd.owner_id,
            cmd.data.len()
        );
        Ok(track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{CoverData, TrackStream};
    use async_trait::async_trait;
    use domain::track::TrackError;
    use std::sync::Mutex;

    struct RecordingTrackRepository {
        saved: Mutex<Vec<Track>>,
    }

    #[async_trait]
    impl TrackRepository for RecordingTrackRepository {
        async fn find_by_id(&self, id: TrackId) -> Result<Option<Track>, TrackError> {
            Ok(self
                .saved
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.id == id)
                .cloned())
        }

        async fn save(&self, track: &Track) -> Result<(), TrackError> {
            self.saved.lock().unwrap().push(track.clone());
            Ok(())
        }
    }

    struct StrictMediaStore;

    #[async_trait]
    impl MediaStore for StrictMediaStore {
        async fn store_track(
            &self,
            file_name: &str,
            content_type: &str,
            _data: &[u8],
        ) -> Result<String, AppError> {
            if !crate::media::is_allowed_audio_type(content_type) {
                return Err(AppError::InvalidInput(format!(
                    "unsupported content type: {}",
                    content_type
                )));
            }
            Ok(format!("media/{}", file_name))
        }

        async fn store_cover(&self, file_name: &str, _data: &[u8]) -> Result<String, AppError> {
            Ok(format!("media/covers/{}", file_name))
        }

        async fn open_track_stream(&self, path: &str) -> Result<TrackStream, AppError> {
            Err(AppError::MediaNotFound(path.to_string()))
        }

        async fn read_cover(&self, _cover_path: Option<&str>) -> Result<CoverData, AppError> {
            Err(AppError::MediaNotFound("placeholder".to_string()))
        }
    }

    struct SeqIdGenerator(Mutex<i64>);

    #[async_trait]
    impl IdGenerator for SeqIdGenerator {
        async fn next_id(&self) -> Result<i64, AppError> {
            let mut next = self.0.lock().unwrap();
            *next += 1;
            Ok(*next)
        }
    }

    fn service(repo: Arc<RecordingTrackRepository>) -> TrackService {
        TrackService::new(
            repo,
            Arc::new(StrictMediaStore),
            Arc::new(SeqIdGenerator(Mutex::new(0))),
        )
    }

    fn cmd(content_type: &str) -> UploadTrackCmd {
        UploadTrackCmd {
            title: "Song".to_string(),
            artist: "Band".to_string(),
            file_name: "song.mp3".to_string(),
            content_type: content_type.to_string(),
            data: vec![1, 2, 3],
            cover: None,
            owner_id: UserId::from(5),
        }
    }

    #[tokio::test]
    async fn rejected_content_type_creates_no_row() {
        let repo = Arc::new(RecordingTrackRepository {
            saved: Mutex::new(Vec::new()),
        });
        let err = service(repo.clone()).upload(cmd("text/plain")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(repo.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn upload_persists_track_with_cover() {
        let repo = Arc::new(RecordingTrackRepository {
            saved: Mutex::new(Vec::new()),
        });
        let mut upload = cmd("audio/mpeg");
        upload.cover = Some(UploadedCover {
            file_name: "art.png".to_string(),
            data: vec![9],
        });

        let track = service(repo.clone()).upload(upload).await.unwrap();
        assert_eq!(track.file_path, "media/song.mp3");
        assert_eq!(track.cover_path.as_deref(), Some("media/covers/art.png"));
        assert_eq!(track.owner_id, UserId::from(5));
        assert_eq!(repo.saved.lock().unwrap().len(), 1);
    }
}
