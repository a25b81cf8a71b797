use std::sync::Arc;

use super::shared::IdGenerator;
use crate::error::AppError;
use domain::playlist::{Playlist, PlaylistRepository};
use domain::track::TrackRepository;
use domain::value::{PlaylistId, TrackId, UserId};

pub struct PlaylistService {
    playlist_repo: Arc<dyn PlaylistRepository>,
    track_repo: Arc<dyn TrackRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl PlaylistService {
    pub fn new(
        playlist_repo: Arc<dyn PlaylistRepository>,
        track_repo: Arc<dyn TrackRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            playlist_repo,
            track_repo,
            id_generator,
        }
    }

    pub async fn create(&self, title: &str, owner_id: UserId) -> Result<Playlist, AppError> {
        let id = PlaylistId::from(self.id_generator.next_id().await?);
        let playlist = Playlist::new(id, title, owner_id);
        self.playlist_repo.save(&playlist).await?;
        Ok(playlist)
    }

    /// Append a track to a playlist owned by the caller. A playlist that
    /// exists but belongs to someone else is reported as not found, the
    /// same as one that does not exist at all.
    pub async fn add_track(
        &self,
        playlist_id: PlaylistId,
        track_id: TrackId,
        caller: UserId,
    ) -> Result<(), AppError> {
        let mut playlist = self
            .playlist_repo
            .find_by_id(playlist_id)
            .await?
            .filter(|p| p.is_owned_by(caller))
            .ok_or_else(|| {
                AppError::AggregateNotFound("Playlist".to_string(), playlist_id.to_string())
            })?;

        self.track_repo
            .find_by_id(track_id)
            .await?
            .ok_or_else(|| {
                AppError::AggregateNotFound("Track".to_string(), track_id.to_string())
            })?;

        let entry_id = self.id_generator.next_id().await?;
        playlist.add_entry(entry_id, track_id);
        self.playlist_repo.save(&playlist).await?;
        Ok(())
    }
}
