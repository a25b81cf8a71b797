use std::sync::Arc;

use super::shared::IdGenerator;
use crate::error::AppError;
use domain::like::{Like, LikeError, LikeRepository};
use domain::track::TrackRepository;
use domain::value::{LikeId, TrackId, UserId};

pub struct LikeService {
    like_repo: Arc<dyn LikeRepository>,
    track_repo: Arc<dyn TrackRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl LikeService {
    pub fn new(
        like_repo: Arc<dyn LikeRepository>,
        track_repo: Arc<dyn TrackRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            like_repo,
            track_repo,
            id_generator,
        }
    }

    /// Like a track. A second like for the same (user, track) pair is a
    /// validation failure; the unique index on the table closes the race
    /// this check leaves open.
    pub async fn like(&self, user_id: UserId, track_id: TrackId) -> Result<(), AppError> {
        self.track_repo
            .find_by_id(track_id)
            .await?
            .ok_or_else(|| {
                AppError::AggregateNotFound("Track".to_string(), track_id.to_string())
            })?;

        if self
            .like_repo
            .find_by_user_and_track(user_id, track_id)
            .await?
            .is_some()
        {
            return Err(LikeError::AlreadyLiked(track_id.as_i64()).into());
        }

        let id = LikeId::from(self.id_generator.next_id().await?);
        self.like_repo
            .save(&Like::new(id, user_id, track_id))
            .await?;
        Ok(())
    }

    pub async fn unlike(&self, user_id: UserId, track_id: TrackId) -> Result<(), AppError> {
        self.like_repo
            .delete_by_user_and_track(user_id, track_id)
            .await?;
        Ok(())
    }
}
