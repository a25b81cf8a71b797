use crate::query::dao::TrackDao;
use crate::query::dto::TrackSummary;
use crate::query::QueryError;
use std::sync::Arc;

/// Tracks liked by one user.
#[derive(Clone)]
pub struct ListLikedTracks {
    track_dao: Arc<dyn TrackDao>,
}

impl ListLikedTracks {
    pub fn new(track_dao: Arc<dyn TrackDao>) -> Self {
        Self { track_dao }
    }

    pub async fn execute(&self, user_id: i64) -> Result<Vec<TrackSummary>, QueryError> {
        let records = self.track_dao.get_liked_by_user(user_id).await?;
        Ok(records.into_iter().map(TrackSummary::from).collect())
    }
}
