use crate::query::dao::TrackDao;
use crate::query::dto::TrackSummary;
use crate::query::QueryError;
use std::sync::Arc;

/// All tracks, unpaginated.
#[derive(Clone)]
pub struct ListTracks {
    track_dao: Arc<dyn TrackDao>,
}

impl ListTracks {
    pub fn new(track_dao: Arc<dyn TrackDao>) -> Self {
        Self { track_dao }
    }

    pub async fn execute(&self) -> Result<Vec<TrackSummary>, QueryError> {
        let records = self.track_dao.get_all().await?;
        Ok(records.into_iter().map(TrackSummary::from).collect())
    }
}
