use crate::query::dao::{PlaylistDao, TrackDao};
use crate::query::dto::{PlaylistView, TrackSummary};
use crate::query::QueryError;
use std::sync::Arc;

/// All playlists with their tracks nested, in entry order.
#[derive(Clone)]
pub struct ListPlaylists {
    playlist_dao: Arc<dyn PlaylistDao>,
    track_dao: Arc<dyn TrackDao>,
}

impl ListPlaylists {
    pub fn new(playlist_dao: Arc<dyn PlaylistDao>, track_dao: Arc<dyn TrackDao>) -> Self {
        Self {
            playlist_dao,
            track_dao,
        }
    }

    pub async fn execute(&self) -> Result<Vec<PlaylistView>, QueryError> {
        let playlists = self.playlist_dao.get_all().await?;
        let mut views = Vec::with_capacity(playlists.len());
        for playlist in playlists {
            let tracks: Vec<TrackSummary> = self
                .track_dao
                .get_by_playlist_id(playlist.id)
                .await?
                .into_iter()
                .map(TrackSummary::from)
                .collect();
            views.push(PlaylistView::new(playlist, tracks));
        }
        Ok(views)
    }
}
