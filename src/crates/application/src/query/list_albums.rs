use crate::query::dao::{AlbumDao, TrackDao};
use crate::query::dto::{AlbumView, TrackSummary};
use crate::query::QueryError;
use std::sync::Arc;

/// All albums with their tracks nested.
#[derive(Clone)]
pub struct ListAlbums {
    album_dao: Arc<dyn AlbumDao>,
    track_dao: Arc<dyn TrackDao>,
}

impl ListAlbums {
    pub fn new(album_dao: Arc<dyn AlbumDao>, track_dao: Arc<dyn TrackDao>) -> Self {
        Self {
            album_dao,
            track_dao,
        }
    }

    pub async fn execute(&self) -> Result<Vec<AlbumView>, QueryError> {
        let albums = self.album_dao.get_all().await?;
        let mut views = Vec::with_capacity(albums.len());
        for album in albums {
            let tracks: Vec<TrackSummary> = self
                .track_dao
                .get_by_album_id(album.id)
                .await?
                .into_iter()
                .map(TrackSummary::from)
                .collect();
            views.push(AlbumView::new(album, tracks));
        }
        Ok(views)
    }
}
