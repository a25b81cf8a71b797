use crate::query::QueryError;
use async_trait::async_trait;

/// Raw read-model rows as they come out of storage. URL derivation and
/// response shaping happen in the query services, not here.
#[derive(Debug, Clone)]
pub struct TrackRecord {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub owner_id: i64,
    pub cover_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AlbumRecord {
    pub id: i64,
    pub title: String,
    pub cover_path: Option<String>,
    pub owner_id: i64,
}

#[derive(Debug, Clone)]
pub struct PlaylistRecord {
    pub id: i64,
    pub title: String,
    pub owner_id: i64,
}

#[async_trait]
pub trait TrackDao: Send + Sync {
    async fn get_all(&self) -> Result<Vec<TrackRecord>, QueryError>;

    async fn get_by_album_id(&self, album_id: i64) -> Result<Vec<TrackRecord>, QueryError>;

    /// Tracks of one playlist, in entry-position order.
    async fn get_by_playlist_id(&self, playlist_id: i64) -> Result<Vec<TrackRecord>, QueryError>;

    async fn get_liked_by_user(&self, user_id: i64) -> Result<Vec<TrackRecord>, QueryError>;
}

#[async_trait]
pub trait AlbumDao: Send + Sync {
    async fn get_all(&self) -> Result<Vec<AlbumRecord>, QueryError>;
}

#[async_trait]
pub trait PlaylistDao: Send + Sync {
    async fn get_all(&self) -> Result<Vec<PlaylistRecord>, QueryError>;
}
