use crate::query::QueryError;
use domain::album::AlbumError;
use domain::like::LikeError;
use domain::playlist::PlaylistError;
use domain::track::TrackError;
use domain::user::UserError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Auth error: {0}")]
    AuthError(String),
    #[error("Token error: {0}")]
    TokenError(String),
    #[error("Aggregate not found: {0}: {1}")]
    AggregateNotFound(String, String),
    #[error("Media file missing: {0}")]
    MediaNotFound(String),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("User error: {0}")]
    UserError(#[from] UserError),
    #[error("Track error: {0}")]
    TrackError(#[from] TrackError),
    #[error("Album error: {0}")]
    AlbumError(#[from] AlbumError),
    #[error("Playlist error: {0}")]
    PlaylistError(#[from] PlaylistError),
    #[error("Like error: {0}")]
    LikeError(#[from] LikeError),
    #[error("Query error: {0}")]
    QueryError(#[from] QueryError),
    #[error("Unknown error: {0}")]
    UnknownError(String),
}
