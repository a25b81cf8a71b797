use thiserror::Error;

pub mod dao;
pub mod dto;
pub mod list_albums;
pub mod list_liked_tracks;
pub mod list_playlists;
pub mod list_tracks;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Database error: {0}")]
    DbError(String),
}
