use std::sync::Arc;

use super::shared::IdGenerator;
use super::track::UploadedCover;
use crate::error::AppError;
use crate::media::MediaStore;
use domain::album::{Album, AlbumRepository};
use domain::value::{AlbumId, UserId};

#[derive(Debug)]
pub struct CreateAlbumCmd {
    pub title: String,
    pub cover: Option<UploadedCover>,
    pub owner_id: UserId,
}

pub struct AlbumService {
    album_repo: Arc<dyn AlbumRepository>,
    media_store: Arc<dyn MediaStore>,
    id_generator: Arc<dyn IdGenerator>,
}

impl AlbumService {
    pub fn new(
        album_repo: Arc<dyn AlbumRepository>,
        media_store: Arc<dyn MediaStore>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            album_repo,
            media_store,
            id_generator,
        }
    }

    pub async fn create(&self, cmd: CreateAlbumCmd) -> Result<Album, AppError> {
        let cover_path = match &cmd.cover {
            Some(cover) => Some(
                self.media_store
                    .store_cover(&cover.file_name, &cover.data)
                    .await?,
            ),
            None => None,
        };

        let id = AlbumId::from(self.id_generator.next_id().await?);
        let album = Album::new(id, &cmd.title, cover_path.as_deref(), cmd.owner_id);
        self.album_repo.save(&album).await?;
        Ok(album)
    }
}
