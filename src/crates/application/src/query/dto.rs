use crate::query::dao::{AlbumRecord, PlaylistRecord, TrackRecord};
use serde::Serialize;

/// Track summary as the list endpoints return it. `cover_url` is derived
/// from cover presence, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct TrackSummary {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub owner_id: i64,
    pub cover_url: Option<String>,
}

impl From<TrackRecord> for TrackSummary {
    fn from(record: TrackRecord) -> Self {
        let cover_url = record
            .cover_path
            .is_some()
            .then(|| format!("/cover/{}", record.id));
        Self {
            id: record.id,
            title: record.title,
            artist: record.artist,
            owner_id: record.owner_id,
            cover_url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AlbumView {
    pub id: i64,
    pub title: String,
    pub cover_url: Option<String>,
    pub tracks: Vec<TrackSummary>,
}

impl AlbumView {
    pub fn new(record: AlbumRecord, tracks: Vec<TrackSummary>) -> Self {
        let cover_url = record
            .cover_path
            .is_some()
            .then(|| format!("/album_cover/{}", record.id));
        Self {
            id: record.id,
            title: record.title,
            cover_url,
            tracks,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaylistView {
    pub id: i64,
    pub title: String,
    pub tracks: Vec<TrackSummary>,
}

impl PlaylistView {
    pub fn new(record: PlaylistRecord, tracks: Vec<TrackSummary>) -> Self {
        Self {
            id: record.id,
            title: record.title,
            tracks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_url_is_derived_from_cover_presence() {
        let with_cover = TrackRecord {
            id: 3,
            title: "t".to_string(),
            artist: "a".to_string(),
            owner_id: 1,
            cover_path: Some("media/covers/abc.png".to_string()),
        };
        let without_cover = TrackRecord {
            cover_path: None,
            ..with_cover.clone()
        };

        assert_eq!(
            TrackSummary::from(with_cover).cover_url.as_deref(),
            Some("/cover/3")
        );
        assert_eq!(TrackSummary::from(without_cover).cover_url, None);
    }

    #[test]
    fn album_cover_url_uses_album_route() {
        let record = AlbumRecord {
            id: 8,
            title: "LP".to_string(),
            cover_path: Some("media/covers/lp.png".to_string()),
            owner_id: 1,
        };
        let view = AlbumView::new(record, Vec::new());
        assert_eq!(view.cover_url.as_deref(), Some("/album_cover/8"));
    }
}
