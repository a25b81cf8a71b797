pub mod album;
pub mod like;
pub mod playlist;
pub mod shared;
pub mod track;
