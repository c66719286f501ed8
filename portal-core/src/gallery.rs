//! Photo album types for the gallery section.

use serde::{Deserialize, Serialize};

/// A photo inside an album
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub url: String,
    pub thumbnail: String,
    pub title: String,
    /// Display string, e.g. "March 2024"
    pub date: String,
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An album as listed by the gallery endpoint.
///
/// The listing carries the cover and a declared `photo_count` only; `photos`
/// starts empty and is filled in the first time the album is opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoAlbum {
    pub id: String,
    pub title: String,
    /// Display string, e.g. "December 2024"
    pub date: String,
    pub cover_photo: String,
    pub photo_count: u64,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl PhotoAlbum {
    /// The album with its lazily fetched photos merged in
    pub fn with_photos(mut self, photos: Vec<Photo>) -> Self {
        self.photos = photos;
        self
    }
}
