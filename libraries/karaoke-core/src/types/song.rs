/// Song domain types
use super::{null_as_empty, Patch, PlaylistId, SongId};
use crate::error::Result;
use crate::ordering::Sequenced;
use crate::validation::{self, SONG_ARTIST_MAX, SONG_TITLE_MAX};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Song within a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    pub title: String,

    pub artist: String,

    /// Owning playlist; checked when the song is created, never re-checked
    pub playlist_id: PlaylistId,

    /// Position within the owning playlist
    pub order: i64,

    /// TJ karaoke catalog number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tj_number: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Sequenced for Song {
    fn order(&self) -> i64 {
        self.order
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn sequence_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Request body for creating a song
///
/// `playlist_id` stays a raw string here: a malformed value is an invalid
/// reference, not a body decoding failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateSong {
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub artist: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub playlist_id: String,
    pub tj_number: Option<i64>,
    pub lyrics: Option<String>,
}

impl CreateSong {
    /// Check required fields before anything touches the store
    pub fn validate(&self) -> Result<()> {
        validation::required_text("title", &self.title, SONG_TITLE_MAX)?;
        validation::required_text("artist", &self.artist, SONG_ARTIST_MAX)?;
        if self.playlist_id.is_empty() {
            return Err(crate::KaraokeError::validation("playlistId is required"));
        }
        Ok(())
    }
}

/// Request body for a partial song update
///
/// The owning playlist can't be changed through an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateSong {
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub title: Patch<String>,

    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub artist: Patch<String>,

    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub tj_number: Patch<i64>,

    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub lyrics: Patch<String>,

    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub order: Patch<i64>,
}

impl UpdateSong {
    /// An update that only moves the song
    pub fn reorder(order: i64) -> Self {
        Self {
            order: Patch::Present(order),
            ..Self::default()
        }
    }

    /// Supplied fields must satisfy the same bounds as on create
    pub fn validate(&self) -> Result<()> {
        validation::patched_text("title", &self.title, SONG_TITLE_MAX)?;
        validation::patched_text("artist", &self.artist, SONG_ARTIST_MAX)
    }
}

/// Request body for `PUT /songs/{id}/order`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongOrder {
    #[serde(default)]
    pub order: Option<i64>,
}

impl SongOrder {
    /// The order is mandatory and can't be negative
    pub fn validate(&self) -> Result<i64> {
        let order = self
            .order
            .ok_or_else(|| crate::KaraokeError::validation("order is required"))?;
        validation::order_value(order)?;
        Ok(order)
    }
}

/// Validated song ready to persist, with its computed position
#[derive(Debug, Clone)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub playlist_id: PlaylistId,
    pub order: i64,
    pub tj_number: Option<i64>,
    pub lyrics: Option<String>,
}

/// Filter for song listings
#[derive(Debug, Clone, Default)]
pub struct SongFilter {
    /// Restrict to one playlist
    pub playlist_id: Option<PlaylistId>,
}

impl SongFilter {
    /// Every song in the store
    pub fn all() -> Self {
        Self::default()
    }

    /// Songs of a single playlist
    pub fn in_playlist(playlist_id: PlaylistId) -> Self {
        Self {
            playlist_id: Some(playlist_id),
        }
    }
}
