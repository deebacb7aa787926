/// Playlist domain types
use super::{null_as_empty, Patch, PlaylistId};
use crate::error::Result;
use crate::ordering::Sequenced;
use crate::validation::{self, PLAYLIST_NAME_MAX};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Position among all playlists
    pub order: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Sequenced for Playlist {
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

/// Request body for creating a playlist
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePlaylist {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
}

impl CreatePlaylist {
    /// Check required fields before anything touches the store
    pub fn validate(&self) -> Result<()> {
        validation::required_text("name", &self.name, PLAYLIST_NAME_MAX)
    }
}

/// Request body for a partial playlist update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatePlaylist {
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,

    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub order: Patch<i64>,
}

impl UpdatePlaylist {
    /// Supplied fields must satisfy the same bounds as on create
    pub fn validate(&self) -> Result<()> {
        validation::patched_text("name", &self.name, PLAYLIST_NAME_MAX)
    }
}

/// Validated playlist ready to persist, with its computed position
#[derive(Debug, Clone)]
pub struct NewPlaylist {
    pub name: String,
    pub order: i64,
}
