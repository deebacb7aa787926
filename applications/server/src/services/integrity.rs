/// Referential integrity between songs and their playlists
use karaoke_core::{
    types::{Playlist, PlaylistId, SongId},
    KaraokeError, Result, StorageContext,
};
use std::sync::Arc;

/// The store has no foreign keys, so the song → playlist link is checked here:
/// once when a song is created, and again when a playlist is deleted and its
/// songs have to go with it.
#[derive(Clone)]
pub struct IntegrityCoordinator {
    db: Arc<dyn StorageContext>,
}

impl IntegrityCoordinator {
    pub fn new(db: Arc<dyn StorageContext>) -> Self {
        Self { db }
    }

    /// Resolve a client-supplied playlist reference to a stored playlist.
    ///
    /// Malformed identifiers fail before the store is queried.
    pub async fn resolve_playlist(&self, raw_id: &str) -> Result<Playlist> {
        let id = PlaylistId::parse(raw_id)?;
        self.db
            .get_playlist(&id)
            .await?
            .ok_or_else(|| KaraokeError::not_found("Playlist", id.as_str()))
    }

    /// Delete a playlist and, best effort, its songs.
    ///
    /// Songs go first. If that fails the error is logged and the playlist is
    /// deleted anyway; orphaned songs are tolerated. The two steps are not
    /// atomic.
    pub async fn delete_playlist(&self, id: &PlaylistId) -> Result<()> {
        match self.db.delete_songs_by_playlist(id).await {
            Ok(removed) => {
                tracing::debug!(%id, removed, "Removed songs of deleted playlist");
            }
            Err(e) => {
                tracing::warn!("Failed to delete songs for playlist {}: {}", id, e);
            }
        }

        if self.db.delete_playlist(id).await? {
            tracing::info!(%id, "Playlist deleted");
            Ok(())
        } else {
            Err(KaraokeError::not_found("Playlist", id.as_str()))
        }
    }

    /// Delete a single song; its playlist is unaffected
    pub async fn delete_song(&self, id: &SongId) -> Result<()> {
        if self.db.delete_song(id).await? {
            Ok(())
        } else {
            Err(KaraokeError::not_found("Song", id.as_str()))
        }
    }
}
