/// Ordering engine - assigns and reassigns sequence positions
use karaoke_core::{
    types::{PlaylistId, Song, SongId, UpdateSong},
    KaraokeError, MaxOrder, Result, StorageContext,
};
use std::sync::Arc;

/// Computes positions for new playlists and songs and applies explicit reorders.
///
/// Positions are "highest sibling + 1" with no locking: two concurrent creates
/// in the same sibling set may get the same value, and listings fall back to
/// creation time for those.
#[derive(Clone)]
pub struct OrderingEngine {
    db: Arc<dyn StorageContext>,
}

impl OrderingEngine {
    pub fn new(db: Arc<dyn StorageContext>) -> Self {
        Self { db }
    }

    /// Position for a new playlist
    pub async fn next_playlist_order(&self) -> Result<i64> {
        let max = self.db.max_playlist_order().await?;
        let next = max.next();
        tracing::debug!(?max, next, "Computed next playlist order");
        Ok(next)
    }

    /// Position for a new song appended to `playlist_id`
    pub async fn next_song_order(&self, playlist_id: &PlaylistId) -> Result<i64> {
        let max: MaxOrder = self.db.max_song_order(playlist_id).await?;
        let next = max.next();
        tracing::debug!(%playlist_id, ?max, next, "Computed next song order");
        Ok(next)
    }

    /// Move a song to an explicit position.
    ///
    /// The value replaces the stored one verbatim; siblings are not renumbered.
    /// Clients that reorder a list resubmit every affected song.
    pub async fn reorder_song(&self, id: &SongId, order: i64) -> Result<Song> {
        self.db
            .update_song(id, UpdateSong::reorder(order))
            .await?
            .ok_or_else(|| KaraokeError::not_found("Song", id.as_str()))
    }
}
