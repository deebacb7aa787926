//! Storage trait for playlists and songs

use crate::error::Result;
use crate::ordering::MaxOrder;
use crate::types::{
    NewPlaylist, NewSong, Playlist, PlaylistId, Song, SongFilter, SongId, UpdatePlaylist,
    UpdateSong,
};
use async_trait::async_trait;

/// Storage context providing access to the document store
///
/// The store assigns identifiers and timestamps. It enforces no relationship
/// between songs and playlists; that is the caller's job. Every list comes back
/// sorted by `(order, created_at, id)`.
#[async_trait]
pub trait StorageContext: Send + Sync {
    // ========================================================================
    // Playlists
    // ========================================================================

    /// Get all playlists in display order
    async fn get_all_playlists(&self) -> Result<Vec<Playlist>>;

    /// Get playlist by ID
    async fn get_playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>>;

    /// Highest order among all playlists
    async fn max_playlist_order(&self) -> Result<MaxOrder>;

    /// Insert a new playlist
    async fn create_playlist(&self, playlist: NewPlaylist) -> Result<Playlist>;

    /// Merge a partial update; `None` if the playlist doesn't exist
    async fn update_playlist(
        &self,
        id: &PlaylistId,
        update: UpdatePlaylist,
    ) -> Result<Option<Playlist>>;

    /// Delete a playlist; `false` if it didn't exist. Songs are left alone.
    async fn delete_playlist(&self, id: &PlaylistId) -> Result<bool>;

    // ========================================================================
    // Songs
    // ========================================================================

    /// Get songs matching the filter in display order
    async fn get_songs(&self, filter: &SongFilter) -> Result<Vec<Song>>;

    /// Get song by ID
    async fn get_song(&self, id: &SongId) -> Result<Option<Song>>;

    /// Highest order among the songs of one playlist
    async fn max_song_order(&self, playlist_id: &PlaylistId) -> Result<MaxOrder>;

    /// Insert a new song
    async fn create_song(&self, song: NewSong) -> Result<Song>;

    /// Merge a partial update; `None` if the song doesn't exist
    async fn update_song(&self, id: &SongId, update: UpdateSong) -> Result<Option<Song>>;

    /// Delete a song; `false` if it didn't exist
    async fn delete_song(&self, id: &SongId) -> Result<bool>;

    /// Delete every song of a playlist, returning how many were removed
    async fn delete_songs_by_playlist(&self, playlist_id: &PlaylistId) -> Result<u64>;

    /// Convenience check used before attaching songs to a playlist
    async fn playlist_exists(&self, id: &PlaylistId) -> Result<bool> {
        Ok(self.get_playlist(id).await?.is_some())
    }
}
