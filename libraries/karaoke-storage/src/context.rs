use crate::{playlists, songs};
use async_trait::async_trait;
use karaoke_core::{error::Result, ordering::MaxOrder, storage::StorageContext, types::*};
use sqlx::SqlitePool;

/// Local storage context using `SQLite`
#[derive(Clone)]
pub struct LocalStorageContext {
    pool: SqlitePool,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl StorageContext for LocalStorageContext {
    // Playlists
    async fn get_all_playlists(&self) -> Result<Vec<Playlist>> {
        playlists::get_all(&self.pool).await
    }

    async fn get_playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        playlists::get_by_id(&self.pool, id).await
    }

    async fn max_playlist_order(&self) -> Result<MaxOrder> {
        playlists::max_order(&self.pool).await
    }

    async fn create_playlist(&self, playlist: NewPlaylist) -> Result<Playlist> {
        playlists::create(&self.pool, playlist).await
    }

    async fn update_playlist(
        &self,
        id: &PlaylistId,
        update: UpdatePlaylist,
    ) -> Result<Option<Playlist>> {
        playlists::update(&self.pool, id, update).await
    }

    async fn delete_playlist(&self, id: &PlaylistId) -> Result<bool> {
        playlists::delete(&self.pool, id).await
    }

    // Songs
    async fn get_songs(&self, filter: &SongFilter) -> Result<Vec<Song>> {
        songs::get_all(&self.pool, filter).await
    }

    async fn get_song(&self, id: &SongId) -> Result<Option<Song>> {
        songs::get_by_id(&self.pool, id).await
    }

    async fn max_song_order(&self, playlist_id: &PlaylistId) -> Result<MaxOrder> {
        songs::max_order(&self.pool, playlist_id).await
    }

    async fn create_song(&self, song: NewSong) -> Result<Song> {
        songs::create(&self.pool, song).await
    }

    async fn update_song(&self, id: &SongId, update: UpdateSong) -> Result<Option<Song>> {
        songs::update(&self.pool, id, update).await
    }

    async fn delete_song(&self, id: &SongId) -> Result<bool> {
        songs::delete(&self.pool, id).await
    }

    async fn delete_songs_by_playlist(&self, playlist_id: &PlaylistId) -> Result<u64> {
        songs::delete_by_playlist(&self.pool, playlist_id).await
    }
}
