//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior and properly test migrations and indexes.

#![allow(dead_code)]

use karaoke_core::types::*;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = karaoke_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        karaoke_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: Create a playlist at an explicit position
pub async fn create_test_playlist(pool: &SqlitePool, name: &str, order: i64) -> Playlist {
    karaoke_storage::playlists::create(
        pool,
        NewPlaylist {
            name: name.to_string(),
            order,
        },
    )
    .await
    .expect("Failed to create test playlist")
}

/// Test fixture: Create a song at an explicit position
pub async fn create_test_song(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    title: &str,
    order: i64,
) -> Song {
    karaoke_storage::songs::create(
        pool,
        NewSong {
            title: title.to_string(),
            artist: "Test Artist".to_string(),
            playlist_id: playlist_id.clone(),
            order,
            tj_number: None,
            lyrics: None,
        },
    )
    .await
    .expect("Failed to create test song")
}
