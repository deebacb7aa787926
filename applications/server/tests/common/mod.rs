//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use karaoke_core::{types::*, KaraokeError, MaxOrder, Result, StorageContext};
use karaoke_server::{create_router, state::AppState};
use karaoke_storage::LocalStorageContext;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub storage: Arc<LocalStorageContext>,
    _temp_dir: TempDir,
}

/// Create a test database with migrations applied, backed by a real file
pub async fn create_test_database() -> TestDb {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
    let storage = karaoke_storage::connect(&url)
        .await
        .expect("Failed to open test database");

    TestDb {
        storage: Arc::new(storage),
        _temp_dir: temp_dir,
    }
}

/// Router over a fresh database
pub async fn create_test_app() -> (Router, TestDb) {
    let db = create_test_database().await;
    let app_state = AppState::new(db.storage.clone(), Duration::from_secs(5));
    (create_router(app_state), db)
}

/// Router over an arbitrary store (e.g. a `FaultyStore`)
pub fn create_app_with_store(store: Arc<dyn StorageContext>, timeout: Duration) -> Router {
    create_router(AppState::new(store, timeout))
}

/// Send one request and decode the JSON body (`Value::Null` when empty)
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

/// Send a prebuilt request and decode the JSON body
pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, body)
}

/// Create a playlist through the API and return its JSON
pub async fn post_playlist(app: &Router, name: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/playlists",
        Some(serde_json::json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create playlist failed: {body}");
    body["data"].clone()
}

/// Create a song through the API and return its JSON
pub async fn post_song(app: &Router, playlist_id: &str, title: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/songs",
        Some(serde_json::json!({
            "title": title,
            "artist": "Test Artist",
            "playlistId": playlist_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create song failed: {body}");
    body["data"].clone()
}

/// Store wrapper that injects failures and delays around a real store
pub struct FaultyStore {
    pub inner: Arc<dyn StorageContext>,
    pub fail_song_cascade: bool,
    pub fail_max_order: bool,
    pub delay: Option<Duration>,
}

impl FaultyStore {
    pub fn wrap(inner: Arc<dyn StorageContext>) -> Self {
        Self {
            inner,
            fail_song_cascade: false,
            fail_max_order: false,
            delay: None,
        }
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl StorageContext for FaultyStore {
    async fn get_all_playlists(&self) -> Result<Vec<Playlist>> {
        self.pause().await;
        self.inner.get_all_playlists().await
    }

    async fn get_playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        self.pause().await;
        self.inner.get_playlist(id).await
    }

    async fn max_playlist_order(&self) -> Result<MaxOrder> {
        self.pause().await;
        if self.fail_max_order {
            return Err(KaraokeError::database("max order lookup failed"));
        }
        self.inner.max_playlist_order().await
    }

    async fn create_playlist(&self, playlist: NewPlaylist) -> Result<Playlist> {
        self.inner.create_playlist(playlist).await
    }

    async fn update_playlist(
        &self,
        id: &PlaylistId,
        update: UpdatePlaylist,
    ) -> Result<Option<Playlist>> {
        self.inner.update_playlist(id, update).await
    }

    async fn delete_playlist(&self, id: &PlaylistId) -> Result<bool> {
        self.inner.delete_playlist(id).await
    }

    async fn get_songs(&self, filter: &SongFilter) -> Result<Vec<Song>> {
        self.pause().await;
        self.inner.get_songs(filter).await
    }

    async fn get_song(&self, id: &SongId) -> Result<Option<Song>> {
        self.inner.get_song(id).await
    }

    async fn max_song_order(&self, playlist_id: &PlaylistId) -> Result<MaxOrder> {
        if self.fail_max_order {
            return Err(KaraokeError::database("max order lookup failed"));
        }
        self.inner.max_song_order(playlist_id).await
    }

    async fn create_song(&self, song: NewSong) -> Result<Song> {
        self.inner.create_song(song).await
    }

    async fn update_song(&self, id: &SongId, update: UpdateSong) -> Result<Option<Song>> {
        self.inner.update_song(id, update).await
    }

    async fn delete_song(&self, id: &SongId) -> Result<bool> {
        self.inner.delete_song(id).await
    }

    async fn delete_songs_by_playlist(&self, playlist_id: &PlaylistId) -> Result<u64> {
        if self.fail_song_cascade {
            return Err(KaraokeError::database("songs collection unavailable"));
        }
        self.inner.delete_songs_by_playlist(playlist_id).await
    }
}
