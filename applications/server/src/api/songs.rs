/// Songs API routes
use crate::{api::ApiResponse, error::Result, state::AppState};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use karaoke_core::{
    types::{CreateSong, NewSong, PlaylistId, Song, SongFilter, SongId, SongOrder, UpdateSong},
    KaraokeError,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListSongsQuery {
    #[serde(rename = "playlistId")]
    pub playlist_id: Option<String>,
}

impl ListSongsQuery {
    /// Build the store filter; an empty `playlistId` means no filter
    fn into_filter(self) -> karaoke_core::Result<SongFilter> {
        match self.playlist_id.as_deref() {
            None | Some("") => Ok(SongFilter::all()),
            Some(raw) => Ok(SongFilter::in_playlist(PlaylistId::parse(raw)?)),
        }
    }
}

/// GET /api/songs?playlistId=
/// List songs sorted by (order, createdAt), optionally for one playlist
pub async fn list_songs(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<ListSongsQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<Song>>>> {
    let Query(query) = query?;
    let filter = query.into_filter()?;

    let songs = app_state
        .with_deadline(app_state.db.get_songs(&filter))
        .await?;
    Ok(Json(ApiResponse::new(songs)))
}

/// POST /api/songs
/// Create a song at the end of an existing playlist
pub async fn create_song(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<CreateSong>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Song>>)> {
    let Json(req) = payload?;
    req.validate()?;

    let song = app_state
        .with_deadline(async {
            let playlist = app_state.integrity.resolve_playlist(&req.playlist_id).await?;
            let order = app_state.ordering.next_song_order(&playlist.id).await?;
            app_state
                .db
                .create_song(NewSong {
                    title: req.title,
                    artist: req.artist,
                    playlist_id: playlist.id,
                    order,
                    tj_number: req.tj_number,
                    lyrics: req.lyrics,
                })
                .await
        })
        .await?;

    tracing::info!(
        id = %song.id,
        playlist_id = %song.playlist_id,
        order = song.order,
        "Song created"
    );
    Ok((StatusCode::CREATED, Json(ApiResponse::new(song))))
}

/// GET /api/songs/:id
/// Get song details
pub async fn get_song(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<Song>>> {
    let song_id = SongId::parse(&id)?;
    let song = app_state
        .with_deadline(app_state.db.get_song(&song_id))
        .await?
        .ok_or_else(|| KaraokeError::not_found("Song", song_id.as_str()))?;

    Ok(Json(ApiResponse::new(song)))
}

/// PUT /api/songs/:id
/// Partially update a song: only supplied fields change
pub async fn update_song(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<UpdateSong>, JsonRejection>,
) -> Result<Json<ApiResponse<Song>>> {
    let song_id = SongId::parse(&id)?;
    let Json(req) = payload?;
    req.validate()?;

    let song = app_state
        .with_deadline(app_state.db.update_song(&song_id, req))
        .await?
        .ok_or_else(|| KaraokeError::not_found("Song", song_id.as_str()))?;

    Ok(Json(ApiResponse::new(song)))
}

/// PUT /api/songs/:id/order
/// Move a song to an explicit position
pub async fn update_song_order(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<SongOrder>, JsonRejection>,
) -> Result<Json<ApiResponse<Song>>> {
    let song_id = SongId::parse(&id)?;
    let Json(req) = payload?;
    let order = req.validate()?;

    let song = app_state
        .with_deadline(app_state.ordering.reorder_song(&song_id, order))
        .await?;

    Ok(Json(ApiResponse::new(song)))
}

/// DELETE /api/songs/:id
/// Delete a song; its playlist is untouched
pub async fn delete_song(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    let song_id = SongId::parse(&id)?;

    app_state
        .with_deadline(app_state.integrity.delete_song(&song_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
