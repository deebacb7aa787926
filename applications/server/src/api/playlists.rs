/// Playlists API routes
use crate::{api::ApiResponse, error::Result, state::AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use karaoke_core::{
    types::{CreatePlaylist, NewPlaylist, Playlist, PlaylistId, UpdatePlaylist},
    KaraokeError,
};

/// GET /api/playlists
/// Get all playlists sorted by (order, createdAt)
pub async fn list_playlists(
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Playlist>>>> {
    let playlists = app_state
        .with_deadline(app_state.db.get_all_playlists())
        .await?;
    Ok(Json(ApiResponse::new(playlists)))
}

/// POST /api/playlists
/// Create a new playlist at the end of the list
pub async fn create_playlist(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<CreatePlaylist>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Playlist>>)> {
    let Json(req) = payload?;
    req.validate()?;

    let playlist = app_state
        .with_deadline(async {
            let order = app_state.ordering.next_playlist_order().await?;
            app_state
                .db
                .create_playlist(NewPlaylist {
                    name: req.name,
                    order,
                })
                .await
        })
        .await?;

    tracing::info!(id = %playlist.id, order = playlist.order, "Playlist created");
    Ok((StatusCode::CREATED, Json(ApiResponse::new(playlist))))
}

/// GET /api/playlists/:id
/// Get playlist details
pub async fn get_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<Playlist>>> {
    let playlist_id = PlaylistId::parse(&id)?;
    let playlist = app_state
        .with_deadline(app_state.db.get_playlist(&playlist_id))
        .await?
        .ok_or_else(|| KaraokeError::not_found("Playlist", playlist_id.as_str()))?;

    Ok(Json(ApiResponse::new(playlist)))
}

/// PUT /api/playlists/:id
/// Partially update a playlist: only supplied fields change
pub async fn update_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<UpdatePlaylist>, JsonRejection>,
) -> Result<Json<ApiResponse<Playlist>>> {
    let playlist_id = PlaylistId::parse(&id)?;
    let Json(req) = payload?;
    req.validate()?;

    let playlist = app_state
        .with_deadline(app_state.db.update_playlist(&playlist_id, req))
        .await?
        .ok_or_else(|| KaraokeError::not_found("Playlist", playlist_id.as_str()))?;

    Ok(Json(ApiResponse::new(playlist)))
}

/// DELETE /api/playlists/:id
/// Delete a playlist together with its songs
pub async fn delete_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    let playlist_id = PlaylistId::parse(&id)?;

    app_state
        .with_deadline(app_state.integrity.delete_playlist(&playlist_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
