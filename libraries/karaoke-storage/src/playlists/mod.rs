use crate::rows::{self, to_micros};
use karaoke_core::{error::Result, ordering::MaxOrder, types::*};
use sqlx::{Row, SqlitePool};

const COLUMNS: &str = "id, name, position, created_at, updated_at";

/// Get all playlists ordered by position, then creation time
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Playlist>> {
    let records = sqlx::query(&format!(
        "SELECT {COLUMNS} FROM playlists ORDER BY position ASC, created_at ASC, id ASC"
    ))
    .fetch_all(pool)
    .await?;

    records.iter().map(rows::playlist).collect()
}

/// Get playlist by ID
pub async fn get_by_id(pool: &SqlitePool, id: &PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query(&format!("SELECT {COLUMNS} FROM playlists WHERE id = ?"))
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(rows::playlist).transpose()
}

/// Highest position among all playlists
pub async fn max_order(pool: &SqlitePool) -> Result<MaxOrder> {
    let row = sqlx::query("SELECT MAX(position) AS max_position FROM playlists")
        .fetch_one(pool)
        .await?;

    let max: Option<i64> = row.try_get("max_position")?;
    Ok(MaxOrder::from(max))
}

/// Create new playlist
pub async fn create(pool: &SqlitePool, playlist: NewPlaylist) -> Result<Playlist> {
    let now = now();
    let playlist = Playlist {
        id: PlaylistId::generate(),
        name: playlist.name,
        order: playlist.order,
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO playlists (id, name, position, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(playlist.id.as_str())
    .bind(&playlist.name)
    .bind(playlist.order)
    .bind(to_micros(playlist.created_at))
    .bind(to_micros(playlist.updated_at))
    .execute(pool)
    .await?;

    Ok(playlist)
}

/// Merge a partial update onto the stored playlist
///
/// One statement: absent fields bind as NULL and keep their column value, so
/// concurrent updates never upgrade a read transaction into a write.
pub async fn update(
    pool: &SqlitePool,
    id: &PlaylistId,
    update: UpdatePlaylist,
) -> Result<Option<Playlist>> {
    let row = sqlx::query(&format!(
        r#"
        UPDATE playlists
        SET name = COALESCE(?, name),
            position = COALESCE(?, position),
            updated_at = ?
        WHERE id = ?
        RETURNING {COLUMNS}
        "#
    ))
    .bind(update.name.into_option())
    .bind(update.order.into_option())
    .bind(to_micros(now()))
    .bind(id.as_str())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(rows::playlist).transpose()
}

/// Delete playlist; returns whether a record was removed
pub async fn delete(pool: &SqlitePool, id: &PlaylistId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id.as_str())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
