use crate::rows::{self, to_micros};
use karaoke_core::{error::Result, ordering::MaxOrder, types::*};
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

const COLUMNS: &str =
    "id, title, artist, playlist_id, position, tj_number, lyrics, created_at, updated_at";

/// Get songs, optionally restricted to one playlist, in display order
pub async fn get_all(pool: &SqlitePool, filter: &SongFilter) -> Result<Vec<Song>> {
    let mut query = QueryBuilder::<Sqlite>::new(format!("SELECT {COLUMNS} FROM songs"));

    if let Some(playlist_id) = &filter.playlist_id {
        query
            .push(" WHERE playlist_id = ")
            .push_bind(playlist_id.as_str().to_owned());
    }

    query.push(" ORDER BY position ASC, created_at ASC, id ASC");

    let records = query.build().fetch_all(pool).await?;

    records.iter().map(rows::song).collect()
}

/// Get song by ID
pub async fn get_by_id(pool: &SqlitePool, id: &SongId) -> Result<Option<Song>> {
    let row = sqlx::query(&format!("SELECT {COLUMNS} FROM songs WHERE id = ?"))
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(rows::song).transpose()
}

/// Highest position among the songs of one playlist
pub async fn max_order(pool: &SqlitePool, playlist_id: &PlaylistId) -> Result<MaxOrder> {
    let row = sqlx::query("SELECT MAX(position) AS max_position FROM songs WHERE playlist_id = ?")
        .bind(playlist_id.as_str())
        .fetch_one(pool)
        .await?;

    let max: Option<i64> = row.try_get("max_position")?;
    Ok(MaxOrder::from(max))
}

/// Create new song
pub async fn create(pool: &SqlitePool, song: NewSong) -> Result<Song> {
    let now = now();
    let song = Song {
        id: SongId::generate(),
        title: song.title,
        artist: song.artist,
        playlist_id: song.playlist_id,
        order: song.order,
        tj_number: song.tj_number,
        lyrics: song.lyrics,
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO songs (id, title, artist, playlist_id, position, tj_number, lyrics, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(song.id.as_str())
    .bind(&song.title)
    .bind(&song.artist)
    .bind(song.playlist_id.as_str())
    .bind(song.order)
    .bind(song.tj_number)
    .bind(&song.lyrics)
    .bind(to_micros(song.created_at))
    .bind(to_micros(song.updated_at))
    .execute(pool)
    .await?;

    Ok(song)
}

/// Merge a partial update onto the stored song in a single statement
pub async fn update(pool: &SqlitePool, id: &SongId, update: UpdateSong) -> Result<Option<Song>> {
    let row = sqlx::query(&format!(
        r#"
        UPDATE songs
        SET title = COALESCE(?, title),
            artist = COALESCE(?, artist),
            position = COALESCE(?, position),
            tj_number = COALESCE(?, tj_number),
            lyrics = COALESCE(?, lyrics),
            updated_at = ?
        WHERE id = ?
        RETURNING {COLUMNS}
        "#
    ))
    .bind(update.title.into_option())
    .bind(update.artist.into_option())
    .bind(update.order.into_option())
    .bind(update.tj_number.into_option())
    .bind(update.lyrics.into_option())
    .bind(to_micros(now()))
    .bind(id.as_str())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(rows::song).transpose()
}

/// Delete song; returns whether a record was removed
pub async fn delete(pool: &SqlitePool, id: &SongId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id.as_str())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete every song that belongs to a playlist
pub async fn delete_by_playlist(pool: &SqlitePool, playlist_id: &PlaylistId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM songs WHERE playlist_id = ?")
        .bind(playlist_id.as_str())
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
