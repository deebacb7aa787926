//! Row decoding shared by the slices

use crate::error::StorageError;
use chrono::{DateTime, Utc};
use karaoke_core::{
    types::{Playlist, PlaylistId, Song, SongId},
    Result,
};
use sqlx::{sqlite::SqliteRow, Row};

/// Timestamps are stored as microseconds since the Unix epoch
pub(crate) fn to_micros(at: DateTime<Utc>) -> i64 {
    at.timestamp_micros()
}

fn from_micros(micros: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros)
        .ok_or_else(|| StorageError::Corrupt(format!("invalid timestamp {micros}")).into())
}

pub(crate) fn playlist(row: &SqliteRow) -> Result<Playlist> {
    Ok(Playlist {
        id: PlaylistId::new(row.try_get::<String, _>("id")?),
        name: row.try_get("name")?,
        order: row.try_get("position")?,
        created_at: from_micros(row.try_get("created_at")?)?,
        updated_at: from_micros(row.try_get("updated_at")?)?,
    })
}

pub(crate) fn song(row: &SqliteRow) -> Result<Song> {
    Ok(Song {
        id: SongId::new(row.try_get::<String, _>("id")?),
        title: row.try_get("title")?,
        artist: row.try_get("artist")?,
        playlist_id: PlaylistId::new(row.try_get::<String, _>("playlist_id")?),
        order: row.try_get("position")?,
        tj_number: row.try_get("tj_number")?,
        lyrics: row.try_get("lyrics")?,
        created_at: from_micros(row.try_get("created_at")?)?,
        updated_at: from_micros(row.try_get("updated_at")?)?,
    })
}
