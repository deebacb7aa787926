mod ids;
mod patch;
mod playlist;
mod song;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

pub use ids::{PlaylistId, SongId, ID_HEX_LEN};
pub use patch::Patch;
pub use playlist::{CreatePlaylist, NewPlaylist, Playlist, UpdatePlaylist};
pub use song::{CreateSong, NewSong, Song, SongFilter, SongOrder, UpdateSong};

/// Current time at the precision the store keeps (microseconds)
pub fn now() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_micros(now.timestamp_micros()).unwrap_or(now)
}

/// Read a JSON `null` as an empty string so required-field validation reports
/// it like a missing key
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
