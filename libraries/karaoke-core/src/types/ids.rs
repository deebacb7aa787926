/// ID types for karaoke entities
///
/// Identifiers are 12 bytes rendered as 24 lowercase hex characters: a 4-byte
/// big-endian creation timestamp (seconds) followed by 8 random bytes.
use crate::error::{KaraokeError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Length of a hex-encoded identifier
pub const ID_HEX_LEN: usize = 24;

fn generate_hex() -> String {
    let mut bytes = [0u8; ID_HEX_LEN / 2];
    let secs = Utc::now().timestamp() as u32;
    bytes[..4].copy_from_slice(&secs.to_be_bytes());
    bytes[4..].copy_from_slice(&Uuid::new_v4().as_bytes()[8..]);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn is_well_formed(value: &str) -> bool {
    value.len() == ID_HEX_LEN && value.bytes().all(|b| b.is_ascii_hexdigit())
}

macro_rules! hex_id {
    ($(#[$meta:meta])* $name:ident, $entity:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Wrap an identifier already known to be well formed (e.g. read back from the store)
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new identifier
            pub fn generate() -> Self {
                Self(generate_hex())
            }

            /// Parse client input, rejecting anything that is not 24 hex characters
            pub fn parse(value: &str) -> Result<Self> {
                if is_well_formed(value) {
                    Ok(Self(value.to_ascii_lowercase()))
                } else {
                    Err(KaraokeError::invalid_reference($entity, value))
                }
            }

            /// Get the inner string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = KaraokeError;

            fn try_from(value: String) -> Result<Self> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

hex_id!(
    /// Playlist identifier
    PlaylistId,
    "playlist"
);

hex_id!(
    /// Song identifier
    SongId,
    "song"
);
