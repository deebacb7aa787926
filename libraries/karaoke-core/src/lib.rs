//! Karaoke Core
//!
//! Store-agnostic domain types, ordering rules, validation and the storage
//! trait for the karaoke playlist backend.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Playlist`, `Song` and their create/update request shapes
//! - **Partial Updates**: `Patch<T>` distinguishes an absent field from a supplied one
//! - **Ordering**: `MaxOrder` and the "highest sibling + 1" rule
//! - **Storage**: the `StorageContext` trait implemented by `karaoke-storage`
//! - **Error Handling**: unified `KaraokeError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use karaoke_core::ordering::MaxOrder;
//! use karaoke_core::types::{CreatePlaylist, PlaylistId};
//!
//! // The first playlist in an empty store lands at position 0
//! assert_eq!(MaxOrder::Empty.next(), 0);
//! assert_eq!(MaxOrder::Found(4).next(), 5);
//!
//! // Requests are validated before they reach the store
//! let request = CreatePlaylist { name: "Friday Night".to_string() };
//! assert!(request.validate().is_ok());
//!
//! // Identifiers are 24 hex characters
//! assert!(PlaylistId::parse("not-an-id").is_err());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod ordering;
pub mod storage;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{KaraokeError, Result};
pub use ordering::{MaxOrder, Sequenced};
pub use storage::StorageContext;

pub use types::{
    CreatePlaylist, CreateSong, NewPlaylist, NewSong, Patch, Playlist, PlaylistId, Song,
    SongFilter, SongId, SongOrder, UpdatePlaylist, UpdateSong,
};
