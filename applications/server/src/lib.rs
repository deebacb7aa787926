//! Karaoke Server Library
//!
//! REST backend for karaoke playlists and their ordered songs.
//!
//! This library exposes the router and its components for the binary and for
//! integration tests.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use routes::create_router;
pub use services::{IntegrityCoordinator, OrderingEngine};
pub use state::AppState;
