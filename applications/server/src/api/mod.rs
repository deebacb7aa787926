/// API route modules
pub mod envelope;
pub mod health;
pub mod playlists;
pub mod songs;

pub use envelope::ApiResponse;
