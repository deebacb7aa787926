/// Failures while opening or decoding the store
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// The pool couldn't be opened for `url`
    #[error("Failed to open database {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    /// Embedded migrations failed to apply
    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored value couldn't be turned back into a domain type
    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

impl From<StorageError> for karaoke_core::KaraokeError {
    fn from(err: StorageError) -> Self {
        karaoke_core::KaraokeError::database(err.to_string())
    }
}
