//! Karaoke Storage
//!
//! `SQLite` document store for playlists and songs.
//!
//! Each entity lives in its own table and is read and written as a whole
//! record, the way a document store would treat it. The store generates
//! identifiers and timestamps; it knows nothing about the song → playlist
//! relationship beyond the column that holds it.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: `playlists` and `songs` own their queries
//! - **Context**: `LocalStorageContext` implements `karaoke_core::StorageContext`
//!
//! # Example
//!
//! ```rust,no_run
//! use karaoke_storage::{LocalStorageContext, create_pool, run_migrations};
//! use karaoke_core::StorageContext;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://karaoke.db").await?;
//! run_migrations(&pool).await?;
//!
//! let storage = LocalStorageContext::new(pool);
//! let playlists = storage.get_all_playlists().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod rows;

// Vertical slices
pub mod playlists;
pub mod songs;

pub use context::LocalStorageContext;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://karaoke.db>`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let in_memory = database_url.contains(":memory:");

    let connection_error = |source| StorageError::Connection {
        url: database_url.to_string(),
        source,
    };

    let mut options = SqliteConnectOptions::from_str(database_url)
        .map_err(connection_error)?
        .create_if_missing(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    // Every connection to `:memory:` opens its own empty database, so pin the
    // pool to a single connection that never gets recycled.
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(connection_error)?;

    tracing::debug!("Pool created");

    Ok(pool)
}

/// Create a pool and bring the schema up to date
pub async fn connect(database_url: &str) -> Result<LocalStorageContext, StorageError> {
    let pool = create_pool(database_url).await?;
    run_migrations(&pool).await?;
    Ok(LocalStorageContext::new(pool))
}
