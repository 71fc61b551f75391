use crate::config::AppConfig;
use color_eyre::{eyre::eyre, Result};
use sqlx::{
    migrate::MigrateDatabase, query, query_scalar, sqlite::SqlitePoolOptions, Sqlite, SqlitePool,
};
use tracing::{debug, info};

/// Sets up the database by creating the necessary tables if they don't exist
pub async fn setup_database(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    query(
        "CREATE TABLE IF NOT EXISTS venue (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            address TEXT NOT NULL,
            phone TEXT,
            genres TEXT NOT NULL DEFAULT '[]',
            image_link TEXT,
            facebook_link TEXT
        )",
    )
    .execute(pool)
    .await?;

    query(
        "CREATE TABLE IF NOT EXISTS artist (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            phone TEXT,
            genres TEXT NOT NULL DEFAULT '[]',
            image_link TEXT,
            facebook_link TEXT
        )",
    )
    .execute(pool)
    .await?;

    query(
        "CREATE TABLE IF NOT EXISTS show (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            venue_id INTEGER NOT NULL REFERENCES venue(id) ON DELETE CASCADE,
            artist_id INTEGER NOT NULL REFERENCES artist(id) ON DELETE CASCADE,
            start_time TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    query("CREATE INDEX IF NOT EXISTS idx_show_venue_id ON show(venue_id)")
        .execute(pool)
        .await?;
    query("CREATE INDEX IF NOT EXISTS idx_show_artist_id ON show(artist_id)")
        .execute(pool)
        .await?;

    // Listing fields added after the first schema version
    for (table, column, alter_statement) in [
        (
            "venue",
            "website_link",
            "ALTER TABLE venue ADD COLUMN website_link TEXT",
        ),
        (
            "venue",
            "seeking_talent",
            "ALTER TABLE venue ADD COLUMN seeking_talent BOOLEAN NOT NULL DEFAULT FALSE",
        ),
        (
            "venue",
            "seeking_description",
            "ALTER TABLE venue ADD COLUMN seeking_description TEXT",
        ),
        (
            "artist",
            "website_link",
            "ALTER TABLE artist ADD COLUMN website_link TEXT",
        ),
        (
            "artist",
            "seeking_venue",
            "ALTER TABLE artist ADD COLUMN seeking_venue BOOLEAN NOT NULL DEFAULT FALSE",
        ),
        (
            "artist",
            "seeking_description",
            "ALTER TABLE artist ADD COLUMN seeking_description TEXT",
        ),
    ] {
        ensure_column_exists(pool, table, column, alter_statement).await?;
    }

    Ok(())
}

async fn ensure_column_exists(
    pool: &SqlitePool,
    table: &str,
    column: &str,
    alter_statement: &str,
) -> Result<(), sqlx::Error> {
    let count: i64 = query_scalar(&format!(
        "SELECT COUNT(*) FROM pragma_table_info('{table}') WHERE name = ?",
    ))
    .bind(column)
    .fetch_one(pool)
    .await?;

    if count == 0 {
        debug!(table, column, "adding missing column");
        query(alter_statement).execute(pool).await?;
    }

    Ok(())
}

/// Creates a database connection pool using the database URL from config
pub async fn create_database_pool(config: &AppConfig) -> Result<SqlitePool> {
    let database_url = config.database_url.as_str();
    info!(%database_url, "initializing database");

    if database_url == IN_MEMORY_URL {
        return create_in_memory_pool()
            .await
            .map_err(|e| eyre!("Failed to create in-memory database: {e}"));
    }

    let db_path = extract_db_path_from_url(database_url)?;
    debug!(%db_path, "extracted database path");

    if let Some(parent) = std::path::Path::new(&db_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!(parent = %parent.display(), "creating parent directory");
            std::fs::create_dir_all(parent)
                .map_err(|e| eyre!("Failed to create database directory: {e}"))?;
        }
    }

    let db_exists = Sqlite::database_exists(database_url)
        .await
        .map_err(|e| eyre!("Error checking database: {e}"))?;

    if !db_exists {
        info!("database does not exist, creating it now");
        Sqlite::create_database(database_url)
            .await
            .map_err(|e| eyre!("Failed to create SQLite database: {e}"))?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .after_connect(|conn, _| {
            Box::pin(async move {
                use sqlx::Executor as _;
                // Shows reference venues and artists
                conn.execute("PRAGMA foreign_keys = ON;").await?;
                conn.execute("PRAGMA journal_mode = WAL;").await?;
                conn.execute("PRAGMA synchronous = NORMAL;").await?;
                Ok(())
            })
        })
        .connect(database_url)
        .await
        .map_err(|e| eyre!("Failed to connect to SQLite database: {e}"))?;

    setup_database(&pool)
        .await
        .map_err(|e| eyre!("Failed to set up database schema: {e}"))?;

    info!("database initialization completed");
    Ok(pool)
}

pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Creates a single-connection in-memory pool with the schema applied.
///
/// Each SQLite connection to `:memory:` opens its own database, so the pool is
/// capped at one connection, which is never recycled, to keep every query on
/// the same data.
pub async fn create_in_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .after_connect(|conn, _| {
            Box::pin(async move {
                use sqlx::Executor as _;
                conn.execute("PRAGMA foreign_keys = ON;").await?;
                Ok(())
            })
        })
        .connect(IN_MEMORY_URL)
        .await?;

    setup_database(&pool).await?;

    Ok(pool)
}

/// Helper function to extract the database path from a SQLite URL
fn extract_db_path_from_url(url: &str) -> Result<String> {
    if !url.starts_with("sqlite://") {
        return Err(eyre!("Not a valid SQLite URL: {url}"));
    }

    let path_part = url.trim_start_matches("sqlite://");

    if cfg!(windows) {
        // Windows: sqlite:///C:/path or sqlite://C:/path
        if let Some(drive_idx) = path_part.find(':') {
            if drive_idx > 0 {
                let path = path_part
                    .strip_prefix('/')
                    .map_or_else(|| path_part.to_string(), std::string::ToString::to_string);

                return Ok(path);
            }
        }
    }

    // Unix-like absolute path: sqlite:///path
    if path_part.starts_with('/') {
        return Ok(format!("/{}", path_part.trim_start_matches('/')));
    }

    Ok(path_part.to_string())
}
