use color_eyre::eyre::{eyre, WrapErr};
use dotenv::dotenv;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::db::migrations::IN_MEMORY_URL;

const DEFAULT_DATABASE_NAME: &str = "fyyur.db";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

/// Settings the server reads once at start-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
}

impl AppConfig {
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Initializes the application configuration from the environment and `.env`
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    let base_dir: PathBuf = env::current_dir()?;
    let db_name = env::var("DATABASE_NAME").unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string());
    let database_url = database_url_for(&base_dir, &db_name)?;

    let host: IpAddr = match env::var("HOST") {
        Ok(host) => host
            .parse()
            .wrap_err_with(|| format!("Invalid HOST value: {host}"))?,
        Err(_) => DEFAULT_HOST.parse()?,
    };

    let port: u16 = match env::var("PORT") {
        Ok(port) => port
            .parse()
            .wrap_err_with(|| format!("Invalid PORT value: {port}"))?,
        Err(_) => DEFAULT_PORT,
    };

    let log_file = env::var("LOG_FILE")
        .ok()
        .filter(|path| !path.is_empty())
        .map(PathBuf::from);

    let debug = env::var("DEBUG").is_ok_and(|value| is_truthy(&value));

    Ok(AppConfig {
        database_url,
        host,
        port,
        log_file,
        debug,
    })
}

fn is_truthy(value: &str) -> bool {
    !matches!(value.trim().to_lowercase().as_str(), "" | "0" | "false" | "no")
}

/// Builds the SQLx URL for a database name relative to `base_dir`.
///
/// SQLx requires:
/// - For absolute paths: sqlite:///absolute/path/to/file.db (3 slashes total)
/// - For relative paths: sqlite://relative/path/to/file.db (2 slashes total)
pub fn database_url_for(base_dir: &Path, db_name: &str) -> color_eyre::eyre::Result<String> {
    if db_name == ":memory:" {
        return Ok(IN_MEMORY_URL.to_string());
    }

    // We don't canonicalize because the file might not exist yet
    let database_path = base_dir.join(db_name);
    let path_str = database_path
        .to_str()
        .ok_or_else(|| eyre!("Invalid database path"))?;

    // Strip any leading slashes from the path to avoid double slashes
    let clean_path = path_str.trim_start_matches('/');

    if database_path.is_absolute() {
        Ok(format!("sqlite:///{clean_path}"))
    } else {
        Ok(format!("sqlite://{clean_path}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_for_absolute_base() -> color_eyre::eyre::Result<()> {
        let url = database_url_for(Path::new("/srv/fyyur"), "fyyur.db")?;
        assert_eq!(url, "sqlite:///srv/fyyur/fyyur.db");
        Ok(())
    }

    #[test]
    fn test_database_url_for_relative_base() -> color_eyre::eyre::Result<()> {
        let url = database_url_for(Path::new("data"), "fyyur.db")?;
        assert_eq!(url, "sqlite://data/fyyur.db");
        Ok(())
    }

    #[test]
    fn test_database_url_for_memory() -> color_eyre::eyre::Result<()> {
        assert_eq!(
            database_url_for(Path::new("/srv"), ":memory:")?,
            "sqlite::memory:"
        );
        Ok(())
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy("1"));
        assert!(is_truthy("yes"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("False"));
    }
}
