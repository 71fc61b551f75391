use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "fyyur", version, about = "Venue and artist booking directory")]
pub struct CliArgs {
    /// Override database path
    #[arg(long, value_name = "PATH")]
    pub db: Option<String>,

    /// Address to listen on
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Also append log lines to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl CliArgs {
    /// Flags win over the environment and `.env`, which are read afterwards
    pub fn apply_env_overrides(&self) {
        if let Some(db) = &self.db {
            std::env::set_var("DATABASE_NAME", db);
        }
        if let Some(host) = &self.host {
            std::env::set_var("HOST", host);
        }
        if let Some(port) = self.port {
            std::env::set_var("PORT", port.to_string());
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "fyyur",
            "--db",
            "data/fyyur.db",
            "--port",
            "8080",
            "--debug",
        ]);

        assert_eq!(args.db.as_deref(), Some("data/fyyur.db"));
        assert_eq!(args.port, Some(8080));
        assert!(args.debug);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(CliArgs::try_parse_from(["fyyur", "--port", "http"]).is_err());
    }
}
