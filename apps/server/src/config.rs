//! Server configuration read from the environment.

use std::path::PathBuf;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// Read configuration from the environment, loading `.env` first.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("PORT") {
            Ok(p) => p
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid PORT {:?}: {}", p, e))?,
            Err(_) => 3000,
        };
        let db_path = std::env::var("QUIZ_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_db_path());
        let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        Ok(Self {
            host,
            port,
            db_path,
            log_filter,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kanji-quiz")
        .join("quiz.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addr_joins_host_and_port() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            db_path: PathBuf::from("quiz.db"),
            log_filter: "info".to_string(),
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn default_db_path_ends_with_quiz_db() {
        let path = default_db_path();
        assert!(path.ends_with("kanji-quiz/quiz.db"));
    }
}
