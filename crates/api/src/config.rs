use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub storage: StorageConfig,
    pub gemini: GeminiConfig,
}

/// Where the event and inquiry collections live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
    Sqlite,
}

impl StorageBackend {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "memory" => Some(Self::Memory),
            "file" => Some(Self::File),
            "sqlite" => Some(Self::Sqlite),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory for the file backend.
    pub dir: PathBuf,
    /// Connection string for the SQLite backend.
    pub database_url: String,
}

/// Settings for the description enhancement endpoint.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Without a key the endpoint answers 503.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl GeminiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";
    pub const DEFAULT_MODEL: &'static str = "gemini-1.5-flash-latest";

    /// Load from `GEMINI_API_KEY` / `GEMINI_MODEL`; an empty key counts as unset.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| Self::DEFAULT_MODEL.into());

        Self {
            api_key,
            model,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Configuration with no API key.
    pub fn disabled() -> Self {
        Self {
            api_key: None,
            model: Self::DEFAULT_MODEL.to_string(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                              |
    /// |------------------------|--------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                            |
    /// | `PORT`                 | `3000`                               |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                 |
    /// | `STORAGE_BACKEND`      | `file`                               |
    /// | `STORAGE_DIR`          | `./data`                             |
    /// | `DATABASE_URL`         | `sqlite://sponsorlink.db?mode=rwc`   |
    /// | `GEMINI_API_KEY`       | unset                                |
    /// | `GEMINI_MODEL`         | `gemini-1.5-flash-latest`            |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let backend_name = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "file".into());
        let backend = StorageBackend::from_name(&backend_name)
            .unwrap_or_else(|| panic!("STORAGE_BACKEND must be memory, file or sqlite, got '{backend_name}'"));

        let storage = StorageConfig {
            backend,
            dir: std::env::var("STORAGE_DIR")
                .unwrap_or_else(|_| "./data".into())
                .into(),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://sponsorlink.db?mode=rwc".into()),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage,
            gemini: GeminiConfig::from_env(),
        }
    }
}
