/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8222`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// First door number in the seed range (default: `1`).
    ///
    /// Sites differ only in which run numbers their doors carry
    /// (1..50 at one site, 50..99 at another), so the range is
    /// configuration rather than code.
    pub door_seed_start: i64,
    /// Number of doors to seed on first run (default: `50`).
    pub door_seed_count: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8222`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DOOR_SEED_START`      | `1`                        |
    /// | `DOOR_SEED_COUNT`      | `50`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8222".into())
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

        let door_seed_start: i64 = std::env::var("DOOR_SEED_START")
            .unwrap_or_else(|_| "1".into())
            .parse()
            .expect("DOOR_SEED_START must be a valid i64");

        let door_seed_count: i64 = std::env::var("DOOR_SEED_COUNT")
            .unwrap_or_else(|_| "50".into())
            .parse()
            .expect("DOOR_SEED_COUNT must be a valid i64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            door_seed_start,
            door_seed_count,
        }
    }
}
