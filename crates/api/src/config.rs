/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var        | Default                 |
    /// |----------------|-------------------------|
    /// | `HOST`         | `0.0.0.0`               |
    /// | `PORT`         | `5000`                  |
    /// | `CORS_ORIGINS` | `http://localhost:5173` |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host,
            port,
            cors_origins,
        }
    }
}

/// Database connection settings loaded from `DB_*` environment variables.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub name: String,
    pub host: String,
    pub port: u16,
}

impl DatabaseConfig {
    /// Load database settings from environment variables with defaults.
    ///
    /// | Env Var       | Default     |
    /// |---------------|-------------|
    /// | `DB_TYPE`     | `postgres`  |
    /// | `DB_USER`     | `postgres`  |
    /// | `DB_PASSWORD` | (empty)     |
    /// | `DB_NAME`     | `campus`    |
    /// | `DB_HOST`     | `localhost` |
    /// | `DB_PORT`     | `5432`      |
    ///
    /// `DB_TYPE` exists so misdirected deployments fail fast: anything
    /// other than PostgreSQL aborts startup, since the pool is
    /// Postgres-typed.
    pub fn from_env() -> Self {
        let kind = std::env::var("DB_TYPE").unwrap_or_else(|_| "postgres".into());
        assert!(
            matches!(kind.as_str(), "postgres" | "postgresql"),
            "Unsupported DB_TYPE '{kind}': only PostgreSQL is supported"
        );

        let user = std::env::var("DB_USER").unwrap_or_else(|_| "postgres".into());
        let password = std::env::var("DB_PASSWORD").unwrap_or_default();
        let name = std::env::var("DB_NAME").unwrap_or_else(|_| "campus".into());
        let host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".into());

        let port: u16 = std::env::var("DB_PORT")
            .unwrap_or_else(|_| "5432".into())
            .parse()
            .expect("DB_PORT must be a valid u16");

        Self {
            user,
            password,
            name,
            host,
            port,
        }
    }

    /// Render the settings as a connection URL for the pool.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}
