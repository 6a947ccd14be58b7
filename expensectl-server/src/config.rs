//! Store connection configuration
//!
//! Connection parameters are supplied externally; the CLI fills them from
//! flags or the standard libpq variables (`PGHOST`, `PGPORT`, `PGUSER`,
//! `PGPASSWORD`, `PGDATABASE`), with `DATABASE_URL` taking precedence.

use sqlx::postgres::PgConnectOptions;

/// Default PostgreSQL port
pub const DEFAULT_PG_PORT: u16 = 5432;

/// Store connection parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Full connection string; overrides the individual fields when set
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl StoreConfig {
    /// Build sqlx connect options.
    ///
    /// # Errors
    ///
    /// Returns an error if `database_url` is set but cannot be parsed.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.database_url {
            return url.parse();
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database))
    }

    /// Human-readable target for logs (never includes the password)
    pub fn display_target(&self) -> String {
        match &self.database_url {
            Some(_) => "DATABASE_URL".to_string(),
            None => format!("{}@{}:{}/{}", self.user, self.host, self.port, self.database),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            host: "localhost".to_string(),
            port: DEFAULT_PG_PORT,
            user: "postgres".to_string(),
            password: String::new(),
            database: "postgres".to_string(),
        }
    }
}
