use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub api: ApiSettings,
    pub logging: LoggingSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub uploads: RawUploadSettings,
    pub secrets: SecretSettings,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u16,
    pub rate_limiting: RateLimitingSettings,
}

/// Request limits applied to the public auth routes.
#[derive(Debug, Deserialize, Clone)]
pub struct RateLimitingSettings {
    pub req_per_second: u64,
    pub burst_size: u32,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub filter: String,
}

/// Database connection pool configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: u64,
    pub idle_timeout: u64,
    pub acquire_timeout: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    /// Lifetime of issued bearer tokens.
    pub token_expiry_days: i64,
    /// bcrypt work factor used for password hashing.
    pub bcrypt_cost: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawUploadSettings {
    pub avatar_folder: PathBuf,
    /// Length of generated avatar file names.
    pub avatar_id_length: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SecretSettings {
    pub jwt: String,
    pub database_url: String,
}
