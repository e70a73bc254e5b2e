use crate::{AppSettings, RawSettings};
use color_eyre::eyre::Result;
use std::fs;
use std::path::Path;

/// Loads application settings from `config/settings.yaml`, with `.env` and
/// `APP__`-prefixed environment variables layered on top
/// (e.g. `APP__SECRETS__DATABASE_URL`).
pub fn load_app_settings() -> Result<AppSettings> {
    // Load .env first so env overrides below can come from it.
    dotenv::from_path(".env").ok();
    let config_path = Path::new("config/settings.yaml").canonicalize()?;

    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

    let raw_settings = builder.build()?.try_deserialize::<RawSettings>()?;
    let settings: AppSettings = raw_settings.into();

    fs::create_dir_all(&settings.uploads.avatar_folder)?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use crate::{AppSettings, RawSettings};

    const EXAMPLE: &str = r#"
api:
  host: "0.0.0.0"
  port: 3900
  rate_limiting:
    req_per_second: 5
    burst_size: 20
logging:
  filter: "api=info"
database:
  max_connections: 10
  min_connections: 1
  max_lifetime: 1800
  idle_timeout: 600
  acquire_timeout: 10
auth:
  token_expiry_days: 30
  bcrypt_cost: 12
uploads:
  avatar_folder: "uploads/avatars"
  avatar_id_length: 16
secrets:
  jwt: "test-secret"
  database_url: "postgres://localhost/social"
"#;

    #[test]
    fn settings_deserialize_from_yaml() {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(EXAMPLE, config::FileFormat::Yaml));
        let raw = builder
            .build()
            .unwrap()
            .try_deserialize::<RawSettings>()
            .unwrap();
        let settings: AppSettings = raw.into();

        assert_eq!(settings.api.port, 3900);
        assert_eq!(settings.auth.token_expiry_days, 30);
        assert_eq!(settings.auth.bcrypt_cost, 12);
        assert!(settings.uploads.avatar_folder.is_absolute());
    }
}
