use app_state::AppSettings;
use rand::Rng;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;
use tracing::info;

/// Build a database connection pool from settings.
/// # Errors
///
/// * `PgPoolOptions::connect` can return an error if the database connection fails.
pub async fn get_db_pool(settings: &AppSettings) -> color_eyre::Result<Pool<Postgres>> {
    let db_settings = &settings.database;
    info!("Connecting to database.");
    let pool = PgPoolOptions::new()
        .max_connections(db_settings.max_connections)
        .min_connections(db_settings.min_connections)
        .max_lifetime(Duration::from_secs(db_settings.max_lifetime))
        .idle_timeout(Duration::from_secs(db_settings.idle_timeout))
        .acquire_timeout(Duration::from_secs(db_settings.acquire_timeout))
        .test_before_acquire(true)
        .connect(&settings.secrets.database_url)
        .await?;
    Ok(pool)
}

/// Generate a URL-safe random ID of a given length.
#[must_use]
pub fn nice_id(length: usize) -> String {
    const URL_SAFE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..URL_SAFE.len());
            URL_SAFE[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::nice_id;

    #[test]
    fn nice_id_has_requested_length() {
        assert_eq!(nice_id(16).len(), 16);
        assert_eq!(nice_id(0).len(), 0);
    }

    #[test]
    fn nice_id_is_url_safe() {
        let id = nice_id(256);
        assert!(
            id.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }
}
