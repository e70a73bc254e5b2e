use crate::{
    ApiSettings, AuthSettings, DatabaseSettings, LoggingSettings, RawSettings, SecretSettings,
};
use serde::Deserialize;
use std::path::{PathBuf, absolute};

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub logging: LoggingSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub uploads: UploadSettings,
    pub secrets: SecretSettings,
}

/// Upload settings with the avatar folder resolved to an absolute path.
#[derive(Debug, Deserialize, Clone)]
pub struct UploadSettings {
    pub avatar_folder: PathBuf,
    pub avatar_id_length: usize,
}

impl From<RawSettings> for AppSettings {
    fn from(raw: RawSettings) -> Self {
        let avatar_folder =
            absolute(&raw.uploads.avatar_folder).expect("Invalid avatar_folder path");
        Self {
            api: raw.api,
            logging: raw.logging,
            database: raw.database,
            auth: raw.auth,
            uploads: UploadSettings {
                avatar_folder,
                avatar_id_length: raw.uploads.avatar_id_length,
            },
            secrets: raw.secrets,
        }
    }
}
