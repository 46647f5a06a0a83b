use config::{Config, ConfigError, File as ConfigFile};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_submissions_root")]
    pub submissions_root_path: String,
    #[serde(default = "default_catalog_db")]
    pub catalog_db_path: String,
    #[serde(default)]
    pub drive_folder_url: Option<String>,
    #[serde(default)]
    pub drive_api_key: Option<String>,
}

fn default_submissions_root() -> String {
    "submissions".to_string()
}

fn default_catalog_db() -> String {
    "subsync.db".to_string()
}

pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("Config").required(false))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}
