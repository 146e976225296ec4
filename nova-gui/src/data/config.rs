use std::{env, fs, fs::File, path::PathBuf, sync::Arc};

use druid::{Data, Lens, Size};
use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "NovaArcade";
const CONFIG_FILENAME: &str = "config.json";
const PROXY_ENV_VAR: &str = "HTTPS_PROXY";

pub const DEFAULT_CATALOG_URL: &str = "https://cdn.novaarcade.net/games.json";

#[derive(Clone, Debug, Data, Lens, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog_url: Arc<str>,
    pub window_size: Size,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.into(),
            window_size: Size::new(1024.0, 768.0),
        }
    }
}

impl Config {
    fn app_dirs() -> Option<AppDirs> {
        const USE_XDG_ON_MACOS: bool = false;

        AppDirs::new(Some(APP_NAME), USE_XDG_ON_MACOS)
    }

    pub fn config_dir() -> Option<PathBuf> {
        Self::app_dirs().map(|dirs| dirs.config_dir)
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILENAME))
    }

    pub fn load() -> Option<Config> {
        let path = Self::config_path()?;
        let file = File::open(&path).ok()?;
        log::info!("loading config: {:?}", &path);
        match serde_json::from_reader(file) {
            Ok(config) => Some(config),
            Err(err) => {
                log::error!("failed to read config: {err}");
                None
            }
        }
    }

    pub fn save(&self) {
        let dir = Self::config_dir().expect("Failed to get config dir");
        let path = Self::config_path().expect("Failed to get config path");
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        let file = File::create(path).expect("Failed to create config");
        serde_json::to_writer_pretty(file, self).expect("Failed to write config");
    }

    pub fn proxy() -> Option<String> {
        env::var(PROXY_ENV_VAR).ok().filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_bundled_catalog() {
        let config = Config::default();
        assert_eq!(config.catalog_url.as_ref(), DEFAULT_CATALOG_URL);
    }

    #[test]
    fn round_trips_through_json() {
        let mut config = Config::default();
        config.catalog_url = "https://example.net/games.json".into();
        let json = serde_json::to_string(&config).unwrap();
        let loaded: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.catalog_url, config.catalog_url);
    }

    #[test]
    fn tolerates_missing_fields() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.catalog_url.as_ref(), DEFAULT_CATALOG_URL);
    }
}
