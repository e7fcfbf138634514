//! Rules settings read from `settings.toml`.

use std::io;
use std::path::{Path, PathBuf};

use crawl_core::{ConfigError, GameConfig};
use directories::ProjectDirs;
use tracing::info;

use crate::APP_NAME;

pub const SETTINGS_FILE_NAME: &str = "settings.toml";

pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push(SETTINGS_FILE_NAME);
        path
    })
}

/// Loads the rules config. A missing file means defaults; any other read, parse, or
/// validation failure is returned.
pub fn load_settings(path: Option<&Path>) -> Result<GameConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    match GameConfig::load(path) {
        Err(ConfigError::Io(error)) if error.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no settings file, using defaults");
            Ok(GameConfig::default())
        }
        other => other,
    }
}
