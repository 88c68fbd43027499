use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "kprofile";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    settings_file: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;

        Ok(Self::in_dir(config_root.join(APP_DIR)))
    }

    pub fn in_dir(config_dir: PathBuf) -> Self {
        let settings_file = config_dir.join(SETTINGS_FILE);
        Self {
            config_dir,
            settings_file,
        }
    }

    /// Uses an explicit settings file, e.g. from `--config`.
    pub fn with_settings_file(settings_file: PathBuf) -> Self {
        let config_dir = settings_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self {
            config_dir,
            settings_file,
        }
    }

    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}
