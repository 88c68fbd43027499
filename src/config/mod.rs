pub mod paths;
pub mod settings;

use std::path::PathBuf;

pub use paths::AppPaths;
pub use settings::Settings;

use crate::error::AppResult;

pub fn resolve_paths(explicit: Option<PathBuf>) -> AppResult<AppPaths> {
    match explicit {
        Some(path) => Ok(AppPaths::with_settings_file(path)),
        None => AppPaths::discover(),
    }
}

pub fn load_settings(paths: &AppPaths) -> AppResult<Settings> {
    settings::load(paths.settings_file())
}
