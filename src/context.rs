use std::path::PathBuf;

use tracing::debug;

use crate::config::{self, Settings};
use crate::error::AppResult;
use crate::output::Output;
use crate::token::{KubeadmTokenSource, TokenSource};

pub struct AppContext {
    pub settings: Settings,
    pub tokens: Box<dyn TokenSource>,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(config: Option<PathBuf>, json: bool) -> AppResult<Self> {
        let paths = config::resolve_paths(config)?;
        let settings = config::load_settings(&paths)?;
        debug!(
            config_dir = %paths.config_dir().display(),
            settings = %paths.settings_file().display(),
            "loaded settings"
        );

        Ok(Self {
            settings,
            tokens: Box::new(KubeadmTokenSource::new()),
            output: Output::new(json),
        })
    }
}
