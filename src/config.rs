use crate::app::keymap::KeyConfig;
use crate::domain::{demo_options, DropdownOption};
use crate::error::ConfigError;
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub theme: PaletteType,
    pub keys: KeyConfig,
    pub options: Vec<DropdownOption>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: PaletteType::CatppuccinMocha,
            keys: KeyConfig::default(),
            options: demo_options(),
        }
    }
}

impl AppConfig {
    /// Loads `~/.config/picklist/config.toml`, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = config_dir().map(|dir| dir.join("config.toml")) else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "using default config");
                Self::default()
            }
        }
    }

    /// A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str::<Self>(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), options = config.options.len(), "loaded config");
        Ok(config)
    }

    /// Positional arguments replace the configured options.
    #[must_use]
    pub fn with_args<I: IntoIterator<Item = String>>(mut self, args: I) -> Self {
        let options: Vec<DropdownOption> = args.into_iter().map(DropdownOption::new).collect();
        if !options.is_empty() {
            self.options = options;
        }
        self
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("picklist");
        path
    })
}
