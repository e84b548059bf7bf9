use crate::errors::SettingsError;
use crate::password::GenerationConfig;

use std::fs::{ self, File };
use std::io::{ BufReader, ErrorKind };
use std::path::{ Path, PathBuf };

use log::{ debug, info };
use serde::{ Deserialize, Serialize };

/// Stored generator defaults, applied when a flag is not given.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub defaults: GenerationConfig,
}

impl Settings {
    const APP_DIR: &'static str = "oktogen";
    const FILE_NAME: &'static str = "settings.json";

    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let config_dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;

        Ok(config_dir.join(Self::APP_DIR).join(Self::FILE_NAME))
    }

    /// Reads settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("Saved settings to {}", path.display());

        Ok(())
    }

    pub fn defaults_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(&self.defaults)?)
    }

    pub fn reset(path: &Path) -> Result<Self, SettingsError> {
        let settings = Self::default();
        settings.save(path)?;

        Ok(settings)
    }
}
