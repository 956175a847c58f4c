use crate::app_dirs::AppDirs;
use crate::error::{Error, Result};
use crate::session::SessionConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Test lengths offered by the settings pane
pub const TEST_LENGTHS: [usize; 3] = [10, 25, 50];

/// Lowest WPM treated as a real attempt when fencing outliers
pub const DEFAULT_WPM_FLOOR: f64 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub test_length: usize,
    pub punctuation: bool,
    pub outlier_floor: f64,
    /// Fixed seed for reproducible prompts
    pub seed: Option<u64>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            test_length: TEST_LENGTHS[0],
            punctuation: false,
            outlier_floor: DEFAULT_WPM_FLOOR,
            seed: None,
        }
    }
}

impl Preferences {
    pub fn validate(&self) -> Result<()> {
        if self.test_length == 0 {
            return Err(Error::InvalidConfig(
                "test length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(self.test_length, self.punctuation)
    }
}

pub trait ConfigStore {
    fn load(&self) -> Preferences;
    fn save(&self, prefs: &Preferences) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    /// Missing or unreadable files fall back to defaults
    fn load(&self) -> Preferences {
        let Ok(bytes) = fs::read(&self.path) else {
            return Preferences::default();
        };
        match serde_json::from_slice::<Preferences>(&bytes) {
            Ok(prefs) if prefs.validate().is_ok() => prefs,
            Ok(_) | Err(_) => {
                warn!(path = %self.path.display(), "ignoring unusable preferences file");
                Preferences::default()
            }
        }
    }

    fn save(&self, prefs: &Preferences) -> Result<()> {
        prefs.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(prefs)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
