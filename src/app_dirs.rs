use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    fn project() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "dashtype")
    }

    pub fn config_path() -> PathBuf {
        Self::project()
            .map(|pd| pd.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from("dashtype_config.json"))
    }

    pub fn history_path() -> PathBuf {
        if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("dashtype")
                .join("history.csv")
        } else {
            Self::project()
                .map(|pd| pd.data_local_dir().join("history.csv"))
                .unwrap_or_else(|| PathBuf::from("dashtype_history.csv"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_name_their_files() {
        assert!(AppDirs::config_path().ends_with("config.json"));
        assert!(AppDirs::history_path().ends_with("history.csv"));
    }
}
