//! Runtime configuration read from the process environment

use std::env;
use std::path::PathBuf;

const SAVE_FILE_NAME: &str = "armory-storage.json";

/// Settings needed to bootstrap an engine
#[derive(Clone, Debug)]
pub struct ArmoryConfig {
    /// Directory holding the save file
    pub data_dir: PathBuf,
    /// Catalog file overriding the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// When false, nothing is written to disk
    pub enable_persistence: bool,
    /// Name given to a freshly created agent profile
    pub agent_name: String,
}

impl Default for ArmoryConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            catalog_path: None,
            enable_persistence: true,
            agent_name: "AGENT-001".to_string(),
        }
    }
}

impl ArmoryConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARMORY_DATA_DIR` - Directory for the save file (default: platform data dir)
    /// - `ARMORY_CATALOG` - Catalog TOML to load instead of the built-in one
    /// - `ARMORY_PERSISTENCE` - Set to `false` to keep everything in memory (default: true)
    /// - `ARMORY_AGENT_NAME` - Agent name for a new profile (default: AGENT-001)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("ARMORY_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config.catalog_path = env::var("ARMORY_CATALOG").ok().map(PathBuf::from);

        if let Some(enable) = read_env::<bool>("ARMORY_PERSISTENCE") {
            config.enable_persistence = enable;
        }

        if let Ok(name) = env::var("ARMORY_AGENT_NAME") {
            if !name.trim().is_empty() {
                config.agent_name = name;
            }
        }

        config
    }

    /// Full path of the JSON save file
    pub fn save_path(&self) -> PathBuf {
        self.data_dir.join(SAVE_FILE_NAME)
    }

    /// Directory for exported documents
    pub fn export_dir(&self) -> PathBuf {
        self.data_dir.join("exports")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("dev", "armory", "agent-armory")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".armory"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
