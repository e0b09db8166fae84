use crate::errors::{AppError, AppResult};
use crate::models::{SheetSettings, Timebase};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

pub const DEFAULT_CURRENCY: &str = "£";

const CONFIG_FILE: &str = "tsheet.conf";
const SHEETS_DIR: &str = "sheets";
const JOURNAL_FILE: &str = "tsheet.log";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Timesheet opened most recently; used when `--sheet` is not given.
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default = "default_currency")]
    pub default_currency: String,
    #[serde(default)]
    pub default_timebase: Timebase,
    #[serde(default)]
    pub timesheets: BTreeMap<String, SheetSettings>,

    /// Directory holding the config file, the sheets and the journal.
    #[serde(skip)]
    pub home: PathBuf,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Config {
    fn with_home(home: PathBuf) -> Self {
        Self {
            last: None,
            default_currency: default_currency(),
            default_timebase: Timebase::default(),
            timesheets: BTreeMap::new(),
            home,
        }
    }

    /// Return the standard home directory depending on the platform
    pub fn default_home() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tsheet")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".tsheet")
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.join(CONFIG_FILE)
    }

    pub fn sheets_dir(&self) -> PathBuf {
        self.home.join(SHEETS_DIR)
    }

    pub fn sheet_file(&self, name: &str) -> PathBuf {
        self.sheets_dir().join(format!("{name}.csv"))
    }

    pub fn journal_file(&self) -> PathBuf {
        self.home.join(JOURNAL_FILE)
    }

    /// Load configuration from `home`, or return defaults if not found
    pub fn load(home: &Path) -> AppResult<Self> {
        let path = home.join(CONFIG_FILE);

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Self::with_home(home.to_path_buf())
            } else {
                serde_yaml::from_str::<Config>(&content)
                    .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?
            }
        } else {
            Self::with_home(home.to_path_buf())
        };

        cfg.home = home.to_path_buf();
        log::debug!("loaded config from {}", path.display());
        Ok(cfg)
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(&self.home)?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(self.config_file(), yaml)?;
        log::debug!("saved config to {}", self.config_file().display());
        Ok(())
    }

    /// Create the home directory, the sheets directory and the config file.
    /// An existing config file is left untouched.
    pub fn init_all(home: &Path) -> AppResult<Self> {
        let cfg = Self::load(home)?;
        fs::create_dir_all(cfg.sheets_dir())?;
        if !cfg.config_file().exists() {
            cfg.save()?;
        }
        Ok(cfg)
    }

    /// Stored key of a timesheet, matched case-insensitively.
    pub fn find_sheet(&self, name: &str) -> Option<&str> {
        self.timesheets
            .keys()
            .find(|k| k.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    /// Sheet named on the command line, or the last opened one.
    pub fn resolve_sheet(&self, requested: Option<&str>) -> AppResult<String> {
        match requested {
            Some(name) => self
                .find_sheet(name)
                .map(str::to_string)
                .ok_or_else(|| AppError::SheetNotFound(name.to_string())),
            None => {
                let last = self.last.as_deref().ok_or(AppError::NoActiveSheet)?;
                self.find_sheet(last)
                    .map(str::to_string)
                    .ok_or(AppError::NoActiveSheet)
            }
        }
    }
}
