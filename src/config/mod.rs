use crate::errors::{AppError, AppResult};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate;

pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";
pub const DEFAULT_DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

pub const ENV_DB: &str = "RWORKLOG_DB";
pub const ENV_TIMEZONE: &str = "RWORKLOG_TIMEZONE";
pub const ENV_ADMIN_SECRET_HASH: &str = "RWORKLOG_ADMIN_SECRET_HASH";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_display_format")]
    pub display_format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_secret_hash: Option<String>,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}
fn default_display_format() -> String {
    DEFAULT_DISPLAY_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file().to_string_lossy().to_string())
    }
}

impl Config {
    pub fn with_database(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            timezone: default_timezone(),
            display_format: default_display_format(),
            admin_secret_hash: None,
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworklog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworklog.sqlite")
    }

    /// Configuration exactly as stored on disk (defaults if the file is
    /// missing). No environment override is applied; this is the base for
    /// every write back to the file.
    pub fn load_file() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Effective configuration: the file (or defaults) plus environment overrides.
    pub fn load() -> AppResult<Self> {
        let mut cfg = Self::load_file()?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(db) = env::var(ENV_DB)
            && !db.trim().is_empty()
        {
            self.database = db;
        }
        if let Ok(tz) = env::var(ENV_TIMEZONE)
            && !tz.trim().is_empty()
        {
            self.timezone = tz;
        }
        if let Ok(hash) = env::var(ENV_ADMIN_SECRET_HASH)
            && !hash.trim().is_empty()
        {
            self.admin_secret_hash = Some(hash);
        }
    }

    /// Civil timezone used to compute "today" and to render stored instants.
    pub fn civil_tz(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| AppError::InvalidTimezone(self.timezone.clone()))
    }

    /// Persist the configuration to the standard config file.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Database name given to `init --db`: relative names live in the config dir.
    pub fn resolve_database(name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Create or update the configuration file for `init`.
    ///
    /// Values already in the file are kept; only an explicit database name
    /// and a new admin secret hash replace them. In test mode nothing is
    /// written and the would-be configuration is returned.
    pub fn init_all(
        custom_name: Option<&str>,
        admin_secret_hash: Option<String>,
        is_test: bool,
    ) -> AppResult<Config> {
        fs::create_dir_all(Self::config_dir())?;

        let mut config = Self::load_file()?;

        if let Some(name) = custom_name {
            config.database = Self::resolve_database(name).to_string_lossy().to_string();
        }
        if admin_secret_hash.is_some() {
            config.admin_secret_hash = admin_secret_hash;
        }

        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }
}
