use crate::config::{Config, migrate};
use crate::core::auth::hash_secret;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration; the admin hash is never echoed.
    pub fn print(cfg: &Config) -> AppResult<()> {
        let mut shown = cfg.clone();
        if shown.admin_secret_hash.is_some() {
            shown.admin_secret_hash = Some("<set>".into());
        }

        let yaml = serde_yaml::to_string(&shown).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration:\n");
        println!("{}", yaml);
        Ok(())
    }

    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open the config file in `editor`, falling back to the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = Self::default_editor();
        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{}'", requested));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                requested, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            Ok(_) | Err(_) => Err(AppError::Config(format!(
                "failed to edit configuration file using '{}'",
                default_editor
            ))),
        }
    }

    pub fn check(path: &Path) -> AppResult<()> {
        if !path.exists() {
            warning(format!(
                "Configuration file not found: {} (run `init`)",
                path.display()
            ));
            return Ok(());
        }

        let missing = migrate::missing_fields(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!("Missing fields: {}", missing.join(", ")));
            info("Run `config --migrate` to add them with default values.");
        }
        Ok(())
    }

    pub fn migrate(path: &Path, is_test: bool) -> AppResult<()> {
        if !path.exists() {
            warning(format!(
                "Configuration file not found: {} (run `init`)",
                path.display()
            ));
            return Ok(());
        }

        if is_test {
            info("Test mode: configuration file left untouched.");
            return Self::check(path);
        }

        let added = migrate::fill_missing_fields(path)?;
        if added.is_empty() {
            info("Configuration already up to date.");
        } else {
            success(format!("Added fields: {}", added.join(", ")));
        }
        Ok(())
    }

    /// Store a bcrypt hash of `secret` in the config file.
    ///
    /// Starts from the file as stored on disk, so `--db` and environment
    /// overrides of this run are never persisted.
    pub fn set_admin_secret(secret: &str, is_test: bool) -> AppResult<()> {
        let hash = hash_secret(secret)?;

        if is_test {
            info("Test mode: configuration file left untouched.");
            return Ok(());
        }

        let mut on_disk = Config::load_file()?;
        on_disk.admin_secret_hash = Some(hash);
        on_disk.save()?;

        success("Admin secret updated.");
        Ok(())
    }
}
