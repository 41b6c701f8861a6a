//! Config file upgrades: detect keys missing from an older YAML file and
//! fill them with defaults without touching the values already present.

use super::{Config, DEFAULT_DISPLAY_FORMAT, DEFAULT_TIMEZONE};
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every config file is expected to carry, with their default value.
/// `admin_secret_hash` is optional and never filled automatically.
fn required_keys() -> Vec<(&'static str, String)> {
    vec![
        (
            "database",
            Config::database_file().to_string_lossy().to_string(),
        ),
        ("timezone", DEFAULT_TIMEZONE.to_string()),
        ("display_format", DEFAULT_DISPLAY_FORMAT.to_string()),
    ]
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: top-level value is not a mapping",
            path.display()
        ))),
    }
}

/// Return the names of the required keys absent from the config file.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let map = read_mapping(path)?;

    Ok(required_keys()
        .into_iter()
        .filter(|(key, _)| !map.contains_key(Value::String((*key).to_string())))
        .map(|(key, _)| key.to_string())
        .collect())
}

/// Add the missing keys with their defaults and rewrite the file.
/// Returns the keys that were added; an up-to-date file is left untouched.
pub fn fill_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let mut map = read_mapping(path)?;
    let mut added = Vec::new();

    for (key, default) in required_keys() {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k) {
            map.insert(k, Value::String(default));
            added.push(key.to_string());
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized =
        serde_yaml::to_string(&Value::Mapping(map)).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, serialized)?;

    Ok(added)
}
