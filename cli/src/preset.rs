//! JSON preset persistence.
//!
//! A preset is a named argument list stored as `<name>.json` in the preset
//! directory, with the shape `{"args": ["src", "--dest", "out", ...]}`.
//! Loading a preset re-parses the stored arguments through the normal
//! argument parser, so presets can never drift from the CLI surface.
//!
//! The preset directory is `$PRUNECOPY_PRESET_DIR` when set, otherwise
//! `<user config dir>/prunecopy/presets`.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use thiserror::Error;

/// Errors from preset persistence. All map to exit code 2 in the CLI.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("Preset '{0}' could not be found or loaded")]
    NotFound(String),

    #[error("Preset format invalid (missing 'args') in: {0}")]
    InvalidFormat(PathBuf),

    #[error("Failed to read preset {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write preset {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to parse preset {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Resolve the preset directory.
pub fn preset_dir() -> PathBuf {
    if let Ok(dir) = env::var("PRUNECOPY_PRESET_DIR") {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .unwrap_or_else(env::temp_dir)
        .join("prunecopy")
        .join("presets")
}

/// Load the argument list stored under `name`.
pub fn load(name: &str) -> Result<Vec<String>, PresetError> {
    load_from(&preset_dir(), name)
}

/// Save `args` under `name`, creating the preset directory if needed.
/// Returns the path written.
pub fn save(name: &str, args: &[String]) -> Result<PathBuf, PresetError> {
    save_to(&preset_dir(), name, args)
}

/// Sorted names of all saved presets. A missing preset directory is an
/// empty list, not an error.
pub fn list() -> Result<Vec<String>, PresetError> {
    list_in(&preset_dir())
}

/// The stored argument list of `name`, joined for display.
pub fn show(name: &str) -> Result<String, PresetError> {
    Ok(load(name)?.join(" "))
}

fn preset_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.json"))
}

fn load_from(dir: &Path, name: &str) -> Result<Vec<String>, PresetError> {
    let path = preset_path(dir, name);
    if !path.exists() {
        return Err(PresetError::NotFound(name.to_string()));
    }
    let contents = fs::read_to_string(&path).map_err(|source| PresetError::Read {
        path: path.clone(),
        source,
    })?;
    let value: Value = serde_json::from_str(&contents).map_err(|source| PresetError::Parse {
        path: path.clone(),
        source,
    })?;
    let args = value
        .get("args")
        .and_then(Value::as_array)
        .ok_or_else(|| PresetError::InvalidFormat(path.clone()))?;
    Ok(args
        .iter()
        .filter_map(|arg| arg.as_str().map(str::to_string))
        .collect())
}

fn save_to(dir: &Path, name: &str, args: &[String]) -> Result<PathBuf, PresetError> {
    fs::create_dir_all(dir).map_err(|source| PresetError::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = preset_path(dir, name);
    let value = json!({ "args": args });
    let pretty = serde_json::to_string_pretty(&value).map_err(|source| PresetError::Parse {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, pretty).map_err(|source| PresetError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn list_in(dir: &Path) -> Result<Vec<String>, PresetError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let entries = fs::read_dir(dir).map_err(|source| PresetError::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut names = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
