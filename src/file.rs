//! Config file discovery and loading.
//!
//! # Discovery
//!
//! The search path list is probed **in order**; within each directory the
//! supported extensions are tried in [`SUPPORTED_EXTENSIONS`] order. The first
//! existing regular file `{dir}/{base_name}.{ext}` wins and no other file is
//! read. Missing files are skipped silently here; the caller decides whether
//! "nothing found" deserves a warning.
//!
//! # Loading
//!
//! The format is chosen by extension. Every format is parsed into the same
//! value model (`serde_json::Value`), and top-level keys are lowercased so
//! lookups are case-insensitive.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::GardenLoginError;

/// Extensions probed during discovery, in priority order.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["json", "toml", "yaml", "yml"];

/// Structured formats a config file can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "toml" => Some(Format::Toml),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }

    /// Parse a document into its top-level mapping.
    pub fn parse(self, content: &str) -> Result<serde_json::Map<String, Value>, String> {
        if content.trim().is_empty() {
            return Ok(serde_json::Map::new());
        }
        match self {
            Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Format::Toml => {
                let table: toml::Table = toml::from_str(content).map_err(|e| e.to_string())?;
                Ok(table
                    .into_iter()
                    .map(|(k, v)| (k, toml_to_json(v)))
                    .collect())
            }
            Format::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Datetimes have no JSON counterpart; they keep their TOML text form.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(f.to_string())),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

/// A parsed config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    values: HashMap<String, Value>,
}

impl ConfigFile {
    /// Build from an already-parsed mapping. Keys are lowercased.
    pub fn from_map(path: PathBuf, map: serde_json::Map<String, Value>) -> Self {
        let values = map
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        Self { path, values }
    }

    /// Case-insensitive lookup. `null` values count as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values
            .get(&key.to_lowercase())
            .filter(|v| !v.is_null())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Expand a leading `~` in `raw` against `home`.
///
/// - `""` → `None` (no directory).
/// - `~` and `~/rest` → home-relative.
/// - `~user/...` cannot be expanded and is an error.
/// - Anything else is returned unchanged.
pub fn expand_home(raw: &str, home: Option<&Path>) -> Result<Option<PathBuf>, GardenLoginError> {
    if raw.is_empty() {
        return Ok(None);
    }
    let Some(rest) = raw.strip_prefix('~') else {
        return Ok(Some(PathBuf::from(raw)));
    };
    if !(rest.is_empty() || rest.starts_with('/') || rest.starts_with(std::path::MAIN_SEPARATOR))
    {
        return Err(GardenLoginError::ExpandPath {
            path: raw.to_string(),
            reason: "user-specific home directories cannot be expanded".into(),
        });
    }
    let home = home.ok_or(GardenLoginError::HomeDirNotFound)?;
    let rest = rest.trim_start_matches(['/', std::path::MAIN_SEPARATOR]);
    if rest.is_empty() {
        Ok(Some(home.to_path_buf()))
    } else {
        Ok(Some(home.join(rest)))
    }
}

/// Find the first `{dir}/{base_name}.{ext}` that exists, probing `dirs` in order.
pub fn find_config_file(dirs: &[PathBuf], base_name: &str) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| {
            SUPPORTED_EXTENSIONS
                .iter()
                .map(move |ext| dir.join(format!("{base_name}.{ext}")))
        })
        .find(|candidate| candidate.is_file())
}

/// Read and parse a config file, picking the format from its extension.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, GardenLoginError> {
    let format = Format::from_path(path).ok_or_else(|| GardenLoginError::UnsupportedFormat {
        path: path.to_path_buf(),
        expected: SUPPORTED_EXTENSIONS.join(", "),
    })?;
    let content = std::fs::read_to_string(path).map_err(|e| GardenLoginError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let map = format
        .parse(&content)
        .map_err(|reason| GardenLoginError::ParseError {
            path: path.to_path_buf(),
            reason,
        })?;
    Ok(ConfigFile::from_map(path.to_path_buf(), map))
}
