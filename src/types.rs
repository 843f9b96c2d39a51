//! Shared vocabulary: option descriptors, typed values, and value sources.

use std::fmt;
use std::path::PathBuf;

/// The type of a declared option. Determines how text is parsed into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Bool,
    Int,
    /// Comma-separated list of strings.
    StringList,
}

/// A typed option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    String(String),
    Bool(bool),
    Int(i64),
    StringList(Vec<String>),
}

impl OptionKind {
    /// Parse the textual form of a value into this kind.
    ///
    /// - `String`: verbatim.
    /// - `Bool`: `1 t T TRUE true True 0 f F FALSE false False`.
    /// - `Int`: signed 64-bit decimal.
    /// - `StringList`: comma separated, items trimmed, empty items dropped.
    pub fn parse(self, raw: &str) -> Result<OptionValue, String> {
        match self {
            OptionKind::String => Ok(OptionValue::String(raw.to_string())),
            OptionKind::Bool => match raw {
                "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(OptionValue::Bool(true)),
                "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(OptionValue::Bool(false)),
                other => Err(format!("'{other}' is not a boolean")),
            },
            OptionKind::Int => raw
                .trim()
                .parse::<i64>()
                .map(OptionValue::Int)
                .map_err(|e| format!("'{raw}' is not an integer: {e}")),
            OptionKind::StringList => Ok(OptionValue::StringList(
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            )),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OptionKind::String => "string",
            OptionKind::Bool => "bool",
            OptionKind::Int => "int",
            OptionKind::StringList => "strings",
        }
    }
}

impl OptionValue {
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionValue::String(_) => OptionKind::String,
            OptionValue::Bool(_) => OptionKind::Bool,
            OptionValue::Int(_) => OptionKind::Int,
            OptionValue::StringList(_) => OptionKind::StringList,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::String(s) => write!(f, "{s}"),
            OptionValue::Bool(b) => write!(f, "{b}"),
            OptionValue::Int(i) => write!(f, "{i}"),
            OptionValue::StringList(items) => write!(f, "{}", items.join(",")),
        }
    }
}

/// Static descriptor for one option of a command.
///
/// The resolver iterates a `&'static [OptionSpec]` instead of introspecting
/// the argument parser, so the full option set is known at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// Canonical hyphenated name, e.g. `client-id`.
    pub name: &'static str,
    pub kind: OptionKind,
    /// Compiled default in textual form, parsed with [`OptionKind::parse`].
    pub default: &'static str,
    pub help: &'static str,
}

impl OptionSpec {
    pub const fn new(
        name: &'static str,
        kind: OptionKind,
        default: &'static str,
        help: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            default,
            help,
        }
    }
}

/// Where an option's final value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Compiled default; nothing else was set.
    Default,
    /// Explicitly passed on the command line.
    CommandLine,
    /// An environment variable, either auto-prefixed or explicitly bound.
    Env { var: String },
    /// A key in the loaded config file.
    File { path: PathBuf },
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Default => write!(f, "default"),
            Source::CommandLine => write!(f, "flag"),
            Source::Env { var } => write!(f, "env {var}"),
            Source::File { path } => write!(f, "file {}", path.display()),
        }
    }
}

/// Result of asking the config store for a lookup key.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Resolved {
        value: serde_json::Value,
        source: Source,
    },
    Unavailable,
}

impl Lookup {
    pub fn is_set(&self) -> bool {
        matches!(self, Lookup::Resolved { .. })
    }
}

/// A config operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    /// Show every option's final value and its source.
    List,
    /// Show which config file was loaded and where it was searched for.
    Path,
}
