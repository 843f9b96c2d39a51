//! Config operations behind `config list` and `config path`, and their result type.

use std::fmt;
use std::path::PathBuf;

use crate::error::GardenLoginError;
use crate::flags::FlagSet;
use crate::resolve::{self, Resolution};
use crate::store::ConfigStore;
use crate::types::{ConfigAction, OptionSpec};

/// One row of `config list`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub name: String,
    pub value: String,
    pub source: String,
}

/// Result of a config operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigResult {
    /// Every option's final value and where it came from.
    Listing { entries: Vec<ListEntry> },
    /// The loaded config file and the directories that were searched.
    Location {
        file: Option<PathBuf>,
        searched: Vec<PathBuf>,
    },
}

impl fmt::Display for ConfigResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigResult::Listing { entries } => {
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{} = {} ({})", entry.name, entry.value, entry.source)?;
                }
                Ok(())
            }
            ConfigResult::Location { file, searched } => {
                match file {
                    Some(path) => write!(f, "Config file: {}", path.display())?,
                    None => write!(f, "Config file: <none>")?,
                }
                for dir in searched {
                    write!(f, "\nSearched: {}", dir.display())?;
                }
                Ok(())
            }
        }
    }
}

/// Build the listing for a resolved flag set.
pub fn list_values(flags: &FlagSet, resolutions: &[Resolution]) -> ConfigResult {
    let entries = resolutions
        .iter()
        .filter_map(|r| {
            let flag = flags.get(r.name)?;
            Some(ListEntry {
                name: r.name.to_string(),
                value: flag.value().to_string(),
                source: r.source.to_string(),
            })
        })
        .collect();
    ConfigResult::Listing { entries }
}

/// Describe where configuration was loaded from.
pub fn describe_location(store: &ConfigStore) -> ConfigResult {
    ConfigResult::Location {
        file: store.file().map(|f| f.path.clone()),
        searched: store.searched().to_vec(),
    }
}

/// Handle a `ConfigAction` against an already located store.
///
/// `specs` is the option set to report on for [`ConfigAction::List`]; no
/// option is treated as passed on the command line.
pub fn handle(
    action: &ConfigAction,
    store: &ConfigStore,
    specs: &[OptionSpec],
) -> Result<ConfigResult, GardenLoginError> {
    match action {
        ConfigAction::List => {
            let mut flags = FlagSet::new(specs)?;
            let resolutions = resolve::resolve(store, &mut flags);
            Ok(list_values(&flags, &resolutions))
        }
        ConfigAction::Path => Ok(describe_location(store)),
    }
}
