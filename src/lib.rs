//! Configuration resolution for the `garden-login` kubectl credential plugin.
//!
//! Before `get-client-certificate` runs, every one of its options receives a
//! final value drawn from four competing sources:
//!
//! ```text
//! Compiled default      OptionSpec::default
//!        ↑ overridden by
//! Config file           $GL_HOME or $HOME/.garden, base name garden-login
//!        ↑ overridden by
//! Environment           GL_CLIENT_ID, GL_TOKEN, ...
//!        ↑ overridden by
//! Command-line flag     --client-id=...
//! ```
//!
//! Precedence is decided **per option**, independently. A flag passed on the
//! command line always wins, even when the environment and the config file
//! both carry a value for it.
//!
//! # Two phases
//!
//! 1. The [`Locator`] runs once. It picks the config file (explicit
//!    `--config`, else a search of `$GL_HOME` then `$HOME/.garden`), parses
//!    it, snapshots the environment, and returns an immutable
//!    [`ConfigStore`].
//! 2. [`resolve()`] walks a [`FlagSet`] built from a static list of
//!    [`OptionSpec`] descriptors and assigns each unchanged flag from the
//!    store.
//!
//! # Naming
//!
//! | Flag | Lookup key (file) | Explicit env | Automatic env |
//! |------|-------------------|--------------|---------------|
//! | `client-id` | `clientId` | `GL_CLIENT_ID` | `GL_CLIENTID` |
//! | `token` | `token` | none | `GL_TOKEN` |
//!
//! Single-word names get no explicit binding; they are still reachable
//! through the automatic `GL_<KEY>` form. File keys match case-insensitively.
//!
//! # Errors
//!
//! Only two conditions are fatal: the home directory cannot be determined,
//! or `GL_HOME` starts with a `~user` form that cannot be expanded. Every
//! other problem (no config file, a malformed file, a value that does not
//! parse as the option's type) is logged as a warning and the option falls
//! back to the next source down.

pub mod certificate;
pub mod error;
pub mod types;

#[cfg(feature = "clap")]
pub mod cli;
mod env;
mod file;
mod flags;
mod locator;
mod naming;
mod ops;
mod resolve;
mod store;

#[cfg(test)]
mod fixtures;

pub use env::{EnvBinding, EnvSnapshot, automatic_var, bind_env};
pub use error::GardenLoginError;
pub use file::{ConfigFile, Format, SUPPORTED_EXTENSIONS};
pub use flags::{Flag, FlagSet};
pub use locator::{
    CONFIG_NAME, ENV_CONFIG_NAME, ENV_HOME_DIR, ENV_PREFIX, GARDEN_HOME_FOLDER, Locator,
};
pub use naming::{lookup_key, to_lower_camel, to_screaming_snake};
pub use ops::{ConfigResult, ListEntry};
pub use resolve::{Resolution, render_value, resolve};
pub use store::ConfigStore;
pub use types::{ConfigAction, Lookup, OptionKind, OptionSpec, OptionValue, Source};
