//! Config locator: decide which config file to load and build the store.
//!
//! ```text
//! --config <path> given?
//!   yes → load <path> verbatim, no search
//!   no  → home dir (fatal if unknown)
//!         search dirs = [$GL_HOME (expanded), $HOME/.garden]
//!         base name   = $GL_CONFIG_NAME or "garden-login"
//!         first {dir}/{base}.{json,toml,yaml,yml} wins
//! ```
//!
//! A missing or unparseable file is logged and skipped. Only an unknown home
//! directory or an unexpandable `GL_HOME` abort the locate.

use std::path::{Path, PathBuf};

use crate::env::EnvSnapshot;
use crate::error::GardenLoginError;
use crate::file::{self, ConfigFile};
use crate::store::ConfigStore;

/// Namespace prefix for every environment variable this crate reads.
pub const ENV_PREFIX: &str = "GL";
/// Overrides the config search directory.
pub const ENV_HOME_DIR: &str = "GL_HOME";
/// Overrides the config file base name.
pub const ENV_CONFIG_NAME: &str = "GL_CONFIG_NAME";
/// Default config directory, relative to the user's home.
pub const GARDEN_HOME_FOLDER: &str = ".garden";
/// Default config file base name (without extension).
pub const CONFIG_NAME: &str = "garden-login";

#[derive(Debug, Clone)]
enum Home {
    Process,
    Fixed(Option<PathBuf>),
}

/// Builder for locating and loading the config store.
///
/// By default the process environment and the current user's home directory
/// are used; both can be replaced, which is how the tests drive it.
#[derive(Debug, Clone)]
pub struct Locator {
    config_file: Option<PathBuf>,
    env: Option<EnvSnapshot>,
    home: Home,
}

impl Default for Locator {
    fn default() -> Self {
        Self::new()
    }
}

impl Locator {
    pub fn new() -> Self {
        Self {
            config_file: None,
            env: None,
            home: Home::Process,
        }
    }

    /// Explicit config file (the `--config` flag). An empty path counts as unset.
    pub fn config_file(mut self, path: Option<PathBuf>) -> Self {
        self.config_file = path.filter(|p| !p.as_os_str().is_empty());
        self
    }

    /// Use this environment instead of the process environment.
    pub fn env(mut self, env: EnvSnapshot) -> Self {
        self.env = Some(env);
        self
    }

    /// Use this home directory instead of the current user's.
    /// `None` behaves like a system where the home directory cannot be found.
    pub fn home_dir(mut self, home: Option<PathBuf>) -> Self {
        self.home = Home::Fixed(home);
        self
    }

    fn effective_home(&self) -> Option<PathBuf> {
        match &self.home {
            Home::Fixed(home) => home.clone(),
            Home::Process => {
                let user = directories::UserDirs::new()?;
                Some(user.home_dir().to_path_buf())
            }
        }
    }

    /// Find and load the config file, then freeze everything into a store.
    pub fn locate(self) -> Result<ConfigStore, GardenLoginError> {
        let env = match &self.env {
            Some(env) => env.clone(),
            None => EnvSnapshot::from_process(),
        };

        if let Some(path) = &self.config_file {
            tracing::debug!(path = %path.display(), "using config file from flag");
            let file = load_or_warn(path);
            return Ok(ConfigStore::new(ENV_PREFIX, env, file, Vec::new()));
        }

        let home = self
            .effective_home()
            .ok_or(GardenLoginError::HomeDirNotFound)?;
        let dirs = search_dirs(&env, &home)?;
        let name = config_name(&env);

        let file = match file::find_config_file(&dirs, &name) {
            Some(path) => load_or_warn(&path),
            None => {
                let err = GardenLoginError::ConfigNotFound {
                    name,
                    searched: dirs.clone(),
                };
                tracing::warn!(error = %err, "failed to read config file");
                None
            }
        };

        Ok(ConfigStore::new(ENV_PREFIX, env, file, dirs))
    }
}

/// Directories to search, in probe order: `$GL_HOME` first, then `$HOME/.garden`.
pub fn search_dirs(env: &EnvSnapshot, home: &Path) -> Result<Vec<PathBuf>, GardenLoginError> {
    let mut dirs = Vec::with_capacity(2);
    if let Some(raw) = env.get(ENV_HOME_DIR)
        && let Some(dir) = file::expand_home(raw, Some(home))?
    {
        dirs.push(dir);
    }
    dirs.push(home.join(GARDEN_HOME_FOLDER));
    Ok(dirs)
}

/// The config file base name: `$GL_CONFIG_NAME` if set, else `garden-login`.
pub fn config_name(env: &EnvSnapshot) -> String {
    env.get(ENV_CONFIG_NAME).unwrap_or(CONFIG_NAME).to_string()
}

fn load_or_warn(path: &Path) -> Option<ConfigFile> {
    match file::load_config_file(path) {
        Ok(file) => {
            tracing::debug!(path = %path.display(), keys = file.len(), "loaded config file");
            Some(file)
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to read config file");
            None
        }
    }
}
