//! Environment variable snapshot and the `GL_*` naming rules.
//!
//! Two ways an option can be satisfied from the environment:
//!
//! - **Automatic**: any lookup key `k` matches `{PREFIX}_{K}` where `K` is `k`
//!   uppercased without word splitting (`clientId` → `GL_CLIENTID`).
//! - **Explicit binding**: a multi-word flag name is bound to
//!   `{PREFIX}_{SCREAMING_SNAKE}` (`client-id` → `GL_CLIENT_ID`).
//!
//! Empty values count as unset in both cases.

use std::collections::HashMap;
use std::ffi::OsString;

use crate::error::GardenLoginError;
use crate::naming;

/// An immutable copy of the environment taken once at startup.
///
/// Takes an iterator so tests can pass synthetic data instead of `std::env::vars()`.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            vars: vars.into_iter().collect(),
        }
    }

    pub fn from_process() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    /// Like [`from_vars`](Self::from_vars), but skips entries whose name or
    /// value is not valid UTF-8.
    pub fn from_os_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        Self::from_vars(vars.into_iter().filter_map(|(name, value)| {
            match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => Some((name, value)),
                (Ok(name), Err(_)) => {
                    tracing::debug!(var = %name, "skipping env variable with non-UTF-8 value");
                    None
                }
                (Err(name), _) => {
                    tracing::debug!(var = ?name, "skipping env variable with non-UTF-8 name");
                    None
                }
            }
        }))
    }

    /// The value of `name`, or `None` if unset or empty.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// An explicit lookup key → environment variable binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvBinding {
    pub key: String,
    pub var: String,
}

/// Name of the variable consulted in automatic mode for `key`.
pub fn automatic_var(prefix: &str, key: &str) -> String {
    format!("{prefix}_{}", key.to_uppercase())
}

/// Derive the explicit binding for a flag.
///
/// Returns `Ok(None)` for single-word names: they are only reachable through
/// automatic mode. Returns an error when the derived variable name is not a
/// valid environment variable name.
pub fn bind_env(prefix: &str, flag_name: &str) -> Result<Option<EnvBinding>, GardenLoginError> {
    if !naming::is_multi_word(flag_name) {
        return Ok(None);
    }
    let key = naming::lookup_key(flag_name);
    let var = format!("{prefix}_{}", naming::to_screaming_snake(flag_name));
    validate_var_name(&var).map_err(|reason| GardenLoginError::InvalidBinding {
        key: key.clone(),
        var: var.clone(),
        reason,
    })?;
    Ok(Some(EnvBinding { key, var }))
}

fn validate_var_name(var: &str) -> Result<(), String> {
    let Some(first) = var.chars().next() else {
        return Err("empty variable name".into());
    };
    if first.is_ascii_digit() {
        return Err("variable name starts with a digit".into());
    }
    if let Some(bad) = var
        .chars()
        .find(|c| !(c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '_'))
    {
        return Err(format!("invalid character '{bad}'"));
    }
    Ok(())
}
