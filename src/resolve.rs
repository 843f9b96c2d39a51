//! Option resolution: give every declared option its final value.
//!
//! Runs once, after argument parsing and before the command body. For each
//! flag, independently:
//!
//! 1. Compute the lookup key (`client-id` → `clientId`).
//! 2. Derive the explicit env binding for multi-word names
//!    (`client-id` → `GL_CLIENT_ID`). A binding that cannot be derived is
//!    logged and skipped.
//! 3. Ask the [`ConfigStore`] for the key.
//! 4. If the flag was not changed on the command line and the store resolved
//!    a value, render it to text and assign it.
//! 5. A value that cannot be rendered or parsed is logged; the flag keeps its
//!    prior value.
//!
//! Net precedence per option: flag > environment > config file > default.

use serde_json::Value;

use crate::env;
use crate::flags::FlagSet;
use crate::naming;
use crate::store::ConfigStore;
use crate::types::{Lookup, Source};

/// The outcome for one option.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub name: &'static str,
    pub source: Source,
}

/// Resolve every flag in `flags` against `store`.
///
/// Never fails: recoverable problems are logged at warning level and the
/// affected flag falls back to its previous value.
pub fn resolve(store: &ConfigStore, flags: &mut FlagSet) -> Vec<Resolution> {
    let names = flags.names();
    names
        .into_iter()
        .map(|name| Resolution {
            name,
            source: resolve_one(store, flags, name),
        })
        .collect()
}

fn resolve_one(store: &ConfigStore, flags: &mut FlagSet, name: &'static str) -> Source {
    let key = naming::lookup_key(name);

    let binding = match env::bind_env(store.env_prefix(), name) {
        Ok(binding) => binding,
        Err(e) => {
            tracing::warn!(flag = name, error = %e, "failed to bind config key to env variable");
            None
        }
    };

    let lookup = store.lookup(&key, binding.as_ref());

    let changed = flags.get(name).is_some_and(|f| f.changed());
    if changed {
        tracing::debug!(flag = name, "using value passed on the command line");
        return Source::CommandLine;
    }

    let Lookup::Resolved { value, source } = lookup else {
        return Source::Default;
    };

    let raw = match render_value(&value) {
        Ok(raw) => raw,
        Err(reason) => {
            tracing::warn!(flag = name, %source, %reason, "failed to set flag");
            return Source::Default;
        }
    };

    match flags.set_from(name, &raw, source.clone()) {
        Ok(()) => {
            tracing::debug!(flag = name, %source, "resolved flag from config");
            source
        }
        Err(e) => {
            tracing::warn!(flag = name, %source, error = %e, "failed to set flag");
            Source::Default
        }
    }
}

/// Render a store value in the textual form a flag accepts.
///
/// Scalars render as their literal text; arrays of scalars are joined with
/// commas. Tables and nested arrays cannot be assigned to an option.
pub fn render_value(value: &Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Array(_) | Value::Object(_) => {
                    Err("nested collections cannot be assigned to an option".to_string())
                }
                scalar => render_value(scalar),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|items| items.join(",")),
        Value::Object(_) => Err("a table cannot be assigned to an option".into()),
        Value::Null => Err("null cannot be assigned to an option".into()),
    }
}
