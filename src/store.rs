//! The read-only config store shared by every resolver call.

use std::path::PathBuf;

use crate::env::{self, EnvBinding, EnvSnapshot};
use crate::file::ConfigFile;
use crate::types::{Lookup, Source};

/// Lookup key → raw value, backed by one optional config file and an
/// environment snapshot.
///
/// Built once by the [`Locator`](crate::Locator) and only borrowed afterwards.
/// Explicit env bindings are passed into [`lookup`](Self::lookup) per call
/// rather than registered on the store, so the store never changes after
/// construction.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    env_prefix: String,
    env: EnvSnapshot,
    file: Option<ConfigFile>,
    searched: Vec<PathBuf>,
}

impl ConfigStore {
    pub fn new(
        env_prefix: impl Into<String>,
        env: EnvSnapshot,
        file: Option<ConfigFile>,
        searched: Vec<PathBuf>,
    ) -> Self {
        Self {
            env_prefix: env_prefix.into(),
            env,
            file,
            searched,
        }
    }

    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }

    /// The config file that was loaded, if any.
    pub fn file(&self) -> Option<&ConfigFile> {
        self.file.as_ref()
    }

    /// Directories that were searched for a config file, in probe order.
    /// Empty when an explicit config path was given.
    pub fn searched(&self) -> &[PathBuf] {
        &self.searched
    }

    /// Find a value for `key`.
    ///
    /// Sources are consulted in this order, first hit wins:
    ///
    /// 1. automatic env `{PREFIX}_{KEY}`
    /// 2. the explicit `binding`, if one was derived for this key
    /// 3. the config file
    pub fn lookup(&self, key: &str, binding: Option<&EnvBinding>) -> Lookup {
        let auto_var = env::automatic_var(&self.env_prefix, key);
        if let Some(value) = self.env.get(&auto_var) {
            return Lookup::Resolved {
                value: serde_json::Value::String(value.to_string()),
                source: Source::Env { var: auto_var },
            };
        }

        if let Some(binding) = binding
            && let Some(value) = self.env.get(&binding.var)
        {
            return Lookup::Resolved {
                value: serde_json::Value::String(value.to_string()),
                source: Source::Env {
                    var: binding.var.clone(),
                },
            };
        }

        if let Some(file) = &self.file
            && let Some(value) = file.get(key)
        {
            return Lookup::Resolved {
                value: value.clone(),
                source: Source::File {
                    path: file.path.clone(),
                },
            };
        }

        Lookup::Unavailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{env_of, yaml_file};
    use serde_json::Value;

    fn binding(var: &str, key: &str) -> EnvBinding {
        EnvBinding {
            key: key.into(),
            var: var.into(),
        }
    }

    #[test]
    fn empty_store_is_unavailable() {
        let store = ConfigStore::new("GL", EnvSnapshot::default(), None, vec![]);
        assert_eq!(store.lookup("clientId", None), Lookup::Unavailable);
    }

    #[test]
    fn file_value_found() {
        let store = ConfigStore::new(
            "GL",
            EnvSnapshot::default(),
            Some(yaml_file("clientId: qrs\n")),
            vec![],
        );
        match store.lookup("clientId", None) {
            Lookup::Resolved { value, source } => {
                assert_eq!(value, Value::String("qrs".into()));
                assert!(matches!(source, Source::File { .. }));
            }
            other => panic!("Expected Resolved, got {other:?}"),
        }
    }

    #[test]
    fn bound_env_beats_file() {
        let store = ConfigStore::new(
            "GL",
            env_of(&[("GL_CLIENT_ID", "xyz")]),
            Some(yaml_file("clientId: qrs\n")),
            vec![],
        );
        let b = binding("GL_CLIENT_ID", "clientId");
        assert_eq!(
            store.lookup("clientId", Some(&b)),
            Lookup::Resolved {
                value: Value::String("xyz".into()),
                source: Source::Env {
                    var: "GL_CLIENT_ID".into()
                },
            }
        );
    }

    #[test]
    fn bound_env_ignored_without_binding() {
        let store = ConfigStore::new(
            "GL",
            env_of(&[("GL_CLIENT_ID", "xyz")]),
            Some(yaml_file("clientId: qrs\n")),
            vec![],
        );
        match store.lookup("clientId", None) {
            Lookup::Resolved { value, .. } => assert_eq!(value, Value::String("qrs".into())),
            other => panic!("Expected Resolved, got {other:?}"),
        }
    }

    #[test]
    fn automatic_env_for_single_word_key() {
        let store = ConfigStore::new("GL", env_of(&[("GL_TOKEN", "t0k")]), None, vec![]);
        assert_eq!(
            store.lookup("token", None),
            Lookup::Resolved {
                value: Value::String("t0k".into()),
                source: Source::Env {
                    var: "GL_TOKEN".into()
                },
            }
        );
    }

    #[test]
    fn automatic_env_checked_before_binding() {
        let store = ConfigStore::new(
            "GL",
            env_of(&[("GL_CLIENTID", "auto"), ("GL_CLIENT_ID", "bound")]),
            None,
            vec![],
        );
        let b = binding("GL_CLIENT_ID", "clientId");
        match store.lookup("clientId", Some(&b)) {
            Lookup::Resolved { value, source } => {
                assert_eq!(value, Value::String("auto".into()));
                assert_eq!(
                    source,
                    Source::Env {
                        var: "GL_CLIENTID".into()
                    }
                );
            }
            other => panic!("Expected Resolved, got {other:?}"),
        }
    }

    #[test]
    fn empty_env_falls_through_to_file() {
        let store = ConfigStore::new(
            "GL",
            env_of(&[("GL_CLIENT_ID", "")]),
            Some(yaml_file("clientId: qrs\n")),
            vec![],
        );
        let b = binding("GL_CLIENT_ID", "clientId");
        match store.lookup("clientId", Some(&b)) {
            Lookup::Resolved { source, .. } => assert!(matches!(source, Source::File { .. })),
            other => panic!("Expected Resolved, got {other:?}"),
        }
    }

    #[test]
    fn other_prefix_not_consulted() {
        let store = ConfigStore::new("GL", env_of(&[("XX_TOKEN", "t")]), None, vec![]);
        assert!(!store.lookup("token", None).is_set());
    }
}
