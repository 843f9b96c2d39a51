#[cfg(test)]
pub mod test {
    use crate::env::EnvSnapshot;
    use crate::file::{ConfigFile, Format};
    use crate::types::{OptionKind, OptionSpec};

    /// A representative option set: single- and multi-word names, every kind.
    pub static TEST_OPTIONS: &[OptionSpec] = &[
        OptionSpec::new("name", OptionKind::String, "", "Shoot cluster name."),
        OptionSpec::new("namespace", OptionKind::String, "", "Project namespace."),
        OptionSpec::new(
            "garden-cluster-identity",
            OptionKind::String,
            "",
            "Garden cluster identity.",
        ),
        OptionSpec::new("client-id", OptionKind::String, "", "OIDC client ID."),
        OptionSpec::new("token", OptionKind::String, "", "Bearer token."),
        OptionSpec::new(
            "expiration-seconds",
            OptionKind::Int,
            "3600",
            "Certificate validity in seconds.",
        ),
        OptionSpec::new(
            "insecure-skip-tls-verify",
            OptionKind::Bool,
            "false",
            "Skip TLS verification.",
        ),
        OptionSpec::new("audiences", OptionKind::StringList, "", "Token audiences."),
    ];

    pub fn env_of(pairs: &[(&str, &str)]) -> EnvSnapshot {
        EnvSnapshot::from_vars(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    /// A config file parsed from YAML text, as if read from `garden-login.yaml`.
    pub fn yaml_file(content: &str) -> ConfigFile {
        let map = Format::Yaml.parse(content).unwrap();
        ConfigFile::from_map("/home/test/.garden/garden-login.yaml".into(), map)
    }

    #[test]
    fn test_options_have_valid_defaults() {
        let flags = crate::flags::FlagSet::new(TEST_OPTIONS).unwrap();
        assert_eq!(flags.len(), TEST_OPTIONS.len());
    }

    #[test]
    fn yaml_fixture_parses() {
        let file = yaml_file("clientId: qrs\ntoken: t\n");
        assert_eq!(file.len(), 2);
    }
}
