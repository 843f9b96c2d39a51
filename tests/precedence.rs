//! End-to-end precedence through the public API: locate, then resolve.

use std::fs;
use std::path::Path;

use garden_login::certificate::{CERTIFICATE_OPTIONS, ClientCertificateOptions};
use garden_login::{ConfigStore, EnvSnapshot, FlagSet, Locator, Source, resolve};
use tempfile::TempDir;

fn env(pairs: &[(&str, &str)]) -> EnvSnapshot {
    EnvSnapshot::from_vars(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())))
}

fn home_with_config(content: Option<&str>) -> TempDir {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".garden");
    fs::create_dir_all(&dir).unwrap();
    if let Some(content) = content {
        fs::write(dir.join("garden-login.yaml"), content).unwrap();
    }
    home
}

fn locate(home: &Path, vars: &[(&str, &str)]) -> ConfigStore {
    Locator::new()
        .env(env(vars))
        .home_dir(Some(home.to_path_buf()))
        .locate()
        .unwrap()
}

fn client_id(store: &ConfigStore, flag: Option<&str>) -> (String, Source) {
    let mut flags = FlagSet::new(CERTIFICATE_OPTIONS).unwrap();
    if let Some(value) = flag {
        flags.set("client-id", value).unwrap();
    }
    let resolutions = resolve(store, &mut flags);
    let source = resolutions
        .into_iter()
        .find(|r| r.name == "client-id")
        .unwrap()
        .source;
    (flags.get_str("client-id").unwrap().to_string(), source)
}

#[test]
fn flag_env_and_file_set_flag_wins() {
    let home = home_with_config(Some("clientId: qrs\n"));
    let store = locate(home.path(), &[("GL_CLIENT_ID", "xyz")]);
    let (value, source) = client_id(&store, Some("abc"));
    assert_eq!(value, "abc");
    assert_eq!(source, Source::CommandLine);
}

#[test]
fn env_and_file_set_env_wins() {
    let home = home_with_config(Some("clientId: qrs\n"));
    let store = locate(home.path(), &[("GL_CLIENT_ID", "xyz")]);
    let (value, _) = client_id(&store, None);
    assert_eq!(value, "xyz");
}

#[test]
fn only_file_set_file_wins() {
    let home = home_with_config(Some("clientId: qrs\n"));
    let store = locate(home.path(), &[]);
    let (value, source) = client_id(&store, None);
    assert_eq!(value, "qrs");
    assert_eq!(
        source,
        Source::File {
            path: home.path().join(".garden").join("garden-login.yaml")
        }
    );
}

#[test]
fn nothing_set_default_kept() {
    let home = home_with_config(None);
    let store = locate(home.path(), &[]);
    let (value, source) = client_id(&store, None);
    assert_eq!(value, "");
    assert_eq!(source, Source::Default);
}

#[test]
fn malformed_file_resolves_from_env_and_defaults() {
    let home = home_with_config(Some("clientId: [oops\n"));
    let store = locate(home.path(), &[("GL_TOKEN", "t0k")]);
    assert!(store.file().is_none());

    let mut flags = FlagSet::new(CERTIFICATE_OPTIONS).unwrap();
    resolve(&store, &mut flags);
    let request = ClientCertificateOptions::from_flags(&flags).unwrap();
    assert_eq!(request.token, "t0k");
    assert_eq!(request.client_id, "");
    assert_eq!(request.expiration_seconds, 3600);
}

#[test]
fn gl_home_and_config_name_redirect_the_file() {
    let home = home_with_config(Some("clientId: from-home\n"));
    let custom = TempDir::new().unwrap();
    fs::write(custom.path().join("work.json"), r#"{"clientId": "from-custom"}"#).unwrap();

    let store = locate(
        home.path(),
        &[
            ("GL_HOME", custom.path().to_str().unwrap()),
            ("GL_CONFIG_NAME", "work"),
        ],
    );
    let (value, _) = client_id(&store, None);
    assert_eq!(value, "from-custom");
}

#[test]
fn full_request_from_mixed_sources() {
    let home = home_with_config(Some(
        "name: my-shoot\nnamespace: garden-dev\nexpirationSeconds: 900\naudiences: [kube]\n",
    ));
    let store = locate(
        home.path(),
        &[
            ("GL_GARDEN_CLUSTER_IDENTITY", "landscape"),
            ("GL_INSECURE_SKIP_TLS_VERIFY", "true"),
        ],
    );
    let mut flags = FlagSet::new(CERTIFICATE_OPTIONS).unwrap();
    flags.set("name", "other-shoot").unwrap();
    resolve(&store, &mut flags);

    let request = ClientCertificateOptions::from_flags(&flags).unwrap();
    assert_eq!(request.name, "other-shoot");
    assert_eq!(request.namespace, "garden-dev");
    assert_eq!(request.garden_cluster_identity, "landscape");
    assert_eq!(request.expiration_seconds, 900);
    assert!(request.insecure_skip_tls_verify);
    assert_eq!(request.audiences, vec!["kube".to_string()]);
}

#[test]
fn toml_datetime_assigned_as_text() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".garden");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("garden-login.toml"), "name = 1979-05-27T07:32:00Z\n").unwrap();

    let store = locate(home.path(), &[]);
    let mut flags = FlagSet::new(CERTIFICATE_OPTIONS).unwrap();
    resolve(&store, &mut flags);
    assert_eq!(flags.get_str("name").unwrap(), "1979-05-27T07:32:00Z");
}
