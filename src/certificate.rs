//! Options of the `get-client-certificate` command.
//!
//! The certificate retrieval itself lives outside this crate; this module only
//! declares the option set and turns a resolved [`FlagSet`] into the typed
//! request handed to the retrieval step.

use serde::Serialize;

use crate::error::GardenLoginError;
use crate::flags::FlagSet;
use crate::types::{OptionKind, OptionSpec};

pub const GET_CLIENT_CERTIFICATE: &str = "get-client-certificate";

pub static CERTIFICATE_OPTIONS: &[OptionSpec] = &[
    OptionSpec::new(
        "name",
        OptionKind::String,
        "",
        "Name of the shoot cluster",
    ),
    OptionSpec::new(
        "namespace",
        OptionKind::String,
        "",
        "Namespace of the project the shoot cluster belongs to",
    ),
    OptionSpec::new(
        "garden-cluster-identity",
        OptionKind::String,
        "",
        "Cluster identity of the garden cluster",
    ),
    OptionSpec::new(
        "client-id",
        OptionKind::String,
        "",
        "OIDC client ID used to authenticate against the garden cluster",
    ),
    OptionSpec::new(
        "token",
        OptionKind::String,
        "",
        "Bearer token used to authenticate against the garden cluster",
    ),
    OptionSpec::new(
        "expiration-seconds",
        OptionKind::Int,
        "3600",
        "Requested validity of the client certificate in seconds",
    ),
    OptionSpec::new(
        "insecure-skip-tls-verify",
        OptionKind::Bool,
        "false",
        "Do not verify the garden cluster's serving certificate",
    ),
    OptionSpec::new(
        "audiences",
        OptionKind::StringList,
        "",
        "Comma-separated token audiences",
    ),
];

/// The resolved request for a shoot cluster admin client certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCertificateOptions {
    pub name: String,
    pub namespace: String,
    pub garden_cluster_identity: String,
    pub client_id: String,
    pub token: String,
    pub expiration_seconds: i64,
    pub insecure_skip_tls_verify: bool,
    pub audiences: Vec<String>,
}

impl ClientCertificateOptions {
    pub fn from_flags(flags: &FlagSet) -> Result<Self, GardenLoginError> {
        Ok(Self {
            name: flags.get_str("name")?.to_string(),
            namespace: flags.get_str("namespace")?.to_string(),
            garden_cluster_identity: flags.get_str("garden-cluster-identity")?.to_string(),
            client_id: flags.get_str("client-id")?.to_string(),
            token: flags.get_str("token")?.to_string(),
            expiration_seconds: flags.get_int("expiration-seconds")?,
            insecure_skip_tls_verify: flags.get_bool("insecure-skip-tls-verify")?,
            audiences: flags.get_list("audiences")?.to_vec(),
        })
    }
}
