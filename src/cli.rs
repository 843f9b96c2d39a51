//! Clap adapter: command definitions, option args, and the binary's entry point.
//!
//! The root command and the `config` subcommands are clap derives. The
//! options of `get-client-certificate` are generated from
//! [`CERTIFICATE_OPTIONS`] with the builder API and attached to the derived
//! command, so the option list stays a plain static table that the resolver
//! can iterate.
//!
//! Clap is configured without defaults for those options: a flag counts as
//! changed exactly when [`ValueSource::CommandLine`] reports it, and compiled
//! defaults come from the descriptors instead.

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::{
    Arg, ArgAction, ArgMatches, Args, Command, CommandFactory, FromArgMatches, Parser, Subcommand,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::certificate::{CERTIFICATE_OPTIONS, ClientCertificateOptions, GET_CLIENT_CERTIFICATE};
use crate::error::GardenLoginError;
use crate::flags::FlagSet;
use crate::locator::{CONFIG_NAME, GARDEN_HOME_FOLDER, Locator};
use crate::ops;
use crate::resolve;
use crate::types::{ConfigAction, OptionKind, OptionSpec, OptionValue};

/// garden-login is a kubectl credential plugin for shoot cluster admin authentication.
#[derive(Debug, Parser)]
#[command(name = "garden-login", version)]
pub struct Cli {
    /// Config file (default is $HOME/.garden/garden-login.yaml).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get a client certificate for shoot cluster admin access.
    GetClientCertificate,
    /// Inspect the resolved configuration.
    Config(ConfigArgs),
}

/// Clap-derived args for the `config` subcommand group.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigSubcommand>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show every option's final value and where it came from.
    List,
    /// Show which config file was loaded and where it was searched for.
    Path,
}

impl ConfigArgs {
    /// Bare `config` and `config list` both map to `ConfigAction::List`.
    pub fn into_action(self) -> ConfigAction {
        match self.action {
            None | Some(ConfigSubcommand::List) => ConfigAction::List,
            Some(ConfigSubcommand::Path) => ConfigAction::Path,
        }
    }
}

/// The full command tree, derive plus generated option args.
pub fn command() -> Command {
    Cli::command().mut_subcommand(GET_CLIENT_CERTIFICATE, |sub| {
        sub.args(CERTIFICATE_OPTIONS.iter().map(option_arg))
    })
}

/// Build the clap arg for one option descriptor.
pub fn option_arg(spec: &OptionSpec) -> Arg {
    let arg = Arg::new(spec.name).long(spec.name).help(spec.help);
    match spec.kind {
        OptionKind::String => arg.value_name("STRING").action(ArgAction::Set),
        OptionKind::Int => arg
            .value_name("INT")
            .value_parser(clap::value_parser!(i64))
            .allow_negative_numbers(true)
            .action(ArgAction::Set),
        OptionKind::Bool => arg
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .value_parser(parse_bool_flag)
            .action(ArgAction::Set),
        OptionKind::StringList => arg
            .value_name("STRINGS")
            .value_delimiter(',')
            .action(ArgAction::Append),
    }
}

/// Bool flags accept the same literals as env and file values.
fn parse_bool_flag(raw: &str) -> Result<bool, String> {
    match OptionKind::Bool.parse(raw)? {
        OptionValue::Bool(b) => Ok(b),
        other => Err(format!("'{other}' is not a boolean")),
    }
}

/// Build a [`FlagSet`] and mark every option the user passed as changed.
pub fn flags_from_matches(
    specs: &[OptionSpec],
    matches: &ArgMatches,
) -> Result<FlagSet, GardenLoginError> {
    let mut flags = FlagSet::new(specs)?;
    for spec in specs {
        if matches.value_source(spec.name) != Some(ValueSource::CommandLine) {
            continue;
        }
        let value = match spec.kind {
            OptionKind::String => matches
                .get_one::<String>(spec.name)
                .cloned()
                .map(OptionValue::String),
            OptionKind::Int => matches.get_one::<i64>(spec.name).copied().map(OptionValue::Int),
            OptionKind::Bool => matches
                .get_one::<bool>(spec.name)
                .copied()
                .map(OptionValue::Bool),
            OptionKind::StringList => matches.get_many::<String>(spec.name).map(|items| {
                OptionValue::StringList(
                    items
                        .map(|s| s.trim())
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect(),
                )
            }),
        };
        if let Some(value) = value {
            flags.set_value(spec.name, value)?;
        }
    }
    Ok(flags)
}

/// `RUST_LOG` always takes precedence; without it `--verbose` selects DEBUG, else WARN.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Parse the process arguments, locate configuration, resolve, and dispatch.
pub fn run() -> Result<(), GardenLoginError> {
    let matches = command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    init_logging(cli.verbose);

    tracing::debug!(
        default = %format!("$HOME/{GARDEN_HOME_FOLDER}/{CONFIG_NAME}"),
        explicit = ?cli.config,
        "locating config file"
    );
    let store = Locator::new().config_file(cli.config).locate()?;

    match cli.command {
        Commands::GetClientCertificate => {
            let sub = matches
                .subcommand_matches(GET_CLIENT_CERTIFICATE)
                .cloned()
                .unwrap_or_default();
            let mut flags = flags_from_matches(CERTIFICATE_OPTIONS, &sub)?;
            resolve::resolve(&store, &mut flags);
            let request = ClientCertificateOptions::from_flags(&flags)?;
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Commands::Config(args) => {
            let result = ops::handle(&args.into_action(), &store, CERTIFICATE_OPTIONS)?;
            println!("{result}");
        }
    }
    Ok(())
}
