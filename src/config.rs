use crate::conf::TwConf;
use crate::errors::ConfError;
use clap::{ArgAction, Args, Parser, Subcommand};
use config::{
    Config as ConfigCrate, // Need this for builder
    ConfigError as ConfigCrateError,
    Environment,
    File,
    Map,
    Source,
    Value,
};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

const ENV_PREFIX: &str = "TWRAP";
const CONFIG_FILE_NAME: &str = "config.toml";

// Define potential errors during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Validation error: {0}")]
    Validation(#[from] ConfError),
}

// Serde struct for deserializing config file values.
// Optional fields allow for layered config (defaults -> file -> env -> args).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    min_content_width: Option<usize>,
    target_width: Option<usize>,
    list_marker: Option<String>,
}

// Command line arguments defined using clap.
#[derive(Parser, Debug)]
#[command(author, version, about = "Wrap text and print lists", long_about = None)]
pub struct CliArgs {
    /// Path to a custom configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Characters always printed on a line, however deep the indent
    #[arg(long, global = true)]
    pub min_content_width: Option<usize>,

    /// Line length to wrap text within
    #[arg(long, global = true)]
    pub target_width: Option<usize>,

    /// Marker printed before each list entry
    #[arg(long, global = true)]
    pub list_marker: Option<String>,

    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Wrap text read from a file or stdin
    Wrap(WrapArgs),
    /// Print each input line as a list entry
    List(ListArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct WrapArgs {
    /// File to read, stdin if absent
    pub file: Option<PathBuf>,

    /// Indent for every line
    #[arg(long, default_value_t = 0)]
    pub indent: usize,

    /// Indent of the very first line (defaults to --indent)
    #[arg(long, conflicts_with = "prefix")]
    pub first_indent: Option<usize>,

    /// Indent of the first line of later paragraphs (defaults to --first-indent)
    #[arg(long, conflicts_with = "prefix")]
    pub para_indent: Option<usize>,

    /// Indent of continuation lines (defaults to --indent)
    #[arg(long, conflicts_with = "prefix")]
    pub other_indent: Option<usize>,

    /// Text printed before the wrapped text, which then aligns after it
    #[arg(long)]
    pub prefix: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// File to read entries from, one per line, stdin if absent
    pub file: Option<PathBuf>,

    /// Indent for every entry
    #[arg(long, default_value_t = 0)]
    pub indent: usize,

    /// Number the entries
    #[arg(long)]
    pub numbered: bool,

    /// Blank out the start of each entry that repeats the previous one
    #[arg(long)]
    pub no_repeat: bool,

    /// Compare entries as paths, segment by segment
    #[arg(long, requires = "no_repeat")]
    pub paths: bool,
}

/// Default location of the configuration file for this platform.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "twrap")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

// Function to load configuration from all sources.
pub fn load_config(args: &CliArgs) -> Result<TwConf, ConfigError> {
    // Build environment source separately
    let env_source = Environment::with_prefix(ENV_PREFIX).try_parsing(true);
    // Missing env vars are fine, an unreadable environment just means no overrides.
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_config_from_args(args, Some(env_map))
}

// Separate function to allow testing with specific args and override sources
fn build_config_from_args(
    args: &CliArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<TwConf, ConfigError> {
    // 1. Determine config file path; one named on the command line must exist
    let config_file_path = args.config.clone().or_else(default_config_path);

    // 2. Build configuration source using the `config` crate
    let mut config_builder = ConfigCrate::builder();

    if let Some(ref path) = config_file_path {
        log::debug!("reading configuration from {}", path.display());
        let source = File::from(path.clone()).required(args.config.is_some());
        config_builder = config_builder.add_source(source);
    }

    // Overrides (env or a test map) win over the file
    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded_sources: FileConfig = config_builder.build()?.try_deserialize()?;

    // 3. Layer the configurations: args > overrides > file > defaults
    let mut builder = TwConf::builder();
    if let Some(n) = args.min_content_width.or(loaded_sources.min_content_width) {
        builder = builder.min_chars(n);
    }
    if let Some(n) = args.target_width.or(loaded_sources.target_width) {
        builder = builder.target_width(n);
    }
    if let Some(marker) = args.list_marker.clone().or(loaded_sources.list_marker) {
        builder = builder.list_marker(marker);
    }

    Ok(builder.build()?)
}
