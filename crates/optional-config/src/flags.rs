use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Prefix of the environment variables read into [`Flags`], e.g. `OPTIONAL_DUMP_TRACE`.
pub const ENV_PREFIX: &str = "OPTIONAL";

/// Settings read by `optional::logger::install`.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Flags {
    /// Dump absent-retrieval events as JSON to a file in [`Self::log_dir`] (debugging).
    pub dump_trace: bool,
    /// Sets the directory to dump data. Defaults to `./log/`.
    pub log_dir: PathBuf,
}

impl Default for Flags {
    fn default() -> Self {
        Self { dump_trace: false, log_dir: PathBuf::from("./log/") }
    }
}

impl Flags {
    /// Loads flags from `config_file` (if any) and then `env`, later sources overriding earlier
    /// ones. Keys missing from both keep their default value.
    pub fn load(config_file: Option<&Path>, env: Environment) -> Result<Flags, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path));
        }
        builder.add_source(env).build()?.try_deserialize()
    }
}

pub(crate) static FLAGS: LazyLock<Flags> = LazyLock::new(|| {
    let config_file = std::env::current_dir().ok().and_then(|cwd| crate::config_path_from(&cwd));
    Flags::load(config_file.as_deref(), Environment::with_prefix(ENV_PREFIX)).unwrap_or_else(
        |err| {
            tracing::warn!(%err, "invalid `optional` configuration, using defaults");
            Flags::default()
        },
    )
});
