//! Configuration errors
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The experiment file is missing, unreadable, or not a valid experiment configuration.
#[derive(Debug, Error)]
pub enum ConfigParseError {
    #[error("unable to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config is not valid YAML")]
    Syntax(#[source] serde_yaml::Error),
    #[error("config does not describe an experiment")]
    Schema(#[source] serde_yaml::Error),
    #[error("invalid override \"{text}\": {reason}")]
    InvalidOverride { text: String, reason: &'static str },
}

/// Pre-training mode is on but no intrinsic reward module is selected.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Error)]
#[error(
    "pre-training mode requires an intrinsic reward module\n\
     Tips: set `reward: {{name: RE3}}` (or another reward module) when `pretraining: true`"
)]
pub struct MissingRewardModuleError;

/// Error loading an experiment configuration.
#[derive(Debug, Error)]
pub enum LoadConfigError {
    #[error(transparent)]
    Parse(#[from] ConfigParseError),
    #[error(transparent)]
    MissingRewardModule(#[from] MissingRewardModuleError),
}
