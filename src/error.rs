//! Error type
use crate::check::CompatibilityError;
use crate::config::LoadConfigError;
use crate::trainer::TrainError;
use thiserror::Error;

/// Error launching an experiment.
#[derive(Error, Debug)]
pub enum HsuanwuError {
    #[error(transparent)]
    Config(#[from] LoadConfigError),
    #[error(transparent)]
    Compatibility(#[from] CompatibilityError),
    #[error("error during training")]
    Train(#[from] TrainError),
}
