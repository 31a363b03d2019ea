//! Command-line options
use crate::config::Override;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    author,
    about,
    after_help = "Overrides are written dotted.key=value, e.g. pretraining=true reward.name=RE3"
)]
pub struct Options {
    #[arg(short, long, default_value = "config.yaml")]
    /// Experiment configuration file
    pub config: PathBuf,

    #[arg(long)]
    /// Do not colour log level labels
    pub no_color: bool,

    /// Configuration overrides, applied in order
    pub overrides: Vec<Override>,
}
