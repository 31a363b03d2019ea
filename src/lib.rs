//! Reinforcement learning experiment launcher with online pre-training.
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::for_kv_map)] // part of warn(clippy::all), specifically style?
#![warn(clippy::missing_const_for_fn)] // has some false positives
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::use_self)] // also triggered by macro expansions
pub mod check;
pub mod cli;
pub mod config;
pub mod defs;
mod engine;
mod error;
pub mod logging;
pub mod trainer;
pub mod utils;

pub use check::{check_compatibility, CompatibilityError, ModuleSelection};
pub use config::{ExperimentConfig, ModuleConfig};
pub use engine::launch;
pub use error::HsuanwuError;
pub use trainer::{Trainer, TrainingLoop};
