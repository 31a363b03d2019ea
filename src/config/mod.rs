//! Experiment configuration
//!
//! An experiment is described by a YAML document:
//!
//! ```yaml
//! experiment: drqv2_dmc_pretraining
//! device: cuda:0
//! seed: 1
//! num_train_steps: 250000
//! pretraining: true
//! agent:
//!     name: DrQv2
//! reward:
//!     name: RE3
//! ```
mod error;
mod overrides;

pub use error::{ConfigParseError, LoadConfigError, MissingRewardModuleError};
pub use overrides::Override;

use crate::check::check_compatibility;
use crate::defs::ModuleKind;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Selection of a pluggable module by name, with any module-specific parameters.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Module name in the catalog. Empty when absent or null.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Remaining keys, passed through to the module.
    #[serde(flatten)]
    pub params: BTreeMap<String, Value>,
}

impl ModuleConfig {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            params: BTreeMap::new(),
        }
    }

    /// The module name if one is set.
    pub fn name(&self) -> Option<&str> {
        Some(self.name.as_str()).filter(|name| !name.is_empty())
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The agent entry must name its agent.
fn named_module<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ModuleConfig, D::Error> {
    let module = ModuleConfig::deserialize(deserializer)?;
    if module.name().is_none() {
        return Err(de::Error::custom("agent: missing module name"));
    }
    Ok(module)
}

/// Configuration of a training experiment.
///
/// Created once at startup; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Experiment identifier.
    pub experiment: String,
    /// Compute device, e.g. `cpu` or `cuda:0`.
    pub device: String,
    pub seed: u64,
    /// Number of environment steps to train for.
    pub num_train_steps: u64,
    /// Train on intrinsic reward only.
    #[serde(default)]
    pub pretraining: bool,

    #[serde(deserialize_with = "named_module")]
    pub agent: ModuleConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoder: Option<ModuleConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<ModuleConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<ModuleConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub augmentation: Option<ModuleConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<ModuleConfig>,

    /// Number of parallel environments.
    #[serde(default = "defaults::num_envs")]
    pub num_envs: usize,
    /// Rollout length per environment for on-policy agents.
    #[serde(default = "defaults::num_steps")]
    pub num_steps: usize,
    /// Random exploration steps before off-policy updates begin.
    #[serde(default = "defaults::num_init_steps")]
    pub num_init_steps: u64,
    #[serde(default = "defaults::log_interval")]
    pub log_interval: u64,
    #[serde(default = "defaults::eval_interval")]
    pub eval_interval: u64,
    #[serde(default = "defaults::save_interval")]
    pub save_interval: u64,
    #[serde(default = "defaults::num_eval_episodes")]
    pub num_eval_episodes: usize,
}

mod defaults {
    pub const fn num_envs() -> usize {
        1
    }
    pub const fn num_steps() -> usize {
        128
    }
    pub const fn num_init_steps() -> u64 {
        2000
    }
    pub const fn log_interval() -> u64 {
        1
    }
    pub const fn eval_interval() -> u64 {
        100
    }
    pub const fn save_interval() -> u64 {
        100
    }
    pub const fn num_eval_episodes() -> usize {
        10
    }
}

impl ExperimentConfig {
    /// Load and validate an experiment from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadConfigError> {
        Self::from_yaml_file_with_overrides(path, &[] as &[Override])
    }

    /// Load an experiment from a YAML file, apply overrides, then validate.
    pub fn from_yaml_file_with_overrides<P: AsRef<Path>>(
        path: P,
        overrides: &[Override],
    ) -> Result<Self, LoadConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigParseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str_with_overrides(&contents, overrides)
    }

    /// Parse and validate an experiment from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LoadConfigError> {
        Self::from_yaml_str_with_overrides(yaml, &[])
    }

    /// Parse an experiment from a YAML string, apply overrides, then validate.
    pub fn from_yaml_str_with_overrides(
        yaml: &str,
        overrides: &[Override],
    ) -> Result<Self, LoadConfigError> {
        let mut document: Value = serde_yaml::from_str(yaml).map_err(ConfigParseError::Syntax)?;
        for o in overrides {
            o.apply(&mut document)?;
        }
        let config: Self = serde_yaml::from_value(document).map_err(ConfigParseError::Schema)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that options which must appear together do.
    pub fn validate(&self) -> Result<(), MissingRewardModuleError> {
        check_compatibility(self)
    }

    /// The module configuration of the given kind, if present.
    pub fn module(&self, kind: ModuleKind) -> Option<&ModuleConfig> {
        use ModuleKind::*;
        match kind {
            Encoder => self.encoder.as_ref(),
            Agent => Some(&self.agent),
            Storage => self.storage.as_ref(),
            Distribution => self.distribution.as_ref(),
            Augmentation => self.augmentation.as_ref(),
            Reward => self.reward.as_ref(),
        }
    }

    /// The selected intrinsic reward module name, if any.
    pub fn reward_name(&self) -> Option<&str> {
        self.reward.as_ref().and_then(ModuleConfig::name)
    }
}
