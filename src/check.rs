//! Module compatibility checks and resolution
use crate::config::{ExperimentConfig, MissingRewardModuleError, ModuleConfig};
use crate::defs::{
    AgentName, AugmentationName, DistributionName, EncoderName, IntrinsicWeight,
    InvalidWeightError, ModuleKind, RewardName, StorageName, UnknownModuleError,
};
use enum_map::{enum_map, EnumMap};
use std::str::FromStr;
use thiserror::Error;

/// Check that options which require each other are set together.
///
/// Pre-training mode needs an intrinsic reward module to learn from.
pub fn check_compatibility(config: &ExperimentConfig) -> Result<(), MissingRewardModuleError> {
    if config.pretraining && config.reward_name().is_none() {
        return Err(MissingRewardModuleError);
    }
    Ok(())
}

/// Error resolving the modules of an experiment
#[derive(Debug, Error)]
pub enum CompatibilityError {
    #[error(transparent)]
    MissingRewardModule(#[from] MissingRewardModuleError),
    #[error(transparent)]
    UnknownModule(#[from] UnknownModuleError),
    #[error("{kind} {module} cannot be used with agent {agent}")]
    Incompatible {
        agent: AgentName,
        kind: ModuleKind,
        module: &'static str,
    },
    #[error(transparent)]
    InvalidRewardParameter(#[from] InvalidWeightError),
}

/// The modules an experiment runs with, after applying agent defaults.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ModuleSelection {
    pub encoder: EncoderName,
    pub agent: AgentName,
    pub storage: StorageName,
    pub distribution: DistributionName,
    pub augmentation: Option<AugmentationName>,
    pub reward: Option<RewardName>,
    /// Intrinsic reward weighting; meaningful only when `reward` is set.
    pub intrinsic_weight: IntrinsicWeight,
}

impl ModuleSelection {
    /// Resolve the named modules of an experiment against the catalog.
    ///
    /// Modules that are not named fall back to the agent's defaults.
    /// Fails if pre-training lacks a reward module, a name is not in the catalog,
    /// or a module does not fit the agent.
    pub fn resolve(config: &ExperimentConfig) -> Result<Self, CompatibilityError> {
        check_compatibility(config)?;

        let agent: AgentName = config.agent.name.parse()?;
        let defaults = agent.defaults();

        let encoder = lookup(config.encoder.as_ref())?.unwrap_or(defaults.encoder);

        let storage = lookup(config.storage.as_ref())?.unwrap_or(defaults.storage);
        if !storage.family().serves(agent.family()) {
            return Err(CompatibilityError::Incompatible {
                agent,
                kind: ModuleKind::Storage,
                module: storage.as_str(),
            });
        }

        let distribution = lookup(config.distribution.as_ref())?.unwrap_or(defaults.distribution);
        if !agent.accepts_distribution(distribution.family()) {
            return Err(CompatibilityError::Incompatible {
                agent,
                kind: ModuleKind::Distribution,
                module: distribution.as_str(),
            });
        }

        // An augmentation entry without a name switches off the agent's default.
        let augmentation = if config.augmentation.is_some() {
            lookup(config.augmentation.as_ref())?
        } else {
            defaults.augmentation
        };

        let reward = lookup(config.reward.as_ref())?;
        let intrinsic_weight = match &config.reward {
            Some(reward_config) if reward.is_some() => {
                IntrinsicWeight::from_params(&reward_config.params)?
            }
            _ => IntrinsicWeight::default(),
        };

        Ok(Self {
            encoder,
            agent,
            storage,
            distribution,
            augmentation,
            reward,
            intrinsic_weight,
        })
    }

    /// Selected module names by kind; `None` for unused optional modules.
    pub fn names(&self) -> EnumMap<ModuleKind, Option<&'static str>> {
        enum_map! {
            ModuleKind::Encoder => Some(self.encoder.as_str()),
            ModuleKind::Agent => Some(self.agent.as_str()),
            ModuleKind::Storage => Some(self.storage.as_str()),
            ModuleKind::Distribution => Some(self.distribution.as_str()),
            ModuleKind::Augmentation => self.augmentation.map(AugmentationName::as_str),
            ModuleKind::Reward => self.reward.map(RewardName::as_str),
        }
    }
}

/// Parse an optional module selection. An empty name counts as no selection.
fn lookup<T>(module: Option<&ModuleConfig>) -> Result<Option<T>, UnknownModuleError>
where
    T: FromStr<Err = UnknownModuleError>,
{
    module.and_then(ModuleConfig::name).map(str::parse).transpose()
}
