use super::{
    catalog, AugmentationName, DistributionFamily, DistributionName, EncoderName, StorageName,
};

catalog! {
    /// Agent name
    pub enum AgentName (Agent) {
        /// Data-regularized Q, version 2.
        DrQv2,
        /// Deep deterministic policy gradient.
        DDPG,
        /// Soft actor-critic.
        SAC,
        /// Deep Q network.
        DQN,
        /// Proximal policy optimization.
        PPO,
        /// Advantage actor-critic.
        A2C,
        /// Decoupled advantage actor-critic.
        DAAC,
        /// Phasic policy gradient.
        PPG,
        /// Importance weighted actor-learner architecture.
        IMPALA,
    }
}

/// How an agent collects and consumes experience.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AgentFamily {
    /// Learns from a replay buffer of past transitions.
    OffPolicy,
    /// Learns from fresh rollouts of the current policy.
    OnPolicy,
    /// Actors and learners in separate workers.
    Distributed,
}

/// Modules used by an agent when the experiment does not name them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AgentDefaults {
    pub encoder: EncoderName,
    pub storage: StorageName,
    pub distribution: DistributionName,
    pub augmentation: Option<AugmentationName>,
}

impl AgentName {
    pub const fn family(self) -> AgentFamily {
        use AgentName::*;
        match self {
            DrQv2 | DDPG | SAC | DQN => AgentFamily::OffPolicy,
            PPO | A2C | DAAC | PPG => AgentFamily::OnPolicy,
            IMPALA => AgentFamily::Distributed,
        }
    }

    pub const fn defaults(self) -> AgentDefaults {
        use AgentName::*;
        let (encoder, storage, distribution, augmentation) = match self {
            DrQv2 => (
                EncoderName::TassaCnnEncoder,
                StorageName::NStepReplayStorage,
                DistributionName::TruncatedNormalNoise,
                Some(AugmentationName::RandomShift),
            ),
            DDPG => (
                EncoderName::IdentityEncoder,
                StorageName::VanillaReplayStorage,
                DistributionName::TruncatedNormalNoise,
                None,
            ),
            SAC => (
                EncoderName::IdentityEncoder,
                StorageName::VanillaReplayStorage,
                DistributionName::SquashedNormal,
                None,
            ),
            DQN => (
                EncoderName::MnihCnnEncoder,
                StorageName::VanillaReplayStorage,
                DistributionName::Categorical,
                None,
            ),
            PPO | A2C | PPG => (
                EncoderName::MnihCnnEncoder,
                StorageName::VanillaRolloutStorage,
                DistributionName::Categorical,
                None,
            ),
            DAAC => (
                EncoderName::EspeholtResidualEncoder,
                StorageName::VanillaRolloutStorage,
                DistributionName::Categorical,
                None,
            ),
            IMPALA => (
                EncoderName::EspeholtResidualEncoder,
                StorageName::DistributedStorage,
                DistributionName::Categorical,
                None,
            ),
        };
        AgentDefaults {
            encoder,
            storage,
            distribution,
            augmentation,
        }
    }

    /// Whether this agent can sample actions from a distribution of the given family.
    ///
    /// Deterministic actor-critics explore with additive noise,
    /// SAC needs a reparameterizable squashed distribution,
    /// and the rest sample from a policy distribution.
    pub const fn accepts_distribution(self, family: DistributionFamily) -> bool {
        use AgentName::*;
        matches!(
            (self, family),
            (DrQv2 | DDPG, DistributionFamily::Noise)
                | (SAC, DistributionFamily::Squashed)
                | (
                    DQN | PPO | A2C | DAAC | PPG | IMPALA,
                    DistributionFamily::Policy
                )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_self_consistent() {
        for agent in AgentName::ALL {
            let defaults = agent.defaults();
            assert!(
                defaults.storage.family().serves(agent.family()),
                "{} default storage {}",
                agent,
                defaults.storage
            );
            assert!(
                agent.accepts_distribution(defaults.distribution.family()),
                "{} default distribution {}",
                agent,
                defaults.distribution
            );
        }
    }

    #[test]
    fn drqv2_defaults() {
        let defaults = AgentName::DrQv2.defaults();
        assert_eq!(defaults.encoder, EncoderName::TassaCnnEncoder);
        assert_eq!(defaults.storage, StorageName::NStepReplayStorage);
        assert_eq!(defaults.distribution, DistributionName::TruncatedNormalNoise);
        assert_eq!(defaults.augmentation, Some(AugmentationName::RandomShift));
    }

    #[test]
    fn families() {
        assert_eq!(AgentName::DrQv2.family(), AgentFamily::OffPolicy);
        assert_eq!(AgentName::PPO.family(), AgentFamily::OnPolicy);
        assert_eq!(AgentName::IMPALA.family(), AgentFamily::Distributed);
    }
}
