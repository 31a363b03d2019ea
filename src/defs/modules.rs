use super::{catalog, AgentFamily};

catalog! {
    /// Observation encoder name
    pub enum EncoderName (Encoder) {
        /// Convolutional encoder for DeepMind Control pixels.
        TassaCnnEncoder,
        /// Convolutional encoder for Atari frames.
        MnihCnnEncoder,
        /// Residual encoder for Procgen.
        EspeholtResidualEncoder,
        /// Convolutional encoder for curiosity-driven exploration.
        PathakCnnEncoder,
        /// Passes state observations through unchanged.
        IdentityEncoder,
        /// Multi-layer perceptron for state observations.
        VanillaMlpEncoder,
    }
}

catalog! {
    /// Experience storage name
    pub enum StorageName (Storage) {
        VanillaReplayStorage,
        NStepReplayStorage,
        PrioritizedReplayStorage,
        DictReplayStorage,
        VanillaRolloutStorage,
        DistributedStorage,
    }
}

catalog! {
    /// Action distribution name
    pub enum DistributionName (Distribution) {
        TruncatedNormalNoise,
        NormalNoise,
        OrnsteinUhlenbeckNoise,
        SquashedNormal,
        Categorical,
        DiagonalGaussian,
        Bernoulli,
        MultiCategorical,
    }
}

catalog! {
    /// Observation augmentation name
    pub enum AugmentationName (Augmentation) {
        RandomShift,
        RandomCrop,
        RandomFlip,
        RandomRotate,
        RandomCutout,
        RandomConvolution,
        GaussianNoise,
        RandomAmplitudeScaling,
        GrayScale,
    }
}

/// How a storage is filled and sampled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StorageFamily {
    Replay,
    Rollout,
    Distributed,
}

impl StorageFamily {
    /// Whether storages of this family can feed agents of the given family.
    pub const fn serves(self, agent: AgentFamily) -> bool {
        matches!(
            (self, agent),
            (Self::Replay, AgentFamily::OffPolicy)
                | (Self::Rollout, AgentFamily::OnPolicy)
                | (Self::Distributed, AgentFamily::Distributed)
        )
    }
}

impl StorageName {
    pub const fn family(self) -> StorageFamily {
        use StorageName::*;
        match self {
            VanillaReplayStorage | NStepReplayStorage | PrioritizedReplayStorage
            | DictReplayStorage => StorageFamily::Replay,
            VanillaRolloutStorage => StorageFamily::Rollout,
            DistributedStorage => StorageFamily::Distributed,
        }
    }
}

/// The role an action distribution plays.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DistributionFamily {
    /// Exploration noise added to deterministic actions.
    Noise,
    /// Tanh-squashed Gaussian.
    Squashed,
    /// Distribution parameterized directly by the policy network.
    Policy,
}

impl DistributionName {
    pub const fn family(self) -> DistributionFamily {
        use DistributionName::*;
        match self {
            TruncatedNormalNoise | NormalNoise | OrnsteinUhlenbeckNoise => {
                DistributionFamily::Noise
            }
            SquashedNormal => DistributionFamily::Squashed,
            Categorical | DiagonalGaussian | Bernoulli | MultiCategorical => {
                DistributionFamily::Policy
            }
        }
    }
}
