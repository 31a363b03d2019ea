use crate::check::ModuleSelection;
use crate::defs::{IntrinsicWeight, RewardName};
use std::fmt;

/// How extrinsic and intrinsic rewards combine into the training signal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RewardMode {
    /// Discard the environment reward.
    pub pretraining: bool,
    /// Intrinsic reward module and its weight.
    pub intrinsic: Option<(RewardName, IntrinsicWeight)>,
}

impl RewardMode {
    pub fn new(pretraining: bool, selection: &ModuleSelection) -> Self {
        Self {
            pretraining,
            intrinsic: selection
                .reward
                .map(|reward| (reward, selection.intrinsic_weight)),
        }
    }

    /// Replace `rewards` in place with the training signal for a batch of transitions.
    ///
    /// In pre-training mode the extrinsic rewards are zeroed.
    /// Intrinsic rewards, when a module is selected, are added with their weight at `step`.
    ///
    /// # Panics
    /// If `intrinsic` is given and its length differs from `rewards`.
    pub fn shape(&self, step: u64, rewards: &mut [f32], intrinsic: Option<&[f32]>) {
        if self.pretraining {
            rewards.iter_mut().for_each(|r| *r = 0.0);
        }
        if let (Some((_, weight)), Some(intrinsic)) = (self.intrinsic, intrinsic) {
            assert_eq!(
                rewards.len(),
                intrinsic.len(),
                "intrinsic reward batch size mismatch"
            );
            #[allow(clippy::cast_possible_truncation)]
            let weight = weight.at_step(step) as f32;
            for (r, i) in rewards.iter_mut().zip(intrinsic) {
                *r += weight * i;
            }
        }
    }
}

impl fmt::Display for RewardMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.pretraining, self.intrinsic) {
            (true, Some((name, _))) => write!(f, "intrinsic only ({})", name),
            (true, None) => f.write_str("none"),
            (false, Some((name, _))) => write!(f, "extrinsic + intrinsic ({})", name),
            (false, None) => f.write_str("extrinsic"),
        }
    }
}
