use super::TrainerKind;
use crate::config::ExperimentConfig;

/// Step and update counts derived from an experiment.
///
/// On-policy and distributed trainers update once per rollout of
/// `num_steps` steps in each environment. Off-policy trainers update once per
/// vectorized environment step after `num_init_steps` of random exploration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TrainingPlan {
    pub num_train_steps: u64,
    pub num_envs: u64,
    /// Environment steps collected between updates.
    pub steps_per_update: u64,
    pub num_updates: u64,
    /// Random exploration steps before learning starts.
    pub num_init_steps: u64,
    pub log_interval: u64,
    pub eval_interval: u64,
    pub save_interval: u64,
    pub num_eval_episodes: usize,
}

impl TrainingPlan {
    /// Plan training for a trainer kind. Zero environment or rollout counts are treated as one;
    /// a rollout larger than `u64::MAX` steps saturates.
    pub fn new(kind: TrainerKind, config: &ExperimentConfig) -> Self {
        let num_envs = config.num_envs.max(1) as u64;
        let (steps_per_update, num_init_steps) = match kind {
            TrainerKind::OffPolicy => (num_envs, config.num_init_steps),
            TrainerKind::OnPolicy | TrainerKind::Distributed => {
                (num_envs.saturating_mul(config.num_steps.max(1) as u64), 0)
            }
        };
        Self {
            num_train_steps: config.num_train_steps,
            num_envs,
            steps_per_update,
            num_updates: config.num_train_steps / steps_per_update,
            num_init_steps,
            log_interval: config.log_interval,
            eval_interval: config.eval_interval,
            save_interval: config.save_interval,
            num_eval_episodes: config.num_eval_episodes,
        }
    }

    /// Whether training metrics are logged after this update. A zero interval disables logging.
    pub const fn should_log(&self, update: u64) -> bool {
        on_interval(update, self.log_interval)
    }

    /// Whether the agent is evaluated before this update.
    pub const fn should_eval(&self, update: u64) -> bool {
        self.num_eval_episodes > 0 && on_interval(update, self.eval_interval)
    }

    /// Whether the model is saved after this update.
    pub const fn should_save(&self, update: u64) -> bool {
        on_interval(update, self.save_interval)
    }

    /// Whether a global step is still within random exploration.
    pub const fn is_exploring(&self, step: u64) -> bool {
        step < self.num_init_steps
    }
}

const fn on_interval(update: u64, interval: u64) -> bool {
    interval != 0 && update % interval == 0
}
