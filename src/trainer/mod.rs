//! Trainer deployment
//!
//! A [`Trainer`] is deployed from a validated experiment: it resolves the selected modules,
//! reports them, then hands control to a [`TrainingLoop`] that steps the environments.
mod dry_run;
mod plan;
mod reward;

pub use dry_run::DryRun;
pub use plan::TrainingPlan;
pub use reward::RewardMode;

use crate::check::{CompatibilityError, ModuleSelection};
use crate::config::ExperimentConfig;
use crate::defs::{AgentFamily, ModuleKind};
use crate::logging::{EvalMetrics, Level, Reporter, TrainMetrics};
use coarsetime::Instant;
use std::error::Error;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Trainer variant, chosen by how the agent learns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TrainerKind {
    OffPolicy,
    OnPolicy,
    Distributed,
}

impl From<AgentFamily> for TrainerKind {
    fn from(family: AgentFamily) -> Self {
        match family {
            AgentFamily::OffPolicy => Self::OffPolicy,
            AgentFamily::OnPolicy => Self::OnPolicy,
            AgentFamily::Distributed => Self::Distributed,
        }
    }
}

impl fmt::Display for TrainerKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::OffPolicy => "OffPolicyTrainer",
            Self::OnPolicy => "OnPolicyTrainer",
            Self::Distributed => "DistributedTrainer",
        })
    }
}

/// Error from a training loop
pub type LoopError = Box<dyn Error + Send + Sync>;

/// Drives the agent through its environments.
pub trait TrainingLoop {
    /// Run training to completion.
    fn run(&mut self, session: &mut Session) -> Result<(), LoopError>;
}

/// Error during training
#[derive(Debug, Error)]
pub enum TrainError {
    #[error("training loop failed")]
    Loop(#[source] LoopError),
}

/// A deployed trainer for one experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct Trainer {
    config: ExperimentConfig,
    selection: ModuleSelection,
    kind: TrainerKind,
    plan: TrainingPlan,
    reward_mode: RewardMode,
}

impl Trainer {
    /// Resolve the experiment's modules and report the deployment.
    ///
    /// Nothing past the engine invocation is reported if the modules are incompatible.
    pub fn deploy<R>(config: ExperimentConfig, mut reporter: R) -> Result<Self, CompatibilityError>
    where
        R: Reporter,
    {
        reporter.info(format_args!("Experiment: {}", config.experiment));
        reporter.info(format_args!("Invoking Hsuanwu Engine..."));

        let selection = ModuleSelection::resolve(&config)?;
        let kind = TrainerKind::from(selection.agent.family());
        reporter.info(format_args!("Deploying {}...", kind));
        reporter.info(format_args!("Check Accelerator: {}", config.device));

        reporter.info(format_args!("Check Modules..."));
        let names = selection.names();
        for module_kind in [
            ModuleKind::Encoder,
            ModuleKind::Agent,
            ModuleKind::Storage,
            ModuleKind::Distribution,
        ] {
            if let Some(name) = names[module_kind] {
                reporter.debug(format_args!("Selected {}: {}", module_kind, name));
            }
        }
        report_optional(&mut reporter, "Use Augmentation", names[ModuleKind::Augmentation]);
        report_optional(&mut reporter, "Use Intrinsic Reward", names[ModuleKind::Reward]);

        if config.pretraining {
            reporter.info(format_args!("Pre-training Mode On..."));
        } else {
            reporter.info(format_args!("Pre-training Mode Off..."));
        }

        let plan = TrainingPlan::new(kind, &config);
        let reward_mode = RewardMode::new(config.pretraining, &selection);
        Ok(Self {
            config,
            selection,
            kind,
            plan,
            reward_mode,
        })
    }

    /// Run a training loop under this trainer.
    pub fn train<T, R>(&self, training_loop: &mut T, mut reporter: R) -> Result<(), TrainError>
    where
        T: TrainingLoop + ?Sized,
        R: Reporter,
    {
        reporter.info(format_args!("Start Training..."));
        let mut session = Session {
            trainer: self,
            reporter: &mut reporter,
            start: Instant::now(),
        };
        training_loop.run(&mut session).map_err(TrainError::Loop)?;
        reporter.info(format_args!("Training Accomplished!"));
        Ok(())
    }

    pub const fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    pub const fn selection(&self) -> &ModuleSelection {
        &self.selection
    }

    pub const fn kind(&self) -> TrainerKind {
        self.kind
    }

    pub const fn plan(&self) -> &TrainingPlan {
        &self.plan
    }

    pub const fn reward_mode(&self) -> &RewardMode {
        &self.reward_mode
    }
}

fn report_optional<R: Reporter>(reporter: &mut R, label: &str, name: Option<&str>) {
    match name {
        Some(name) => reporter.debug(format_args!("{}: True, {}", label, name)),
        None => reporter.debug(format_args!("{}: False", label)),
    }
}

/// What a training loop sees of its trainer.
pub struct Session<'a> {
    trainer: &'a Trainer,
    reporter: &'a mut dyn Reporter,
    start: Instant,
}

impl<'a> Session<'a> {
    pub const fn config(&self) -> &'a ExperimentConfig {
        &self.trainer.config
    }

    pub const fn selection(&self) -> &'a ModuleSelection {
        &self.trainer.selection
    }

    pub const fn plan(&self) -> &'a TrainingPlan {
        &self.trainer.plan
    }

    pub const fn reward_mode(&self) -> &'a RewardMode {
        &self.trainer.reward_mode
    }

    /// Time since training started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed().into()
    }

    pub fn info(&mut self, message: fmt::Arguments) {
        self.reporter.info(message)
    }

    pub fn log_train(&mut self, metrics: &TrainMetrics) {
        self.reporter.report(Level::Train, format_args!("{}", metrics))
    }

    pub fn log_eval(&mut self, metrics: &EvalMetrics) {
        self.reporter.report(Level::Eval, format_args!("{}", metrics))
    }
}

impl fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Session")
            .field("trainer", &self.trainer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::StatusLine;
    use rstest::{fixture, rstest};

    const PRETRAINING: &str = "\
experiment: drqv2_dmc_pretraining
device: cuda:0
seed: 1
num_train_steps: 250000
pretraining: true
agent:
    name: DrQv2
reward:
    name: RE3
";

    #[fixture]
    fn pretraining_config() -> ExperimentConfig {
        ExperimentConfig::from_yaml_str(PRETRAINING).unwrap()
    }

    fn messages(lines: &[StatusLine]) -> Vec<&str> {
        lines.iter().map(|line| line.message.as_str()).collect()
    }

    #[rstest]
    fn deploy_transcript(pretraining_config: ExperimentConfig) {
        let mut lines: Vec<StatusLine> = Vec::new();
        let trainer = Trainer::deploy(pretraining_config, &mut lines).unwrap();
        assert_eq!(trainer.kind(), TrainerKind::OffPolicy);
        assert_eq!(
            messages(&lines),
            [
                "Experiment: drqv2_dmc_pretraining",
                "Invoking Hsuanwu Engine...",
                "Deploying OffPolicyTrainer...",
                "Check Accelerator: cuda:0",
                "Check Modules...",
                "Selected Encoder: TassaCnnEncoder",
                "Selected Agent: DrQv2",
                "Selected Storage: NStepReplayStorage",
                "Selected Distribution: TruncatedNormalNoise",
                "Use Augmentation: True, RandomShift",
                "Use Intrinsic Reward: True, RE3",
                "Pre-training Mode On...",
            ]
        );
    }

    #[rstest]
    fn module_lines_are_debug(pretraining_config: ExperimentConfig) {
        let mut lines: Vec<StatusLine> = Vec::new();
        Trainer::deploy(pretraining_config, &mut lines).unwrap();
        for line in &lines {
            let expected = if line.message.starts_with("Selected") || line.message.starts_with("Use")
            {
                Level::Debug
            } else {
                Level::Info
            };
            assert_eq!(line.level, expected, "{}", line.message);
        }
    }

    #[test]
    fn deploy_without_pretraining() {
        let config = ExperimentConfig::from_yaml_str(
            "experiment: ppo\ndevice: cpu\nseed: 1\nnum_train_steps: 1000\nagent: {name: PPO}\n",
        )
        .unwrap();
        let mut lines: Vec<StatusLine> = Vec::new();
        let trainer = Trainer::deploy(config, &mut lines).unwrap();
        assert_eq!(trainer.kind(), TrainerKind::OnPolicy);
        let messages = messages(&lines);
        assert!(messages.contains(&"Deploying OnPolicyTrainer..."));
        assert!(messages.contains(&"Use Augmentation: False"));
        assert!(messages.contains(&"Use Intrinsic Reward: False"));
        assert!(messages.contains(&"Pre-training Mode Off..."));
    }

    #[test]
    fn incompatible_stops_after_invocation() {
        let config = ExperimentConfig::from_yaml_str(
            "experiment: x\ndevice: cpu\nseed: 1\nnum_train_steps: 1\n\
             agent: {name: PPO}\nstorage: {name: NStepReplayStorage}\n",
        )
        .unwrap();
        let mut lines: Vec<StatusLine> = Vec::new();
        assert!(Trainer::deploy(config, &mut lines).is_err());
        assert_eq!(
            messages(&lines),
            ["Experiment: x", "Invoking Hsuanwu Engine..."]
        );
    }

    /// Logs one training line and records the planned step count.
    #[derive(Debug, Default)]
    struct OneStep {
        planned_steps: u64,
        pretraining: bool,
    }

    impl TrainingLoop for OneStep {
        fn run(&mut self, session: &mut Session) -> Result<(), LoopError> {
            self.planned_steps = session.plan().num_train_steps;
            self.pretraining = session.reward_mode().pretraining;
            session.log_train(&TrainMetrics {
                step: 1000,
                episode: 1,
                ..TrainMetrics::default()
            });
            Ok(())
        }
    }

    /// Logs one evaluation line timed by the session clock.
    struct Evaluate;

    impl TrainingLoop for Evaluate {
        fn run(&mut self, session: &mut Session) -> Result<(), LoopError> {
            let total_time = session.elapsed();
            session.log_eval(&EvalMetrics {
                step: 5000,
                episode: 10,
                episode_length: 500.0,
                episode_reward: 12.5,
                total_time,
            });
            Ok(())
        }
    }

    struct Crash;

    impl TrainingLoop for Crash {
        fn run(&mut self, _: &mut Session) -> Result<(), LoopError> {
            Err("environment crashed".into())
        }
    }

    #[rstest]
    fn train_runs_loop(pretraining_config: ExperimentConfig) {
        let trainer = Trainer::deploy(pretraining_config, ()).unwrap();
        let mut lines: Vec<StatusLine> = Vec::new();
        let mut training_loop = OneStep::default();
        trainer.train(&mut training_loop, &mut lines).unwrap();
        assert_eq!(training_loop.planned_steps, 250_000);
        assert!(training_loop.pretraining);
        assert_eq!(lines[0].message, "Start Training...");
        assert_eq!(lines[1].level, Level::Train);
        assert!(lines[1].message.starts_with("S: 1000 | E: 1 |"));
        assert_eq!(
            lines.last().map(|l| l.message.as_str()),
            Some("Training Accomplished!")
        );
    }

    #[rstest]
    fn train_logs_eval(pretraining_config: ExperimentConfig) {
        let trainer = Trainer::deploy(pretraining_config, ()).unwrap();
        let mut lines: Vec<StatusLine> = Vec::new();
        trainer.train(&mut Evaluate, &mut lines).unwrap();
        assert_eq!(lines[1].level, Level::Eval);
        assert!(lines[1]
            .message
            .starts_with("S: 5000 | E: 10 | L: 500 | R: 12.500 | T: 0:00:0"));
    }

    #[test]
    fn deploy_with_oversized_rollout() {
        let config = ExperimentConfig::from_yaml_str(
            "experiment: x\ndevice: cpu\nseed: 1\nnum_train_steps: 1000\n\
             agent: {name: PPO}\nnum_envs: 4294967296\nnum_steps: 4294967296\n",
        )
        .unwrap();
        let trainer = Trainer::deploy(config, ()).unwrap();
        assert_eq!(trainer.plan().num_updates, 0);
    }

    #[rstest]
    fn loop_failure(pretraining_config: ExperimentConfig) {
        let trainer = Trainer::deploy(pretraining_config, ()).unwrap();
        let mut lines: Vec<StatusLine> = Vec::new();
        let result = trainer.train(&mut Crash, &mut lines);
        assert!(matches!(result, Err(TrainError::Loop(_))));
        assert!(!lines.iter().any(|l| l.message == "Training Accomplished!"));
    }
}
