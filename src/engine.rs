//! Experiment launch
use crate::config::{ExperimentConfig, Override};
use crate::error::HsuanwuError;
use crate::logging::Reporter;
use crate::trainer::{Trainer, TrainingLoop};
use std::path::Path;

/// Load an experiment, deploy its trainer and run the training loop.
///
/// Startup aborts before training if the configuration cannot be loaded,
/// pre-training lacks a reward module, or the selected modules are incompatible.
///
/// # Args
/// * `path` - Experiment YAML file.
/// * `overrides` - Applied to the file contents before validation.
/// * `training_loop` - Steps the agent once the trainer is deployed.
/// * `reporter` - Receives the status transcript.
pub fn launch<P, T, R>(
    path: P,
    overrides: &[Override],
    training_loop: &mut T,
    mut reporter: R,
) -> Result<(), HsuanwuError>
where
    P: AsRef<Path>,
    T: TrainingLoop + ?Sized,
    R: Reporter,
{
    let config = ExperimentConfig::from_yaml_file_with_overrides(path, overrides)?;
    let trainer = Trainer::deploy(config, &mut reporter)?;
    trainer.train(training_loop, &mut reporter)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoadConfigError;
    use crate::logging::{Level, StatusLine};
    use crate::trainer::DryRun;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASE: &str = "\
experiment: drqv2_dmc_pretraining
device: cuda:0
seed: 1
num_train_steps: 250000
agent:
    name: DrQv2
";

    fn experiment_file(extra: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}{}", BASE, extra).unwrap();
        file
    }

    #[test]
    fn pretraining_with_reward() {
        let file = experiment_file("pretraining: true\nreward:\n    name: RE3\n");
        let mut lines: Vec<StatusLine> = Vec::new();
        launch(file.path(), &[], &mut DryRun, &mut lines).unwrap();

        assert!(lines.iter().any(|l| l.message.contains("RE3")));
        assert!(lines
            .iter()
            .any(|l| l.level == Level::Info && l.message.contains("Pre-training Mode On")));
        assert!(lines.iter().any(|l| l.message == "Start Training..."));
    }

    #[test]
    fn pretraining_without_reward_never_trains() {
        let file = experiment_file("pretraining: true\n");
        let mut lines: Vec<StatusLine> = Vec::new();
        let result = launch(file.path(), &[], &mut DryRun, &mut lines);

        assert!(matches!(
            result,
            Err(HsuanwuError::Config(LoadConfigError::MissingRewardModule(_)))
        ));
        assert!(!lines.iter().any(|l| l.message.contains("Start Training")));
    }

    #[test]
    fn override_supplies_reward() {
        let file = experiment_file("pretraining: true\n");
        let overrides: Vec<Override> = vec!["reward.name=RND".parse().unwrap()];
        let mut lines: Vec<StatusLine> = Vec::new();
        launch(file.path(), &overrides, &mut DryRun, &mut lines).unwrap();
        assert!(lines
            .iter()
            .any(|l| l.message == "Use Intrinsic Reward: True, RND"));
    }

    #[test]
    fn without_pretraining() {
        let file = experiment_file("");
        let mut lines: Vec<StatusLine> = Vec::new();
        launch(file.path(), &[], &mut DryRun, &mut lines).unwrap();
        assert!(lines.iter().any(|l| l.message == "Pre-training Mode Off..."));
        assert!(lines.iter().any(|l| l.message == "Use Intrinsic Reward: False"));
    }

    #[test]
    fn incompatible_modules() {
        let file = experiment_file("distribution:\n    name: Categorical\n");
        let result = launch(file.path(), &[], &mut DryRun, ());
        assert!(matches!(result, Err(HsuanwuError::Compatibility(_))));
    }

    #[rstest::rstest]
    #[case("drqv2_pretraining.yaml", "intrinsic only (RE3)")]
    #[case("ppo_e3b.yaml", "extrinsic + intrinsic (E3B)")]
    fn bundled_configs(#[case] file: &str, #[case] reward: &str) {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("configs").join(file);
        let mut lines: Vec<StatusLine> = Vec::new();
        launch(path, &[], &mut DryRun, &mut lines).unwrap();
        let expected = format!("Reward: {}", reward);
        assert!(lines.iter().any(|l| l.message == expected));
    }
}
