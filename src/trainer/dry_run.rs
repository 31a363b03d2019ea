use super::{LoopError, Session, TrainingLoop};

/// Training loop that reports the training plan without stepping any environment.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DryRun;

impl TrainingLoop for DryRun {
    fn run(&mut self, session: &mut Session) -> Result<(), LoopError> {
        let plan = session.plan();
        session.info(format_args!(
            "Plan: {} updates of {} steps across {} environments",
            plan.num_updates, plan.steps_per_update, plan.num_envs
        ));
        if plan.num_init_steps > 0 {
            session.info(format_args!(
                "Random exploration for the first {} steps",
                plan.num_init_steps
            ));
        }
        let reward_mode = session.reward_mode();
        session.info(format_args!("Reward: {}", reward_mode));
        session.info(format_args!("Dry run, no environment attached"));
        Ok(())
    }
}
