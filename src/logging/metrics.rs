//! Training and evaluation metric lines
use crate::utils::fmt::{ClockTime, PrettyPrint};
use std::fmt;
use std::time::Duration;

/// Progress summary reported during training.
///
/// Displayed as `S: <step> | E: <episode> | L: <length> | R: <reward> | FPS: <fps> | T: <time>`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct TrainMetrics {
    /// Global environment step.
    pub step: u64,
    /// Global episode count.
    pub episode: u64,
    /// Mean length of recent episodes.
    pub episode_length: f64,
    /// Mean return of recent episodes.
    pub episode_reward: f64,
    /// Total time since training started.
    pub total_time: Duration,
}

impl TrainMetrics {
    /// Environment steps per second of training time.
    pub fn fps(&self) -> f64 {
        let seconds = self.total_time.as_secs_f64();
        if seconds > 0.0 {
            self.step as f64 / seconds
        } else {
            0.0
        }
    }
}

impl fmt::Display for TrainMetrics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "S: {} | E: {} | L: {:.0} | R: {:.3} | FPS: {:.2} | T: {}",
            self.step,
            self.episode,
            self.episode_length,
            PrettyPrint(self.episode_reward),
            self.fps(),
            ClockTime(self.total_time)
        )
    }
}

/// Result of an evaluation run.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct EvalMetrics {
    pub step: u64,
    pub episode: u64,
    pub episode_length: f64,
    pub episode_reward: f64,
    pub total_time: Duration,
}

impl fmt::Display for EvalMetrics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "S: {} | E: {} | L: {:.0} | R: {:.3} | T: {}",
            self.step,
            self.episode,
            self.episode_length,
            PrettyPrint(self.episode_reward),
            ClockTime(self.total_time)
        )
    }
}
