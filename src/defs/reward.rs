use super::catalog;
use serde_yaml::Value;
use std::collections::BTreeMap;
use thiserror::Error;

catalog! {
    /// Intrinsic reward module name
    pub enum RewardName (Reward) {
        /// Random encoders for efficient exploration.
        RE3,
        /// Intrinsic curiosity module.
        ICM,
        /// Random network distillation.
        RND,
        /// Never give up.
        NGU,
        /// Rewarding impact-driven exploration.
        RIDE,
        /// Rényi state entropy maximization.
        RISE,
        /// Rewarding episodic visitation discrepancy.
        REVD,
        /// Exploration via elliptical episodic bonuses.
        E3B,
        PseudoCounts,
        /// Generative intrinsic reward module.
        GIRM,
    }
}

/// Weight of the intrinsic reward, decaying with the global step.
///
/// `weight(t) = beta * (1 - kappa)^t`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IntrinsicWeight {
    /// Initial weighting coefficient.
    pub beta: f64,
    /// Decay rate per step.
    pub kappa: f64,
}

impl Default for IntrinsicWeight {
    fn default() -> Self {
        Self {
            beta: 0.05,
            kappa: 0.000_025,
        }
    }
}

/// An intrinsic reward parameter with an unusable value.
#[derive(Debug, Error)]
#[error("invalid parameter `{key}` for reward module: {reason}")]
pub struct InvalidWeightError {
    pub key: &'static str,
    pub reason: String,
}

impl IntrinsicWeight {
    /// Read `beta` and `kappa` from reward module parameters, ignoring other keys.
    pub fn from_params(params: &BTreeMap<String, Value>) -> Result<Self, InvalidWeightError> {
        let mut weight = Self::default();
        if let Some(value) = params.get("beta") {
            weight.beta = parse_coefficient("beta", value)?;
        }
        if let Some(value) = params.get("kappa") {
            weight.kappa = parse_coefficient("kappa", value)?;
        }
        if !(weight.beta.is_finite() && weight.beta >= 0.0) {
            return Err(InvalidWeightError {
                key: "beta",
                reason: format!("must be finite and non-negative, got {}", weight.beta),
            });
        }
        if !(0.0..1.0).contains(&weight.kappa) {
            return Err(InvalidWeightError {
                key: "kappa",
                reason: format!("must be in [0, 1), got {}", weight.kappa),
            });
        }
        Ok(weight)
    }

    /// The intrinsic reward weight at a global step.
    pub fn at_step(&self, step: u64) -> f64 {
        self.beta * (1.0 - self.kappa).powf(step as f64)
    }
}

fn parse_coefficient(key: &'static str, value: &Value) -> Result<f64, InvalidWeightError> {
    value.as_f64().ok_or_else(|| InvalidWeightError {
        key,
        reason: format!("expected a number, got {:?}", value),
    })
}
