//! Grip scoring and finite-difference gradient ascent.
//!
//! Grip is the composite quality score of a coefficient vector: contact
//! (how close the coefficients sum to 1), coverage (fraction of non-zero
//! entries), efficiency (penalty on vector length), and stability (penalty
//! on the largest magnitude). The optimizer hill-climbs the overall score;
//! it is local and carries no global-optimum guarantee.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CONTACT_WEIGHT, COVERAGE_FLOOR, COVERAGE_WEIGHT, EFFICIENCY_SCALE, EFFICIENCY_WEIGHT,
    GRADIENT_STEP, GRIP_TARGET, LEARNING_RATE, MAX_ITERATIONS, STABILITY_SCALE, STABILITY_WEIGHT,
};
use crate::error::{KernelError, Result};

/// Composite quality score. All five fields lie in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GripMetrics {
    pub contact: f64,
    pub coverage: f64,
    pub efficiency: f64,
    pub stability: f64,
    pub overall: f64,
}

/// Tunable knobs for the gradient ascent. The defaults are untuned working
/// values, not invariants.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerConfig {
    pub learning_rate: f64,
    pub gradient_step: f64,
    /// Overall grip at which the ascent stops early.
    pub target: f64,
    pub max_iterations: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            learning_rate: LEARNING_RATE,
            gradient_step: GRADIENT_STEP,
            target: GRIP_TARGET,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

/// Outcome of one optimization call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub coefficients: Vec<f64>,
    pub grip: GripMetrics,
    /// Full sweeps performed. Zero when the initial vector already meets
    /// the target.
    pub iterations: usize,
}

/// Score a coefficient vector. Errors on an empty slice; total otherwise.
pub fn measure_grip(coefficients: &[f64]) -> Result<GripMetrics> {
    if coefficients.is_empty() {
        return Err(KernelError::EmptyCoefficients);
    }

    let sum: f64 = coefficients.iter().sum();
    let contact = (-(sum - 1.0).abs()).exp();

    let nonzero = coefficients
        .iter()
        .filter(|c| c.abs() > COVERAGE_FLOOR)
        .count();
    let coverage = nonzero as f64 / coefficients.len() as f64;

    let efficiency = (-(coefficients.len() as f64) / EFFICIENCY_SCALE).exp();

    let max_magnitude = coefficients.iter().fold(0.0_f64, |m, c| m.max(c.abs()));
    let stability = (-max_magnitude / STABILITY_SCALE).exp();

    let overall = CONTACT_WEIGHT * contact
        + COVERAGE_WEIGHT * coverage
        + EFFICIENCY_WEIGHT * efficiency
        + STABILITY_WEIGHT * stability;

    Ok(GripMetrics {
        contact,
        coverage,
        efficiency,
        stability,
        overall,
    })
}

/// Hill-climb the overall grip by forward finite differences.
///
/// Every sweep estimates the partial of `overall` at each index, then moves
/// all coefficients at once (batch update, not coordinate-wise). Terminates
/// at the target or the sweep cap; both are normal outcomes.
pub fn optimize_grip(initial: &[f64], config: &OptimizerConfig) -> Result<OptimizationResult> {
    let mut coefficients = initial.to_vec();
    let mut grip = measure_grip(&coefficients)?;
    let mut iterations = 0;

    while grip.overall < config.target && iterations < config.max_iterations {
        let base = grip.overall;
        let mut gradient = vec![0.0; coefficients.len()];
        for (i, slot) in gradient.iter_mut().enumerate() {
            let mut probe = coefficients.clone();
            probe[i] += config.gradient_step;
            let perturbed = measure_grip(&probe)?.overall;
            *slot = (perturbed - base) / config.gradient_step;
        }

        for (c, g) in coefficients.iter_mut().zip(&gradient) {
            *c += config.learning_rate * g;
        }

        grip = measure_grip(&coefficients)?;
        iterations += 1;
    }

    Ok(OptimizationResult {
        coefficients,
        grip,
        iterations,
    })
}
