//! Numerical parameters for orbit integration
//!
//! `IntegratorParams` holds runtime settings:
//! - step count and fixed step size (physical time units),
//! - fixed-potential switch,
//! - which time the force is sampled at inside the step loop

use serde::Deserialize;

use crate::error::{ModelError, ModelResult};

/// Time argument passed to the force evaluation at step `k`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceClock {
    #[default]
    #[serde(rename = "synchronized")] // dt * k, same time as the drifted position and coefficients
    Synchronized,

    #[serde(rename = "lagged")] // dt * (k - 1), one step behind; reproduces legacy trajectories
    Lagged,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegratorParams {
    pub n_steps: usize, // number of records, including the initial one
    pub dt: f64, // step size, kpc/(km/s)
    pub fixed_potential: bool, // freeze coefficients and centres at t = 0
    pub force_clock: ForceClock,
}

impl IntegratorParams {
    pub fn new(n_steps: usize, dt: f64, fixed_potential: bool) -> Self {
        Self {
            n_steps,
            dt,
            fixed_potential,
            force_clock: ForceClock::default(),
        }
    }

    pub fn validate(&self) -> ModelResult<()> {
        if self.n_steps == 0 {
            return Err(ModelError::InvalidParameter("n_steps must be at least 1".to_string()));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ModelError::InvalidParameter(format!(
                "dt must be finite and positive, got {}",
                self.dt
            )));
        }
        Ok(())
    }
}
