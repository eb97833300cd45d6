//! Interfaces to the basis-function expansions.
//!
//! The force composition layer only sees two capabilities per component:
//! select a coefficient snapshot for a virial time, and evaluate the field
//! of a snapshot at a point. Snapshots are plain immutable values, so any
//! number of threads can evaluate against the same snapshot at once.
//!
//! [`CoefficientTable`] is the time-ordered coefficient store the reference
//! field models use for snapshot selection.

use nalgebra::DMatrix;

use crate::error::{ModelError, ModelResult};
use crate::simulation::states::NVec3;

/// Coefficients of a spherical expansion at one virial time
#[derive(Debug, Clone, PartialEq)]
pub struct SphericalSnapshot {
    pub t: f64, // virial time the coefficients were selected at
    pub coefs: DMatrix<f64>,
}

/// Cosine/sine coefficient pair of a cylindrical expansion at one virial time
#[derive(Debug, Clone, PartialEq)]
pub struct CylindricalSnapshot {
    pub t: f64,
    pub cos: DMatrix<f64>,
    pub sin: DMatrix<f64>,
}

/// Potential and force components from a spherical expansion (virial units)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SphericalFields {
    pub potential0: f64, // monopole potential
    pub potential: f64, // total potential
    pub f_r: f64,
    pub f_theta: f64,
    pub f_phi: f64,
}

/// Potential and force components from a cylindrical expansion (virial units)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CylindricalFields {
    pub potential0: f64,
    pub potential: f64,
    pub f_r: f64,
    pub f_phi: f64,
    pub f_z: f64,
}

/// Time-indexed centre of an expansion, queried as a pure read
pub trait OrientationHistory {
    fn return_centre(&self, t: f64) -> ModelResult<NVec3>;
}

/// Spherical-harmonic expansion (host or satellite halo)
pub trait SphericalExpansion {
    /// Coefficients at virial time `t`; `order` drops harmonic rows above it
    fn select_coefficient_time(
        &self,
        t: f64,
        order: Option<usize>,
    ) -> ModelResult<SphericalSnapshot>;

    /// Fields at `(r, theta, phi)` relative to the expansion centre
    fn determine_fields_at_point_sph(
        &self,
        snapshot: &SphericalSnapshot,
        r: f64,
        theta: f64,
        phi: f64,
    ) -> ModelResult<SphericalFields>;

    fn orientation(&self) -> &dyn OrientationHistory;
}

/// Cylindrical-harmonic expansion (disc)
pub trait CylindricalExpansion {
    fn select_coefficient_time(&self, t: f64) -> ModelResult<CylindricalSnapshot>;

    /// Fields at cylindrical `(R, phi, z)` relative to the expansion centre
    fn determine_fields_at_point_cyl(
        &self,
        snapshot: &CylindricalSnapshot,
        r: f64,
        phi: f64,
        z: f64,
    ) -> ModelResult<CylindricalFields>;

    fn orientation(&self) -> &dyn OrientationHistory;
}

/// Locate `t` in sorted `times`: returns the lower frame index and the
/// linear weight of the upper frame. A single-frame series covers all `t`.
pub(crate) fn bracket(what: &'static str, times: &[f64], t: f64) -> ModelResult<(usize, f64)> {
    if !t.is_finite() {
        return Err(ModelError::NonFinite { what });
    }
    let n = times.len();
    if n == 1 {
        return Ok((0, 0.0));
    }
    let (min, max) = (times[0], times[n - 1]);
    if t < min || t > max {
        return Err(ModelError::TimeOutOfRange { what, t, min, max });
    }

    // first index with times[i] > t, so times[hi - 1] <= t
    let hi = times.partition_point(|&ti| ti <= t).min(n - 1);
    let lo = hi - 1;
    let w = (t - times[lo]) / (times[hi] - times[lo]);
    Ok((lo, w))
}

/// Check that a time axis is non-empty, finite and strictly increasing
pub(crate) fn validate_times(what: &str, times: &[f64]) -> ModelResult<()> {
    if times.is_empty() {
        return Err(ModelError::MalformedHistory(format!("{what}: no frames")));
    }
    if times.iter().any(|t| !t.is_finite()) {
        return Err(ModelError::MalformedHistory(format!("{what}: non-finite time")));
    }
    if times.windows(2).any(|w| w[1] <= w[0]) {
        return Err(ModelError::MalformedHistory(format!(
            "{what}: times must be strictly increasing"
        )));
    }
    Ok(())
}

/// Time-ordered coefficient matrices with linear interpolation between frames
#[derive(Debug, Clone)]
pub struct CoefficientTable {
    times: Vec<f64>,
    frames: Vec<DMatrix<f64>>,
}

impl CoefficientTable {
    pub fn new(times: Vec<f64>, frames: Vec<DMatrix<f64>>) -> ModelResult<Self> {
        validate_times("coefficient table", &times)?;
        if frames.len() != times.len() {
            return Err(ModelError::MalformedHistory(format!(
                "coefficient table: {} times but {} frames",
                times.len(),
                frames.len()
            )));
        }
        let shape = frames[0].shape();
        if frames.iter().any(|f| f.shape() != shape) {
            return Err(ModelError::MalformedHistory(
                "coefficient table: frames differ in shape".to_string(),
            ));
        }
        Ok(Self { times, frames })
    }

    /// Single frame, valid at every time
    pub fn constant(frame: DMatrix<f64>) -> Self {
        Self {
            times: vec![0.0],
            frames: vec![frame],
        }
    }

    /// Table of 1x1 frames from a scalar series
    pub fn from_scalars(times: Vec<f64>, values: &[f64]) -> ModelResult<Self> {
        let frames = values.iter().map(|&v| DMatrix::from_element(1, 1, v)).collect();
        Self::new(times, frames)
    }

    pub fn shape(&self) -> (usize, usize) {
        self.frames[0].shape()
    }

    /// Coefficients interpolated to virial time `t`
    pub fn select(&self, t: f64) -> ModelResult<DMatrix<f64>> {
        let (lo, w) = bracket("coefficient table", &self.times, t)?;
        if w == 0.0 {
            return Ok(self.frames[lo].clone());
        }
        Ok(&self.frames[lo] * (1.0 - w) + &self.frames[lo + 1] * w)
    }

    /// Coefficients at `t` with every row above harmonic `order` zeroed
    pub fn select_truncated(&self, t: f64, order: Option<usize>) -> ModelResult<DMatrix<f64>> {
        let mut coefs = self.select(t)?;
        if let Some(order) = order {
            let keep = (order + 1).min(coefs.nrows());
            let dropped = coefs.nrows() - keep;
            coefs.rows_mut(keep, dropped).fill(0.0);
        }
        Ok(coefs)
    }
}
