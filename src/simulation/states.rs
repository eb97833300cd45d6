//! Core state types for orbit integration.
//!
//! Defines the particle state in both unit systems and the orbit record:
//! - `PhysicalState` using kpc, km/s, kpc/(km/s)
//! - `VirialState` in the dimensionless expansion units
//! - `OrbitRecord` / `Orbit` holding one fixed-width record per step

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Particle state at the system boundary (physical units)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalState {
    pub t: f64, // time, kpc/(km/s)
    pub x: NVec3, // position, kpc
    pub v: NVec3, // velocity, km/s
}

/// Particle state in the dimensionless (virial) units of the expansions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirialState {
    pub t: f64,
    pub x: NVec3,
    pub v: NVec3,
}

/// One integration step: position, velocity, force and elapsed physical time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRecord {
    pub t: f64, // elapsed physical time, dt * step
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub f: NVec3, // force per unit mass at x
}

impl Default for OrbitRecord {
    fn default() -> Self {
        Self {
            t: 0.0,
            x: NVec3::zeros(),
            v: NVec3::zeros(),
            f: NVec3::zeros(),
        }
    }
}

impl OrbitRecord {
    /// Number of scalar fields in a record
    pub const WIDTH: usize = 10;

    /// Flatten to `[t, x, y, z, vx, vy, vz, fx, fy, fz]`
    pub fn to_row(&self) -> [f64; Self::WIDTH] {
        [
            self.t,
            self.x.x, self.x.y, self.x.z,
            self.v.x, self.v.y, self.v.z,
            self.f.x, self.f.y, self.f.z,
        ]
    }
}

/// Full orbit, one record per integration step, record 0 = initial conditions
#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    records: Vec<OrbitRecord>,
}

impl Orbit {
    /// Allocate an orbit of `n` zeroed records, filled in place by the integrator
    pub fn with_steps(n: usize) -> Self {
        Self {
            records: vec![OrbitRecord::default(); n],
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[OrbitRecord] {
        &self.records
    }

    pub fn get(&self, step: usize) -> Option<&OrbitRecord> {
        self.records.get(step)
    }

    pub fn last(&self) -> Option<&OrbitRecord> {
        self.records.last()
    }

    /// Overwrite record `step`; panics if `step` is past the allocated length
    pub(crate) fn set(&mut self, step: usize, record: OrbitRecord) {
        self.records[step] = record;
    }
}
