//! Configuration types for loading orbit scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`UnitsConfig`]      – virial mass and radius fixing the unit scales
//! - [`ModelConfig`]      – reference epoch and the three field components
//! - [`OrbitConfig`]      – initial position and velocity of the particle
//! - [`IntegratorConfig`] – step count, step size, fixed-potential switch
//! - [`OutputConfig`]     – where the orbit table goes
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! units:
//!   virial_mass_msun: 1.0e12
//!   virial_radius_kpc: 282.0
//!
//! model:
//!   reference_time: 1.0        # virial time of the coordinate zero
//!   host:
//!     scale_radius: 0.06
//!     order: 0                 # optional harmonic truncation
//!     mass: { times: [0.0], values: [1.0] }
//!     centre: { times: [0.0], positions: [[0.0, 0.0, 0.0]] }
//!   disc:
//!     scale_length: 0.01
//!     scale_height: 0.001
//!     mass: { times: [0.0], values: [0.05] }
//!     centre: { times: [0.0], positions: [[0.0, 0.0, 0.0]] }
//!   satellite:
//!     scale_radius: 0.04
//!     mass: { times: [0.0, 2.0], values: [0.1, 0.08] }
//!     centre: { times: [0.0, 2.0], positions: [[0.3, -0.1, -0.1], [0.1, -0.1, -0.2]] }
//!
//! orbit:
//!   position: [0.03, 0.0, 0.0]
//!   velocity: [0.0, 1.9, 0.0]
//!   virial: true               # initial conditions given in virial units
//!
//! integrator:
//!   n_steps: 1000
//!   dt: 0.0005
//!   dt_virial: true
//!   fixed_potential: true
//!   force_clock: "synchronized" # or "lagged"
//!
//! output:
//!   path: "solarorbit.txt"
//! ```
//!
//! The scenario builder maps this configuration into the runtime model,
//! converting units and validating every history on the way.

use serde::Deserialize;

use crate::simulation::params::ForceClock;

/// Virial normalisation; G = 1 in virial units
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct UnitsConfig {
    pub virial_mass_msun: f64, // mass unit, Msun
    pub virial_radius_kpc: f64, // length unit, kpc
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            virial_mass_msun: 1.0e12,
            virial_radius_kpc: 282.0,
        }
    }
}

/// Scalar coefficient history, one value per virial time
#[derive(Deserialize, Debug, Clone)]
pub struct SeriesConfig {
    pub times: Vec<f64>,
    pub values: Vec<f64>,
}

/// Centre-of-expansion history, one position per virial time
#[derive(Deserialize, Debug, Clone)]
pub struct TrackConfig {
    pub times: Vec<f64>,
    pub positions: Vec<[f64; 3]>,
}

/// Spherical halo component
#[derive(Deserialize, Debug, Clone)]
pub struct HaloConfig {
    pub scale_radius: f64, // Hernquist scale radius, virial
    pub mass: SeriesConfig, // mass history, virial
    pub centre: TrackConfig, // centre history, virial
    #[serde(default)]
    pub order: Option<usize>, // highest harmonic order kept, all if omitted
}

/// Cylindrical disc component
#[derive(Deserialize, Debug, Clone)]
pub struct DiscConfig {
    pub scale_length: f64,
    pub scale_height: f64,
    pub mass: SeriesConfig,
    pub centre: TrackConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ModelConfig {
    pub reference_time: f64, // virial time defining the coordinate zero
    pub host: HaloConfig,
    pub disc: DiscConfig,
    pub satellite: HaloConfig,
}

/// Initial conditions of the test particle
#[derive(Deserialize, Debug, Clone)]
pub struct OrbitConfig {
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    #[serde(default)]
    pub virial: bool, // `true` - values are virial, `false` - kpc and km/s
}

#[derive(Deserialize, Debug, Clone)]
pub struct IntegratorConfig {
    pub n_steps: usize, // number of orbit records
    pub dt: f64, // step size
    #[serde(default)]
    pub dt_virial: bool, // `true` - dt is virial, `false` - kpc/(km/s)
    #[serde(default)]
    pub fixed_potential: bool, // freeze the field at t = 0
    #[serde(default)]
    pub force_clock: ForceClock,
}

#[derive(Deserialize, Debug, Clone)]
pub struct OutputConfig {
    pub path: String, // orbit table, relative to the working directory
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub units: UnitsConfig,
    pub model: ModelConfig,
    pub orbit: OrbitConfig,
    pub integrator: IntegratorConfig,
    pub output: Option<OutputConfig>,
}
