pub mod error;
pub mod simulation;
pub mod configuration;
pub mod output;
pub mod benchmark;

pub use error::{ModelError, ModelResult};

pub use simulation::states::{PhysicalState, VirialState, Orbit, OrbitRecord, NVec3};
pub use simulation::units::UnitConverter;
pub use simulation::coordinates::{
    cartesian_to_spherical, cylindrical_forces_to_cartesian, spherical_forces_to_cartesian,
    Spherical,
};
pub use simulation::expansion::{
    CoefficientTable, CylindricalExpansion, CylindricalSnapshot, OrientationHistory,
    SphericalExpansion, SphericalSnapshot,
};
pub use simulation::frame::{CentreTrack, Component, ComponentCentres};
pub use simulation::profiles::{HernquistMonopole, MiyamotoNagaiDisc};
pub use simulation::forces::{ComponentForces, ComponentPotentials, GalaxyModel, ModelSnapshots};
pub use simulation::params::{IntegratorParams, ForceClock};
pub use simulation::integrator::integrate_orbit;
pub use simulation::scenario::Scenario;

pub use configuration::config::ScenarioConfig;

pub use output::writer::{write_orbit, write_orbit_to};

pub use benchmark::benchmark::{bench_total_force, bench_orbit};
