//! Build fully-initialized orbit scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - the field model (`GalaxyModel`) with its three components
//! - the initial particle state in physical units (`PhysicalState`)
//! - integration settings (`IntegratorParams`)
//! - the output path, if any

use std::path::PathBuf;

use tracing::info;

use crate::configuration::config::{
    DiscConfig, HaloConfig, ScenarioConfig, SeriesConfig, TrackConfig,
};
use crate::error::ModelResult;
use crate::simulation::expansion::CoefficientTable;
use crate::simulation::forces::GalaxyModel;
use crate::simulation::frame::CentreTrack;
use crate::simulation::integrator::integrate_orbit;
use crate::simulation::params::IntegratorParams;
use crate::simulation::profiles::{HernquistMonopole, MiyamotoNagaiDisc};
use crate::simulation::states::{NVec3, Orbit, PhysicalState, VirialState};
use crate::simulation::units::UnitConverter;

/// Runtime bundle constructed from a [`ScenarioConfig`]
pub struct Scenario {
    pub model: GalaxyModel,
    pub initial: PhysicalState,
    pub params: IntegratorParams,
    pub output: Option<PathBuf>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> ModelResult<Self> {
        let units =
            UnitConverter::from_virial(cfg.units.virial_mass_msun, cfg.units.virial_radius_kpc)?;

        info!("Initialising host halo ...");
        let host = build_halo(&cfg.model.host)?;
        info!("Initialising satellite halo ...");
        let satellite = build_halo(&cfg.model.satellite)?;
        info!("Initialising disc ...");
        let disc = build_disc(&cfg.model.disc)?;

        let model = GalaxyModel::new(units, cfg.model.reference_time, host, disc, satellite)?
            .with_orders(cfg.model.host.order, cfg.model.satellite.order);

        // Initial conditions: map to physical units if given in virial
        let o_cfg = cfg.orbit;
        let x = NVec3::from(o_cfg.position);
        let v = NVec3::from(o_cfg.velocity);
        let initial = if o_cfg.virial {
            units.to_physical(&VirialState { t: 0.0, x, v })
        } else {
            PhysicalState { t: 0.0, x, v }
        };

        // Integrator (runtime) from IntegratorConfig
        let i_cfg = cfg.integrator;
        let dt = if i_cfg.dt_virial {
            units.virial_to_physical_time(i_cfg.dt)
        } else {
            i_cfg.dt
        };
        let params = IntegratorParams {
            n_steps: i_cfg.n_steps,
            dt,
            fixed_potential: i_cfg.fixed_potential,
            force_clock: i_cfg.force_clock,
        };
        params.validate()?;

        Ok(Self {
            model,
            initial,
            params,
            output: cfg.output.map(|o| PathBuf::from(o.path)),
        })
    }

    /// Integrate the configured orbit
    pub fn run(&self) -> ModelResult<Orbit> {
        integrate_orbit(&self.model, self.initial.x, self.initial.v, &self.params)
    }
}

fn build_series(cfg: &SeriesConfig) -> ModelResult<CoefficientTable> {
    CoefficientTable::from_scalars(cfg.times.clone(), &cfg.values)
}

fn build_track(cfg: &TrackConfig) -> ModelResult<CentreTrack> {
    let centres = cfg.positions.iter().map(|&p| NVec3::from(p)).collect();
    CentreTrack::new(cfg.times.clone(), centres)
}

fn build_halo(cfg: &HaloConfig) -> ModelResult<HernquistMonopole> {
    HernquistMonopole::new(
        cfg.scale_radius,
        build_series(&cfg.mass)?,
        build_track(&cfg.centre)?,
    )
}

fn build_disc(cfg: &DiscConfig) -> ModelResult<MiyamotoNagaiDisc> {
    let cos = build_series(&cfg.mass)?;
    // m = 0 disc: the sine table mirrors the cosine one in shape, all zeros
    let zeros = vec![0.0; cfg.mass.values.len()];
    let sin = CoefficientTable::from_scalars(cfg.mass.times.clone(), &zeros)?;
    let centre = build_track(&cfg.centre)?;
    MiyamotoNagaiDisc::new(cfg.scale_length, cfg.scale_height, cos, sin, centre)
}
