//! Multi-component force composition
//!
//! A [`GalaxyModel`] holds a host halo, a disc and a satellite halo, each an
//! expansion with its own moving centre. The total force at a point is the
//! sum of the three contributions, each evaluated in its component's
//! re-centred frame and converted back to physical units.

use tracing::info;

use crate::error::{ModelError, ModelResult};
use crate::simulation::coordinates::{
    cartesian_to_spherical_vec, cylindrical_forces_to_cartesian, spherical_forces_to_cartesian,
};
use crate::simulation::expansion::{
    CylindricalExpansion, CylindricalSnapshot, SphericalExpansion, SphericalSnapshot,
};
use crate::simulation::frame::{component_centres, Component, ComponentCentres};
use crate::simulation::states::NVec3;
use crate::simulation::units::UnitConverter;

/// Coefficient snapshots of all three components at one virial time
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSnapshots {
    pub host: SphericalSnapshot,
    pub disc: CylindricalSnapshot,
    pub satellite: SphericalSnapshot,
}

/// Per-component Cartesian forces in physical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentForces {
    pub host: NVec3,
    pub disc: NVec3,
    pub satellite: NVec3,
}

impl ComponentForces {
    pub fn total(&self) -> NVec3 {
        self.host + self.disc + self.satellite
    }
}

/// Per-component potentials in physical units, (km/s)^2
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentPotentials {
    pub host: f64,
    pub disc: f64,
    pub satellite: f64,
}

impl ComponentPotentials {
    pub fn total(&self) -> f64 {
        self.host + self.disc + self.satellite
    }
}

/// Host halo + disc + satellite halo with a shared reference epoch.
///
/// The model is read-only once built: force evaluation takes `&self` and
/// borrowed snapshots, so independent orbits may be integrated from
/// several threads against the same model.
pub struct GalaxyModel {
    pub units: UnitConverter,
    reference_time: f64, // virial time of the coordinate zero
    host: Box<dyn SphericalExpansion + Send + Sync>,
    disc: Box<dyn CylindricalExpansion + Send + Sync>,
    satellite: Box<dyn SphericalExpansion + Send + Sync>,
    host_order: Option<usize>, // highest harmonic kept, `None` keeps all
    satellite_order: Option<usize>,
}

impl GalaxyModel {
    pub fn new<H, D, S>(
        units: UnitConverter,
        reference_time: f64,
        host: H,
        disc: D,
        satellite: S,
    ) -> ModelResult<Self>
    where
        H: SphericalExpansion + Send + Sync + 'static,
        D: CylindricalExpansion + Send + Sync + 'static,
        S: SphericalExpansion + Send + Sync + 'static,
    {
        if !reference_time.is_finite() {
            return Err(ModelError::NonFinite { what: "reference time" });
        }
        Ok(Self {
            units,
            reference_time,
            host: Box::new(host),
            disc: Box::new(disc),
            satellite: Box::new(satellite),
            host_order: None,
            satellite_order: None,
        })
    }

    /// Truncate the spherical expansions at the given harmonic orders
    pub fn with_orders(mut self, host: Option<usize>, satellite: Option<usize>) -> Self {
        self.host_order = host;
        self.satellite_order = satellite;
        self
    }

    pub fn reference_time(&self) -> f64 {
        self.reference_time
    }

    /// Disc centre at the reference epoch, in the expansions' native coordinates
    pub fn coordinate_zero(&self) -> ModelResult<NVec3> {
        self.disc.orientation().return_centre(self.reference_time)
    }

    /// Select coefficients of every component at virial time `t`
    pub fn select_snapshots(&self, t: f64) -> ModelResult<ModelSnapshots> {
        Ok(ModelSnapshots {
            host: self.host.select_coefficient_time(t, self.host_order)?,
            disc: self.disc.select_coefficient_time(t)?,
            satellite: self.satellite.select_coefficient_time(t, self.satellite_order)?,
        })
    }

    /// Shifted component centres at virial time `t` (epoch convention already applied)
    pub fn centres(&self, t: f64) -> ModelResult<ComponentCentres> {
        component_centres(
            self.host.orientation(),
            self.disc.orientation(),
            self.satellite.orientation(),
            self.reference_time,
            t,
        )
    }

    // Forces and potentials of every component, both still in virial units
    fn evaluate(
        &self,
        snaps: &ModelSnapshots,
        t: f64,
        x: &NVec3,
        verbose: bool,
    ) -> ModelResult<([NVec3; 3], [f64; 3])> {
        if !t.is_finite() || !x.iter().all(|c| c.is_finite()) {
            return Err(ModelError::NonFinite { what: "force query point" });
        }

        // virial time on the coefficient tables' epoch convention
        let tvir = self.units.physical_to_virial_time(t) + self.reference_time;
        let xvir = self.units.physical_to_virial_position(x);

        let centres = self.centres(tvir)?;
        if verbose {
            info!(
                tvir,
                zero = ?centres.zero.as_slice(),
                host = ?centres.host.as_slice(),
                disc = ?centres.disc.as_slice(),
                satellite = ?centres.satellite.as_slice(),
                "virial centres"
            );
        }

        // host halo, evaluated about the shared host/disc anchor
        let local = xvir - centres.anchor(Component::Host);
        let sph = cartesian_to_spherical_vec(&local);
        let h = self
            .host
            .determine_fields_at_point_sph(&snaps.host, sph.r, sph.theta, sph.phi)?;
        let host = spherical_forces_to_cartesian(
            sph.r, sph.phi, sph.theta, h.f_r, h.f_phi, h.f_theta,
        );

        // disc, same anchor so the azimuth carries over
        let local = xvir - centres.anchor(Component::Disc);
        let big_r = local.x.hypot(local.y);
        let d = self
            .disc
            .determine_fields_at_point_cyl(&snaps.disc, big_r, sph.phi, local.z)?;
        let (fx, fy) = cylindrical_forces_to_cartesian(big_r, sph.phi, d.f_r, d.f_phi);
        let disc = NVec3::new(fx, fy, d.f_z);

        // satellite, about its own centre
        let local = xvir - centres.anchor(Component::Satellite);
        let sph = cartesian_to_spherical_vec(&local);
        let s = self
            .satellite
            .determine_fields_at_point_sph(&snaps.satellite, sph.r, sph.theta, sph.phi)?;
        let satellite = spherical_forces_to_cartesian(
            sph.r, sph.phi, sph.theta, s.f_r, s.f_phi, s.f_theta,
        );

        Ok(([host, disc, satellite], [h.potential, d.potential, s.potential]))
    }

    /// Force from each component at physical time `t` and physical position `x`
    pub fn component_forces(
        &self,
        snaps: &ModelSnapshots,
        t: f64,
        x: &NVec3,
        verbose: bool,
    ) -> ModelResult<ComponentForces> {
        let ([host, disc, satellite], _) = self.evaluate(snaps, t, x, verbose)?;
        let forces = ComponentForces {
            host: self.units.virial_to_physical_force_vec(&host),
            disc: self.units.virial_to_physical_force_vec(&disc),
            satellite: self.units.virial_to_physical_force_vec(&satellite),
        };
        if !forces.total().iter().all(|c| c.is_finite()) {
            return Err(ModelError::NonFinite { what: "total force" });
        }
        Ok(forces)
    }

    /// Total force at physical time `t` and physical position `x`, in physical units
    pub fn all_forces(
        &self,
        snaps: &ModelSnapshots,
        t: f64,
        x: &NVec3,
        verbose: bool,
    ) -> ModelResult<NVec3> {
        Ok(self.component_forces(snaps, t, x, verbose)?.total())
    }

    /// Total force with snapshots selected at the virial equivalent of `t`
    pub fn total_force(&self, t: f64, x: &NVec3) -> ModelResult<NVec3> {
        let snaps = self.select_snapshots(self.units.physical_to_virial_time(t))?;
        self.all_forces(&snaps, t, x, false)
    }

    /// Potential of each component at physical time `t` and position `x`,
    /// with the same centres and anchors as [`Self::component_forces`]
    pub fn component_potentials(
        &self,
        snaps: &ModelSnapshots,
        t: f64,
        x: &NVec3,
    ) -> ModelResult<ComponentPotentials> {
        let (_, [host, disc, satellite]) = self.evaluate(snaps, t, x, false)?;
        let potentials = ComponentPotentials {
            host: self.units.virial_to_physical_potential(host),
            disc: self.units.virial_to_physical_potential(disc),
            satellite: self.units.virial_to_physical_potential(satellite),
        };
        if !potentials.total().is_finite() {
            return Err(ModelError::NonFinite { what: "total potential" });
        }
        Ok(potentials)
    }

    /// Total potential in (km/s)^2, snapshots selected as in [`Self::total_force`]
    pub fn total_potential(&self, t: f64, x: &NVec3) -> ModelResult<f64> {
        let snaps = self.select_snapshots(self.units.physical_to_virial_time(t))?;
        Ok(self.component_potentials(&snaps, t, x)?.total())
    }
}
