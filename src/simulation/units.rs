//! Conversions between physical units and the virial units of the expansions
//!
//! Physical units are kpc, km/s, kpc/(km/s) for time, (km/s)^2/kpc for
//! force per unit mass and (km/s)^2 for potential, so `x + v dt + 0.5 f dt^2`
//! needs no extra factors.
//! Virial units set G = 1 with the virial radius and mass as the length and
//! mass units. Each quantity has its own scale; the force scale is stored,
//! never rebuilt from the others at the call site.

use crate::error::{ModelError, ModelResult};
use crate::simulation::states::{NVec3, PhysicalState, VirialState};

/// Gravitational constant in kpc (km/s)^2 / Msun
pub const ASTRONOMICAL_G: f64 = 4.3009125e-6;

/// Physical value of one virial unit for each quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConverter {
    length: f64, // kpc per virial length
    velocity: f64, // km/s per virial velocity
    time: f64, // kpc/(km/s) per virial time
    force: f64, // (km/s)^2/kpc per virial force
    potential: f64, // (km/s)^2 per virial potential
}

impl Default for UnitConverter {
    /// 1e12 Msun inside 282 kpc
    fn default() -> Self {
        Self::derive(1.0e12, 282.0)
    }
}

impl UnitConverter {
    /// Explicit scales, each the physical value of one virial unit
    pub fn new(length: f64, velocity: f64, time: f64, force: f64) -> ModelResult<Self> {
        let scales = [
            ("length", length),
            ("velocity", velocity),
            ("time", time),
            ("force", force),
        ];
        for (name, s) in scales {
            if !s.is_finite() || s <= 0.0 {
                return Err(ModelError::InvalidParameter(format!(
                    "{name} scale must be finite and positive, got {s}"
                )));
            }
        }
        Ok(Self {
            length,
            velocity,
            time,
            force,
            potential: velocity * velocity,
        })
    }

    /// Scales for a virial mass (Msun) inside a virial radius (kpc) with G = 1
    pub fn from_virial(mass_msun: f64, radius_kpc: f64) -> ModelResult<Self> {
        let valid = mass_msun.is_finite()
            && mass_msun > 0.0
            && radius_kpc.is_finite()
            && radius_kpc > 0.0;
        if !valid {
            return Err(ModelError::InvalidParameter(format!(
                "virial mass and radius must be positive, got M={mass_msun}, R={radius_kpc}"
            )));
        }
        Ok(Self::derive(mass_msun, radius_kpc))
    }

    fn derive(mass_msun: f64, radius_kpc: f64) -> Self {
        let velocity = (ASTRONOMICAL_G * mass_msun / radius_kpc).sqrt();
        Self {
            length: radius_kpc,
            velocity,
            time: radius_kpc / velocity,
            force: velocity * velocity / radius_kpc,
            potential: velocity * velocity,
        }
    }

    pub fn length_scale(&self) -> f64 {
        self.length
    }

    pub fn velocity_scale(&self) -> f64 {
        self.velocity
    }

    pub fn time_scale(&self) -> f64 {
        self.time
    }

    pub fn force_scale(&self) -> f64 {
        self.force
    }

    pub fn potential_scale(&self) -> f64 {
        self.potential
    }

    // length
    pub fn physical_to_virial_length(&self, x: f64) -> f64 {
        x / self.length
    }

    pub fn virial_to_physical_length(&self, x: f64) -> f64 {
        x * self.length
    }

    // time (multiplicative in both directions; epoch offsets are applied by the caller)
    pub fn physical_to_virial_time(&self, t: f64) -> f64 {
        t / self.time
    }

    pub fn virial_to_physical_time(&self, t: f64) -> f64 {
        t * self.time
    }

    // velocity
    pub fn physical_to_virial_velocity(&self, v: f64) -> f64 {
        v / self.velocity
    }

    pub fn virial_to_physical_velocity(&self, v: f64) -> f64 {
        v * self.velocity
    }

    // force
    pub fn physical_to_virial_force(&self, f: f64) -> f64 {
        f / self.force
    }

    pub fn virial_to_physical_force(&self, f: f64) -> f64 {
        f * self.force
    }

    // potential
    pub fn physical_to_virial_potential(&self, p: f64) -> f64 {
        p / self.potential
    }

    pub fn virial_to_physical_potential(&self, p: f64) -> f64 {
        p * self.potential
    }

    pub fn physical_to_virial_position(&self, x: &NVec3) -> NVec3 {
        x.map(|c| self.physical_to_virial_length(c))
    }

    pub fn virial_to_physical_position(&self, x: &NVec3) -> NVec3 {
        x.map(|c| self.virial_to_physical_length(c))
    }

    pub fn physical_to_virial_velocity_vec(&self, v: &NVec3) -> NVec3 {
        v.map(|c| self.physical_to_virial_velocity(c))
    }

    pub fn virial_to_physical_velocity_vec(&self, v: &NVec3) -> NVec3 {
        v.map(|c| self.virial_to_physical_velocity(c))
    }

    pub fn physical_to_virial_force_vec(&self, f: &NVec3) -> NVec3 {
        f.map(|c| self.physical_to_virial_force(c))
    }

    pub fn virial_to_physical_force_vec(&self, f: &NVec3) -> NVec3 {
        f.map(|c| self.virial_to_physical_force(c))
    }

    pub fn to_virial(&self, s: &PhysicalState) -> VirialState {
        VirialState {
            t: self.physical_to_virial_time(s.t),
            x: self.physical_to_virial_position(&s.x),
            v: self.physical_to_virial_velocity_vec(&s.v),
        }
    }

    pub fn to_physical(&self, s: &VirialState) -> PhysicalState {
        PhysicalState {
            t: self.virial_to_physical_time(s.t),
            x: self.virial_to_physical_position(&s.x),
            v: self.virial_to_physical_velocity_vec(&s.v),
        }
    }
}
