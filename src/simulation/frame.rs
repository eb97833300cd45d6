//! Moving-frame bookkeeping for the expansion centres
//!
//! Every component centre is reported relative to the disc centre at the
//! reference epoch, which is the zero of the shared coordinate system.
//! The shift is recomputed on each query; nothing here is cached.

use crate::error::{ModelError, ModelResult};
use crate::simulation::expansion::{bracket, validate_times, OrientationHistory};
use crate::simulation::states::NVec3;

/// Tabulated centre positions with linear interpolation in time
#[derive(Debug, Clone)]
pub struct CentreTrack {
    times: Vec<f64>,
    centres: Vec<NVec3>,
}

impl CentreTrack {
    pub fn new(times: Vec<f64>, centres: Vec<NVec3>) -> ModelResult<Self> {
        validate_times("centre track", &times)?;
        if centres.len() != times.len() {
            return Err(ModelError::MalformedHistory(format!(
                "centre track: {} times but {} centres",
                times.len(),
                centres.len()
            )));
        }
        if centres.iter().any(|c| !c.iter().all(|v| v.is_finite())) {
            return Err(ModelError::MalformedHistory(
                "centre track: non-finite centre".to_string(),
            ));
        }
        Ok(Self { times, centres })
    }

    /// A centre that never moves
    pub fn fixed(centre: NVec3) -> Self {
        Self {
            times: vec![0.0],
            centres: vec![centre],
        }
    }
}

impl OrientationHistory for CentreTrack {
    fn return_centre(&self, t: f64) -> ModelResult<NVec3> {
        let (lo, w) = bracket("centre track", &self.times, t)?;
        if w == 0.0 {
            return Ok(self.centres[lo]);
        }
        Ok(self.centres[lo].lerp(&self.centres[lo + 1], w))
    }
}

/// The three components of the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Host,
    Disc,
    Satellite,
}

/// Epoch-shifted centres of all components at one query time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentCentres {
    pub zero: NVec3, // disc centre at the reference epoch, unshifted
    pub host: NVec3,
    pub disc: NVec3,
    pub satellite: NVec3,
}

impl ComponentCentres {
    /// Origin a component's field is evaluated about.
    ///
    /// The host halo and the disc form one rigid frame anchored at the disc
    /// centre; the satellite orbits independently about its own centre.
    pub fn anchor(&self, component: Component) -> NVec3 {
        match component {
            Component::Host | Component::Disc => self.disc,
            Component::Satellite => self.satellite,
        }
    }
}

/// Centre of one expansion at virial time `t`, relative to `zero`
pub fn shifted_centre(
    history: &dyn OrientationHistory,
    t: f64,
    zero: &NVec3,
) -> ModelResult<NVec3> {
    Ok(history.return_centre(t)? - zero)
}

/// Centres of host, disc and satellite at virial time `t`, shifted so the
/// disc centre at `reference_time` is the origin
pub fn component_centres(
    host: &dyn OrientationHistory,
    disc: &dyn OrientationHistory,
    satellite: &dyn OrientationHistory,
    reference_time: f64,
    t: f64,
) -> ModelResult<ComponentCentres> {
    let zero = disc.return_centre(reference_time)?;
    Ok(ComponentCentres {
        zero,
        host: shifted_centre(host, t, &zero)?,
        disc: shifted_centre(disc, t, &zero)?,
        satellite: shifted_centre(satellite, t, &zero)?,
    })
}
