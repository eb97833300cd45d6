//! Lowest-order analytic expansions used as reference field models
//!
//! - [`HernquistMonopole`]: the n=0, l=0 term of a Hernquist-Ostriker
//!   expansion, coefficient (0,0) is the enclosed mass
//! - [`MiyamotoNagaiDisc`]: an axisymmetric disc, cosine coefficient (0,0)
//!   is the disc mass
//!
//! All quantities are in virial units (G = 1).

use crate::error::{ModelError, ModelResult};
use crate::simulation::expansion::{
    CoefficientTable, CylindricalExpansion, CylindricalFields, CylindricalSnapshot,
    OrientationHistory, SphericalExpansion, SphericalFields, SphericalSnapshot,
};
use crate::simulation::frame::CentreTrack;

fn check_monopole(what: &str, table: &CoefficientTable) -> ModelResult<()> {
    let (rows, cols) = table.shape();
    if rows == 0 || cols == 0 {
        return Err(ModelError::MalformedHistory(format!(
            "{what}: empty coefficient frames"
        )));
    }
    Ok(())
}

fn check_scale(name: &str, value: f64) -> ModelResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ModelError::InvalidParameter(format!(
            "{name} must be finite and positive, got {value}"
        )));
    }
    Ok(())
}

/// Spherical halo with Hernquist density, `Phi = -M / (r + a)`
#[derive(Debug, Clone)]
pub struct HernquistMonopole {
    pub scale_radius: f64, // a
    coefficients: CoefficientTable,
    orient: CentreTrack,
}

impl HernquistMonopole {
    pub fn new(
        scale_radius: f64,
        coefficients: CoefficientTable,
        orient: CentreTrack,
    ) -> ModelResult<Self> {
        check_scale("Hernquist scale radius", scale_radius)?;
        check_monopole("Hernquist coefficients", &coefficients)?;
        Ok(Self { scale_radius, coefficients, orient })
    }
}

impl SphericalExpansion for HernquistMonopole {
    fn select_coefficient_time(
        &self,
        t: f64,
        order: Option<usize>,
    ) -> ModelResult<SphericalSnapshot> {
        Ok(SphericalSnapshot {
            t,
            coefs: self.coefficients.select_truncated(t, order)?,
        })
    }

    fn determine_fields_at_point_sph(
        &self,
        snapshot: &SphericalSnapshot,
        r: f64,
        _theta: f64,
        _phi: f64,
    ) -> ModelResult<SphericalFields> {
        let mass = snapshot.coefs[(0, 0)];
        let ra = r + self.scale_radius;
        let potential = -mass / ra;
        Ok(SphericalFields {
            potential0: potential,
            potential,
            f_r: -mass / (ra * ra),
            f_theta: 0.0,
            f_phi: 0.0,
        })
    }

    fn orientation(&self) -> &dyn OrientationHistory {
        &self.orient
    }
}

/// Miyamoto-Nagai disc, `Phi = -M / sqrt(R^2 + (a + sqrt(z^2 + b^2))^2)`
#[derive(Debug, Clone)]
pub struct MiyamotoNagaiDisc {
    pub scale_length: f64, // a
    pub scale_height: f64, // b
    cos_coefficients: CoefficientTable,
    sin_coefficients: CoefficientTable,
    orient: CentreTrack,
}

impl MiyamotoNagaiDisc {
    pub fn new(
        scale_length: f64,
        scale_height: f64,
        cos_coefficients: CoefficientTable,
        sin_coefficients: CoefficientTable,
        orient: CentreTrack,
    ) -> ModelResult<Self> {
        check_scale("disc scale length", scale_length)?;
        check_scale("disc scale height", scale_height)?;
        check_monopole("disc coefficients", &cos_coefficients)?;
        if cos_coefficients.shape() != sin_coefficients.shape() {
            return Err(ModelError::MalformedHistory(
                "disc cosine and sine tables differ in shape".to_string(),
            ));
        }
        Ok(Self { scale_length, scale_height, cos_coefficients, sin_coefficients, orient })
    }
}

impl CylindricalExpansion for MiyamotoNagaiDisc {
    fn select_coefficient_time(&self, t: f64) -> ModelResult<CylindricalSnapshot> {
        Ok(CylindricalSnapshot {
            t,
            cos: self.cos_coefficients.select(t)?,
            sin: self.sin_coefficients.select(t)?,
        })
    }

    fn determine_fields_at_point_cyl(
        &self,
        snapshot: &CylindricalSnapshot,
        r: f64,
        _phi: f64,
        z: f64,
    ) -> ModelResult<CylindricalFields> {
        // m = 0 only, the sine terms vanish
        let mass = snapshot.cos[(0, 0)];
        let zb = (z * z + self.scale_height * self.scale_height).sqrt();
        let s = self.scale_length + zb;
        let d2 = r * r + s * s;
        let d = d2.sqrt();
        let d3 = d2 * d;
        let potential = -mass / d;
        Ok(CylindricalFields {
            potential0: potential,
            potential,
            f_r: -mass * r / d3,
            f_phi: 0.0,
            f_z: -mass * z * s / (zb * d3),
        })
    }

    fn orientation(&self) -> &dyn OrientationHistory {
        &self.orient
    }
}
