//! Cartesian <-> spherical positions and force remapping
//!
//! Conventions: `phi` is the azimuth in the x-y plane measured from +x,
//! `theta` is the polar angle measured from +z. At r = 0 the angles are
//! defined as zero and direction-dependent force components are dropped.

use crate::simulation::states::NVec3;

/// Spherical position `(r, phi, theta)` of a Cartesian point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub r: f64, // radius, >= 0
    pub phi: f64, // azimuth
    pub theta: f64, // polar angle from +z
}

pub fn cartesian_to_spherical(x: f64, y: f64, z: f64) -> Spherical {
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return Spherical { r: 0.0, phi: 0.0, theta: 0.0 };
    }
    // clamp guards acos against |z/r| creeping past 1 by rounding
    let theta = (z / r).clamp(-1.0, 1.0).acos();
    Spherical { r, phi: y.atan2(x), theta }
}

pub fn cartesian_to_spherical_vec(p: &NVec3) -> Spherical {
    cartesian_to_spherical(p.x, p.y, p.z)
}

/// Map `(f_r, f_phi, f_theta)` at `(r, phi, theta)` onto Cartesian axes
pub fn spherical_forces_to_cartesian(
    r: f64,
    phi: f64,
    theta: f64,
    f_r: f64,
    f_phi: f64,
    f_theta: f64,
) -> NVec3 {
    if r == 0.0 {
        return NVec3::zeros();
    }
    let (sin_t, cos_t) = theta.sin_cos();
    let (sin_p, cos_p) = phi.sin_cos();

    // columns of the rotation from (r_hat, theta_hat, phi_hat) to (x, y, z)
    NVec3::new(
        f_r * sin_t * cos_p + f_theta * cos_t * cos_p - f_phi * sin_p,
        f_r * sin_t * sin_p + f_theta * cos_t * sin_p + f_phi * cos_p,
        f_r * cos_t - f_theta * sin_t,
    )
}

/// Map planar cylindrical `(f_R, f_phi)` onto `(fx, fy)`; `f_z` is the caller's
pub fn cylindrical_forces_to_cartesian(r: f64, phi: f64, f_r: f64, f_phi: f64) -> (f64, f64) {
    if r == 0.0 {
        return (0.0, 0.0);
    }
    let (sin_p, cos_p) = phi.sin_cos();
    (
        f_r * cos_p - f_phi * sin_p,
        f_r * sin_p + f_phi * cos_p,
    )
}
