//! Fixed-step orbit integrator for a test particle in a [`GalaxyModel`]
//!
//! Velocity-Verlet form of the leapfrog: a constant-acceleration drift of the
//! position, one force evaluation at the new position, then a kick with the
//! trapezoidal average of the old and new force. One force evaluation per
//! step, second order in `dt`.

use tracing::debug;

use crate::error::{ModelError, ModelResult};
use crate::simulation::forces::{GalaxyModel, ModelSnapshots};
use crate::simulation::params::{ForceClock, IntegratorParams};
use crate::simulation::states::{NVec3, Orbit, OrbitRecord};

/// Integrate one orbit from physical `x0`, `v0`.
///
/// Returns `params.n_steps` records; record `k` is at time `dt * k`.
/// A failure at any step aborts the run with [`ModelError::StepFailed`].
pub fn integrate_orbit(
    model: &GalaxyModel,
    x0: NVec3,
    v0: NVec3,
    params: &IntegratorParams,
) -> ModelResult<Orbit> {
    params.validate()?;
    let dt = params.dt; // time step dt
    let half_dt2 = 0.5 * dt * dt; // drift curvature term dt^2/2

    let mut orbit = Orbit::with_steps(params.n_steps);

    // step 0: coefficients at virial time 0, force at the initial position
    let mut snaps = model
        .select_snapshots(0.0)
        .map_err(|e| step_failed(0, e))?;
    let t0 = model.units.virial_to_physical_time(0.0);
    let f0 = model
        .all_forces(&snaps, t0, &x0, false)
        .map_err(|e| step_failed(0, e))?;
    orbit.set(0, OrbitRecord { t: t0, x: x0, v: v0, f: f0 });

    let mut prev = OrbitRecord { t: t0, x: x0, v: v0, f: f0 };
    for step in 1..params.n_steps {
        let t = dt * step as f64;

        // frozen potential keeps the step-0 snapshots and evaluates at t = 0
        let t_force = if params.fixed_potential {
            0.0
        } else {
            snaps = model
                .select_snapshots(model.units.physical_to_virial_time(t))
                .map_err(|e| step_failed(step, e))?;
            match params.force_clock {
                ForceClock::Synchronized => t,
                ForceClock::Lagged => dt * (step - 1) as f64,
            }
        };

        let next = advance(model, &snaps, &prev, t, t_force, dt, half_dt2)
            .map_err(|e| step_failed(step, e))?;
        orbit.set(step, next);
        prev = next;

        if step % 1000 == 0 {
            debug!(step, t, r = next.x.norm(), "orbit progress");
        }
    }

    Ok(orbit)
}

/// One drift-force-kick step from `prev` to time `t`
fn advance(
    model: &GalaxyModel,
    snaps: &ModelSnapshots,
    prev: &OrbitRecord,
    t: f64,
    t_force: f64,
    dt: f64,
    half_dt2: f64,
) -> ModelResult<OrbitRecord> {
    // Drift: x_k = x_k-1 + dt v_k-1 + (dt^2/2) f_k-1
    let x = prev.x + dt * prev.v + half_dt2 * prev.f;

    // f_k at the drifted position
    let f = model.all_forces(snaps, t_force, &x, false)?;

    // Kick: v_k = v_k-1 + (dt/2) (f_k-1 + f_k)
    let v = prev.v + 0.5 * dt * (prev.f + f);

    Ok(OrbitRecord { t, x, v, f })
}

fn step_failed(step: usize, source: ModelError) -> ModelError {
    ModelError::StepFailed {
        step,
        source: Box::new(source),
    }
}
