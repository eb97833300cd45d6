//! Timing runs for force evaluation and orbit integration
//!
//! Output is plain `println!` so it can be pasted straight into a sheet.

use std::time::Instant;

use crate::error::ModelResult;
use crate::simulation::forces::GalaxyModel;
use crate::simulation::integrator::integrate_orbit;
use crate::simulation::params::IntegratorParams;
use crate::simulation::states::NVec3;

/// Deterministic query points spread through the inner halo, physical units
fn make_points(model: &GalaxyModel, n: usize) -> Vec<NVec3> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            // no rand needed, virial radius ~ 1 so 0.1 keeps it inside the disc region
            let x = NVec3::new(
                (i_f * 0.37).sin() * 0.1,
                (i_f * 0.13).cos() * 0.1,
                (i_f * 0.07).sin() * 0.02,
            );
            model.units.virial_to_physical_position(&x)
        })
        .collect()
}

/// Time `all_forces` over batches of points against one set of snapshots
pub fn bench_total_force(model: &GalaxyModel) -> ModelResult<()> {
    let ns = [1_000, 10_000, 100_000];
    let snaps = model.select_snapshots(0.0)?;

    println!("n,total_ms,per_eval_us");
    for n in ns {
        let points = make_points(model, n);

        // Warm up
        model.all_forces(&snaps, 0.0, &points[0], false)?;

        let t0 = Instant::now();
        let mut acc = NVec3::zeros();
        for p in &points {
            acc += model.all_forces(&snaps, 0.0, p, false)?;
        }
        let elapsed = t0.elapsed().as_secs_f64();

        // keep the sum alive so the loop is not optimised out
        std::hint::black_box(acc);
        println!("{},{:.6},{:.6}", n, elapsed * 1e3, elapsed * 1e6 / n as f64);
    }
    Ok(())
}

/// Time full orbit integrations for increasing step counts, fixed and live potential
pub fn bench_orbit(model: &GalaxyModel, x0: NVec3, v0: NVec3, dt: f64) -> ModelResult<()> {
    let ns = [1_000, 10_000, 100_000];

    println!("n_steps,fixed_ms,live_ms");
    for n in ns {
        let fixed = IntegratorParams::new(n, dt, true);
        let t0 = Instant::now();
        integrate_orbit(model, x0, v0, &fixed)?;
        let ms_fixed = t0.elapsed().as_secs_f64() * 1e3;

        // live runs may leave the coefficient tables' range; report and move on
        let live = IntegratorParams::new(n, dt, false);
        let t1 = Instant::now();
        let ms_live = match integrate_orbit(model, x0, v0, &live) {
            Ok(_) => format!("{:.6}", t1.elapsed().as_secs_f64() * 1e3),
            Err(e) if e.is_out_of_range() => "out-of-range".to_string(),
            Err(e) => return Err(e),
        };

        println!("{},{:.6},{}", n, ms_fixed, ms_live);
    }
    Ok(())
}
