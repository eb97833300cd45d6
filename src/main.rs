use galorbit::{ScenarioConfig, Scenario};
use galorbit::{bench_total_force, bench_orbit};
use galorbit::write_orbit;

use clap::Parser;
use anyhow::{Context, Result};
use tracing::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "mwlmc.yaml")]
    file_name: String,

    /// Orbit table path, overrides the scenario's output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log the component centres at the initial force evaluation
    #[arg(long)]
    verbose: bool,

    /// Run the timing benchmarks instead of a single orbit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;
    let model = &scenario.model;

    let zero = model.coordinate_zero()?;
    info!(reference_time = model.reference_time(), "Reference time");
    info!(x = zero.x, y = zero.y, z = zero.z, "Coordinate zero");
    let x0 = scenario.initial.x;
    let v0 = scenario.initial.v;
    info!(x = ?x0.as_slice(), v = ?v0.as_slice(), "Input pos/vel");

    if args.bench {
        bench_total_force(model)?;
        bench_orbit(model, x0, v0, scenario.params.dt)?;
        return Ok(());
    }

    if args.verbose {
        let snaps = model.select_snapshots(0.0)?;
        let f0 = model.all_forces(&snaps, scenario.initial.t, &x0, true)?;
        info!(f = ?f0.as_slice(), "Initial force");
    }

    let orbit = scenario.run().context("orbit integration incomplete")?;
    info!(records = orbit.len(), "Orbit integrated");

    let out_path = args
        .output
        .or_else(|| scenario.output.clone())
        .unwrap_or_else(|| PathBuf::from("orbit.txt"));
    write_orbit(&orbit, &out_path)
        .with_context(|| format!("failed to write orbit to {}", out_path.display()))?;
    info!(path = %out_path.display(), "Orbit written");

    Ok(())
}
