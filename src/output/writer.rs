//! Orbit table output
//!
//! Whitespace-delimited text, one header line then one row per record:
//! time first, then position, velocity and force.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::simulation::states::Orbit;

pub const ORBIT_HEADER: &str = concat!(
    "# t [kpc/(km/s)]; x [kpc]; y [kpc]; z [kpc]; vx [km/s]; vy [km/s]; vz [km/s]; ",
    "fx [(km/s)^2/kpc]; fy [(km/s)^2/kpc]; fz [(km/s)^2/kpc];"
);

/// Write `orbit` as a table to any writer
pub fn write_orbit_to<W: Write>(orbit: &Orbit, mut out: W) -> std::io::Result<()> {
    writeln!(out, "{ORBIT_HEADER}")?;
    for rec in orbit.records() {
        let row = rec.to_row();
        for (i, v) in row.iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            write!(out, "{v:>14.7e}")?;
        }
        writeln!(out)?;
    }
    out.flush()
}

/// Write `orbit` as a table to the file at `path`
pub fn write_orbit(orbit: &Orbit, path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    write_orbit_to(orbit, BufWriter::new(file))
}
