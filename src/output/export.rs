//! CSV hand-off to the external rendering collaborator
//!
//! Each run writes index-aligned column files, one row per time-grid
//! entry, so the renderer can look frames up by row position. Rendering
//! itself (figures, animation, video export) lives outside this crate.

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use crate::simulation::scenario::{CentralRun, WellRun};

fn write_csv(path: &Path, header: &[&str], rows: impl Iterator<Item = Vec<f64>>) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(row.iter().map(|v| v.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `states.csv`, `path.csv` and `energy.csv` for a central-field run
pub fn write_central_run(dir: &Path, run: &CentralRun) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let traj = &run.trajectory;

    write_csv(
        &dir.join("states.csv"),
        &["t", "r", "rdot", "theta"],
        traj.times
            .iter()
            .zip(&traj.states)
            .map(|(t, s)| vec![*t, s[0], s[1], s[2]]),
    )?;
    write_csv(
        &dir.join("path.csv"),
        &["x", "y"],
        run.path
            .x
            .iter()
            .zip(&run.path.y)
            .map(|(x, y)| vec![*x, *y]),
    )?;
    write_csv(
        &dir.join("energy.csv"),
        &["t", "energy"],
        traj.times.iter().zip(&run.energy).map(|(t, e)| vec![*t, *e]),
    )?;

    info!("wrote {} frames to {}", traj.len(), dir.display());
    Ok(())
}

/// Write `states.csv`, `energy.csv` and (when sampled) `potential.csv`
/// for a well run
pub fn write_well_run(dir: &Path, run: &WellRun) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let traj = &run.trajectory;

    write_csv(
        &dir.join("states.csv"),
        &["t", "x", "v"],
        traj.times
            .iter()
            .zip(&traj.states)
            .map(|(t, s)| vec![*t, s[0], s[1]]),
    )?;
    write_csv(
        &dir.join("energy.csv"),
        &["t", "energy"],
        traj.times.iter().zip(&run.energy).map(|(t, e)| vec![*t, *e]),
    )?;
    if let Some(curve) = &run.curve {
        write_csv(
            &dir.join("potential.csv"),
            &["x", "potential"],
            curve.x.iter().zip(&curve.v).map(|(x, v)| vec![*x, *v]),
        )?;
    }

    info!("wrote {} frames to {}", traj.len(), dir.display());
    Ok(())
}
