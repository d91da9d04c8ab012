use orbwell::{relative_drift, CentralScenario, LawConfig, ScenarioConfig, WellScenario};
use orbwell::{write_central_run, write_well_run};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "kepler.yaml")]
    file_name: String,

    #[arg(short, default_value = "out")]
    out_dir: PathBuf,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;

    match scenario_cfg.law {
        LawConfig::CentralField { .. } => {
            let scenario = CentralScenario::build(scenario_cfg)?;
            let run = scenario.run()?;
            info!("energy drift over run: {:.3e}", relative_drift(&run.energy));
            write_central_run(&args.out_dir, &run)?;
        }
        LawConfig::PotentialWell { .. } => {
            let scenario = WellScenario::build(scenario_cfg)?;
            let run = scenario.run()?;
            info!("energy drift over run: {:.3e}", relative_drift(&run.energy));
            write_well_run(&args.out_dir, &run)?;
        }
    }

    Ok(())
}
