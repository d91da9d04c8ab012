pub mod simulation;
pub mod configuration;
pub mod output;

pub use simulation::states::{SVec2, SVec3};
pub use simulation::params::Parameters;
pub use simulation::dynamics::{CentralField, Dynamics, PotentialWell};
pub use simulation::grid::{linspace, time_grid};
pub use simulation::integrator::integrate;
pub use simulation::trajectory::{
    orbital_energy, project_path, relative_drift, well_energy, Path, Trajectory,
};
pub use simulation::scenario::{CentralRun, CentralScenario, PotentialCurve, WellRun, WellScenario};

pub use configuration::config::{CurveConfig, LawConfig, ParametersConfig, ScenarioConfig};

pub use output::export::{write_central_run, write_well_run};
