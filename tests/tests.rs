use orbwell::configuration::config::{
    CurveConfig, LawConfig, ParametersConfig, ScenarioConfig,
};
use orbwell::simulation::dynamics::{CentralField, Dynamics, PotentialWell};
use orbwell::simulation::grid::{linspace, time_grid};
use orbwell::simulation::integrator::integrate;
use orbwell::simulation::params::Parameters;
use orbwell::simulation::scenario::{CentralScenario, WellScenario};
use orbwell::simulation::states::{SVec2, SVec3};
use orbwell::simulation::trajectory::{orbital_energy, project_path, relative_drift, well_energy};

use approx::assert_relative_eq;

/// Inverse-cube field of the infall-spiral scenario
pub fn inverse_cube_field() -> CentralField {
    CentralField {
        gamma: 1.0,
        exponent: 3,
        h: 1.0,
    }
}

/// Inverse-square field of the Kepler scenario
pub fn kepler_field() -> CentralField {
    CentralField {
        gamma: 8.0,
        exponent: 2,
        h: 1.0,
    }
}

/// The well V(x) = 4/x + x
pub fn standard_well() -> PotentialWell {
    PotentialWell {
        mass: 1.0,
        a: 4.0,
        b: 1.0,
    }
}

/// Solver parameters used across tests
pub fn test_params(dt: f64, t_max: f64) -> Parameters {
    Parameters {
        dt,
        t_max,
        atol: 1e-10,
        rtol: 1e-10,
    }
}

// ==================================================================================
// Grid tests
// ==================================================================================

#[test]
fn time_grid_matches_scenario_lengths() {
    assert_eq!(time_grid(0.005, 0.95).unwrap().len(), 190);
    assert_eq!(time_grid(0.0025, 0.86).unwrap().len(), 344);
    assert_eq!(time_grid(0.05, 6.9).unwrap().len(), 138);
}

#[test]
fn time_grid_is_even_and_stays_below_t_max() {
    let grid = time_grid(0.005, 0.95).unwrap();
    assert_eq!(grid[0], 0.0);
    assert_eq!(grid[1], 0.005);
    for pair in grid.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    assert!(*grid.last().unwrap() < 0.95);
}

#[test]
fn time_grid_rejects_bad_configuration() {
    assert!(time_grid(0.0, 1.0).is_err());
    assert!(time_grid(-0.1, 1.0).is_err());
    assert!(time_grid(0.1, 0.0).is_err());
    assert!(time_grid(0.1, -1.0).is_err());
}

#[test]
fn linspace_includes_both_endpoints() {
    let xs = linspace(0.5, 6.0, 101).unwrap();
    assert_eq!(xs.len(), 101);
    assert_eq!(xs[0], 0.5);
    assert_eq!(xs[100], 6.0);

    let step = (6.0 - 0.5) / 100.0;
    for (i, &x) in xs.iter().enumerate() {
        assert_relative_eq!(x, 0.5 + i as f64 * step, max_relative = 1e-12);
    }
}

#[test]
fn linspace_rejects_bad_configuration() {
    assert!(linspace(0.0, 1.0, 1).is_err());
    assert!(linspace(0.0, 1.0, 0).is_err());
    assert!(linspace(1.0, 1.0, 2).is_err());
    assert!(linspace(2.0, 1.0, 2).is_err());
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn trajectory_matches_grid_and_initial_state() {
    let params = test_params(0.005, 0.95);
    let grid = time_grid(params.dt, params.t_max).unwrap();
    let initial = SVec3::new(1.0, -1.0, 0.0);

    let traj = integrate(&inverse_cube_field(), initial, &grid, &params).unwrap();

    assert_eq!(traj.len(), grid.len());
    assert_eq!(traj.len(), 190);
    assert_eq!(traj.states[0], initial); // entry 0 is the initial state exactly
    assert_eq!(traj.times, grid);
}

#[test]
fn inverse_cube_with_matched_momentum_falls_linearly() {
    // With h^2 = gamma the centrifugal term cancels the force exactly,
    // so rdot stays at -1 and r(t) = 1 - t.
    let params = test_params(0.005, 0.95);
    let grid = time_grid(params.dt, params.t_max).unwrap();
    let traj = integrate(
        &inverse_cube_field(),
        SVec3::new(1.0, -1.0, 0.0),
        &grid,
        &params,
    )
    .unwrap();

    for (t, s) in traj.times.iter().zip(&traj.states) {
        assert!((s[0] - (1.0 - t)).abs() < 1e-6, "r({t}) = {}", s[0]);
    }
}

#[test]
fn kepler_orbit_conserves_energy() {
    let params = test_params(0.0025, 0.86);
    let grid = time_grid(params.dt, params.t_max).unwrap();
    let field = kepler_field();
    let traj = integrate(&field, SVec3::new(1.0, 0.0, 0.0), &grid, &params).unwrap();

    assert_eq!(traj.len(), 344);
    let energy = orbital_energy(&traj, &field);
    assert_relative_eq!(energy[0], -7.5, max_relative = 1e-12);
    assert!(relative_drift(&energy) < 1e-4, "drift = {}", relative_drift(&energy));
}

#[test]
fn well_oscillation_conserves_energy() {
    let params = test_params(0.05, 6.9);
    let grid = time_grid(params.dt, params.t_max).unwrap();
    let well = standard_well();
    let traj = integrate(&well, SVec2::new(4.0, 0.0), &grid, &params).unwrap();

    assert_eq!(traj.len(), 138);
    let energy = well_energy(&traj, &well);
    assert_eq!(energy[0], 5.0); // E = 0 + V(4) = 4/4 + 4
    assert!(relative_drift(&energy) < 1e-4, "drift = {}", relative_drift(&energy));
}

#[test]
fn integration_is_deterministic() {
    let params = test_params(0.0025, 0.86);
    let grid = time_grid(params.dt, params.t_max).unwrap();
    let initial = SVec3::new(1.0, 0.0, 0.0);

    let first = integrate(&kepler_field(), initial, &grid, &params).unwrap();
    let second = integrate(&kepler_field(), initial, &grid, &params).unwrap();

    // Bit-for-bit identical, not merely close
    assert_eq!(first, second);
}

#[test]
fn radial_infall_hits_the_singularity() {
    // No angular momentum and inward velocity: the particle reaches r = 0
    // well before t_max and integration must abort rather than continue.
    let field = CentralField {
        gamma: 1.0,
        exponent: 2,
        h: 0.0,
    };
    let params = test_params(0.01, 1.0);
    let grid = time_grid(params.dt, params.t_max).unwrap();

    let result = integrate(&field, SVec3::new(1.0, -2.0, 0.0), &grid, &params);
    assert!(result.is_err());
}

#[test]
fn derivative_rejects_nonpositive_radius() {
    let field = kepler_field();
    assert!(field.derivative(0.0, &SVec3::new(0.0, 0.0, 0.0)).is_err());
    assert!(field.derivative(0.0, &SVec3::new(-1.0, 0.0, 0.0)).is_err());

    let well = standard_well();
    assert!(well.derivative(0.0, &SVec2::new(0.0, 0.0)).is_err());
    assert!(well.derivative(0.0, &SVec2::new(-1.0, 0.0)).is_err());
}

// ==================================================================================
// Projection tests
// ==================================================================================

#[test]
fn polar_projection_round_trips_radius() {
    let params = test_params(0.0025, 0.86);
    let grid = time_grid(params.dt, params.t_max).unwrap();
    let traj = integrate(&kepler_field(), SVec3::new(1.0, 0.0, 0.0), &grid, &params).unwrap();

    let path = project_path(&traj);
    assert_eq!(path.x.len(), traj.len());
    assert_eq!(path.y.len(), traj.len());

    for ((x, y), s) in path.x.iter().zip(&path.y).zip(&traj.states) {
        let r = (x * x + y * y).sqrt();
        assert_relative_eq!(r, s[0], max_relative = 1e-12);
    }
}

#[test]
fn angular_momentum_is_constant_along_the_orbit() {
    let params = test_params(0.0025, 0.86);
    let grid = time_grid(params.dt, params.t_max).unwrap();
    let field = kepler_field();
    let traj = integrate(&field, SVec3::new(1.0, 0.0, 0.0), &grid, &params).unwrap();

    for (t, s) in traj.times.iter().zip(&traj.states) {
        let deriv = field.derivative(*t, s).unwrap();
        let h = s[0] * s[0] * deriv[2]; // r^2 * thetadot
        assert_relative_eq!(h, field.h, max_relative = 1e-3);
    }
}

// ==================================================================================
// Configuration and scenario tests
// ==================================================================================

fn well_config() -> ScenarioConfig {
    ScenarioConfig {
        parameters: ParametersConfig {
            dt: 0.05,
            t_max: 6.9,
            atol: 1e-8,
            rtol: 1e-8,
        },
        law: LawConfig::PotentialWell {
            mass: 1.0,
            a: 4.0,
            b: 1.0,
        },
        initial: vec![4.0, 0.0],
        curve: Some(CurveConfig {
            low: 0.5,
            high: 6.0,
            samples: 101,
        }),
    }
}

#[test]
fn parses_central_field_yaml() {
    let yaml = r#"
parameters:
  dt: 0.0025
  t_max: 0.86
  atol: 1.0e-8
  rtol: 1.0e-8
law:
  type: central_field
  gamma: 8.0
  exponent: 2
  h: 1.0
initial: [1.0, 0.0, 0.0]
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    let LawConfig::CentralField { gamma, exponent, h } = cfg.law else {
        panic!("expected a central-field law");
    };
    assert_eq!(gamma, 8.0);
    assert_eq!(exponent, 2);
    assert_eq!(h, 1.0);
    assert_eq!(cfg.initial, vec![1.0, 0.0, 0.0]);
    assert!(cfg.curve.is_none());
}

#[test]
fn parses_potential_well_yaml() {
    let yaml = r#"
parameters:
  dt: 0.05
  t_max: 6.9
  atol: 1.0e-8
  rtol: 1.0e-8
law:
  type: potential_well
  mass: 1.0
  a: 4.0
  b: 1.0
initial: [4.0, 0.0]
curve:
  low: 0.5
  high: 6.0
  samples: 101
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    assert!(matches!(cfg.law, LawConfig::PotentialWell { .. }));
    let curve = cfg.curve.unwrap();
    assert_eq!(curve.samples, 101);
}

#[test]
fn build_rejects_nonpositive_time_step() {
    let mut cfg = well_config();
    cfg.parameters.dt = 0.0;
    assert!(WellScenario::build(cfg).is_err());

    let mut cfg = well_config();
    cfg.parameters.t_max = -1.0;
    assert!(WellScenario::build(cfg).is_err());
}

#[test]
fn build_rejects_wrong_initial_shape() {
    let mut cfg = well_config();
    cfg.initial = vec![4.0];
    assert!(WellScenario::build(cfg).is_err());
}

#[test]
fn build_rejects_initial_state_at_the_singularity() {
    let mut cfg = well_config();
    cfg.initial = vec![0.0, 0.0];
    assert!(WellScenario::build(cfg).is_err());
}

#[test]
fn build_rejects_mismatched_law() {
    let cfg = well_config();
    assert!(CentralScenario::build(cfg).is_err());
}

#[test]
fn well_scenario_runs_end_to_end() {
    let scenario = WellScenario::build(well_config()).unwrap();
    let run = scenario.run().unwrap();

    assert_eq!(run.trajectory.len(), 138);
    assert_eq!(run.energy.len(), 138);
    assert!(relative_drift(&run.energy) < 1e-4);

    let curve = run.curve.unwrap();
    assert_eq!(curve.x.len(), 101);
    assert_eq!(curve.x[0], 0.5);
    assert_eq!(curve.x[100], 6.0);
    // V(x) = 4/x + x at the right endpoint
    assert_relative_eq!(curve.v[100], 4.0 / 6.0 + 6.0, max_relative = 1e-12);
}
