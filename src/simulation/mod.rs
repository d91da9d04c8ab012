pub mod states;
pub mod params;
pub mod dynamics;
pub mod grid;
pub mod integrator;
pub mod trajectory;
pub mod scenario;
