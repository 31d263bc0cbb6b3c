//! Walk engines: single-seed and multi-seed random walk with restart.

mod multi_seed;
#[cfg(test)]
mod reference_run_test;
#[cfg(test)]
mod scripted_rng;
mod select_neighbor;
mod validate;
mod walk_engine;
mod walk_rng;
mod walk_state;

pub use multi_seed::{MultiSeedWalkEngine, multi_seed_random_walk};
pub use validate::validate_walk_inputs;
pub use walk_engine::{WalkEngine, random_walk_with_restart};
pub use walk_rng::WalkRng;
