//! # rwr-propagation
//!
//! Network propagation by bounded random walk with restart.
//!
//! ## Architecture
//!
//! A walk starts on a seed node and, at every step, either restarts at a seed
//! (with probability `restart_prob`) or moves to a neighbor. Each visit adds
//! the node's type score to its weight and to the walk's cumulative score; the
//! walk ends when the score budget or the step budget is spent, or when it is
//! stuck on a node without neighbors.
//!
//! - `types`: graph, score table, seed set, walk configuration and results.
//! - `walk`: single-seed and multi-seed walk engines.
//! - `subnetwork`: annotated output graph built from walk weights.
//! - `seeds`, `config`, `graph_io`, `propagation`: seed discovery, JSON
//!   configuration and files, and end-to-end runs used by the `propagate` CLI.

pub mod config;
pub mod graph_io;
pub mod propagation;
pub mod seeds;
pub mod subnetwork;
#[cfg(test)]
mod test_fixtures;
pub mod types;
pub mod walk;

pub use config::{PropagationConfig, PropagationOptions};
pub use propagation::{
  PropagationRun, propagate_each_seed, propagate_from_seed, propagate_from_seeds,
};
pub use subnetwork::{SubnetworkBuilder, build_subnetwork};
pub use types::{
  GraphEdge, GraphNode, PropagationError, PropagationGraph, ScoreModel, SeedSet, WalkConfig,
  WalkResult, WalkStats,
};
pub use walk::{
  MultiSeedWalkEngine, WalkEngine, multi_seed_random_walk, random_walk_with_restart,
};
