//! Graph and walk types shared by the walk engines and the subnetwork builder.
//!
//! All of these are plain immutable values once built, so a graph and a score
//! table can be shared read-only across concurrent walks.

mod graph_edge;
mod graph_node;
mod propagation_error;
mod propagation_graph;
mod score_model;
mod seed_set;
mod walk_config;
#[cfg(test)]
mod walk_config_test;
mod walk_result;
#[cfg(test)]
mod walk_result_test;
mod walk_stats;
#[cfg(test)]
mod walk_stats_test;
mod walk_step;

pub use graph_edge::GraphEdge;
pub use graph_node::{GraphNode, Metadata};
pub use propagation_error::PropagationError;
pub use propagation_graph::{Adjacency, PropagationGraph};
pub use score_model::{DEFAULT_SCORE, ScoreModel};
pub use seed_set::SeedSet;
pub use walk_config::{SeedSelectionStrategy, WalkConfig};
pub use walk_result::WalkResult;
pub use walk_stats::{TerminationReason, WalkStats};
pub use walk_step::{WalkAction, WalkStepEntry};
