//! Graph and score-table files (JSON).

use crate::types::PropagationGraph;
use std::collections::HashMap;
use std::path::Path;
use tracing::instrument;

/// Suffix appended to the sanitized network name for saved subnetworks.
pub const OUTPUT_SUFFIX: &str = "_propagation.json";

fn invalid_data(e: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> std::io::Error {
  std::io::Error::new(std::io::ErrorKind::InvalidData, e)
}

/// Loads a graph from `path`. Missing files, invalid JSON and edges that name
/// unknown nodes are errors.
#[instrument(level = "trace", skip(path))]
pub fn load_graph(path: &Path) -> Result<PropagationGraph, std::io::Error> {
  let bytes = std::fs::read(path)?;
  let graph: PropagationGraph = serde_json::from_slice(&bytes).map_err(invalid_data)?;
  graph.validate().map_err(invalid_data)?;
  Ok(graph)
}

/// Saves `graph` as pretty JSON, creating parent directories.
#[instrument(level = "trace", skip(path, graph))]
pub fn save_graph(path: &Path, graph: &PropagationGraph) -> Result<(), std::io::Error> {
  let json = serde_json::to_string_pretty(graph).map_err(invalid_data)?;
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, json)
}

/// Loads a `{ "type": score }` table.
#[instrument(level = "trace", skip(path))]
pub fn load_type_scores(path: &Path) -> Result<HashMap<String, f64>, std::io::Error> {
  let bytes = std::fs::read(path)?;
  serde_json::from_slice(&bytes).map_err(invalid_data)
}

fn sanitize(s: &str) -> String {
  s.chars()
    .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
    .collect()
}

/// File name for a saved subnetwork: non-alphanumeric characters become `_`.
pub fn output_file_name(network_name: &str) -> String {
  format!("{}{OUTPUT_SUFFIX}", sanitize(network_name))
}

/// Like [`output_file_name`] with the seed ids appended, for networks whose
/// names collide once sanitized.
pub fn seed_tagged_file_name<S: AsRef<str>>(network_name: &str, seed_ids: &[S]) -> String {
  let ids: Vec<String> = seed_ids.iter().map(|id| sanitize(id.as_ref())).collect();
  format!("{}_{}{OUTPUT_SUFFIX}", sanitize(network_name), ids.join("_"))
}
