//! Next-position selection: neighbor moves and restart landing seeds.

use crate::types::SeedSelectionStrategy;
use std::collections::HashSet;
use super::WalkRng;

/// Picks a neighbor uniformly; with revisits disallowed only unvisited
/// neighbors are candidates. `None` means no candidate is left.
pub(crate) fn select_neighbor<'g, R: WalkRng + ?Sized>(
  neighbors: &[&'g str],
  visited: &HashSet<&'g str>,
  allow_revisits: bool,
  rng: &mut R,
) -> Option<&'g str> {
  if allow_revisits {
    return pick(neighbors, rng);
  }
  let unvisited: Vec<&'g str> = neighbors
    .iter()
    .copied()
    .filter(|n| !visited.contains(n))
    .collect();
  pick(&unvisited, rng)
}

/// Picks the seed a restart lands on. A single seed consumes no draw.
pub(crate) fn select_restart_seed<'g, R: WalkRng + ?Sized>(
  seeds: &[&'g str],
  strategy: SeedSelectionStrategy,
  rng: &mut R,
) -> &'g str {
  match strategy {
    SeedSelectionStrategy::Uniform => {
      if seeds.len() == 1 {
        seeds[0]
      } else {
        seeds[rng.next_index(seeds.len())]
      }
    }
  }
}

fn pick<'g, R: WalkRng + ?Sized>(candidates: &[&'g str], rng: &mut R) -> Option<&'g str> {
  if candidates.is_empty() {
    None
  } else {
    Some(candidates[rng.next_index(candidates.len())])
  }
}
