//! Ordered, non-empty set of seed node ids.

use super::PropagationError;

/// Ordered, non-empty set of seed node ids.
///
/// Duplicates are dropped, keeping the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSet {
  ids: Vec<String>,
}

impl SeedSet {
  pub fn new<I, S>(ids: I) -> Result<Self, PropagationError>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let mut unique: Vec<String> = Vec::new();
    for id in ids {
      let id = id.into();
      if !unique.contains(&id) {
        unique.push(id);
      }
    }
    if unique.is_empty() {
      return Err(PropagationError::EmptySeedSet);
    }
    Ok(Self { ids: unique })
  }

  pub fn single(id: impl Into<String>) -> Self {
    Self {
      ids: vec![id.into()],
    }
  }

  /// The seed a walk starts on.
  pub fn first(&self) -> &str {
    &self.ids[0]
  }

  pub fn get(&self, index: usize) -> Option<&str> {
    self.ids.get(index).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.ids.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ids.is_empty()
  }

  pub fn contains(&self, id: &str) -> bool {
    self.ids.iter().any(|s| s == id)
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.ids.iter().map(String::as_str)
  }

  pub fn as_slice(&self) -> &[String] {
    &self.ids
  }
}
