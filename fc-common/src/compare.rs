//! Bounded comparison set for side-by-side font inspection
//!
//! Ordered, keyed by family name, never persisted. Holds at most
//! [`MAX_COMPARE_FONTS`] records; at capacity further adds are rejected and
//! the set is left unchanged.

use crate::catalog::FontRecord;
use crate::{Error, Result};

/// Maximum number of fonts that can be compared side by side
pub const MAX_COMPARE_FONTS: usize = 3;

/// Outcome of a toggle call, so callers can word their notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// The working set of fonts selected for comparison
#[derive(Debug, Clone, Default)]
pub struct ComparisonSet {
    fonts: Vec<FontRecord>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the record when present, otherwise append it.
    ///
    /// Returns `Error::CapacityExceeded` when appending would exceed the
    /// capacity; the set is unchanged in that case.
    pub fn toggle(&mut self, font: FontRecord) -> Result<ToggleOutcome> {
        if let Some(pos) = self.position(&font.family) {
            self.fonts.remove(pos);
            return Ok(ToggleOutcome::Removed);
        }
        if self.fonts.len() >= MAX_COMPARE_FONTS {
            return Err(Error::CapacityExceeded(MAX_COMPARE_FONTS));
        }
        self.fonts.push(font);
        Ok(ToggleOutcome::Added)
    }

    /// Unconditional removal by family; no-op when absent
    pub fn remove(&mut self, family: &str) {
        if let Some(pos) = self.position(family) {
            self.fonts.remove(pos);
        }
    }

    pub fn clear(&mut self) {
        self.fonts.clear();
    }

    pub fn contains(&self, family: &str) -> bool {
        self.position(family).is_some()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.fonts.len() >= MAX_COMPARE_FONTS
    }

    /// Current members in insertion order
    pub fn fonts(&self) -> &[FontRecord] {
        &self.fonts
    }

    fn position(&self, family: &str) -> Option<usize> {
        self.fonts.iter().position(|f| f.family == family)
    }
}
