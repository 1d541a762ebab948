//! Athletes-of-the-week selection.
//!
//! A rotating pair over the athlete list: toggling a chosen athlete removes
//! it, and choosing a third evicts whichever of the two was chosen first.

#[cfg(test)]
#[path = "week_test.rs"]
mod week_test;

use wire::{RecordId, WeekSelectionRequest};

/// Number of featured athletes.
pub const WEEK_SIZE: usize = 2;

const WRONG_COUNT: &str = "Please select exactly 2 athletes";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeekSelection {
    /// Oldest selection first.
    chosen: Vec<RecordId>,
}

impl WeekSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.chosen.contains(id)
    }

    pub fn selected(&self) -> &[RecordId] {
        &self.chosen
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Select or deselect `id`.
    pub fn toggle(&mut self, id: RecordId) {
        if let Some(pos) = self.chosen.iter().position(|c| *c == id) {
            self.chosen.remove(pos);
            return;
        }
        if self.chosen.len() == WEEK_SIZE {
            self.chosen.remove(0);
        }
        self.chosen.push(id);
    }

    /// Body for the set-athletes-of-week call.
    ///
    /// # Errors
    ///
    /// Returns the validation message unless exactly two are selected.
    pub fn submission(&self) -> Result<WeekSelectionRequest, &'static str> {
        if self.chosen.len() != WEEK_SIZE {
            return Err(WRONG_COUNT);
        }
        Ok(WeekSelectionRequest { athlete_ids: self.chosen.clone() })
    }
}
