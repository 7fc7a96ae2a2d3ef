//! One-off and recurring to-do tasks

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::item::{Frequency, ItemId, ValidationError};

/// A to-do task.
///
/// Tasks carry the same per-day completion tracking as habits; only the
/// collection they live in (and the way a front-end presents them) differs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique identifier, assigned at creation
    id: ItemId,

    /// The display name of the task
    name: String,

    /// How often this task recurs.
    /// Fixed at creation; currently this only affects how the task is labelled (see [`Item::is_active_on`](crate::Item::is_active_on))
    frequency: Frequency,

    /// The calendar days this task was marked done on. Each day appears at most once
    completed_dates: Vec<NaiveDate>,
}

impl Task {
    /// Create a brand new task with a fresh random ID and no completed days.
    /// Fails if `name` is empty once trimmed.
    pub fn new(name: &str, frequency: Frequency) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self::new_with_parameters(ItemId::random(), name.to_string(), frequency, Vec::new()))
    }

    /// Create a task from already-known parts (e.g. when restoring a known state)
    pub fn new_with_parameters(id: ItemId, name: String, frequency: Frequency,
                               completed_dates: Vec<NaiveDate>) -> Self
    {
        Self {
            id,
            name,
            frequency,
            completed_dates,
        }
    }

    pub fn id(&self) -> &ItemId       { &self.id   }
    pub fn name(&self) -> &str        { &self.name }
    pub fn frequency(&self) -> Frequency          { self.frequency }
    pub fn completed_dates(&self) -> &[NaiveDate] { &self.completed_dates }

    /// Flip the completion state for one calendar day.
    /// Removes the day if it was marked done, marks it done otherwise.
    pub fn toggle_completed_on(&mut self, date: NaiveDate) {
        if self.completed_dates.contains(&date) {
            self.completed_dates.retain(|d| *d != date);
        } else {
            self.completed_dates.push(date);
        }
    }
}
