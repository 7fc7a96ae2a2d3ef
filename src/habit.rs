//! Recurring habits

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::item::{Frequency, ItemId, ValidationError};

/// A recurring habit, marked done day by day
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Opaque unique identifier, assigned at creation
    id: ItemId,

    /// The display name of the habit
    name: String,

    /// How often this habit recurs.
    /// Fixed at creation; currently this only affects how the habit is labelled (see [`Item::is_active_on`](crate::Item::is_active_on))
    frequency: Frequency,

    /// The calendar days this habit was marked done on. Each day appears at most once
    completed_dates: Vec<NaiveDate>,
}

impl Habit {
    /// Create a brand new habit with a fresh random ID and no completed days.
    /// Fails if `name` is empty once trimmed.
    pub fn new(name: &str, frequency: Frequency) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self::new_with_parameters(ItemId::random(), name.to_string(), frequency, Vec::new()))
    }

    /// Create a habit from already-known parts (e.g. when restoring a known state)
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
