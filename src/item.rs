//! Tracker items (habits and tasks) and the calendar-date predicates over them

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::habit::Habit;
use crate::task::Task;

/// The `YYYY-MM-DD` format every completion date is stored and compared in
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Formats a calendar date as `YYYY-MM-DD` (zero-padded month and day).
///
/// This string is the equality key used everywhere dates are stored or
/// compared, including the persisted document.
pub fn format_day(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` string back into a calendar date.
///
/// This is the inverse of [`format_day`]: `parse_day(&format_day(d))`
/// yields `d` back for every valid date.
pub fn parse_day(day: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(day, DAY_FORMAT)
}

/// Rejected item data
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Item names must contain at least one non-whitespace character
    #[error("item name is empty")]
    EmptyName,
}

/// Which of the two tracker collections an item belongs to.
///
/// The kind is fixed at creation: an item never moves between collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Habit,
    Task,
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            ItemKind::Habit => write!(f, "habit"),
            ItemKind::Task => write!(f, "task"),
        }
    }
}

/// How often an item recurs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
}

/// A habit or a task.
///
/// Serialized with an internal `"type"` tag (`"habit"` or `"task"`), so one
/// stored entry reads as e.g.
/// `{"type": "habit", "id": "...", "name": "...", "frequency": "daily", "completedDates": [...]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    Habit(Habit),
    Task(Task),
}

/// Returns `habit.$property_name` or `task.$property_name`, depending on whether self is a Habit or a Task
macro_rules! synthetise_common_getter {
    ($property_name:ident, $return_type:ty) => {
        pub fn $property_name(&self) -> $return_type {
            match self {
                Item::Habit(h) => h.$property_name(),
                Item::Task(t) => t.$property_name(),
            }
        }
    }
}

impl Item {
    synthetise_common_getter!(id, &ItemId);
    synthetise_common_getter!(name, &str);
    synthetise_common_getter!(frequency, Frequency);
    synthetise_common_getter!(completed_dates, &[NaiveDate]);

    /// Create a brand new item of the given kind.
    ///
    /// This will pick a new (random) item ID, and start with no completed
    /// dates. Fails if `name` is empty once trimmed.
    pub fn new(name: &str, kind: ItemKind, frequency: Frequency) -> Result<Self, ValidationError> {
        match kind {
            ItemKind::Habit => Habit::new(name, frequency).map(Item::Habit),
            ItemKind::Task => Task::new(name, frequency).map(Item::Task),
        }
    }

    /// The collection this item belongs to
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Habit(_) => ItemKind::Habit,
            Item::Task(_) => ItemKind::Task,
        }
    }

    pub fn is_habit(&self) -> bool {
        match self {
            Item::Habit(_) => true,
            _ => false,
        }
    }

    pub fn is_task(&self) -> bool {
        match self {
            Item::Task(_) => true,
            _ => false,
        }
    }

    /// Whether this item is expected to be acted upon on this day.
    ///
    /// Both daily and weekly items are currently active every day: weekly
    /// items do not track a specific day of the week, so the frequency only
    /// affects how an item is labelled. Day-of-week-aware scheduling would
    /// plug in here.
    pub fn is_active_on(&self, _date: NaiveDate) -> bool {
        match self.frequency() {
            Frequency::Daily => true,
            Frequency::Weekly => true,
        }
    }

    /// Whether this item was marked complete on this calendar day
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates().contains(&date)
    }

    /// Flip the completion state for one calendar day.
    ///
    /// This only mutates the in-memory item; persisting the change is
    /// [`Store::toggle_completion`](crate::store::Store::toggle_completion)'s job.
    pub fn toggle_completed_on(&mut self, date: NaiveDate) {
        match self {
            Item::Habit(h) => h.toggle_completed_on(date),
            Item::Task(t) => t.toggle_completed_on(date),
        }
    }
}

/// An opaque, unique item identifier, assigned at creation and immutable.
#[derive(Clone, Debug, PartialEq, Hash)]
pub struct ItemId {
    content: String,
}
impl ItemId {
    /// Generate a random ItemId.
    pub fn random() -> Self {
        let random = uuid::Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}
impl From<String> for ItemId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for ItemId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}

impl Eq for ItemId {}
impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for ItemId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<ItemId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let content = String::deserialize(deserializer)?;
        Ok(ItemId { content })
    }
}
