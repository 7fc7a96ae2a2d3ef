//! Per-day completion status, as painted on a month calendar

use chrono::{Datelike, NaiveDate};

use crate::item::Item;

/// The completion status of one calendar day, across every active item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayStatus {
    /// No item was active that day
    None,
    /// Every active item was completed that day
    Completed,
    /// At least one active item was not completed that day
    Incomplete,
}

/// Compute the completion status of one day over both collections.
///
/// Since every item is currently active every day (see
/// [`Item::is_active_on`]), `DayStatus::None` only shows up when both
/// collections are empty. The branch is kept for the day scheduling becomes
/// day-of-week aware.
pub fn day_status(date: NaiveDate, habits: &[Item], tasks: &[Item]) -> DayStatus {
    let active: Vec<&Item> = habits.iter()
        .chain(tasks.iter())
        .filter(|item| item.is_active_on(date))
        .collect();

    if active.is_empty() {
        return DayStatus::None;
    }

    if active.iter().all(|item| item.is_completed_on(date)) {
        DayStatus::Completed
    } else {
        DayStatus::Incomplete
    }
}

/// Number of days in the given month, or `None` if the month is not a valid
/// `year`/`1..=12` pair
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = match month {
        12 => NaiveDate::from_ymd_opt(year + 1, 1, 1)?,
        _ => NaiveDate::from_ymd_opt(year, month + 1, 1)?,
    };
    Some(next_month.signed_duration_since(first).num_days() as u32)
}

/// Cells of a Monday-first month grid: leading `None` padding up to the
/// weekday of the 1st, then one cell per day of the month.
///
/// Returns `None` if the month is not a valid `year`/`1..=12` pair.
pub fn month_grid(year: i32, month: u32) -> Option<Vec<Option<NaiveDate>>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let leading = first.weekday().num_days_from_monday() as usize;

    let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
    let mut day = first;
    loop {
        cells.push(Some(day));
        day = match day.succ_opt() {
            Some(next) => next,
            None => break, // end of chrono's calendar
        };
        if day.month() != month {
            break;
        }
    }
    Some(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::item::{Frequency, Item, ItemKind};

    fn day(s: &str) -> NaiveDate {
        crate::item::parse_day(s).unwrap()
    }

    #[test]
    fn no_items_means_no_status() {
        assert_eq!(day_status(day("2024-03-01"), &[], &[]), DayStatus::None);
    }

    #[test]
    fn one_uncompleted_item_marks_the_day_incomplete() {
        let mut habit = Item::new("Stretching", ItemKind::Habit, Frequency::Daily).unwrap();
        habit.toggle_completed_on(day("2024-03-01"));
        let task = Item::new("Water the plants", ItemKind::Task, Frequency::Weekly).unwrap();

        // The task was never completed, so neither day is fully done
        assert_eq!(
            day_status(day("2024-03-01"), &[habit.clone()], &[task.clone()]),
            DayStatus::Incomplete
        );
        assert_eq!(
            day_status(day("2024-03-02"), &[habit.clone()], &[task.clone()]),
            DayStatus::Incomplete
        );

        // Once the task is also done on 2024-03-01, that day turns Completed
        let mut task = task;
        task.toggle_completed_on(day("2024-03-01"));
        assert_eq!(
            day_status(day("2024-03-01"), &[habit], &[task]),
            DayStatus::Completed
        );
    }

    #[test]
    fn weekly_items_count_every_day() {
        let weekly = Item::new("Weekly review", ItemKind::Task, Frequency::Weekly).unwrap();
        assert_eq!(day_status(day("2024-03-04"), &[], &[weekly]), DayStatus::Incomplete);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 4), Some(30));
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn march_2024_grid() {
        // 2024-03-01 is a Friday: four leading padding cells, then 31 days
        let cells = month_grid(2024, 3).unwrap();
        assert_eq!(cells.len(), 4 + 31);
        assert_eq!(cells[0], None);
        assert_eq!(cells[3], None);
        assert_eq!(cells[4], Some(day("2024-03-01")));
        assert_eq!(cells[34], Some(day("2024-03-31")));
    }

    #[test]
    fn month_starting_on_monday_has_no_padding() {
        // 2024-01-01 is a Monday
        let cells = month_grid(2024, 1).unwrap();
        assert_eq!(cells[0], Some(day("2024-01-01")));
        assert_eq!(cells.len(), 31);
    }
}
