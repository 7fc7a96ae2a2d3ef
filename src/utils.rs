//! Some utility functions

use chrono::Datelike;
use chrono::NaiveDate;

use crate::item::Item;
use crate::status::{day_status, month_grid, DayStatus};

/// A debug utility that pretty-prints an item and its state for one day
pub fn print_item(item: &Item, date: NaiveDate) {
    let completion = if item.is_completed_on(date) { "✓" } else { " " };
    let kind = match item {
        Item::Habit(_) => "H",
        Item::Task(_) => "T",
    };
    println!("    {}{} {}\t{}", completion, kind, item.name(), item.id());
}

/// A debug utility that pretty-prints a whole month, one status mark per day.
///
/// `✓` marks a fully completed day, `!` a day with at least one item left
/// undone, nothing a day without active items.
pub fn print_month(year: i32, month: u32, habits: &[Item], tasks: &[Item]) {
    let cells = match month_grid(year, month) {
        Some(cells) => cells,
        None => {
            log::warn!("{}-{} is not a valid month, not printing it", year, month);
            return;
        }
    };

    println!(" Mo  Tu  We  Th  Fr  Sa  Su");
    for week in cells.chunks(7) {
        let mut line = String::new();
        for cell in week {
            match cell {
                None => line.push_str("    "),
                Some(date) => {
                    let mark = match day_status(*date, habits, tasks) {
                        DayStatus::Completed => '✓',
                        DayStatus::Incomplete => '!',
                        DayStatus::None => ' ',
                    };
                    line.push_str(&format!(" {:>2}{}", date.day(), mark));
                }
            }
        }
        println!("{}", line);
    }
}
