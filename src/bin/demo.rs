//! A demonstration of how fridge-magnet can be used.
//! This creates a couple of items in an in-memory store, toggles some
//! completions and prints the current month.
//!
//! You can set the RUST_LOG environment variable to display more info about
//! what the store does.

use chrono::{Datelike, Local};

use fridge_magnet::storage::MemoryStore;
use fridge_magnet::store::Store;
use fridge_magnet::utils::{print_item, print_month};
use fridge_magnet::{format_day, Frequency, Item, ItemKind};

fn main() {
    env_logger::init();

    let mut store = Store::new(MemoryStore::new());
    let today = Local::now().date_naive();

    let mut habit = Item::new("Stretching", ItemKind::Habit, Frequency::Daily).unwrap();
    let task = Item::new("Water the plants", ItemKind::Task, Frequency::Weekly).unwrap();
    store.add_item(habit.clone()).unwrap();
    store.add_item(task.clone()).unwrap();

    store.toggle_completion(&mut habit, today).unwrap();

    let document = store.load();
    println!("Items on {}:", format_day(today));
    for item in document.habits.iter().chain(document.tasks.iter()) {
        print_item(item, today);
    }

    println!();
    print_month(today.year(), today.month(), &document.habits, &document.tasks);
}
