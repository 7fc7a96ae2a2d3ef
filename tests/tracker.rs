//! End-to-end scenarios over a real (file-backed) blob store

use chrono::NaiveDate;

use fridge_magnet::parse_day;
use fridge_magnet::status::{day_status, DayStatus};
use fridge_magnet::storage::{BlobStore, FileStore, MemoryStore};
use fridge_magnet::store::{Store, DEFAULT_STORAGE_KEY};
use fridge_magnet::{Frequency, Item, ItemKind};

fn day(s: &str) -> NaiveDate {
    parse_day(s).unwrap()
}

/// A full user session: create items, toggle completions day by day, and
/// check the calendar statuses that a front-end would paint.
#[test]
fn test_tracking_a_habit_and_a_task() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = Store::new(MemoryStore::new());

    let mut habit = Item::new("Stretching", ItemKind::Habit, Frequency::Daily).unwrap();
    let mut task = Item::new("Water the plants", ItemKind::Task, Frequency::Weekly).unwrap();
    store.add_item(habit.clone()).unwrap();
    store.add_item(task.clone()).unwrap();

    store.toggle_completion(&mut habit, day("2024-03-01")).unwrap();

    let document = store.load();
    assert_eq!(
        day_status(day("2024-03-01"), &document.habits, &document.tasks),
        DayStatus::Incomplete
    );
    assert_eq!(
        day_status(day("2024-03-02"), &document.habits, &document.tasks),
        DayStatus::Incomplete
    );

    store.toggle_completion(&mut task, day("2024-03-01")).unwrap();

    let document = store.load();
    assert_eq!(
        day_status(day("2024-03-01"), &document.habits, &document.tasks),
        DayStatus::Completed
    );

    // Deleting both items brings the calendar back to its empty state
    store.delete_item(habit.id(), ItemKind::Habit).unwrap();
    store.delete_item(task.id(), ItemKind::Task).unwrap();
    let document = store.load();
    assert_eq!(
        day_status(day("2024-03-01"), &document.habits, &document.tasks),
        DayStatus::None
    );
}

/// Data saved by one store instance must be picked up by the next one
/// opening the same backing directory.
#[test]
fn test_reopening_a_file_backed_store() {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir().unwrap();

    let mut habit = Item::new("Stretching", ItemKind::Habit, Frequency::Daily).unwrap();
    {
        let mut store = Store::new(FileStore::new(dir.path()));
        store.add_item(habit.clone()).unwrap();
        store.toggle_completion(&mut habit, day("2024-03-01")).unwrap();
    }

    let retrieved_store = Store::new(FileStore::new(dir.path()));
    let document = retrieved_store.load();
    assert_eq!(document.habits, vec![habit]);
    assert_eq!(document.tasks, vec![]);
}

/// Documents written by earlier versions of the tracker (the "version 0"
/// shape, no schema version field) must keep deserializing as-is.
#[test]
fn test_reading_a_version_0_document() {
    let _ = env_logger::builder().is_test(true).try_init();

    let stored = r#"{
        "habits": [
            {
                "id": "f6f2eac4-4fee-4a53-9bd0-8cf05f2a1bc5",
                "name": "Cvičení",
                "type": "habit",
                "frequency": "daily",
                "completedDates": ["2024-03-01", "2024-03-02"]
            }
        ],
        "tasks": [
            {
                "id": "1b1383ef-5c64-4df5-8d6d-37d0cb5e5b2f",
                "name": "Zalít květiny",
                "type": "task",
                "frequency": "weekly",
                "completedDates": []
            }
        ]
    }"#;

    let mut blobs = MemoryStore::new();
    blobs.set(DEFAULT_STORAGE_KEY, stored).unwrap();
    let store = Store::new(blobs);

    let document = store.load();
    assert_eq!(document.habits.len(), 1);
    assert_eq!(document.tasks.len(), 1);

    let habit = &document.habits[0];
    assert!(habit.is_habit());
    assert_eq!(habit.name(), "Cvičení");
    assert_eq!(habit.frequency(), Frequency::Daily);
    assert!(habit.is_completed_on(day("2024-03-01")));
    assert!(habit.is_completed_on(day("2024-03-02")));
    assert!(!habit.is_completed_on(day("2024-03-03")));

    let task = &document.tasks[0];
    assert!(task.is_task());
    assert_eq!(task.id().as_str(), "1b1383ef-5c64-4df5-8d6d-37d0cb5e5b2f");
    assert_eq!(task.frequency(), Frequency::Weekly);
    assert!(task.completed_dates().is_empty());
}

/// A saved document must round-trip through the wire shape unchanged,
/// including the `"type"` tag and `YYYY-MM-DD` date strings.
#[test]
fn test_wire_shape_of_a_saved_document() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = Store::new(MemoryStore::new());
    let mut habit = Item::new("Stretching", ItemKind::Habit, Frequency::Daily).unwrap();
    store.add_item(habit.clone()).unwrap();
    store.toggle_completion(&mut habit, day("2024-03-01")).unwrap();

    // Reach under the store, like another process reading the raw blob would
    let raw = store.blobs().get(DEFAULT_STORAGE_KEY).unwrap().unwrap();

    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["habits"][0]["type"], "habit");
    assert_eq!(json["habits"][0]["name"], "Stretching");
    assert_eq!(json["habits"][0]["frequency"], "daily");
    assert_eq!(json["habits"][0]["completedDates"][0], "2024-03-01");
    assert_eq!(json["tasks"], serde_json::json!([]));
}
