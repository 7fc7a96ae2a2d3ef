//! This crate provides the core of a habit/task tracker.
//!
//! Users create recurring items ([`Habit`]s and [`Task`]s, unified as [`Item`]), mark them
//! complete on calendar days, and read back a per-day completion status
//! ([`day_status`]) to paint a month calendar with.
//!
//! All state lives in one JSON document behind a [`BlobStore`], the plain
//! synchronous key-value primitive the host environment provides (the
//! [`storage`] module ships a file-backed and an in-memory implementation). \
//! A [`Store`] layers the tracker operations on top of it: every mutation is
//! a full load-transform-save of the document, and consumers re-read through
//! [`Store::load`] after each mutating call rather than keeping their own
//! copy of the collections.

pub mod item;
pub use item::{format_day, parse_day, Frequency, Item, ItemId, ItemKind, ValidationError};
mod habit;
pub use habit::Habit;
mod task;
pub use task::Task;
pub mod status;
pub use status::{day_status, DayStatus};
pub mod storage;
pub use storage::{BlobStore, FileStore, MemoryStore, StorageError};
pub mod store;
pub use store::{Document, Store};

pub mod utils;
