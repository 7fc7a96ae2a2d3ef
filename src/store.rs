//! The persisted tracker document, and the store operations over it.
//!
//! Every mutating operation is a full load-transform-save of one JSON
//! document: there is no partial or incremental persistence. This is not
//! atomic across writers. Two stores racing on the same blob (think two
//! browser tabs on the same profile) overwrite each other at document
//! granularity, last write wins, no merge and no version field. Keep a
//! single `Store` per blob store, or serialize all calls through one owner.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemId, ItemKind};
use crate::storage::{BlobStore, StorageError};

/// The blob-store key the document is saved under, unless a custom one is given
pub const DEFAULT_STORAGE_KEY: &str = "habbits-data";

/// The whole persisted state: two ordered collections, one per item kind.
///
/// The store routes every item into the collection its kind selects, so
/// `habits` only ever holds `Item::Habit` values and `tasks` only
/// `Item::Task` values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub habits: Vec<Item>,
    #[serde(default)]
    pub tasks: Vec<Item>,
}

impl Document {
    fn collection_mut(&mut self, kind: ItemKind) -> &mut Vec<Item> {
        match kind {
            ItemKind::Habit => &mut self.habits,
            ItemKind::Task => &mut self.tasks,
        }
    }

    fn into_collection(self, kind: ItemKind) -> Vec<Item> {
        match kind {
            ItemKind::Habit => self.habits,
            ItemKind::Task => self.tasks,
        }
    }
}

/// A habit/task store over a [`BlobStore`].
///
/// The store is the only writer of the persisted document. Consumers do not
/// keep their own long-lived copy of the collections: they re-[`load`](Store::load)
/// after every mutating call.
#[derive(Debug, PartialEq)]
pub struct Store<B: BlobStore> {
    blobs: B,
    key: String,
}

impl<B: BlobStore> Store<B> {
    /// Create a store persisting under [`DEFAULT_STORAGE_KEY`]
    pub fn new(blobs: B) -> Self {
        Self::with_key(blobs, DEFAULT_STORAGE_KEY)
    }

    /// Create a store persisting under a custom blob-store key
    pub fn with_key(blobs: B, key: &str) -> Self {
        Self {
            blobs,
            key: key.to_string(),
        }
    }

    /// Returns the underlying blob store
    pub fn blobs(&self) -> &B {
        &self.blobs
    }

    /// Load the current document.
    ///
    /// This is deliberately fail-open: a missing key, an unreadable blob or
    /// a blob that does not deserialize all degrade to an empty document
    /// (with a warning in the logs), never to an error. A corrupt store must
    /// not block the whole tracker.
    pub fn load(&self) -> Document {
        let stored = match self.blobs.get(&self.key) {
            Ok(stored) => stored,
            Err(err) => {
                log::warn!("Unable to load stored data: {}", err);
                return Document::default();
            }
        };
        match stored {
            None => Document::default(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(document) => document,
                Err(err) => {
                    log::warn!("Stored data is not a valid document, starting from an empty one: {}", err);
                    Document::default()
                }
            },
        }
    }

    /// Serialize and write the whole document.
    ///
    /// Unlike reads, write failures are returned so the caller can surface
    /// them: until the next successful save, the in-memory state and the
    /// persisted state silently diverge.
    pub fn save(&mut self, document: &Document) -> Result<(), StorageError> {
        let raw = serde_json::to_string(document)
            .unwrap(/* this cannot panic, the document only holds JSON-representable types */);
        if let Err(err) = self.blobs.set(&self.key, &raw) {
            log::warn!("Unable to save data: {}", err);
            return Err(err);
        }
        Ok(())
    }

    /// Append a new item to the collection its kind selects.
    ///
    /// Returns the updated collection of that kind.
    pub fn add_item(&mut self, item: Item) -> Result<Vec<Item>, StorageError> {
        let mut document = self.load();
        let kind = item.kind();
        document.collection_mut(kind).push(item);
        self.save(&document)?;
        Ok(document.into_collection(kind))
    }

    /// Replace the stored item that has the same id, within the collection
    /// its kind selects.
    ///
    /// Updating an id that is not stored is a no-op: nothing is saved.
    pub fn update_item(&mut self, item: &Item) -> Result<(), StorageError> {
        let mut document = self.load();
        let collection = document.collection_mut(item.kind());
        match collection.iter_mut().find(|existing| existing.id() == item.id()) {
            None => {
                log::debug!("No stored {} with id {}, nothing to update", item.kind(), item.id());
                Ok(())
            }
            Some(existing) => {
                *existing = item.clone();
                self.save(&document)
            }
        }
    }

    /// Remove the item with this id from the given kind's collection.
    ///
    /// Deleting an id that is not stored leaves both collections unchanged.
    pub fn delete_item(&mut self, id: &ItemId, kind: ItemKind) -> Result<(), StorageError> {
        let mut document = self.load();
        document.collection_mut(kind).retain(|item| item.id() != id);
        self.save(&document)
    }

    /// Flip the completion state of `item` for one calendar day, and persist
    /// the change.
    ///
    /// The caller's item is mutated in place, so it stays in step with the
    /// stored one. Toggling the same day twice is a net no-op.
    pub fn toggle_completion(&mut self, item: &mut Item, date: NaiveDate) -> Result<(), StorageError> {
        item.toggle_completed_on(date);
        self.update_item(item)
    }
}
