//! Session state store
//!
//! Owns the History and Favorites for one interactive session. It is passed
//! explicitly to whoever needs it; nothing here is global.

use crate::record::entities::{NameRecord, RecordId};

/// In-memory History and Favorites (Entity)
///
/// Invariant: every id in `favorites` belongs to a record in `history`.
/// Both live for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct SessionStore {
    history: Vec<NameRecord>,
    /// Favorited ids, oldest favorite first
    favorites: Vec<RecordId>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to History. No deduplication.
    pub fn record_generation(&mut self, record: NameRecord) {
        self.history.push(record);
    }

    /// Flip favorite membership for a record in History.
    ///
    /// Returns the new membership, or `None` (and does nothing) when the id
    /// is not in History.
    pub fn toggle_favorite(&mut self, id: RecordId) -> Option<bool> {
        if self.get(id).is_none() {
            return None;
        }

        if let Some(pos) = self.favorites.iter().position(|f| *f == id) {
            self.favorites.remove(pos);
            Some(false)
        } else {
            self.favorites.push(id);
            Some(true)
        }
    }

    /// Empty History and Favorites
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.favorites.clear();
    }

    /// History in chronological order
    pub fn history(&self) -> &[NameRecord] {
        &self.history
    }

    /// Favorited records in the order they were favorited
    pub fn favorites(&self) -> impl Iterator<Item = &NameRecord> {
        self.favorites.iter().filter_map(|id| self.get(*id))
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_favorite(&self, id: RecordId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn get(&self, id: RecordId) -> Option<&NameRecord> {
        self.history.iter().find(|r| r.id == id)
    }

    /// Most recent record
    pub fn latest(&self) -> Option<&NameRecord> {
        self.history.last()
    }

    /// Id of the record at a 1-based History position
    pub fn id_at(&self, position: usize) -> Option<RecordId> {
        position
            .checked_sub(1)
            .and_then(|index| self.history.get(index))
            .map(|r| r.id)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
