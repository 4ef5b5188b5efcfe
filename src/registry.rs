//! Insertion-ordered collection of unique-by-identity entities
//!
//! Identity is the entity's key (id newtype), never value equality. New
//! entries sit at the front, so index 0 is always the most recent insert.
//! All operations are total: absent keys and out-of-range indices yield
//! `false`/`None`, never a panic.

/// Implemented by entities that carry a stable identity key
pub trait Keyed {
    type Key: Copy + Eq;

    fn key(&self) -> Self::Key;
}

/// Ordered set of entities, unique by key, newest first
#[derive(Debug, Clone)]
pub struct Registry<T: Keyed> {
    entries: Vec<T>,
}

impl<T: Keyed> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert unless an entry with the same key already exists.
    ///
    /// Returns true iff the item was inserted; a duplicate add is a no-op
    /// and leaves the size unchanged.
    pub fn add(&mut self, item: T) -> bool {
        if self.contains(item.key()) {
            return false;
        }
        self.entries.insert(0, item);
        true
    }

    /// Linear scan by identity; does not mutate
    pub fn contains(&self, key: T::Key) -> bool {
        self.entries.iter().any(|e| e.key() == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, counted from the most recent insert.
    ///
    /// Out-of-range indices return `None`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(index)
    }

    /// Remove the entry with the given key, if present.
    ///
    /// Returns whether a removal occurred. Removed entries are forgotten
    /// entirely; there are no tombstones.
    pub fn remove(&mut self, key: T::Key) -> bool {
        match self.entries.iter().position(|e| e.key() == key) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Iterate newest-first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut()
    }
}
