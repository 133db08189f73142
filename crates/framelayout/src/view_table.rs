//! Handle table for externally owned views.

use std::collections::BTreeMap;

use framelayout_core::ViewId;

/// Maps [`ViewId`] handles to views.
///
/// Ids are handed out in increasing order and never reused, so a stale
/// handle from a removed view can not alias a later one.
#[derive(Debug, Clone)]
pub struct ViewTable<V> {
    views: BTreeMap<ViewId, V>,
    next: u64,
}

impl<V> Default for ViewTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ViewTable<V> {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            views: BTreeMap::new(),
            next: 0,
        }
    }

    /// Store a view and return its handle.
    pub fn insert(&mut self, view: V) -> ViewId {
        let id = ViewId::from_raw(self.next);
        self.next += 1;
        self.views.insert(id, view);
        id
    }

    /// Take a view out of the table.
    pub fn remove(&mut self, id: ViewId) -> Option<V> {
        self.views.remove(&id)
    }

    /// The view behind a handle.
    #[must_use]
    pub fn get(&self, id: ViewId) -> Option<&V> {
        self.views.get(&id)
    }

    /// Mutable access to the view behind a handle.
    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut V> {
        self.views.get_mut(&id)
    }

    /// Check if a handle is live.
    #[must_use]
    pub fn contains(&self, id: ViewId) -> bool {
        self.views.contains_key(&id)
    }

    /// Number of stored views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Check if no views are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Views in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (ViewId, &V)> {
        self.views.iter().map(|(id, view)| (*id, view))
    }
}
