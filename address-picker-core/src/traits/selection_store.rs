//! Shared selection store Trait

use tokio::sync::watch;

use crate::types::{Address, Selection};

/// Selection Store Trait
///
/// Holds the currently selected address and its list index. Every
/// component that reads or writes the selection receives the store
/// explicitly (usually as `Arc<dyn SelectionStore>`).
///
/// Each setter publishes a full [`Selection`] snapshot to subscribers.
pub trait SelectionStore: Send + Sync {
    /// Current selection snapshot
    fn snapshot(&self) -> Selection;

    /// Selected index, if any
    fn selected_index(&self) -> Option<usize> {
        self.snapshot().index
    }

    /// Selected address, if any
    fn selected_address(&self) -> Option<Address> {
        self.snapshot().address
    }

    /// Write the selected index
    fn set_selected_index(&self, index: Option<usize>);

    /// Write the selected address
    fn set_selected_address(&self, address: Option<Address>);

    /// Replace both fields with a single published snapshot
    fn set_selection(&self, selection: Selection);

    /// Clear both fields
    fn reset(&self);

    /// Receive a notification for every write
    fn subscribe(&self) -> watch::Receiver<Selection>;
}

/// In-memory selection store
///
/// Default implementation backed by a `watch` channel, so the latest
/// snapshot is always readable and subscribers can poll `has_changed`.
pub struct InMemorySelectionStore {
    tx: watch::Sender<Selection>,
}

impl InMemorySelectionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::with_selection(Selection::default())
    }

    /// Create a store pre-populated with a selection
    #[must_use]
    pub fn with_selection(selection: Selection) -> Self {
        let (tx, _rx) = watch::channel(selection);
        Self { tx }
    }
}

impl Default for InMemorySelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStore for InMemorySelectionStore {
    fn snapshot(&self) -> Selection {
        self.tx.borrow().clone()
    }

    fn selected_index(&self) -> Option<usize> {
        self.tx.borrow().index
    }

    fn set_selected_index(&self, index: Option<usize>) {
        self.tx.send_modify(|s| s.index = index);
    }

    fn set_selected_address(&self, address: Option<Address>) {
        self.tx.send_modify(|s| s.address = address);
    }

    fn set_selection(&self, selection: Selection) {
        self.tx.send_replace(selection);
    }

    fn reset(&self) {
        self.tx.send_replace(Selection::default());
    }

    fn subscribe(&self) -> watch::Receiver<Selection> {
        self.tx.subscribe()
    }
}
