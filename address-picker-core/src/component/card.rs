//! Per-card props handed to the presentational child

use std::fmt;
use std::sync::Arc;

use crate::traits::SelectionStore;
use crate::types::{Address, AddressId, Selection};

/// Zero-argument selection callback bound to one card
///
/// Calling it stores the card's address together with its index as one
/// snapshot. The write happens on every call, even if the card is already
/// selected.
#[derive(Clone)]
pub struct SelectCallback {
    store: Arc<dyn SelectionStore>,
    index: usize,
    address: Address,
}

impl SelectCallback {
    pub(crate) fn new(store: Arc<dyn SelectionStore>, index: usize, address: Address) -> Self {
        Self {
            store,
            index,
            address,
        }
    }

    pub fn call(&self) {
        self.store.set_selection(Selection {
            index: Some(self.index),
            address: Some(self.address.clone()),
        });
    }
}

impl fmt::Debug for SelectCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectCallback")
            .field("index", &self.index)
            .field("address_id", &self.address.id)
            .finish_non_exhaustive()
    }
}

/// Everything one address card needs to render itself
#[derive(Debug, Clone)]
pub struct AddressCardProps {
    /// Rendering key (the record id)
    pub key: Option<AddressId>,
    /// Display position
    pub index: usize,
    pub id: Option<AddressId>,
    pub name: String,
    pub is_default: bool,
    pub default_addr: String,
    pub detail_addr: String,
    pub zip_code: String,
    pub is_selected: bool,
    pub on_select: SelectCallback,
}
