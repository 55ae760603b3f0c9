//! Address list view model

use std::fmt;
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::options::{AddressListOptions, ItemTrace, ListSyncMode, SelectionKey};
use crate::traits::SelectionStore;
use crate::types::{Address, AddressId, Selection};

use super::{AddressCardProps, SelectCallback};

/// Selectable list of addresses
///
/// Keeps a local copy of the list it was built from and reads/writes the
/// selection through the injected [`SelectionStore`]. Whether later lists
/// replace the local copy is decided by [`ListSyncMode`].
pub struct AddressList {
    data: Vec<Address>,
    store: Arc<dyn SelectionStore>,
    options: AddressListOptions,
}

impl AddressList {
    /// Seed the list from `list_data`
    pub fn new(
        list_data: Vec<Address>,
        store: Arc<dyn SelectionStore>,
        options: AddressListOptions,
    ) -> Self {
        Self {
            data: list_data,
            store,
            options,
        }
    }

    /// Addresses currently displayed
    pub fn data(&self) -> &[Address] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn options(&self) -> AddressListOptions {
        self.options
    }

    pub fn store(&self) -> &Arc<dyn SelectionStore> {
        &self.store
    }

    /// Hand a new list from the parent
    ///
    /// Returns `true` if the local copy was replaced.
    pub fn receive_list_data(&mut self, list_data: Vec<Address>) -> bool {
        match self.options.sync_mode {
            ListSyncMode::Frozen => {
                log::debug!(
                    "Address list is frozen, ignoring new list of {} addresses",
                    list_data.len()
                );
                false
            }
            ListSyncMode::SyncOnChange => {
                self.data = list_data;
                if self.options.selection_key == SelectionKey::Id {
                    self.reindex_selection();
                }
                true
            }
        }
    }

    /// Position of the first address with `id`
    pub fn position_of(&self, id: AddressId) -> Option<usize> {
        self.data.iter().position(|a| a.id == Some(id))
    }

    /// Position of the card rendered as selected, if any
    pub fn selected_card_index(&self) -> Option<usize> {
        self.selected_position(&self.store.snapshot())
    }

    /// Build the props for every card, in display order
    pub fn cards(&self) -> Vec<AddressCardProps> {
        let selection = self.store.snapshot();
        let selected = self.selected_position(&selection);

        if self.options.item_trace >= ItemTrace::Summary {
            log::debug!(
                "Rendering {} address cards, selected card: {:?}",
                self.data.len(),
                selected
            );
        }

        self.data
            .iter()
            .enumerate()
            .map(|(index, address)| {
                if self.options.item_trace >= ItemTrace::Items {
                    log::trace!(
                        "address item #{index}: id={:?} name={:?} default={}",
                        address.id,
                        address.name,
                        address.is_default
                    );
                }

                AddressCardProps {
                    key: address.id,
                    index,
                    id: address.id,
                    name: address.name.clone(),
                    is_default: address.is_default,
                    default_addr: address.default_addr.clone(),
                    detail_addr: address.detail_addr.clone(),
                    zip_code: address.zip_code.clone(),
                    is_selected: selected == Some(index),
                    on_select: SelectCallback::new(Arc::clone(&self.store), index, address.clone()),
                }
            })
            .collect()
    }

    /// Select the address at `index`
    ///
    /// Same writes as the card's `on_select` callback. Nothing is written
    /// when `index` is past the end.
    pub fn select(&self, index: usize) -> CoreResult<()> {
        let address = self.data.get(index).ok_or(CoreError::IndexOutOfRange {
            index,
            len: self.data.len(),
        })?;
        SelectCallback::new(Arc::clone(&self.store), index, address.clone()).call();
        Ok(())
    }

    /// Select the first address with `id`, returning its position
    pub fn select_by_id(&self, id: AddressId) -> CoreResult<usize> {
        let index = self.position_of(id).ok_or(CoreError::AddressNotFound(id))?;
        self.select(index)?;
        Ok(index)
    }

    /// Clear the shared selection
    pub fn clear_selection(&self) {
        self.store.reset();
    }

    /// Whether the stored address no longer matches `data[index]`
    pub fn selection_drifted(&self) -> bool {
        let selection = self.store.snapshot();
        match (selection.index, selection.address.as_ref()) {
            (None, None) => false,
            (Some(index), Some(address)) => self.data.get(index) != Some(address),
            _ => true,
        }
    }

    fn selected_position(&self, selection: &Selection) -> Option<usize> {
        match self.options.selection_key {
            SelectionKey::Index => selection.index.filter(|&i| i < self.data.len()),
            SelectionKey::Id => selection
                .address
                .as_ref()
                .and_then(|selected| selected.id)
                .and_then(|id| self.position_of(id)),
        }
    }

    // 以 id 为准时，index 只是派生值，列表变化后重新计算；没有 id 的记录无法定位
    fn reindex_selection(&self) {
        let Some(selected) = self.store.selected_address() else {
            return;
        };
        let position = selected.id.and_then(|id| self.position_of(id));
        if self.store.selected_index() != position {
            log::debug!(
                "Selected address {:?} moved: {:?} -> {:?}",
                selected.id,
                self.store.selected_index(),
                position
            );
            self.store.set_selected_index(position);
        }
    }
}

impl fmt::Debug for AddressList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressList")
            .field("data", &self.data)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
