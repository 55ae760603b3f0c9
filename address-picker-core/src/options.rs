//! Behaviour switches for [`AddressList`](crate::component::AddressList)

use serde::{Deserialize, Serialize};

/// What happens when the parent hands over a new address list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListSyncMode {
    /// Keep the list captured at construction, ignore later lists
    Frozen,
    /// Replace the local copy whenever a new list arrives
    #[default]
    SyncOnChange,
}

/// Which value decides whether a card is rendered as selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionKey {
    /// Compare the card position with the stored index
    #[default]
    Index,
    /// Compare the record id with the stored address id
    Id,
}

/// Diagnostic output emitted while building cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemTrace {
    #[default]
    Off,
    /// One debug line per render pass
    Summary,
    /// Summary plus one trace line per item
    Items,
}

/// Options for [`AddressList`](crate::component::AddressList)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressListOptions {
    pub sync_mode: ListSyncMode,
    pub selection_key: SelectionKey,
    pub item_trace: ItemTrace,
}
