//! Shared selection snapshot

use serde::{Deserialize, Serialize};

use super::Address;

/// Selection state held by a [`SelectionStore`](crate::traits::SelectionStore)
///
/// `address` is expected to equal `list[index]` at the moment the selection
/// was last written. Nothing re-checks that afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Position of the selected address in the list it was picked from
    #[serde(rename = "selectedAddressIndex")]
    pub index: Option<usize>,
    /// The selected address record
    #[serde(rename = "selectedAddress")]
    pub address: Option<Address>,
}

impl Selection {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_none() && self.address.is_none()
    }
}
