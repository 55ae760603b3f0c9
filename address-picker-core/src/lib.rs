//! Address Picker Core Library
//!
//! Platform-independent logic behind the storefront's address picker:
//! - Address records and the shared selection snapshot
//! - The [`SelectionStore`] abstraction with an in-memory implementation
//! - The [`AddressList`] view model that turns a list plus a selection
//!   into card props with selection callbacks
//! - Address sources (static list, JSON file)
//!
//! Frontends inject the store explicitly; nothing here is global.

pub mod adapters;
pub mod component;
pub mod error;
pub mod options;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use component::{AddressCardProps, AddressList, SelectCallback};
pub use error::{CoreError, CoreResult};
pub use options::{AddressListOptions, ItemTrace, ListSyncMode, SelectionKey};
pub use traits::{AddressSource, InMemorySelectionStore, SelectionStore};
pub use types::{Address, AddressId, Selection};
