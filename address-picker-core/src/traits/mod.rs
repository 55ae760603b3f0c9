//! Abstractions over the picker's collaborators

mod address_source;
mod selection_store;

pub use address_source::AddressSource;
pub use selection_store::{InMemorySelectionStore, SelectionStore};
