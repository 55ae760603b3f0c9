//! Type definitions shared by the address picker

mod address;
mod selection;

pub use address::{Address, AddressId};
pub use selection::Selection;
