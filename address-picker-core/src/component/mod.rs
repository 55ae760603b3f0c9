//! Address list component
//!
//! Framework-agnostic view model: it turns an address list plus the shared
//! selection into one [`AddressCardProps`] per address. Frontends render the
//! props however they like and call back through [`SelectCallback`].

mod address_list;
mod card;

pub use address_list::AddressList;
pub use card::{AddressCardProps, SelectCallback};
