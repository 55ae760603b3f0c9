//! Built-in [`AddressSource`](crate::traits::AddressSource) implementations

mod json_file_source;
mod static_source;

pub use json_file_source::JsonFileAddressSource;
pub use static_source::StaticAddressSource;
