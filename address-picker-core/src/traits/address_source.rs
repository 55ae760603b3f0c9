//! Address list source Trait

use crate::error::CoreResult;
use crate::types::Address;

/// Supplies the ordered address list handed to the picker
pub trait AddressSource: Send + Sync {
    /// Load all addresses, in display order
    fn load(&self) -> CoreResult<Vec<Address>>;
}
