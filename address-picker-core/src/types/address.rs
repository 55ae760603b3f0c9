//! Address record type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable address identifier assigned by the storefront backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressId(pub u64);

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AddressId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Shipping / billing address record
///
/// Owned by whoever supplies the list. The picker never validates or
/// mutates these fields. Missing text fields deserialize as empty strings
/// and a missing `id` as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Address ID, absent for records the backend has not saved yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AddressId>,
    /// Label chosen by the user ("Home", "Work", ...)
    #[serde(default)]
    pub name: String,
    /// Whether this is the account's default address
    #[serde(default)]
    pub is_default: bool,
    /// Base address line (road / lot address)
    #[serde(default)]
    pub default_addr: String,
    /// Detail line (building, unit)
    #[serde(default)]
    pub detail_addr: String,
    /// Postal code
    #[serde(default)]
    pub zip_code: String,
}

impl Address {
    #[must_use]
    pub fn new(id: impl Into<AddressId>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            is_default: false,
            default_addr: String::new(),
            detail_addr: String::new(),
            zip_code: String::new(),
        }
    }

    /// Record without an id
    #[must_use]
    pub fn without_id(name: impl Into<String>) -> Self {
        Self {
            id: None,
            ..Self::new(0, name)
        }
    }

    #[must_use]
    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    #[must_use]
    pub fn with_lines(mut self, default_addr: impl Into<String>, detail_addr: impl Into<String>) -> Self {
        self.default_addr = default_addr.into();
        self.detail_addr = detail_addr.into();
        self
    }

    #[must_use]
    pub fn with_zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = zip_code.into();
        self
    }
}
