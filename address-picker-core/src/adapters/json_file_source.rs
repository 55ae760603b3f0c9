//! JSON file address source
//!
//! Reads a JSON array of address records, the same shape the storefront
//! backend returns for a member's address book.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CoreResult;
use crate::traits::AddressSource;
use crate::types::Address;

/// Loads addresses from a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileAddressSource {
    path: PathBuf,
}

impl JsonFileAddressSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AddressSource for JsonFileAddressSource {
    fn load(&self) -> CoreResult<Vec<Address>> {
        log::debug!("Loading addresses from {}", self.path.display());
        let raw = fs::read_to_string(&self.path)?;
        let addresses: Vec<Address> = serde_json::from_str(&raw)?;
        log::info!(
            "Loaded {} addresses from {}",
            addresses.len(),
            self.path.display()
        );
        Ok(addresses)
    }
}
