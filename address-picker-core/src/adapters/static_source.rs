//! Fixed in-memory address list

use crate::error::CoreResult;
use crate::traits::AddressSource;
use crate::types::Address;

/// Address source returning a fixed list
#[derive(Debug, Clone, Default)]
pub struct StaticAddressSource {
    addresses: Vec<Address>,
}

impl StaticAddressSource {
    #[must_use]
    pub fn new(addresses: Vec<Address>) -> Self {
        Self { addresses }
    }

    /// Demo data used when no address file is configured
    #[must_use]
    pub fn sample() -> Self {
        Self::new(vec![
            Address::new(1, "Home")
                .with_default(true)
                .with_lines("12 Teheran-ro, Gangnam-gu, Seoul", "Apt 301")
                .with_zip_code("06234"),
            Address::new(2, "Work")
                .with_lines("235 Pangyoyeok-ro, Bundang-gu, Seongnam", "4F")
                .with_zip_code("13494"),
            Address::new(3, "Parents")
                .with_lines("55 Haeundaehaebyeon-ro, Haeundae-gu, Busan", "")
                .with_zip_code("48099"),
        ])
    }
}

impl AddressSource for StaticAddressSource {
    fn load(&self) -> CoreResult<Vec<Address>> {
        Ok(self.addresses.clone())
    }
}
