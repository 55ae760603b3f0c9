//! 测试辅助模块

use std::sync::Arc;

use crate::traits::{InMemorySelectionStore, SelectionStore};
use crate::types::Address;

pub fn shared_store() -> Arc<dyn SelectionStore> {
    Arc::new(InMemorySelectionStore::new())
}

pub fn home_and_work() -> Vec<Address> {
    vec![
        Address::new(1, "Home")
            .with_default(true)
            .with_lines("12 Teheran-ro", "Apt 301")
            .with_zip_code("06234"),
        Address::new(2, "Work")
            .with_lines("235 Pangyoyeok-ro", "4F")
            .with_zip_code("13494"),
    ]
}

pub fn three_addresses() -> Vec<Address> {
    let mut list = home_and_work();
    list.push(
        Address::new(3, "Parents")
            .with_lines("55 Haeundaehaebyeon-ro", "")
            .with_zip_code("48099"),
    );
    list
}
