#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `AddressList` selection through a shared store.

use std::sync::Arc;

use address_picker_core::{
    Address, AddressList, AddressListOptions, InMemorySelectionStore, SelectionStore,
};

// ===== Helpers =====

fn home_and_work() -> Vec<Address> {
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

fn new_store() -> Arc<dyn SelectionStore> {
    Arc::new(InMemorySelectionStore::new())
}

// ===== Tests =====

#[test]
fn selecting_second_card_of_home_and_work() {
    let store = new_store();
    let list = AddressList::new(home_and_work(), Arc::clone(&store), AddressListOptions::default());

    let before = list.cards();
    assert!(before.iter().all(|c| !c.is_selected));

    before[1].on_select.call();

    assert_eq!(store.selected_index(), Some(1));
    assert_eq!(store.selected_address().unwrap().name, "Work");

    let after = list.cards();
    assert!(!after[0].is_selected);
    assert!(after[1].is_selected);
}

#[test]
fn stale_callback_still_selects_its_own_card() {
    let store = new_store();
    let list = AddressList::new(home_and_work(), Arc::clone(&store), AddressListOptions::default());

    let cards = list.cards();
    cards[0].on_select.call();
    cards[1].on_select.call();
    cards[0].on_select.call();

    assert_eq!(store.selected_index(), Some(0));
    assert_eq!(list.selected_card_index(), Some(0));
}

#[test]
fn two_lists_share_one_selection() {
    let store = new_store();
    let checkout = AddressList::new(home_and_work(), Arc::clone(&store), AddressListOptions::default());
    let summary = AddressList::new(home_and_work(), Arc::clone(&store), AddressListOptions::default());

    checkout.select(1).unwrap();

    assert_eq!(summary.selected_card_index(), Some(1));
    assert!(summary.cards()[1].is_selected);
}

#[test]
fn subscriber_observes_final_snapshot() {
    let store = new_store();
    let mut rx = store.subscribe();
    let list = AddressList::new(home_and_work(), Arc::clone(&store), AddressListOptions::default());

    list.select(0).unwrap();

    assert!(rx.has_changed().unwrap());
    let seen = rx.borrow_and_update().clone();
    assert_eq!(seen.index, Some(0));
    assert_eq!(seen.address.map(|a| a.name), Some("Home".to_string()));
}

#[test]
fn at_most_one_card_selected_across_transitions() {
    let store = new_store();
    let list = AddressList::new(home_and_work(), Arc::clone(&store), AddressListOptions::default());

    for i in [0, 1, 1, 0, 1] {
        list.select(i).unwrap();
        let selected: Vec<usize> = list
            .cards()
            .iter()
            .filter(|c| c.is_selected)
            .map(|c| c.index)
            .collect();
        assert_eq!(selected, vec![i]);
    }
}
