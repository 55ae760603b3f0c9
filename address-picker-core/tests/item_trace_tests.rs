#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for the diagnostic output of `AddressList::cards`.

use std::cell::RefCell;
use std::sync::Arc;

use address_picker_core::{
    Address, AddressList, AddressListOptions, InMemorySelectionStore, ItemTrace,
};
use log::{Level, LevelFilter, Log, Metadata, Record};

// ===== Helpers =====

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Collects core records per thread so parallel tests do not see each other
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("address_picker_core")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

fn capture(f: impl FnOnce()) -> Vec<(Level, String)> {
    // 其他测试可能已经安装过
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);

    RECORDS.with(|r| r.borrow_mut().clear());
    f();
    RECORDS.with(|r| r.borrow_mut().drain(..).collect())
}

fn render_with(trace: ItemTrace) -> Vec<(Level, String)> {
    let data = vec![
        Address::new(1, "Home"),
        Address::new(2, "Work"),
        Address::without_id("Draft"),
    ];
    let options = AddressListOptions {
        item_trace: trace,
        ..AddressListOptions::default()
    };
    let list = AddressList::new(data, Arc::new(InMemorySelectionStore::new()), options);
    capture(|| {
        assert_eq!(list.cards().len(), 3);
    })
}

fn levels(records: &[(Level, String)]) -> Vec<Level> {
    records.iter().map(|(level, _)| *level).collect()
}

// ===== Tests =====

#[test]
fn trace_off_logs_nothing() {
    assert!(render_with(ItemTrace::Off).is_empty());
}

#[test]
fn trace_summary_logs_one_debug_line() {
    let records = render_with(ItemTrace::Summary);
    assert_eq!(levels(&records), vec![Level::Debug]);
    assert!(records[0].1.contains("3 address cards"));
}

#[test]
fn trace_items_logs_summary_and_one_line_per_card() {
    let records = render_with(ItemTrace::Items);
    assert_eq!(
        levels(&records),
        vec![Level::Debug, Level::Trace, Level::Trace, Level::Trace]
    );
    assert!(records[1].1.contains("Home"));
    assert!(records[2].1.contains("Work"));
    assert!(records[3].1.contains("id=None"));
}
