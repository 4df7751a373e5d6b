use std::path::Path;
use std::time::Duration;

use chrono::NaiveDate;
use incubator_core::{AuditLog, FixedClock, Incubator, StateStore};
use incubator::render::PlainStyle;
use incubator::session::Session;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Helper to create a session in `dir`, pinned to 2024-03-20 with plain output.
pub fn setup(dir: &Path) -> Session<FixedClock> {
    Session::new(
        Incubator::with_clock(
            StateStore::new(dir.join("incubator_data.json")),
            AuditLog::new(dir.join("incubator_log.txt")),
            FixedClock::on(date(2024, 3, 20)),
        ),
        Box::new(PlainStyle),
        Duration::from_secs(3600),
    )
}

pub fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("output is not UTF-8")
}
