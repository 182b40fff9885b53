// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use tillbook::{db, session};

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn begin_session_detects_abnormal_exit() {
    let conn = setup();
    assert!(!session::begin_session(&conn).unwrap());
    // No end_session: the next begin sees the stale flag
    assert!(session::begin_session(&conn).unwrap());

    session::end_session(&conn).unwrap();
    assert!(!session::begin_session(&conn).unwrap());
}

#[test]
fn record_close_tracks_day_changes() {
    let conn = setup();
    assert!(!session::day_changed_since_close(&conn, d("2025-08-04")).unwrap());

    session::record_close(&conn, d("2025-08-03")).unwrap();
    assert_eq!(
        session::last_close_date(&conn).unwrap(),
        Some(d("2025-08-03"))
    );
    assert!(session::day_changed_since_close(&conn, d("2025-08-04")).unwrap());
    assert!(!session::day_changed_since_close(&conn, d("2025-08-03")).unwrap());
}

#[test]
fn cash_close_gate_stays_disabled() {
    let conn = setup();
    session::record_close(&conn, d("2025-08-01")).unwrap();
    // Even with an old close on record the gate reports false
    assert!(!session::cash_close_needed(&conn, d("2025-08-04")).unwrap());
}
