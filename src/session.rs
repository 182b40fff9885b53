// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::{get_setting, set_setting};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;

const SESSION_OPEN_KEY: &str = "session_open";
const LAST_CLOSE_KEY: &str = "last_close_date";

/// Mark the session open and report whether the previous one ended without
/// `end_session` running (abnormal exit). Checked opportunistically at
/// startup; nothing is enforced.
pub fn begin_session(conn: &Connection) -> Result<bool> {
    let dirty = matches!(get_setting(conn, SESSION_OPEN_KEY)?.as_deref(), Some("1"));
    set_setting(conn, SESSION_OPEN_KEY, "1")?;
    Ok(dirty)
}

pub fn end_session(conn: &Connection) -> Result<()> {
    set_setting(conn, SESSION_OPEN_KEY, "0")
}

pub fn record_close(conn: &Connection, day: NaiveDate) -> Result<()> {
    set_setting(conn, LAST_CLOSE_KEY, &day.to_string())
}

pub fn last_close_date(conn: &Connection) -> Result<Option<NaiveDate>> {
    match get_setting(conn, LAST_CLOSE_KEY)? {
        Some(s) => Ok(NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
        None => Ok(None),
    }
}

/// Whether a recorded close is older than `today`.
pub fn day_changed_since_close(conn: &Connection, today: NaiveDate) -> Result<bool> {
    match last_close_date(conn)? {
        Some(d) => Ok(d < today),
        None => Ok(false),
    }
}

/// Gate for forcing a close on a new business day. Disabled: always `false`.
// TODO: return day_changed_since_close once the close-reminder flow ships.
pub fn cash_close_needed(_conn: &Connection, _today: NaiveDate) -> Result<bool> {
    Ok(false)
}
