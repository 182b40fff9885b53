// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session;
use crate::store;
use crate::utils::id_for_user;
use anyhow::Result;
use rusqlite::Connection;

/// The daily cash close. Archives the active ledgers and records the close
/// date; there is no undo short of reading the archive back.
pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    let user_id = match m.get_one::<String>("user") {
        Some(name) => Some(id_for_user(conn, name)?),
        None => None,
    };
    let now = crate::utils::now_local();

    let outcome = store::archive_day(conn, user_id.as_deref(), now)?;
    session::record_close(conn, now.date())?;

    if outcome.transactions == 0 && outcome.withdrawals == 0 {
        println!("Nothing to close; active ledgers were already empty");
    } else {
        println!(
            "Closed the day: archived {} transaction(s) and {} withdrawal(s) at {}",
            outcome.transactions,
            outcome.withdrawals,
            now.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}
