// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::finance::WITHDRAWAL_CATEGORY;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Amounts that do not parse or are negative
    let mut stmt = conn.prepare("SELECT id, amount FROM transactions")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: String = r.get(0)?;
        let amount: String = r.get(1)?;
        match amount.parse::<Decimal>() {
            Ok(d) if d < Decimal::ZERO => {
                rows.push(vec!["negative_amount".into(), format!("{} {}", id, amount)]);
            }
            Ok(_) => {}
            Err(_) => {
                rows.push(vec!["bad_amount".into(), format!("{} {}", id, amount)]);
            }
        }
    }

    // 2) Transactions whose user is not in the users list
    let mut stmt2 = conn.prepare(
        "SELECT t.id, t.user_id FROM transactions t
         LEFT JOIN users u ON t.user_id=u.id WHERE u.id IS NULL",
    )?;
    let mut cur2 = stmt2.query([])?;
    while let Some(r) = cur2.next()? {
        let id: String = r.get(0)?;
        let uid: String = r.get(1)?;
        rows.push(vec!["unknown_user".into(), format!("{} {}", id, uid)]);
    }

    // 3) Withdrawals without their mirror expense
    let mut stmt3 = conn.prepare(
        "SELECT w.id FROM withdrawals w WHERE NOT EXISTS (
            SELECT 1 FROM transactions t
            WHERE t.user_id=w.user_id AND t.category=?1
              AND t.amount=w.amount AND t.date=w.timestamp)",
    )?;
    let mut cur3 = stmt3.query([WITHDRAWAL_CATEGORY])?;
    while let Some(r) = cur3.next()? {
        let id: String = r.get(0)?;
        rows.push(vec!["withdrawal_no_mirror".into(), id]);
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
