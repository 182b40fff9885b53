// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::finance::WITHDRAWAL_CATEGORY;
use crate::models::{PaymentMethod, Transaction, TxKind, Withdrawal, WithdrawalSource};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

pub const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn fmt_datetime(dt: NaiveDateTime) -> String {
    dt.format(DATETIME_FMT).to_string()
}

pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATETIME_FMT)
        .with_context(|| format!("Invalid timestamp '{}', expected YYYY-MM-DD HH:MM:SS", s))
}

pub fn insert_transaction(conn: &Connection, t: &Transaction) -> Result<()> {
    conn.execute(
        "INSERT INTO transactions(id, user_id, kind, amount, category, payment_method, date,
                                  created_at, bank_name, transfer_number, recipient_name,
                                  recipient_id, cost_center)
         VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12,?13)",
        params![
            t.id,
            t.user_id,
            t.kind.as_str(),
            t.amount.to_string(),
            t.category,
            t.payment_method.as_str(),
            fmt_datetime(t.date),
            fmt_datetime(t.created_at),
            t.bank_name,
            t.transfer_number,
            t.recipient_name,
            t.recipient_id,
            t.cost_center
        ],
    )?;
    Ok(())
}

pub fn load_transactions(conn: &Connection, user: Option<&str>) -> Result<Vec<Transaction>> {
    let sql = "SELECT id, user_id, kind, amount, category, payment_method, date, created_at,
                      bank_name, transfer_number, recipient_name, recipient_id, cost_center
               FROM transactions";
    let mut stmt;
    let mut rows = match user {
        Some(u) => {
            stmt = conn.prepare(&format!("{} WHERE user_id=?1 ORDER BY date, created_at", sql))?;
            stmt.query(params![u])?
        }
        None => {
            stmt = conn.prepare(&format!("{} ORDER BY date, created_at", sql))?;
            stmt.query([])?
        }
    };

    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let id: String = r.get(0)?;
        let amount_s: String = r.get(3)?;
        let kind_s: String = r.get(2)?;
        let method_s: String = r.get(5)?;
        let date_s: String = r.get(6)?;
        let created_s: String = r.get(7)?;
        out.push(Transaction {
            user_id: r.get(1)?,
            kind: kind_s.parse()?,
            amount: amount_s
                .parse::<Decimal>()
                .with_context(|| format!("Invalid amount '{}' in transaction {}", amount_s, id))?,
            category: r.get(4)?,
            payment_method: method_s.parse()?,
            date: parse_datetime(&date_s)?,
            created_at: parse_datetime(&created_s)?,
            bank_name: r.get(8)?,
            transfer_number: r.get(9)?,
            recipient_name: r.get(10)?,
            recipient_id: r.get(11)?,
            cost_center: r.get(12)?,
            id,
        });
    }
    Ok(out)
}

pub fn insert_withdrawal(conn: &Connection, w: &Withdrawal) -> Result<()> {
    conn.execute(
        "INSERT INTO withdrawals(id, user_id, amount, source, concept, authorized_by, timestamp)
         VALUES (?1,?2,?3,?4,?5,?6,?7)",
        params![
            w.id,
            w.user_id,
            w.amount.to_string(),
            w.source.as_str(),
            w.concept,
            w.authorized_by,
            fmt_datetime(w.timestamp)
        ],
    )?;
    Ok(())
}

pub fn load_withdrawals(conn: &Connection, user: Option<&str>) -> Result<Vec<Withdrawal>> {
    let sql = "SELECT id, user_id, amount, source, concept, authorized_by, timestamp
               FROM withdrawals";
    let mut stmt;
    let mut rows = match user {
        Some(u) => {
            stmt = conn.prepare(&format!("{} WHERE user_id=?1 ORDER BY timestamp", sql))?;
            stmt.query(params![u])?
        }
        None => {
            stmt = conn.prepare(&format!("{} ORDER BY timestamp", sql))?;
            stmt.query([])?
        }
    };

    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let id: String = r.get(0)?;
        let amount_s: String = r.get(2)?;
        let source_s: String = r.get(3)?;
        let ts_s: String = r.get(6)?;
        out.push(Withdrawal {
            user_id: r.get(1)?,
            amount: amount_s
                .parse::<Decimal>()
                .with_context(|| format!("Invalid amount '{}' in withdrawal {}", amount_s, id))?,
            source: source_s.parse()?,
            concept: r.get(4)?,
            authorized_by: r.get(5)?,
            timestamp: parse_datetime(&ts_s)?,
            id,
        });
    }
    Ok(out)
}

/// Record a withdrawal together with its mirror expense so the balance drops
/// through the normal transaction path. Both rows land or neither does.
pub fn record_withdrawal(conn: &mut Connection, w: &Withdrawal) -> Result<Transaction> {
    let mirror = Transaction {
        id: new_id(),
        user_id: w.user_id.clone(),
        kind: TxKind::Expense,
        amount: w.amount,
        category: WITHDRAWAL_CATEGORY.to_string(),
        payment_method: match w.source {
            WithdrawalSource::Transfer => PaymentMethod::Transfer,
            // Credit withdrawals have no payment method of their own; they
            // come out of the drawer.
            _ => PaymentMethod::Cash,
        },
        date: w.timestamp,
        created_at: w.timestamp,
        bank_name: None,
        transfer_number: None,
        recipient_name: Some(w.authorized_by.clone()),
        recipient_id: None,
        cost_center: None,
    };
    let tx = conn.transaction()?;
    insert_withdrawal(&tx, w)?;
    insert_transaction(&tx, &mirror)?;
    tx.commit()?;
    Ok(mirror)
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ArchiveOutcome {
    pub transactions: usize,
    pub withdrawals: usize,
}

/// Move active transactions and withdrawals into the archive tables, stamped
/// with `archived_at`, and clear the active tables. Scoped to one user when
/// given. Runs in a single SQL transaction so a failure leaves the active
/// collections untouched. With nothing active this is a no-op.
pub fn archive_day(
    conn: &mut Connection,
    user: Option<&str>,
    now: NaiveDateTime,
) -> Result<ArchiveOutcome> {
    const TX_COLS: &str = "id, user_id, kind, amount, category, payment_method, date, created_at,
         bank_name, transfer_number, recipient_name, recipient_id, cost_center";
    const WD_COLS: &str = "id, user_id, amount, source, concept, authorized_by, timestamp";

    let stamp = fmt_datetime(now);
    let tx = conn.transaction()?;
    let (tx_moved, wd_moved) = match user {
        Some(u) => {
            let t = tx.execute(
                &format!(
                    "INSERT INTO archived_transactions({TX_COLS}, archived_at)
                     SELECT {TX_COLS}, ?1 FROM transactions WHERE user_id=?2"
                ),
                params![stamp, u],
            )?;
            tx.execute("DELETE FROM transactions WHERE user_id=?1", params![u])?;
            let w = tx.execute(
                &format!(
                    "INSERT INTO archived_withdrawals({WD_COLS}, archived_at)
                     SELECT {WD_COLS}, ?1 FROM withdrawals WHERE user_id=?2"
                ),
                params![stamp, u],
            )?;
            tx.execute("DELETE FROM withdrawals WHERE user_id=?1", params![u])?;
            (t, w)
        }
        None => {
            let t = tx.execute(
                &format!(
                    "INSERT INTO archived_transactions({TX_COLS}, archived_at)
                     SELECT {TX_COLS}, ?1 FROM transactions"
                ),
                params![stamp],
            )?;
            tx.execute("DELETE FROM transactions", [])?;
            let w = tx.execute(
                &format!(
                    "INSERT INTO archived_withdrawals({WD_COLS}, archived_at)
                     SELECT {WD_COLS}, ?1 FROM withdrawals"
                ),
                params![stamp],
            )?;
            tx.execute("DELETE FROM withdrawals", [])?;
            (t, w)
        }
    };
    tx.commit()?;
    Ok(ArchiveOutcome {
        transactions: tx_moved,
        withdrawals: wd_moved,
    })
}

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}
