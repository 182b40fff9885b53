// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        Some(("archive", sub)) => export_archive(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut stmt = conn.prepare(
        "SELECT t.date, u.name as user, t.kind, t.amount, t.payment_method, t.category, t.cost_center
         FROM transactions t
         LEFT JOIN users u ON t.user_id=u.id
         ORDER BY t.date, t.created_at")?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, String>(0)?,
            r.get::<_, Option<String>>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, String>(5)?,
            r.get::<_, Option<String>>(6)?,
        ))
    })?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date", "user", "type", "amount", "method", "category", "cost_center",
            ])?;
            for row in rows {
                let (d, u, k, amt, meth, cat, cc) = row?;
                wtr.write_record([
                    d,
                    u.unwrap_or_default(),
                    k,
                    amt,
                    meth,
                    cat,
                    cc.unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for row in rows {
                let (d, u, k, amt, meth, cat, cc) = row?;
                items.push(json!({
                    "date": d, "user": u, "type": k, "amount": amt, "method": meth, "category": cat, "cost_center": cc
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => anyhow::bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported transactions to {}", out);
    Ok(())
}

fn export_archive(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut stmt = conn.prepare(
        "SELECT t.date, u.name as user, t.kind, t.amount, t.payment_method, t.category, t.archived_at
         FROM archived_transactions t
         LEFT JOIN users u ON t.user_id=u.id
         ORDER BY t.archived_at, t.date")?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, String>(0)?,
            r.get::<_, Option<String>>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, String>(5)?,
            r.get::<_, String>(6)?,
        ))
    })?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date", "user", "type", "amount", "method", "category", "archived_at",
            ])?;
            for row in rows {
                let (d, u, k, amt, meth, cat, at) = row?;
                wtr.write_record([d, u.unwrap_or_default(), k, amt, meth, cat, at])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for row in rows {
                let (d, u, k, amt, meth, cat, at) = row?;
                items.push(json!({
                    "date": d, "user": u, "type": k, "amount": amt, "method": meth, "category": cat, "archived_at": at
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => anyhow::bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported archive to {}", out);
    Ok(())
}
