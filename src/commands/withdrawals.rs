// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Withdrawal, WithdrawalSource};
use crate::store;
use crate::utils::{fmt_money, get_currency, id_for_user, maybe_print_json, parse_amount, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user_name = sub.get_one::<String>("user").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let source: WithdrawalSource = sub.get_one::<String>("source").unwrap().parse()?;
    let concept = sub.get_one::<String>("concept").unwrap().to_string();
    let authorized_by = sub.get_one::<String>("authorized-by").unwrap().to_string();

    let w = Withdrawal {
        id: store::new_id(),
        user_id: id_for_user(conn, user_name)?,
        amount,
        source,
        concept,
        authorized_by,
        timestamp: crate::utils::now_local(),
    };
    let mirror = store::record_withdrawal(conn, &w)?;

    let ccy = get_currency(conn)?;
    println!(
        "Withdrew {} from {} for '{}' (mirror expense {} recorded)",
        fmt_money(&w.amount, &ccy),
        w.source,
        w.concept,
        mirror.payment_method
    );
    Ok(())
}

#[derive(Serialize)]
struct WithdrawalRow {
    timestamp: String,
    user: String,
    amount: String,
    source: String,
    concept: String,
    authorized_by: String,
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let mut sql = String::from(
        "SELECT w.timestamp, u.name, w.amount, w.source, w.concept, w.authorized_by
         FROM withdrawals w LEFT JOIN users u ON w.user_id=u.id WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();
    if let Some(user) = sub.get_one::<String>("user") {
        sql.push_str(" AND u.name=?");
        params_vec.push(user.into());
    }
    sql.push_str(" ORDER BY w.timestamp DESC");

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = if params_vec.is_empty() {
        stmt.query([])?
    } else {
        let params: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        stmt.query(rusqlite::params_from_iter(params))?
    };

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let user: Option<String> = r.get(1)?;
        data.push(WithdrawalRow {
            timestamp: r.get(0)?,
            user: user.unwrap_or_default(),
            amount: r.get(2)?,
            source: r.get(3)?,
            concept: r.get(4)?,
            authorized_by: r.get(5)?,
        });
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.timestamp.clone(),
                    r.user.clone(),
                    r.amount.clone(),
                    r.source.clone(),
                    r.concept.clone(),
                    r.authorized_by.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Timestamp", "User", "Amount", "Source", "Concept", "Authorized by"],
                rows,
            )
        );
    }
    Ok(())
}
