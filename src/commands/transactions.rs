// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{PaymentMethod, Transaction, TxKind};
use crate::store;
use crate::utils::{
    get_currency, fmt_money, id_for_user, maybe_print_json, parse_amount, parse_datetime_flex,
    pretty_table,
};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user_name = sub.get_one::<String>("user").unwrap();
    let kind: TxKind = sub.get_one::<String>("type").unwrap().parse()?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let method: PaymentMethod = sub.get_one::<String>("method").unwrap().parse()?;
    let now = crate::utils::now_local();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_datetime_flex(s)?,
        None => now,
    };

    let t = Transaction {
        id: store::new_id(),
        user_id: id_for_user(conn, user_name)?,
        kind,
        amount,
        category,
        payment_method: method,
        date,
        created_at: now,
        bank_name: sub.get_one::<String>("bank").map(|s| s.to_string()),
        transfer_number: sub.get_one::<String>("transfer-number").map(|s| s.to_string()),
        recipient_name: sub.get_one::<String>("recipient").map(|s| s.to_string()),
        recipient_id: sub.get_one::<String>("recipient-id").map(|s| s.to_string()),
        cost_center: sub.get_one::<String>("cost-center").map(|s| s.to_string()),
    };
    store::insert_transaction(conn, &t)?;

    let ccy = get_currency(conn)?;
    println!(
        "Recorded {} {} ({}) in '{}' for {} on {}",
        t.kind,
        fmt_money(&t.amount, &ccy),
        t.payment_method,
        t.category,
        user_name,
        t.date.format("%Y-%m-%d %H:%M")
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.user.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                    r.method.clone(),
                    r.category.clone(),
                    r.cost_center.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "User", "Type", "Amount", "Method", "Category", "Cost center"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub date: String,
    pub user: String,
    pub kind: String,
    pub amount: String,
    pub method: String,
    pub category: String,
    pub cost_center: String,
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let mut sql = String::from(
        "SELECT t.date, u.name, t.kind, t.amount, t.payment_method, t.category, t.cost_center FROM transactions t LEFT JOIN users u ON t.user_id=u.id WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();

    if let Some(user) = sub.get_one::<String>("user") {
        sql.push_str(" AND u.name=?");
        params_vec.push(user.into());
    }
    if let Some(day) = sub.get_one::<String>("day") {
        sql.push_str(" AND substr(t.date,1,10)=?");
        params_vec.push(day.into());
    }
    sql.push_str(" ORDER BY t.date DESC, t.created_at DESC");
    if let Some(limit) = sub.get_one::<usize>("limit") {
        sql.push_str(" LIMIT ?");
        params_vec.push(limit.to_string());
    }

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
        let date: String = r.get(0)?;
        let user: Option<String> = r.get(1)?;
        let kind: String = r.get(2)?;
        let amount: String = r.get(3)?;
        let method: String = r.get(4)?;
        let category: String = r.get(5)?;
        let cost_center: Option<String> = r.get(6)?;
        data.push(TransactionRow {
            date,
            user: user.unwrap_or_default(),
            kind,
            amount,
            method,
            category,
            cost_center: cost_center.unwrap_or_default(),
        });
    }
    Ok(data)
}
