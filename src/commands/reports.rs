// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::finance;
use crate::models::TxKind;
use crate::store;
use crate::utils::{fmt_money, get_currency, id_for_user, maybe_print_json, parse_date, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("daily", sub)) => daily(conn, sub)?,
        Some(("categories", sub)) => categories(conn, sub)?,
        Some(("balances", sub)) => balances(conn, sub)?,
        Some(("withdrawals", sub)) => withdrawals(conn, sub)?,
        _ => {}
    }
    Ok(())
}

// The aggregation functions take an optional user and yield zero/empty
// results without one; a user that is named but unknown is still an error.
fn resolve_user(conn: &Connection, sub: &clap::ArgMatches) -> Result<Option<String>> {
    match sub.get_one::<String>("user") {
        Some(name) => Ok(Some(id_for_user(conn, name)?)),
        None => Ok(None),
    }
}

fn daily(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = resolve_user(conn, sub)?;
    let day = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => crate::utils::now_local().date(),
    };

    let txs = store::load_transactions(conn, user.as_deref())?;
    let summary = finance::daily_summary(&txs, user.as_deref(), day);

    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        let ccy = get_currency(conn)?;
        let rows = vec![
            vec!["Income (cash)".into(), fmt_money(&summary.income_cash, &ccy)],
            vec![
                "Income (transfer)".into(),
                fmt_money(&summary.income_transfer, &ccy),
            ],
            vec![
                "Expense (cash)".into(),
                fmt_money(&summary.expense_cash, &ccy),
            ],
            vec![
                "Expense (transfer)".into(),
                fmt_money(&summary.expense_transfer, &ccy),
            ],
            vec!["Total income".into(), fmt_money(&summary.total_income, &ccy)],
            vec![
                "Total expense".into(),
                fmt_money(&summary.total_expense, &ccy),
            ],
            vec!["Balance".into(), fmt_money(&summary.balance, &ccy)],
        ];
        println!("Daily summary for {}", day);
        println!("{}", pretty_table(&["Bucket", "Amount"], rows));
    }
    Ok(())
}

fn categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = resolve_user(conn, sub)?;
    let kind: TxKind = sub.get_one::<String>("type").unwrap().parse()?;

    let txs = store::load_transactions(conn, user.as_deref())?;
    let totals = finance::category_totals(&txs, user.as_deref(), kind);

    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        let ccy = get_currency(conn)?;
        let rows: Vec<Vec<String>> = totals
            .iter()
            .map(|c| vec![c.category.clone(), fmt_money(&c.total, &ccy)])
            .collect();
        println!("{}", pretty_table(&["Category", "Total"], rows));
    }
    Ok(())
}

fn balances(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = resolve_user(conn, sub)?;

    let txs = store::load_transactions(conn, user.as_deref())?;
    let b = finance::method_balances(&txs, user.as_deref());
    let total = finance::total_balance(&txs, user.as_deref());

    if !maybe_print_json(json_flag, jsonl_flag, &b)? {
        let ccy = get_currency(conn)?;
        let rows = vec![
            vec!["Cash".into(), fmt_money(&b.cash, &ccy)],
            vec!["Transfer".into(), fmt_money(&b.transfer, &ccy)],
            vec!["Credit".into(), fmt_money(&b.credit, &ccy)],
            vec!["All-time".into(), fmt_money(&total, &ccy)],
        ];
        println!("{}", pretty_table(&["Balance", "Amount"], rows));
    }
    Ok(())
}

fn withdrawals(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = resolve_user(conn, sub)?;

    let ws = store::load_withdrawals(conn, user.as_deref())?;
    let t = finance::withdrawal_totals(&ws, user.as_deref());

    if !maybe_print_json(json_flag, jsonl_flag, &t)? {
        let ccy = get_currency(conn)?;
        let rows = vec![
            vec!["Cash".into(), fmt_money(&t.cash, &ccy)],
            vec!["Transfer".into(), fmt_money(&t.transfer, &ccy)],
            vec!["Credit".into(), fmt_money(&t.credit, &ccy)],
            vec!["Total".into(), fmt_money(&t.total, &ccy)],
        ];
        println!("{}", pretty_table(&["Source", "Withdrawn"], rows));
    }
    Ok(())
}
