// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use rusqlite::Connection;
use tillbook::models::{PaymentMethod, Transaction, TxKind};
use tillbook::{cli, commands::transactions, db, store};

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn.execute("INSERT INTO users(id, name) VALUES ('u1', 'ana')", [])
        .unwrap();
    for i in 1..=3 {
        let date = format!("2025-01-0{} 09:00:00", i);
        let t = Transaction {
            id: store::new_id(),
            user_id: "u1".to_string(),
            kind: TxKind::Expense,
            amount: "10".parse().unwrap(),
            category: "Compras".to_string(),
            payment_method: PaymentMethod::Cash,
            date: NaiveDateTime::parse_from_str(&date, "%Y-%m-%d %H:%M:%S").unwrap(),
            created_at: NaiveDateTime::parse_from_str(&date, "%Y-%m-%d %H:%M:%S").unwrap(),
            bank_name: None,
            transfer_number: None,
            recipient_name: None,
            recipient_id: None,
            cost_center: None,
        };
        store::insert_transaction(&conn, &t).unwrap();
    }
    conn
}

#[test]
fn list_limit_respected() {
    let conn = setup();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["tillbook", "tx", "list", "--limit", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&conn, list_m).unwrap();
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].date, "2025-01-03 09:00:00");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_filters_by_day_and_user() {
    let conn = setup();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "tillbook",
        "tx",
        "list",
        "--user",
        "ana",
        "--day",
        "2025-01-02",
    ]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&conn, list_m).unwrap();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].user, "ana");
            assert_eq!(rows[0].date, "2025-01-02 09:00:00");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}
