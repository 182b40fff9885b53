// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use serde_json::json;
use tempfile::tempdir;
use tillbook::{cli, commands::exporter, db};

fn base_conn() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn.execute("INSERT INTO users(id, name) VALUES ('u1', 'ana')", [])
        .unwrap();
    conn.execute(
        "INSERT INTO transactions(id, user_id, kind, amount, category, payment_method, date, created_at, cost_center)
         VALUES ('t1', 'u1', 'income', '1200', 'Ventas', 'cash',
                 '2025-01-02 09:00:00', '2025-01-02 09:00:00', 'Tienda')",
        [],
    )
    .unwrap();
    conn
}

#[test]
fn export_transactions_streams_pretty_json() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "tillbook",
        "export",
        "transactions",
        "--format",
        "json",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&conn, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "date": "2025-01-02 09:00:00",
                "user": "ana",
                "type": "income",
                "amount": "1200",
                "method": "cash",
                "category": "Ventas",
                "cost_center": "Tienda"
            }
        ])
    );
}

#[test]
fn export_archive_includes_archived_at() {
    let mut conn = base_conn();
    tillbook::store::archive_day(
        &mut conn,
        None,
        chrono::NaiveDateTime::parse_from_str("2025-01-02 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    )
    .unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("archive.json");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "tillbook",
        "export",
        "archive",
        "--format",
        "json",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&conn, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed[0]["archived_at"], "2025-01-02 20:00:00");
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "tillbook",
        "export",
        "transactions",
        "--format",
        "xml",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        assert!(exporter::handle(&conn, export_m).is_err());
    } else {
        panic!("no export subcommand");
    }
    assert!(!out_path.exists());
}
