// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Tillbook", "tillbook"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("tillbook.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let mut conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&mut conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS users(
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        display_name TEXT,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );

    CREATE TABLE IF NOT EXISTS categories(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        kind TEXT NOT NULL CHECK(kind IN ('income','expense')),
        UNIQUE(name, kind)
    );

    CREATE TABLE IF NOT EXISTS cost_centers(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE
    );

    CREATE TABLE IF NOT EXISTS transactions(
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        kind TEXT NOT NULL CHECK(kind IN ('income','expense')),
        amount TEXT NOT NULL,
        category TEXT NOT NULL,
        payment_method TEXT NOT NULL CHECK(payment_method IN ('cash','transfer')),
        date TEXT NOT NULL,
        created_at TEXT NOT NULL,
        bank_name TEXT,
        transfer_number TEXT,
        recipient_name TEXT,
        recipient_id TEXT,
        cost_center TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_user_date ON transactions(user_id, date);

    CREATE TABLE IF NOT EXISTS withdrawals(
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        amount TEXT NOT NULL,
        source TEXT NOT NULL CHECK(source IN ('cash','transfer','credit')),
        concept TEXT NOT NULL,
        authorized_by TEXT NOT NULL,
        timestamp TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_withdrawals_user ON withdrawals(user_id);

    CREATE TABLE IF NOT EXISTS archived_transactions(
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        kind TEXT NOT NULL,
        amount TEXT NOT NULL,
        category TEXT NOT NULL,
        payment_method TEXT NOT NULL,
        date TEXT NOT NULL,
        created_at TEXT NOT NULL,
        bank_name TEXT,
        transfer_number TEXT,
        recipient_name TEXT,
        recipient_id TEXT,
        cost_center TEXT,
        archived_at TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_archived_transactions_user ON archived_transactions(user_id, archived_at);

    CREATE TABLE IF NOT EXISTS archived_withdrawals(
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        amount TEXT NOT NULL,
        source TEXT NOT NULL,
        concept TEXT NOT NULL,
        authorized_by TEXT NOT NULL,
        timestamp TEXT NOT NULL,
        archived_at TEXT NOT NULL
    );

    -- Stock category sets; the data layer does not restrict transactions
    -- to these.
    INSERT OR IGNORE INTO categories(name, kind) VALUES
        ('Ventas', 'income'),
        ('Ventas a crédito', 'income'),
        ('Recaudo Créditos', 'income'),
        ('Otros ingresos', 'income'),
        ('Compras', 'expense'),
        ('Nómina', 'expense'),
        ('Servicios', 'expense'),
        ('Arriendo', 'expense'),
        ('Retiro de fondos', 'expense'),
        ('Otros gastos', 'expense');
    "#,
    )?;
    Ok(())
}
