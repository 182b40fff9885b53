// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use tillbook::{cli, commands, db, session, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut conn = db::open_or_init()?;

    if session::begin_session(&conn)? {
        eprintln!("Warning: previous session did not exit cleanly");
    }
    if session::cash_close_needed(&conn, utils::now_local().date())? {
        eprintln!("Note: a cash close is pending from a previous day");
    }

    let outcome = run(&mut conn, &matches);
    session::end_session(&conn)?;
    outcome
}

fn run(conn: &mut Connection, matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("user", sub)) => commands::users::handle(conn, sub)?,
        Some(("category", sub)) => commands::categories::handle(conn, sub)?,
        Some(("costcenter", sub)) => commands::cost_centers::handle(conn, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(conn, sub)?,
        Some(("withdraw", sub)) => commands::withdrawals::handle(conn, sub)?,
        Some(("report", sub)) => commands::reports::handle(conn, sub)?,
        Some(("close", sub)) => commands::close::handle(conn, sub)?,
        Some(("export", sub)) => commands::exporter::handle(conn, sub)?,
        Some(("currency", sub)) => commands::currency::handle(conn, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(conn)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
