// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TxKind;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::{Connection, params};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let kind: TxKind = sub.get_one::<String>("type").unwrap().parse()?;
            conn.execute(
                "INSERT INTO categories(name, kind) VALUES (?1, ?2)",
                params![name, kind.as_str()],
            )?;
            println!("Added {} category '{}'", kind, name);
        }
        Some(("list", sub)) => {
            let mut data = Vec::new();
            match sub.get_one::<String>("type") {
                Some(t) => {
                    let kind: TxKind = t.parse()?;
                    let mut stmt = conn
                        .prepare("SELECT name, kind FROM categories WHERE kind=?1 ORDER BY name")?;
                    let rows = stmt.query_map(params![kind.as_str()], |r| {
                        Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?))
                    })?;
                    for row in rows {
                        let (n, k) = row?;
                        data.push(vec![n, k]);
                    }
                }
                None => {
                    let mut stmt =
                        conn.prepare("SELECT name, kind FROM categories ORDER BY kind, name")?;
                    let rows = stmt.query_map([], |r| {
                        Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?))
                    })?;
                    for row in rows {
                        let (n, k) = row?;
                        data.push(vec![n, k]);
                    }
                }
            }
            println!("{}", pretty_table(&["Category", "Type"], data));
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let kind: TxKind = sub.get_one::<String>("type").unwrap().parse()?;
            conn.execute(
                "DELETE FROM categories WHERE name=?1 AND kind=?2",
                params![name, kind.as_str()],
            )?;
            println!("Removed {} category '{}'", kind, name);
        }
        _ => {}
    }
    Ok(())
}
