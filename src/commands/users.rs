// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::{Connection, params};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let display = sub.get_one::<String>("display");
            conn.execute(
                "INSERT INTO users(id, name, display_name) VALUES (?1, ?2, ?3)",
                params![store::new_id(), name, display],
            )?;
            println!("Added user '{}'", name);
        }
        Some(("list", _)) => {
            let mut stmt =
                conn.prepare("SELECT name, display_name, created_at FROM users ORDER BY name")?;
            let rows = stmt.query_map([], |r| {
                Ok((
                    r.get::<_, String>(0)?,
                    r.get::<_, Option<String>>(1)?,
                    r.get::<_, String>(2)?,
                ))
            })?;
            let mut data = Vec::new();
            for row in rows {
                let (n, d, cr) = row?;
                data.push(vec![n, d.unwrap_or_default(), cr]);
            }
            println!("{}", pretty_table(&["Name", "Display", "Created"], data));
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            conn.execute("DELETE FROM users WHERE name=?1", params![name])?;
            println!("Removed user '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
