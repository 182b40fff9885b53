// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{get_currency, set_currency};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let code = sub.get_one::<String>("code").unwrap();
            let decimals = *sub.get_one::<u32>("decimals").unwrap_or(&0);
            set_currency(conn, code, decimals)?;
            println!("Display currency set to {} ({} decimals)", code.to_uppercase(), decimals);
        }
        Some(("show", _)) | None => {
            let fmt = get_currency(conn)?;
            println!("{} ({} decimals)", fmt.code, fmt.decimals);
        }
        _ => {}
    }
    Ok(())
}
