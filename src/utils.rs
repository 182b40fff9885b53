// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Business timestamps are user-editable; accept a full timestamp, a
/// minute-resolution one, or a bare date (midnight).
pub fn parse_datetime_flex(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .or_else(|_| parse_date(s).map(|d| d.and_time(chrono::NaiveTime::MIN)))
        .with_context(|| {
            format!(
                "Invalid date/time '{}', expected YYYY-MM-DD [HH:MM[:SS]]",
                s
            )
        })
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Amounts are magnitudes; direction comes from the transaction kind.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let d = parse_decimal(s)?;
    if d < Decimal::ZERO {
        anyhow::bail!("Amount must be non-negative, got '{}'", s);
    }
    Ok(d)
}

pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Display currency, kept in settings rather than process globals.
#[derive(Debug, Clone)]
pub struct CurrencyFormat {
    pub code: String,
    pub decimals: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            code: "COP".to_string(),
            decimals: 0,
        }
    }
}

pub fn get_currency(conn: &Connection) -> Result<CurrencyFormat> {
    let mut fmt = CurrencyFormat::default();
    if let Some(code) = crate::store::get_setting(conn, "currency_code")? {
        fmt.code = code;
    }
    if let Some(d) = crate::store::get_setting(conn, "currency_decimals")? {
        fmt.decimals = d
            .parse::<u32>()
            .with_context(|| format!("Invalid currency_decimals setting '{}'", d))?;
    }
    Ok(fmt)
}

pub fn set_currency(conn: &Connection, code: &str, decimals: u32) -> Result<()> {
    crate::store::set_setting(conn, "currency_code", &code.to_uppercase())?;
    crate::store::set_setting(conn, "currency_decimals", &decimals.to_string())
}

pub fn fmt_money(d: &Decimal, fmt: &CurrencyFormat) -> String {
    format!("{} {}", fmt.code, d.round_dp(fmt.decimals))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn id_for_user(conn: &Connection, name: &str) -> Result<String> {
    let mut stmt = conn.prepare("SELECT id FROM users WHERE name=?1")?;
    let id: String = stmt
        .query_row(params![name], |r| r.get(0))
        .with_context(|| format!("User '{}' not found", name))?;
    Ok(id)
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
