// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Invalid {what} '{got}', expected one of: {expected}")]
pub struct ParseEnumError {
    pub what: &'static str,
    pub got: String,
    pub expected: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }
}

impl FromStr for TxKind {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            _ => Err(ParseEnumError {
                what: "transaction type",
                got: s.to_string(),
                expected: "income|expense",
            }),
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Transfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Transfer => "transfer",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "transfer" => Ok(PaymentMethod::Transfer),
            _ => Err(ParseEnumError {
                what: "payment method",
                got: s.to_string(),
                expected: "cash|transfer",
            }),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalSource {
    Cash,
    Transfer,
    Credit,
}

impl WithdrawalSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawalSource::Cash => "cash",
            WithdrawalSource::Transfer => "transfer",
            WithdrawalSource::Credit => "credit",
        }
    }
}

impl FromStr for WithdrawalSource {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(WithdrawalSource::Cash),
            "transfer" => Ok(WithdrawalSource::Transfer),
            "credit" => Ok(WithdrawalSource::Credit),
            _ => Err(ParseEnumError {
                what: "withdrawal source",
                got: s.to_string(),
                expected: "cash|transfer|credit",
            }),
        }
    }
}

impl fmt::Display for WithdrawalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub kind: TxKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostCenter {
    pub id: i64,
    pub name: String,
}

/// A single till movement. `amount` is always non-negative; direction is
/// carried by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub kind: TxKind,
    pub amount: Decimal,
    pub category: String,
    pub payment_method: PaymentMethod,
    /// Business date/time, user-editable. Distinct from `created_at`.
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub bank_name: Option<String>,
    pub transfer_number: Option<String>,
    pub recipient_name: Option<String>,
    pub recipient_id: Option<String>,
    pub cost_center: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Withdrawal {
    pub id: String,
    pub user_id: String,
    pub amount: Decimal,
    pub source: WithdrawalSource,
    pub concept: String,
    pub authorized_by: String,
    pub timestamp: NaiveDateTime,
}
