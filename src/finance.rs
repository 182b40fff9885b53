// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{PaymentMethod, Transaction, TxKind, Withdrawal, WithdrawalSource};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Category of the synthetic expense mirrored from a withdrawal.
pub const WITHDRAWAL_CATEGORY: &str = "Retiro de fondos";

// The credit balance is keyed off these two category labels rather than a
// payment method. Sales on credit raise it, collections lower it.
pub const CREDIT_SALE_CATEGORY: &str = "Ventas a crédito";
pub const CREDIT_COLLECTION_CATEGORY: &str = "Recaudo Créditos";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub income_cash: Decimal,
    pub income_transfer: Decimal,
    pub expense_cash: Decimal,
    pub expense_transfer: Decimal,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MethodBalances {
    pub cash: Decimal,
    pub transfer: Decimal,
    pub credit: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WithdrawalTotals {
    pub cash: Decimal,
    pub transfer: Decimal,
    pub credit: Decimal,
    pub total: Decimal,
}

/// Summarize one calendar day of a user's transactions.
///
/// Day membership is year/month/day equality on the transaction's `date`
/// field; a transaction stamped exactly at midnight belongs to the day that
/// date names. Without a user this returns the zero summary.
pub fn daily_summary(txs: &[Transaction], user: Option<&str>, day: NaiveDate) -> DailySummary {
    let Some(user) = user else {
        return DailySummary::default();
    };
    let mut s = DailySummary::default();
    for t in txs
        .iter()
        .filter(|t| t.user_id == user && t.date.date() == day)
    {
        match (t.kind, t.payment_method) {
            (TxKind::Income, PaymentMethod::Cash) => s.income_cash += t.amount,
            (TxKind::Income, PaymentMethod::Transfer) => s.income_transfer += t.amount,
            (TxKind::Expense, PaymentMethod::Cash) => s.expense_cash += t.amount,
            (TxKind::Expense, PaymentMethod::Transfer) => s.expense_transfer += t.amount,
        }
    }
    s.total_income = s.income_cash + s.income_transfer;
    s.total_expense = s.expense_cash + s.expense_transfer;
    s.balance = s.total_income - s.total_expense;
    s
}

/// Per-category totals for one kind, all time, in first-seen order.
pub fn category_totals(txs: &[Transaction], user: Option<&str>, kind: TxKind) -> Vec<CategoryTotal> {
    let Some(user) = user else {
        return Vec::new();
    };
    let mut out: Vec<CategoryTotal> = Vec::new();
    for t in txs.iter().filter(|t| t.user_id == user && t.kind == kind) {
        match out.iter_mut().find(|c| c.category == t.category) {
            Some(c) => c.total += t.amount,
            None => out.push(CategoryTotal {
                category: t.category.clone(),
                total: t.amount,
            }),
        }
    }
    out
}

/// All-time signed balance: income adds, expense subtracts. No date filter,
/// so this is not reconcilable against a daily summary except through the
/// same source list.
pub fn total_balance(txs: &[Transaction], user: Option<&str>) -> Decimal {
    let Some(user) = user else {
        return Decimal::ZERO;
    };
    let mut total = Decimal::ZERO;
    for t in txs.iter().filter(|t| t.user_id == user) {
        match t.kind {
            TxKind::Income => total += t.amount,
            TxKind::Expense => total -= t.amount,
        }
    }
    total
}

/// Running balances split by payment method, plus the category-keyed credit
/// balance (see `CREDIT_SALE_CATEGORY` / `CREDIT_COLLECTION_CATEGORY`).
pub fn method_balances(txs: &[Transaction], user: Option<&str>) -> MethodBalances {
    let Some(user) = user else {
        return MethodBalances::default();
    };
    let mut b = MethodBalances::default();
    for t in txs.iter().filter(|t| t.user_id == user) {
        let signed = match t.kind {
            TxKind::Income => t.amount,
            TxKind::Expense => -t.amount,
        };
        match t.payment_method {
            PaymentMethod::Cash => b.cash += signed,
            PaymentMethod::Transfer => b.transfer += signed,
        }
        if t.category == CREDIT_SALE_CATEGORY {
            b.credit += t.amount;
        } else if t.category == CREDIT_COLLECTION_CATEGORY {
            b.credit -= t.amount;
        }
    }
    b
}

/// Withdrawal sums per source plus the grand total.
pub fn withdrawal_totals(ws: &[Withdrawal], user: Option<&str>) -> WithdrawalTotals {
    let Some(user) = user else {
        return WithdrawalTotals::default();
    };
    let mut t = WithdrawalTotals::default();
    for w in ws.iter().filter(|w| w.user_id == user) {
        match w.source {
            WithdrawalSource::Cash => t.cash += w.amount,
            WithdrawalSource::Transfer => t.transfer += w.amount,
            WithdrawalSource::Credit => t.credit += w.amount,
        }
        t.total += w.amount;
    }
    t
}
