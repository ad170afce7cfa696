//! Transactions formatted for display, shared by the history table and the CSV export.

use time::{format_description::BorrowedFormatItem, macros::format_description};

use crate::{Error, api::Transaction, html::format_amount, timezone::to_local_time};

const DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// One transaction with every column rendered as text.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub id: String,
    /// The transaction time in the local timezone.
    pub date: String,
    pub amount: String,
    pub balance: String,
    pub description: String,
    pub kind: String,
    pub is_debit: bool,
}

/// Format `transactions` for display with dates in `local_timezone`.
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
pub fn build_rows(
    transactions: &[Transaction],
    local_timezone: &str,
) -> Result<Vec<HistoryRow>, Error> {
    transactions
        .iter()
        .map(|transaction| {
            let local_date = to_local_time(transaction.date, local_timezone)
                .ok_or_else(|| Error::InvalidTimezoneError(local_timezone.to_owned()))?;
            let date = local_date.format(DATE_FORMAT).map_err(|error| {
                tracing::error!("could not format date {local_date}: {error}");
                Error::InvalidTimezoneError(local_timezone.to_owned())
            })?;

            Ok(HistoryRow {
                id: transaction.id.clone(),
                date,
                amount: format_amount(transaction.amount),
                balance: format_amount(transaction.balance),
                description: transaction.description.clone(),
                kind: transaction.type_label().to_owned(),
                is_debit: transaction.amount < 0.0,
            })
        })
        .collect()
}
