//! Request and response bodies for the wallet API.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The opaque identifier the wallet API assigns to a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletId(String);

impl WalletId {
    /// Wrap an identifier issued by the wallet API.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for WalletId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A wallet as reported by the wallet API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// The identifier assigned by the wallet API.
    #[serde(alias = "_id")]
    pub id: WalletId,
    /// The display name chosen at setup.
    pub name: String,
    /// The current balance. Older API versions omit it for freshly created wallets.
    #[serde(default)]
    pub balance: Option<f64>,
}

/// A single entry in a wallet's transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// Positive for credits, negative for debits.
    pub amount: f64,
    /// The wallet balance after this transaction was applied.
    pub balance: f64,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Transaction {
    /// The type label reported by the API, falling back to one derived from the sign of the
    /// amount.
    pub fn type_label(&self) -> &str {
        match &self.kind {
            Some(kind) if !kind.trim().is_empty() => kind,
            _ if self.amount < 0.0 => "DEBIT",
            _ => "CREDIT",
        }
    }
}

/// One page of a wallet's transaction history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionPage {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// The number of transactions across all pages.
    #[serde(rename = "totalCount", default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

/// The result of posting a transaction.
///
/// The wallet API decides whether a transaction is allowed (e.g. sufficient funds), so a
/// rejection is a normal outcome rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactOutcome {
    /// The transaction was applied and the wallet now holds `balance`.
    Completed { balance: f64 },
    /// The wallet API refused the transaction.
    Rejected { error: String },
}

/// The field the wallet API sorts the transaction history by.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Date,
    Amount,
}

impl SortField {
    pub fn as_query_value(self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::Amount => "amount",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::Date => "Sort by Date",
            SortField::Amount => "Sort by Amount",
        }
    }
}

/// The direction of the transaction history ordering.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    pub fn as_query_value(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}

/// A request for one page of a wallet's transaction history.
#[derive(Debug, Clone, PartialEq)]
pub struct ListTransactions<'a> {
    pub wallet_id: &'a WalletId,
    pub skip: u64,
    pub limit: u64,
    /// Sent only as a pair, the API ignores a lone field or order.
    pub sort: Option<(SortField, SortOrder)>,
}

#[derive(Debug, Serialize)]
pub(super) struct SetupWalletRequest<'a> {
    pub name: &'a str,
    pub balance: f64,
}

#[derive(Debug, Serialize)]
pub(super) struct TransactRequest<'a> {
    pub amount: f64,
    pub description: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct ListTransactionsParams<'a> {
    #[serde(rename = "walletId")]
    pub wallet_id: &'a str,
    pub skip: u64,
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

impl<'a> From<&ListTransactions<'a>> for ListTransactionsParams<'a> {
    fn from(query: &ListTransactions<'a>) -> Self {
        Self {
            wallet_id: query.wallet_id.as_str(),
            skip: query.skip,
            limit: query.limit,
            sort: query.sort.map(|(field, _)| field),
            order: query.sort.map(|(_, order)| order),
        }
    }
}

/// The body of a transaction response, which holds either the new balance or an error.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum TransactResponse {
    Rejected { error: String },
    Completed { balance: f64 },
}

impl From<TransactResponse> for TransactOutcome {
    fn from(response: TransactResponse) -> Self {
        match response {
            TransactResponse::Rejected { error } => TransactOutcome::Rejected { error },
            TransactResponse::Completed { balance } => TransactOutcome::Completed { balance },
        }
    }
}

/// The shape of an error payload returned by the wallet API.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    pub error: String,
}
