//! Client for the remote wallet API that owns balances, persistence and ordering.

mod client;
mod models;

pub use client::WalletClient;
pub use models::{
    ListTransactions, SortField, SortOrder, TransactOutcome, Transaction, TransactionPage, Wallet,
    WalletId,
};

/// The errors that may occur when calling the wallet API.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ApiError {
    /// The request could not be completed, e.g. the API is unreachable.
    #[error("request to the wallet API failed: {0}")]
    Request(String),

    /// The wallet API answered with an error payload.
    #[error("the wallet API rejected the request: {0}")]
    Rejected(String),

    /// The wallet API answered with a non-success status and no error payload.
    #[error("the wallet API responded with status {0}: {1}")]
    Status(u16, String),

    /// The response body was not the JSON we expected.
    #[error("could not parse the wallet API response: {0}")]
    Deserialization(String),

    /// The configured base URL cannot have a path appended to it.
    #[error("invalid wallet API base URL \"{0}\"")]
    InvalidUrl(String),
}
