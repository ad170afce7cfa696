//! The API endpoints URIs.

/// The wallet page: setup form or wallet details.
pub const WALLET_VIEW: &str = "/";
/// The fragment with the wallet panel, loaded by the wallet page.
pub const WALLET_PANEL: &str = "/wallet";
/// The page for displaying the wallet's transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The route for downloading the displayed transactions as CSV.
pub const TRANSACTIONS_EXPORT: &str = "/transactions/export";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route for setting up a new wallet.
pub const SETUP_WALLET: &str = "/api/wallet";
/// The route for forgetting the active wallet so a new one can be set up.
pub const NEW_WALLET: &str = "/api/wallet/new";
/// The route for submitting a transaction against the active wallet.
pub const TRANSACT: &str = "/api/transactions";
