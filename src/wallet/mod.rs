//! The wallet page: setting up a wallet, showing its balance and submitting transactions.

mod form;
mod new_wallet_endpoint;
mod page;
mod setup_endpoint;
mod transact_endpoint;
mod view;
mod workflow;

pub use new_wallet_endpoint::new_wallet_endpoint;
pub use page::{get_wallet_page, get_wallet_panel};
pub use setup_endpoint::setup_wallet_endpoint;
pub use transact_endpoint::transact_endpoint;
