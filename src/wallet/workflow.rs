//! The wallet page state machine.
//!
//! The page is either waiting for the session to be resolved, showing the setup form, or
//! showing an active wallet. Transitions are driven by the session pointer and the results of
//! wallet API calls.

use crate::{
    api::{ApiError, TransactOutcome, Wallet, WalletClient},
    session::SessionStore,
};

use super::form::{SetupForm, TransactionForm};

/// What the wallet page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum WalletView {
    /// The page has been served and the session has not been resolved yet.
    Loading,
    /// No wallet is active, show the setup form.
    Uninitialized {
        /// The values last submitted, so a rejected form keeps what the user typed.
        draft: SetupForm,
        error: Option<String>,
    },
    /// A wallet is active, show its details and the transaction form.
    Active {
        wallet: Wallet,
        error: Option<String>,
    },
}

impl WalletView {
    pub fn setup() -> Self {
        WalletView::Uninitialized {
            draft: SetupForm::default(),
            error: None,
        }
    }

    pub fn active(wallet: Wallet) -> Self {
        WalletView::Active {
            wallet,
            error: None,
        }
    }
}

/// Resolve the session pointer into a view.
///
/// A pointer to a wallet the API cannot return is treated as no wallet at all.
pub async fn load_wallet<S: SessionStore>(session: &S, client: &WalletClient) -> WalletView {
    let Some(wallet_id) = session.wallet_id() else {
        return WalletView::setup();
    };

    match client.get_wallet(&wallet_id).await {
        Ok(wallet) => WalletView::active(wallet),
        Err(error) => {
            tracing::warn!("could not load wallet {wallet_id}, showing setup form: {error}");
            WalletView::setup()
        }
    }
}

/// Validate `form`, create the wallet and make it the active wallet.
///
/// Validation failures and rejections from the wallet API are returned as an
/// [WalletView::Uninitialized] view with an error message. Other API errors are returned as
/// `Err` and leave the session untouched.
pub async fn setup_wallet<S: SessionStore>(
    session: S,
    client: &WalletClient,
    form: SetupForm,
) -> (S, Result<WalletView, ApiError>) {
    let valid = match form.validate() {
        Ok(valid) => valid,
        Err(message) => {
            let view = WalletView::Uninitialized {
                error: Some(message.to_owned()),
                draft: form,
            };
            return (session, Ok(view));
        }
    };

    match client.setup_wallet(valid.name, valid.balance).await {
        Ok(wallet) => {
            tracing::info!("set up wallet {} ({})", wallet.name, wallet.id);
            let session = session.remember(&wallet.id);
            (session, Ok(WalletView::active(wallet)))
        }
        Err(ApiError::Rejected(error)) => {
            let view = WalletView::Uninitialized {
                draft: form,
                error: Some(error),
            };
            (session, Ok(view))
        }
        Err(error) => (session, Err(error)),
    }
}

/// How the active wallet changed after a transaction was submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionUpdate {
    /// The form failed validation and nothing was sent.
    Invalid(&'static str),
    /// The wallet API refused the transaction, the balance is unchanged.
    Rejected(String),
    /// The transaction was applied and the wallet now holds `balance`.
    Completed { balance: f64 },
    /// The session does not point at a wallet.
    NoActiveWallet,
}

/// Validate `form` and post it against the active wallet.
///
/// # Errors
/// Returns the [ApiError] if the wallet API could not be reached or answered with something
/// other than a balance or an error payload.
pub async fn submit_transaction<S: SessionStore>(
    session: &S,
    client: &WalletClient,
    form: &TransactionForm,
) -> Result<TransactionUpdate, ApiError> {
    let Some(wallet_id) = session.wallet_id() else {
        return Ok(TransactionUpdate::NoActiveWallet);
    };

    let valid = match form.validate() {
        Ok(valid) => valid,
        Err(message) => return Ok(TransactionUpdate::Invalid(message)),
    };

    let update = match client
        .transact(&wallet_id, valid.amount, valid.description)
        .await?
    {
        TransactOutcome::Completed { balance } => TransactionUpdate::Completed { balance },
        TransactOutcome::Rejected { error } => {
            tracing::info!("wallet {wallet_id} rejected transaction: {error}");
            TransactionUpdate::Rejected(error)
        }
    };

    Ok(update)
}

/// Forget the active wallet so a new one can be set up.
pub fn forget_wallet<S: SessionStore>(session: S) -> (S, WalletView) {
    if let Some(wallet_id) = session.wallet_id() {
        tracing::info!("forgetting wallet {wallet_id}");
    }

    (session.forget(), WalletView::setup())
}
