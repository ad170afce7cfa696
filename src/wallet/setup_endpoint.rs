//! Handles the setup form submission.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::html;

use crate::{alert::Alert, error::wallet_api_failure_response};

use super::{
    form::SetupForm,
    page::WalletState,
    view::wallet_panel,
    workflow::{WalletView, setup_wallet},
};

/// Create a wallet from the setup form and make it the active wallet.
///
/// Responds with the wallet panel: the active wallet on success, or the setup form with an
/// error message if validation failed or the wallet API refused the request.
pub async fn setup_wallet_endpoint(
    State(state): State<WalletState>,
    jar: PrivateCookieJar,
    Form(form): Form<SetupForm>,
) -> Response {
    let (jar, result) = setup_wallet(jar, &state.wallet_client, form).await;

    match result {
        Ok(view @ WalletView::Active { .. }) => {
            let alert = Alert::Success {
                message: "Wallet created".to_owned(),
                details: String::new(),
            };

            (
                jar,
                html! {
                    (wallet_panel(&view))
                    (alert.into_html())
                },
            )
                .into_response()
        }
        Ok(view) => (jar, wallet_panel(&view)).into_response(),
        Err(error) => wallet_api_failure_response(error),
    }
}
