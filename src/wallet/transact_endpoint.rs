//! Handles the transaction form submission.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use axum_htmx::HxRedirect;
use maud::html;

use crate::{endpoints, error::wallet_api_failure_response};

use super::{
    form::TransactionForm,
    page::WalletState,
    view::{balance_heading, transaction_form_view},
    workflow::{TransactionUpdate, submit_transaction},
};

/// Post a transaction against the active wallet.
///
/// On success the form is cleared and the balance heading is swapped out of band. Otherwise the
/// form is returned as submitted with the error message, and the balance is left alone.
pub async fn transact_endpoint(
    State(state): State<WalletState>,
    jar: PrivateCookieJar,
    Form(form): Form<TransactionForm>,
) -> Response {
    let update = match submit_transaction(&jar, &state.wallet_client, &form).await {
        Ok(update) => update,
        Err(error) => return wallet_api_failure_response(error),
    };

    match update {
        TransactionUpdate::Completed { balance } => html! {
            (transaction_form_view(&TransactionForm::default(), None))
            (balance_heading(Some(balance), true))
        }
        .into_response(),
        TransactionUpdate::Invalid(message) => {
            transaction_form_view(&form, Some(message)).into_response()
        }
        TransactionUpdate::Rejected(error) => {
            transaction_form_view(&form, Some(&error)).into_response()
        }
        TransactionUpdate::NoActiveWallet => (
            HxRedirect(endpoints::WALLET_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use axum::{Form, extract::State, http::StatusCode};
    use axum_extra::extract::PrivateCookieJar;
    use scraper::{Html, Selector};

    use crate::{
        api::{WalletClient, WalletId},
        app_state::create_cookie_key,
        endpoints,
        session::SessionStore,
        test_utils::{
            FakeWalletApi, assert_form_error_message, assert_form_input_with_value,
            assert_hx_redirect, assert_status_ok, must_get_form, parse_html_fragment,
            spawn_fake_wallet_api,
        },
        wallet::{
            form::{DESCRIPTION_REQUIRED_MSG, Direction, TransactionForm},
            page::WalletState,
        },
    };

    use super::transact_endpoint;

    fn form(amount: &str, description: &str, direction: Direction) -> Form<TransactionForm> {
        Form(TransactionForm {
            amount: amount.to_owned(),
            description: description.to_owned(),
            direction,
        })
    }

    async fn client_with_wallet(balance: f64) -> (WalletClient, WalletId) {
        let (wallet_client, _api) = spawn_fake_wallet_api(FakeWalletApi::default()).await;
        let wallet = wallet_client.setup_wallet("Savings", balance).await.unwrap();

        (wallet_client, wallet.id)
    }

    fn jar_for(wallet_id: &WalletId) -> PrivateCookieJar {
        PrivateCookieJar::new(create_cookie_key("secret")).remember(wallet_id)
    }

    fn balance_text(html: &Html) -> Option<String> {
        html.select(&Selector::parse("#wallet-balance").unwrap())
            .next()
            .map(|heading| heading.text().collect::<String>().trim().to_owned())
    }

    #[tokio::test]
    async fn completed_transaction_swaps_balance() {
        let (wallet_client, wallet_id) = client_with_wallet(10.0).await;

        let response = transact_endpoint(
            State(WalletState { wallet_client }),
            jar_for(&wallet_id),
            form("2.3", "Coffee", Direction::Debit),
        )
        .await;

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;
        assert_eq!(balance_text(&html).as_deref(), Some("Balance: 7.7000"));
        let form = must_get_form(&html);
        assert_form_input_with_value(&form, "amount", "number", "");
        assert!(
            form.select(&Selector::parse("p").unwrap()).next().is_none(),
            "want previous error cleared"
        );
    }

    #[tokio::test]
    async fn rejected_transaction_keeps_balance() {
        let (wallet_client, wallet_id) = client_with_wallet(1.0).await;

        let response = transact_endpoint(
            State(WalletState { wallet_client }),
            jar_for(&wallet_id),
            form("5", "Rent", Direction::Debit),
        )
        .await;

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;
        assert_eq!(balance_text(&html), None);
        let form = must_get_form(&html);
        assert_form_error_message(&form, "Insufficient balance");
        assert_form_input_with_value(&form, "amount", "number", "5");
    }

    #[tokio::test]
    async fn invalid_transaction_shows_error() {
        let (wallet_client, wallet_id) = client_with_wallet(1.0).await;

        let response = transact_endpoint(
            State(WalletState { wallet_client }),
            jar_for(&wallet_id),
            form("5", "", Direction::Credit),
        )
        .await;

        let html = parse_html_fragment(response).await;
        assert_form_error_message(&must_get_form(&html), DESCRIPTION_REQUIRED_MSG);
    }

    #[tokio::test]
    async fn no_wallet_redirects_to_wallet_page() {
        let (wallet_client, _api) = spawn_fake_wallet_api(FakeWalletApi::default()).await;
        let jar = PrivateCookieJar::new(create_cookie_key("secret"));

        let response = transact_endpoint(
            State(WalletState { wallet_client }),
            jar,
            form("5", "Rent", Direction::Credit),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::WALLET_VIEW);
    }
}
