//! The wallet page and the panel fragment it loads.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;

use crate::{AppState, api::WalletClient};

use super::{
    view::{wallet_page, wallet_panel},
    workflow::{WalletView, load_wallet},
};

/// The state needed by the wallet page and its endpoints.
#[derive(Debug, Clone)]
pub struct WalletState {
    pub wallet_client: WalletClient,
}

impl FromRef<AppState> for WalletState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            wallet_client: state.wallet_client.clone(),
        }
    }
}

/// Render the wallet page shell. The panel is fetched once the page has loaded.
pub async fn get_wallet_page() -> Response {
    wallet_page(&WalletView::Loading).into_response()
}

/// Render the setup form or the active wallet, depending on the session.
pub async fn get_wallet_panel(
    State(state): State<WalletState>,
    jar: PrivateCookieJar,
) -> Response {
    let view = load_wallet(&jar, &state.wallet_client).await;

    wallet_panel(&view).into_response()
}
