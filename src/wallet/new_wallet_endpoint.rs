//! Handles the "New Wallet" button.

use axum::response::{IntoResponse, Response};
use axum_extra::extract::PrivateCookieJar;

use super::{view::wallet_panel, workflow::forget_wallet};

/// Forget the active wallet and respond with the setup form.
pub async fn new_wallet_endpoint(jar: PrivateCookieJar) -> Response {
    let (jar, view) = forget_wallet(jar);

    (jar, wallet_panel(&view)).into_response()
}
