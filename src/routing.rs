//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    history::{export_transactions, get_transactions_page},
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    wallet::{
        get_wallet_page, get_wallet_panel, new_wallet_endpoint, setup_wallet_endpoint,
        transact_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::WALLET_VIEW, get(get_wallet_page))
        .route(endpoints::WALLET_PANEL, get(get_wallet_panel))
        .route(endpoints::SETUP_WALLET, post(setup_wallet_endpoint))
        .route(endpoints::NEW_WALLET, post(new_wallet_endpoint))
        .route(endpoints::TRANSACT, post(transact_endpoint))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::TRANSACTIONS_EXPORT, get(export_transactions))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}
