//! The transaction history page.

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use axum_htmx::HxRequest;

use crate::{
    AppState, Error,
    api::{ApiError, ListTransactions, TransactionPage, WalletClient, WalletId},
    error::wallet_api_failure_response,
    pagination::{PaginationConfig, create_page_controls, page_count},
    session::SessionStore,
};

use super::{
    cursor::{HistoryCursor, HistoryQuery},
    rows::build_rows,
    view::{HistoryViewModel, history_content, history_page},
};

/// The state needed for the transaction history page and its export.
#[derive(Debug, Clone)]
pub struct HistoryState {
    pub wallet_client: WalletClient,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for HistoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            wallet_client: state.wallet_client.clone(),
            local_timezone: state.local_timezone.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// Fetch the page of history that `cursor` points at.
pub(super) async fn fetch_page(
    client: &WalletClient,
    wallet_id: &WalletId,
    cursor: HistoryCursor,
    page_size: u64,
) -> Result<TransactionPage, ApiError> {
    client
        .list_transactions(&ListTransactions {
            wallet_id,
            skip: cursor.skip(page_size),
            limit: page_size,
            sort: Some((cursor.sort, cursor.order)),
        })
        .await
}

/// Render one page of the active wallet's transactions.
///
/// htmx requests (sort changes and page links) get just the swapped content.
pub async fn get_transactions_page(
    State(state): State<HistoryState>,
    jar: PrivateCookieJar,
    HxRequest(is_htmx_request): HxRequest,
    Query(query): Query<HistoryQuery>,
) -> Response {
    let page_size = state.pagination_config.page_size;
    let cursor = HistoryCursor::from_query(query, state.pagination_config.default_page);
    let wallet_id = jar.wallet_id();

    let page = match &wallet_id {
        Some(wallet_id) => {
            match fetch_page(&state.wallet_client, wallet_id, cursor, page_size).await {
                Ok(page) => page,
                Err(error) if is_htmx_request => return wallet_api_failure_response(error),
                Err(ApiError::Request(message)) => {
                    tracing::error!("could not reach the wallet API: {message}");
                    TransactionPage::default()
                }
                Err(error) => {
                    tracing::error!("could not list transactions for wallet {wallet_id}: {error}");
                    return Error::from(error).into_response();
                }
            }
        }
        None => TransactionPage::default(),
    };

    let rows = match build_rows(&page.transactions, &state.local_timezone) {
        Ok(rows) => rows,
        Err(error) if is_htmx_request => return error.into_alert_response(),
        Err(error) => return error.into_response(),
    };

    let model = HistoryViewModel {
        cursor,
        rows: &rows,
        controls: create_page_controls(
            cursor.page,
            page_count(page.total_count.unwrap_or(0), page_size),
        ),
        has_wallet: wallet_id.is_some(),
    };

    if is_htmx_request {
        history_content(&model).into_response()
    } else {
        history_page(&model).into_response()
    }
}
