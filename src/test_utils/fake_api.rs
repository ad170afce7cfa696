//! An in-process stand-in for the remote wallet API.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use reqwest::Url;
use serde::Deserialize;
use serde_json::json;
use time::{Duration, macros::datetime};

use crate::api::{SortField, SortOrder, Transaction, Wallet, WalletClient, WalletId};

type SharedApi = Arc<Mutex<FakeWalletApi>>;

/// The wallets and transactions held by the fake API, and the raw query strings of every list
/// request it received.
#[derive(Debug, Default)]
pub(crate) struct FakeWalletApi {
    pub wallets: HashMap<WalletId, Wallet>,
    pub transactions: Vec<(WalletId, Transaction)>,
    pub list_requests: Vec<String>,
}

/// Serve `api` on an ephemeral local port and return a client pointed at it.
pub(crate) async fn spawn_fake_wallet_api(api: FakeWalletApi) -> (WalletClient, SharedApi) {
    let api = Arc::new(Mutex::new(api));
    let router = Router::new()
        .route("/wallet/setup", post(setup_wallet))
        .route("/wallet/{id}", get(get_wallet))
        .route("/transactions/transact/{wallet_id}", post(transact))
        .route("/transactions", get(list_transactions))
        .with_state(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind fake wallet API");
    let addr = listener
        .local_addr()
        .expect("Could not get fake wallet API address");
    tokio::spawn(async move { axum::serve(listener, router).await });

    let base_url = Url::parse(&format!("http://{addr}")).expect("Invalid fake wallet API URL");

    (WalletClient::new(base_url), api)
}

fn error_response(status: StatusCode, error: &str) -> Response {
    (status, Json(json!({ "error": error }))).into_response()
}

#[derive(Deserialize)]
struct SetupBody {
    name: String,
    balance: f64,
}

async fn setup_wallet(State(api): State<SharedApi>, Json(body): Json<SetupBody>) -> Response {
    let mut api = api.lock().unwrap();
    let wallet = Wallet {
        id: WalletId::new(format!("wallet-{}", api.wallets.len() + 1)),
        name: body.name,
        balance: Some(body.balance),
    };
    api.wallets.insert(wallet.id.clone(), wallet.clone());

    Json(wallet).into_response()
}

async fn get_wallet(State(api): State<SharedApi>, Path(id): Path<String>) -> Response {
    let api = api.lock().unwrap();

    match api.wallets.get(&WalletId::new(id)) {
        Some(wallet) => Json(wallet.clone()).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Wallet not found"),
    }
}

#[derive(Deserialize)]
struct TransactBody {
    amount: f64,
    description: String,
}

async fn transact(
    State(api): State<SharedApi>,
    Path(wallet_id): Path<String>,
    Json(body): Json<TransactBody>,
) -> Response {
    let mut api = api.lock().unwrap();
    let wallet_id = WalletId::new(wallet_id);
    let transaction_count = api.transactions.len();

    let Some(wallet) = api.wallets.get_mut(&wallet_id) else {
        return error_response(StatusCode::NOT_FOUND, "Wallet not found");
    };

    let balance = wallet.balance.unwrap_or_default() + body.amount;
    if balance < 0.0 {
        return error_response(StatusCode::BAD_REQUEST, "Insufficient balance");
    }
    wallet.balance = Some(balance);

    let transaction = Transaction {
        id: format!("transaction-{}", transaction_count + 1),
        date: datetime!(2025-01-01 00:00 UTC) + Duration::minutes(transaction_count as i64),
        amount: body.amount,
        balance,
        description: body.description,
        kind: Some(if body.amount < 0.0 { "DEBIT" } else { "CREDIT" }.to_owned()),
    };
    let transaction_id = transaction.id.clone();
    api.transactions.push((wallet_id, transaction));

    Json(json!({ "balance": balance, "transactionId": transaction_id })).into_response()
}

#[derive(Deserialize)]
struct ListParams {
    #[serde(rename = "walletId")]
    wallet_id: String,
    skip: usize,
    limit: usize,
    sort: Option<SortField>,
    order: Option<SortOrder>,
}

async fn list_transactions(State(api): State<SharedApi>, RawQuery(query): RawQuery) -> Response {
    let mut api = api.lock().unwrap();
    let query = query.unwrap_or_default();
    api.list_requests.push(query.clone());

    let Ok(params) = serde_urlencoded::from_str::<ListParams>(&query) else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid query");
    };
    let wallet_id = WalletId::new(params.wallet_id);

    let mut transactions = api
        .transactions
        .iter()
        .filter(|(owner, _)| *owner == wallet_id)
        .map(|(_, transaction)| transaction.clone())
        .collect::<Vec<_>>();

    match params.sort.unwrap_or_default() {
        SortField::Date => transactions.sort_by_key(|transaction| transaction.date),
        SortField::Amount => {
            transactions.sort_by(|a, b| a.amount.total_cmp(&b.amount));
        }
    }
    if params.order.unwrap_or_default() == SortOrder::Descending {
        transactions.reverse();
    }

    let total_count = transactions.len();
    let page = transactions
        .into_iter()
        .skip(params.skip)
        .take(params.limit)
        .collect::<Vec<_>>();

    Json(json!({ "transactions": page, "totalCount": total_count })).into_response()
}
