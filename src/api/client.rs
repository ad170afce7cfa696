//! HTTP client for the remote wallet API.

use reqwest::{Client as HttpClient, Response, Url};
use serde::de::DeserializeOwned;

use super::{
    ApiError,
    models::{
        ErrorBody, ListTransactions, ListTransactionsParams, SetupWalletRequest,
        TransactOutcome, TransactRequest, TransactResponse, TransactionPage, Wallet, WalletId,
    },
};

/// Client for the wallet API.
///
/// Every call is a single attempt: there are no retries and no request cancellation.
#[derive(Debug, Clone)]
pub struct WalletClient {
    http_client: HttpClient,
    base_url: Url,
}

impl WalletClient {
    /// Create a client that sends requests to the wallet API at `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// POST /wallet/setup
    ///
    /// Creates a wallet called `name` holding `balance`.
    pub async fn setup_wallet(&self, name: &str, balance: f64) -> Result<Wallet, ApiError> {
        let url = self.endpoint(&["wallet", "setup"])?;
        tracing::debug!("setting up wallet \"{name}\" with balance {balance}");

        let response = self
            .http_client
            .post(url)
            .json(&SetupWalletRequest { name, balance })
            .send()
            .await
            .map_err(|error| ApiError::Request(error.to_string()))?;

        read_json(response).await
    }

    /// GET /wallet/{id}
    ///
    /// Returns an error if the wallet API does not know `id`.
    pub async fn get_wallet(&self, id: &WalletId) -> Result<Wallet, ApiError> {
        let url = self.endpoint(&["wallet", id.as_str()])?;

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|error| ApiError::Request(error.to_string()))?;

        read_json(response).await
    }

    /// POST /transactions/transact/{walletId}
    ///
    /// `amount` is signed: positive for a credit, negative for a debit. An error payload from
    /// the API is returned as [TransactOutcome::Rejected], regardless of the response status.
    pub async fn transact(
        &self,
        wallet_id: &WalletId,
        amount: f64,
        description: &str,
    ) -> Result<TransactOutcome, ApiError> {
        let url = self.endpoint(&["transactions", "transact", wallet_id.as_str()])?;
        tracing::debug!("posting transaction of {amount} to wallet {wallet_id}");

        let response = self
            .http_client
            .post(url)
            .json(&TransactRequest {
                amount,
                description,
            })
            .send()
            .await
            .map_err(|error| ApiError::Request(error.to_string()))?;

        match read_json::<TransactResponse>(response).await {
            Ok(body) => Ok(body.into()),
            Err(ApiError::Rejected(error)) => Ok(TransactOutcome::Rejected { error }),
            Err(error) => Err(error),
        }
    }

    /// GET /transactions?walletId=&skip=&limit=&sort=&order=
    ///
    /// Ordering and paging are applied by the wallet API.
    pub async fn list_transactions(
        &self,
        query: &ListTransactions<'_>,
    ) -> Result<TransactionPage, ApiError> {
        let url = self.endpoint(&["transactions"])?;

        let response = self
            .http_client
            .get(url)
            .query(&ListTransactionsParams::from(query))
            .send()
            .await
            .map_err(|error| ApiError::Request(error.to_string()))?;

        read_json(response).await
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}

/// Parse the body of `response` as JSON.
///
/// Non-success responses are mapped to [ApiError::Rejected] when the body is an error payload
/// and [ApiError::Status] otherwise.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|error| ApiError::Request(error.to_string()))?;

    if !status.is_success() {
        return Err(match serde_json::from_str::<ErrorBody>(&body) {
            Ok(ErrorBody { error }) => ApiError::Rejected(error),
            Err(_) => {
                tracing::warn!("wallet API responded with {status}: {body}");
                ApiError::Status(status.as_u16(), body)
            }
        });
    }

    serde_json::from_str(&body).map_err(|error| ApiError::Deserialization(error.to_string()))
}
