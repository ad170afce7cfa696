//! Exports the displayed page of transaction history as a CSV file.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;

use crate::{Error, api::TransactionPage, session::SessionStore};

use super::{
    cursor::{HistoryCursor, HistoryQuery},
    page::{HistoryState, fetch_page},
    rows::{HistoryRow, build_rows},
};

const CSV_HEADER: [&str; 5] = ["Date", "Amount", "Balance", "Description", "Type"];

/// Download the page of history `query` points at as `transactions.csv`.
///
/// Without an active wallet the file holds just the header row.
pub async fn export_transactions(
    State(state): State<HistoryState>,
    jar: PrivateCookieJar,
    Query(query): Query<HistoryQuery>,
) -> Result<Response, Error> {
    let page_size = state.pagination_config.page_size;
    let cursor = HistoryCursor::from_query(query, state.pagination_config.default_page);

    let page = match jar.wallet_id() {
        Some(wallet_id) => fetch_page(&state.wallet_client, &wallet_id, cursor, page_size)
            .await
            .inspect_err(|error| {
                tracing::error!("could not list transactions for export: {error}")
            })?,
        None => TransactionPage::default(),
    };

    let rows = build_rows(&page.transactions, &state.local_timezone)?;
    let csv = write_csv(&rows)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"transactions.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}

/// Write `rows` as CSV with a header row.
fn write_csv(rows: &[HistoryRow]) -> Result<String, Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for row in rows {
        writer.write_record([
            &row.date,
            &row.amount,
            &row.balance,
            &row.description,
            &row.kind,
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::CsvExport(error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Error::CsvExport(error.to_string()))
}

#[cfg(test)]
mod tests {
    use axum::extract::{Query, State};
    use axum_extra::extract::PrivateCookieJar;

    use crate::{
        app_state::create_cookie_key,
        history::{page::HistoryState, rows::HistoryRow},
        pagination::PaginationConfig,
        session::SessionStore,
        test_utils::{FakeWalletApi, assert_content_type, get_header, spawn_fake_wallet_api},
    };

    use super::{export_transactions, write_csv};

    fn row(description: &str) -> HistoryRow {
        HistoryRow {
            id: "t1".to_owned(),
            date: "2025-01-15 23:30:00".to_owned(),
            amount: "12.3000".to_owned(),
            balance: "112.3000".to_owned(),
            description: description.to_owned(),
            kind: "CREDIT".to_owned(),
            is_debit: false,
        }
    }

    #[test]
    fn writes_header_then_rows() {
        let csv = write_csv(&[row("Pay, with comma")]).unwrap();

        assert_eq!(
            csv,
            "Date,Amount,Balance,Description,Type\n\
            2025-01-15 23:30:00,12.3000,112.3000,\"Pay, with comma\",CREDIT\n"
        );
    }

    #[test]
    fn empty_page_writes_header_only() {
        assert_eq!(
            write_csv(&[]).unwrap(),
            "Date,Amount,Balance,Description,Type\n"
        );
    }

    #[tokio::test]
    async fn exports_displayed_page_only() {
        let (client, _api) = spawn_fake_wallet_api(FakeWalletApi::default()).await;
        let wallet = client.setup_wallet("Savings", 0.0).await.unwrap();
        for _ in 0..12 {
            client.transact(&wallet.id, 12.3, "Pay").await.unwrap();
        }
        let state = HistoryState {
            wallet_client: client,
            local_timezone: "Etc/UTC".to_owned(),
            pagination_config: PaginationConfig::default(),
        };
        let jar = PrivateCookieJar::new(create_cookie_key("secret")).remember(&wallet.id);
        let query = serde_urlencoded::from_str("page=2&sort=date&order=asc").unwrap();

        let response = export_transactions(State(state), jar, Query(query))
            .await
            .unwrap();

        assert_content_type(&response, "text/csv; charset=utf-8");
        assert_eq!(
            get_header(&response, "content-disposition"),
            "attachment; filename=\"transactions.csv\""
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8_lossy(&body);
        let lines = body.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3, "want header and the 2 rows on page 2");
        assert_eq!(lines[0], "Date,Amount,Balance,Description,Type");
        assert!(lines[1].contains(",12.3000,"));
    }
}
