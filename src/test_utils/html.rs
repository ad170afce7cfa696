use axum::{body::Body, response::Response};
use scraper::Html;

async fn read_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).into_owned()
}

/// Parse a full page, including the `<html>` and `<head>` elements.
pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&read_text(response).await)
}

/// Parse a partial page as returned to htmx requests.
pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&read_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}
