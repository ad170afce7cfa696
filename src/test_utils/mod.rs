//! Helpers shared by the unit tests: HTML and HTTP assertions, and a fake wallet API.

#![allow(missing_docs)]

pub(crate) mod fake_api;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use fake_api::{FakeWalletApi, spawn_fake_wallet_api};
pub(crate) use form::{
    assert_form_error_message, assert_form_input, assert_form_input_with_value,
    assert_hx_endpoint, must_get_form,
};
pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment};
pub(crate) use http::{assert_content_type, assert_hx_redirect, assert_status_ok, get_header};
