//! Templates for the wallet page.

use maud::{Markup, html};

use crate::{
    api::Wallet,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_CONTAINER_STYLE, FORM_ERROR_STYLE,
        FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, base, format_amount, link, loading_spinner,
    },
    navigation::NavBar,
};

use super::{
    form::{Direction, SetupForm, TransactionForm},
    workflow::WalletView,
};

const PANEL_ID: &str = "wallet-panel";
const PANEL_TARGET: &str = "#wallet-panel";
const PANEL_STYLE: &str = "w-full space-y-4 md:space-y-6";
const DISABLE_SUBMIT: &str = "find button[type='submit']";

/// The full wallet page, with the panel in the given state.
pub fn wallet_page(view: &WalletView) -> Markup {
    let nav_bar = NavBar::new(endpoints::WALLET_VIEW).into_html();

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE) { (wallet_panel(view)) }
    };

    base("Wallet", &content)
}

/// The part of the wallet page that changes between states.
pub fn wallet_panel(view: &WalletView) -> Markup {
    match view {
        WalletView::Loading => html! {
            div
                id=(PANEL_ID)
                class=(PANEL_STYLE)
                hx-get=(endpoints::WALLET_PANEL)
                hx-trigger="load"
                hx-swap="outerHTML"
            {
                p { "Loading..." }
            }
        },
        WalletView::Uninitialized { draft, error } => html! {
            div id=(PANEL_ID) class=(PANEL_STYLE)
            {
                h2 class="text-xl font-bold" { "Set Up Wallet" }
                (setup_form_view(draft, error.as_deref()))
            }
        },
        WalletView::Active { wallet, error } => active_wallet_view(wallet, error.as_deref()),
    }
}

fn setup_form_view(draft: &SetupForm, error: Option<&str>) -> Markup {
    html! {
        form
            hx-post=(endpoints::SETUP_WALLET)
            hx-target=(PANEL_TARGET)
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            hx-disabled-elt=(DISABLE_SUBMIT)
            class="w-full space-y-4"
        {
            div
            {
                label for="name" class=(FORM_LABEL_STYLE) { "Name" }

                input
                    id="name"
                    type="text"
                    name="name"
                    placeholder="My Wallet"
                    value=(draft.name)
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="balance" class=(FORM_LABEL_STYLE) { "Initial Balance" }

                input
                    id="balance"
                    type="number"
                    name="balance"
                    step="0.0001"
                    placeholder="0.00"
                    value=(draft.balance)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @if let Some(error) = error {
                p class=(FORM_ERROR_STYLE) { (error) }
            }

            button type="submit" id="indicator" class=(BUTTON_PRIMARY_STYLE)
            {
                span class="htmx-indicator" { (loading_spinner()) }
                "Create Wallet"
            }
        }
    }
}

fn active_wallet_view(wallet: &Wallet, error: Option<&str>) -> Markup {
    html! {
        div id=(PANEL_ID) class=(PANEL_STYLE)
        {
            h2 class="text-xl font-bold" { "Wallet: " (wallet.name) }
            (balance_heading(wallet.balance, false))
            p { (link(endpoints::TRANSACTIONS_VIEW, "View transactions")) }

            (transaction_form_view(&TransactionForm::default(), error))

            button
                type="button"
                hx-post=(endpoints::NEW_WALLET)
                hx-target=(PANEL_TARGET)
                hx-swap="outerHTML"
                hx-confirm="Forget this wallet and set up a new one?"
                class=(BUTTON_SECONDARY_STYLE)
            {
                "New Wallet"
            }
        }
    }
}

/// The wallet balance, e.g. "Balance: 12.3000".
///
/// Set `out_of_band` to swap the heading on the page alongside another response.
pub fn balance_heading(balance: Option<f64>, out_of_band: bool) -> Markup {
    let balance = balance.map_or_else(|| "N/A".to_owned(), format_amount);

    html! {
        h3
            id="wallet-balance"
            hx-swap-oob=[out_of_band.then_some("true")]
            class="text-lg font-semibold"
        {
            "Balance: " (balance)
        }
    }
}

/// The transaction form, filled with `form` and showing `error` if there is one.
pub fn transaction_form_view(form: &TransactionForm, error: Option<&str>) -> Markup {
    html! {
        form
            id="transaction-form"
            hx-post=(endpoints::TRANSACT)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            hx-disabled-elt=(DISABLE_SUBMIT)
            class="w-full space-y-4"
        {
            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    id="amount"
                    type="number"
                    name="amount"
                    step="0.0001"
                    min="0"
                    placeholder="0.00"
                    value=(form.amount)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    id="description"
                    type="text"
                    name="description"
                    placeholder="Groceries"
                    value=(form.description)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            fieldset class=(FORM_RADIO_GROUP_STYLE)
            {
                legend class="sr-only" { "Direction" }
                (direction_option(Direction::Credit, "Credit", form.direction))
                (direction_option(Direction::Debit, "Debit", form.direction))
            }

            @if let Some(error) = error {
                p class=(FORM_ERROR_STYLE) { (error) }
            }

            button type="submit" id="indicator" class=(BUTTON_PRIMARY_STYLE)
            {
                span class="htmx-indicator" { (loading_spinner()) }
                "Submit Transaction"
            }
        }
    }
}

fn direction_option(direction: Direction, text: &str, selected: Direction) -> Markup {
    let value = direction.as_form_value();
    let id = format!("direction-{value}");

    html! {
        label for=(id) class=(FORM_RADIO_LABEL_STYLE)
        {
            input
                id=(id)
                type="radio"
                name="direction"
                value=(value)
                checked[direction == selected]
                class=(FORM_RADIO_INPUT_STYLE);
            (text)
        }
    }
}
