//! HTML rendering for the transaction history page.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    api::{SortField, SortOrder},
    endpoints,
    html::{
        BUTTON_PAGINATION_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, link,
    },
    navigation::NavBar,
    pagination::PageControls,
};

use super::{cursor::HistoryCursor, rows::HistoryRow};

/// The max number of graphemes to display in the transaction table rows before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

const CONTENT_ID: &str = "transactions-content";
const CONTENT_TARGET: &str = "#transactions-content";
// Newer requests abort the one in flight so only the latest cursor is rendered.
const HISTORY_SYNC: &str = "#transaction-history:replace";

/// Everything needed to render one page of the history.
#[derive(Debug)]
pub struct HistoryViewModel<'a> {
    pub cursor: HistoryCursor,
    pub rows: &'a [HistoryRow],
    pub controls: PageControls,
    /// Whether the session points at a wallet.
    pub has_wallet: bool,
}

fn amount_class(is_debit: bool) -> &'static str {
    if is_debit {
        "text-red-700 dark:text-red-300"
    } else {
        "text-green-700 dark:text-green-300"
    }
}

/// The full history page.
pub fn history_page(model: &HistoryViewModel) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        section id="transaction-history" class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-4xl space-y-4"
            {
                div class="flex justify-between items-center"
                {
                    h1 class="text-xl font-bold" { "Transactions" }
                    (link(endpoints::WALLET_VIEW, "Go to Wallet"))
                }

                (history_content(model))
            }
        }
    };

    base("Transactions", &content)
}

/// The part of the history page swapped when the cursor changes.
pub fn history_content(model: &HistoryViewModel) -> Markup {
    html! {
        div id=(CONTENT_ID) class="space-y-4"
        {
            @if model.has_wallet {
                (controls_form(model.cursor))
                (transactions_table(model.rows))
                (pagination_view(model.cursor, &model.controls))

                a
                    href=(model.cursor.to_url(endpoints::TRANSACTIONS_EXPORT))
                    download="transactions.csv"
                    class=(LINK_STYLE)
                {
                    "Export CSV"
                }
            } @else {
                p
                {
                    "No wallet is active. "
                    (link(endpoints::WALLET_VIEW, "Set up a wallet"))
                    " to see its transactions."
                }
            }
        }
    }
}

fn controls_form(cursor: HistoryCursor) -> Markup {
    html! {
        form
            hx-get=(endpoints::TRANSACTIONS_VIEW)
            hx-trigger="change"
            hx-target=(CONTENT_TARGET)
            hx-swap="outerHTML"
            hx-sync=(HISTORY_SYNC)
            hx-push-url="true"
            class="flex gap-4 items-end"
        {
            input type="hidden" name="page" value=(cursor.page);
            input type="hidden" name="prev_sort" value=(cursor.sort.as_query_value());

            div
            {
                label for="sort" class=(FORM_LABEL_STYLE) { "Sort" }

                select id="sort" name="sort" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for field in [SortField::Date, SortField::Amount] {
                        option value=(field.as_query_value()) selected[field == cursor.sort]
                        {
                            (field.label())
                        }
                    }
                }
            }

            div
            {
                label for="order" class=(FORM_LABEL_STYLE) { "Order" }

                select id="order" name="order" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for order in [SortOrder::Ascending, SortOrder::Descending] {
                        option value=(order.as_query_value()) selected[order == cursor.order]
                        {
                            (order.label())
                        }
                    }
                }
            }
        }
    }
}

fn transactions_table(rows: &[HistoryRow]) -> Markup {
    html! {
        div class="overflow-x-auto rounded"
        {
            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Balance" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                    }
                }

                tbody
                {
                    @for row in rows {
                        (transaction_row(row))
                    }

                    @if rows.is_empty() {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td colspan="5" class="px-6 py-4 text-center" { "No transactions found." }
                        }
                    }
                }
            }
        }
    }
}

fn transaction_row(row: &HistoryRow) -> Markup {
    let (description, tooltip) = truncate_description(&row.description);

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(row.id)
        {
            td class=(TABLE_CELL_STYLE) { (row.date) }
            td class={(TABLE_CELL_STYLE) " " (amount_class(row.is_debit))} { (row.amount) }
            td class=(TABLE_CELL_STYLE) { (row.balance) }
            td class=(TABLE_CELL_STYLE) title=[tooltip] { (description) }
            td class=(TABLE_CELL_STYLE) { (row.kind) }
        }
    }
}

fn pagination_view(cursor: HistoryCursor, controls: &PageControls) -> Markup {
    html! {
        nav class="flex justify-between items-center" aria-label="Transaction pages"
        {
            (page_link(cursor, controls.back, "Previous"))
            span { "Page " (controls.curr_page) " of " (controls.page_count) }
            (page_link(cursor, controls.next, "Next"))
        }
    }
}

fn page_link(cursor: HistoryCursor, page: Option<u64>, text: &str) -> Markup {
    match page {
        Some(page) => {
            let url = cursor.with_page(page).to_url(endpoints::TRANSACTIONS_VIEW);

            html! {
                a
                    href=(url)
                    hx-get=(url)
                    hx-target=(CONTENT_TARGET)
                    hx-swap="outerHTML"
                    hx-sync=(HISTORY_SYNC)
                    hx-push-url="true"
                    class=(BUTTON_PAGINATION_STYLE)
                {
                    (text)
                }
            }
        }
        None => html! {
            button type="button" disabled class=(BUTTON_PAGINATION_STYLE) { (text) }
        },
    }
}

fn truncate_description(description: &str) -> (String, Option<&str>) {
    let description_length = description.graphemes(true).count();

    if description_length <= MAX_DESCRIPTION_GRAPHEMES {
        (description.to_owned(), None)
    } else {
        let truncated: String = description
            .graphemes(true)
            .take(MAX_DESCRIPTION_GRAPHEMES - 3)
            .collect();
        (truncated + "...", Some(description))
    }
}
