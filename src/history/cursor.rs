//! The page and sort state of the transaction history, carried in the query string.

use serde::{Deserialize, Serialize};

use crate::api::{SortField, SortOrder};

/// The raw query parameters of the history page.
///
/// `prev_sort` is the sort field the controls were rendered with. When it differs from `sort`
/// the user just picked a new sort field.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct HistoryQuery {
    pub page: Option<u64>,
    pub sort: Option<SortField>,
    pub order: Option<SortOrder>,
    pub prev_sort: Option<SortField>,
}

/// The page and ordering of one history fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryCursor {
    /// The 1-based page number.
    pub page: u64,
    pub sort: SortField,
    pub order: SortOrder,
}

impl HistoryCursor {
    /// Apply defaults to `query`. Picking a new sort field resets the order to ascending and
    /// keeps the current page.
    pub fn from_query(query: HistoryQuery, default_page: u64) -> Self {
        let cursor = Self {
            page: query.page.unwrap_or(default_page).max(1),
            sort: query.prev_sort.or(query.sort).unwrap_or_default(),
            order: query.order.unwrap_or_default(),
        };

        match query.sort {
            Some(sort) => cursor.with_sort_field(sort),
            None => cursor,
        }
    }

    /// The number of transactions before this page.
    ///
    /// Saturates for pages too large to reach, which the API answers with an empty page.
    pub fn skip(self, page_size: u64) -> u64 {
        self.page.saturating_sub(1).saturating_mul(page_size)
    }

    pub fn with_page(self, page: u64) -> Self {
        Self { page, ..self }
    }

    /// Sort by `sort`. The order is reset to ascending if the field changes.
    pub fn with_sort_field(self, sort: SortField) -> Self {
        if sort == self.sort {
            self
        } else {
            Self {
                sort,
                order: SortOrder::Ascending,
                ..self
            }
        }
    }

    pub fn to_query_string(self) -> String {
        serde_urlencoded::to_string(self).unwrap_or_default()
    }

    pub fn to_url(self, route: &str) -> String {
        format!("{route}?{}", self.to_query_string())
    }
}

impl Default for HistoryCursor {
    fn default() -> Self {
        Self {
            page: 1,
            sort: SortField::default(),
            order: SortOrder::default(),
        }
    }
}
