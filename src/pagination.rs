//! This modules defines the common functionality for paging data.

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The number of transactions to display per page.
    pub page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            page_size: 10,
        }
    }
}

/// The number of pages needed to show `total_count` items, `page_size` at a time.
pub fn page_count(total_count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }

    total_count.div_ceil(page_size)
}

/// The previous/next links shown below a paged table.
#[derive(Debug, PartialEq, Eq)]
pub struct PageControls {
    pub curr_page: u64,
    pub page_count: u64,
    /// The page the "previous" button goes to, `None` if the button is disabled.
    pub back: Option<u64>,
    /// The page the "next" button goes to, `None` if the button is disabled.
    pub next: Option<u64>,
}

pub fn create_page_controls(curr_page: u64, page_count: u64) -> PageControls {
    PageControls {
        curr_page,
        page_count,
        back: (curr_page > 1).then(|| curr_page - 1),
        next: (curr_page < page_count).then(|| curr_page + 1),
    }
}
