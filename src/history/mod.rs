//! The transaction history: a paged, sorted table of the active wallet's transactions and a
//! CSV export of the displayed page.

mod cursor;
mod export;
mod page;
mod rows;
mod view;

pub use export::export_transactions;
pub use page::get_transactions_page;
