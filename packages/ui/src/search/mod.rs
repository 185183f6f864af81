//! Search page and result list components.

mod filter;
mod result_card;
mod results;
mod search_page;

pub use filter::{ResultsFilter, Select, SelectOption};
pub use result_card::ResultCard;
pub use results::SearchResults;
pub use search_page::SearchPage;
