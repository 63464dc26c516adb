pub mod parser;
pub mod providers;
pub mod query;
pub mod urls;

pub use parser::parse_search_results;
pub use providers::{RezkaProvider, SearchProvider};
pub use query::{initial_query, normalize_title};
pub use urls::{build_search_url, resolve_url};
