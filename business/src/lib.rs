mod config;
mod directory;
mod fetch;
mod fetch_service;
mod scroll;
mod user;
mod view;

pub use config::DirectoryConfig;
pub use directory::{DirectoryState, PAGE_SIZE};
pub use fetch::{FetchError, fetch_page, page_request};
pub use fetch_service::{EhttpFetcher, FetchService, FetcherHandle};
#[cfg(any(test, feature = "test-utils"))]
pub use fetch_service::{MockFetcher, canned_response};
pub use scroll::{BOTTOM_SLACK, ScrollMetrics, ScrollMonitor};
pub use user::{Address, Company, Gender, UserRecord, UsersPage};
pub use view::{Filters, SortConfig, SortDirection, SortKey, derive_view};
