//! Page fetch plumbing for the directory endpoint.

use log::debug;
use thiserror::Error;

use crate::directory::PAGE_SIZE;
use crate::fetch_service::FetchService;
use crate::user::{UserRecord, UsersPage};

/// Failure of one page fetch. Policy is log-and-continue: callers report the
/// failure to the state machine and otherwise drop it. There is no retry and
/// no distinction between transient and permanent failures.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Builds the request for one page: [`PAGE_SIZE`] records at offset
/// `(page - 1) * PAGE_SIZE`.
pub fn page_request(users_url: &str, page: u32) -> ehttp::Request {
    let skip = (page - 1) * PAGE_SIZE;
    ehttp::Request::get(format!("{users_url}?limit={PAGE_SIZE}&skip={skip}"))
}

/// Fetches one page of users and hands the decoded result to `on_done`.
///
/// The callback runs on whatever thread the [`FetchService`] completes on;
/// UI callers forward the result back to the frame loop themselves.
pub fn fetch_page(
    fetcher: &dyn FetchService,
    users_url: &str,
    page: u32,
    on_done: impl FnOnce(Result<Vec<UserRecord>, FetchError>) + Send + 'static,
) {
    let request = page_request(users_url, page);
    debug!("fetch: requesting {}", request.url);

    fetcher.fetch(
        request,
        Box::new(move |result| {
            let decoded = match result {
                Ok(response) if response.status == 200 => {
                    serde_json::from_slice::<UsersPage>(&response.bytes)
                        .map(|body| body.users)
                        .map_err(FetchError::from)
                }
                Ok(response) => Err(FetchError::Status(response.status)),
                Err(err) => Err(FetchError::Transport(err)),
            };
            on_done(decoded);
        }),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use super::*;
    use crate::fetch_service::MockFetcher;

    fn collect_result(
        fetcher: &MockFetcher,
        page: u32,
    ) -> Arc<Mutex<Option<Result<Vec<UserRecord>, FetchError>>>> {
        let slot = Arc::new(Mutex::new(None));
        let out = Arc::clone(&slot);
        // MockFetcher completes synchronously, so the slot is filled on return.
        fetch_page(fetcher, "http://mock/users", page, move |result| {
            *out.lock().expect("result slot") = Some(result);
        });
        slot
    }

    #[test]
    fn request_url_encodes_limit_and_skip() {
        assert_eq!(
            page_request("https://dummyjson.com/users", 1).url,
            "https://dummyjson.com/users?limit=10&skip=0"
        );
        assert_eq!(
            page_request("https://dummyjson.com/users", 3).url,
            "https://dummyjson.com/users?limit=10&skip=20"
        );
    }

    #[test]
    fn decodes_a_valid_page() {
        let fetcher = MockFetcher::new();
        fetcher.push_json(
            200,
            r#"{ "users": [{
                "id": 1,
                "firstName": "Ada",
                "lastName": "Lovelace",
                "age": 36,
                "gender": "female",
                "image": "https://example.com/1.png",
                "company": { "title": "Analyst" },
                "address": { "city": "London", "country": "United Kingdom" }
            }] }"#,
        );

        let slot = collect_result(&fetcher, 1);
        let result = slot.lock().expect("result slot").take().expect("completed");
        let users = result.expect("decoded page");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].first_name, "Ada");

        assert_eq!(
            fetcher.requested_urls(),
            vec!["http://mock/users?limit=10&skip=0".to_owned()]
        );
    }

    #[test]
    fn non_200_status_is_an_error() {
        let fetcher = MockFetcher::new();
        fetcher.push_json(503, "unavailable");

        let slot = collect_result(&fetcher, 1);
        let result = slot.lock().expect("result slot").take().expect("completed");
        assert!(matches!(result, Err(FetchError::Status(503))));
    }

    #[test]
    fn garbage_body_is_a_parse_error() {
        let fetcher = MockFetcher::new();
        fetcher.push_json(200, "not json at all");

        let slot = collect_result(&fetcher, 1);
        let result = slot.lock().expect("result slot").take().expect("completed");
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[test]
    fn transport_failure_is_an_error() {
        let fetcher = MockFetcher::new();
        fetcher.push_response(Err("connection refused".to_owned()));

        let slot = collect_result(&fetcher, 1);
        let result = slot.lock().expect("result slot").take().expect("completed");
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}
