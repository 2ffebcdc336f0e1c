//! Transport seam for issuing HTTP requests.

use std::fmt::Debug;
use std::sync::Arc;

use ehttp::{Request, Response, Result};
use roster_states::State;

/// Production code goes through [`EhttpFetcher`]; tests swap in
/// [`MockFetcher`] to drive completion callbacks synchronously without a
/// network.
pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>);
}

#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>) {
        ehttp::fetch(request, on_done);
    }
}

/// Shared handle to the transport, registered in the `StateCtx` so widgets
/// can issue requests without threading a fetcher argument through every
/// call site.
#[derive(Debug, Clone)]
pub struct FetcherHandle(pub Arc<dyn FetchService>);

impl FetcherHandle {
    pub fn ehttp() -> Self {
        Self(Arc::new(EhttpFetcher))
    }
}

impl Default for FetcherHandle {
    fn default() -> Self {
        Self::ehttp()
    }
}

impl State for FetcherHandle {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

/// Builds a canned [`Response`] for tests.
#[cfg(any(test, feature = "test-utils"))]
pub fn canned_response(url: &str, status: u16, body: &[u8]) -> Response {
    Response {
        url: url.to_owned(),
        ok: (200..300).contains(&status),
        status,
        status_text: String::new(),
        bytes: body.to_vec(),
        headers: ehttp::Headers::default(),
    }
}

/// Replays canned responses in request order, invoking each completion
/// callback synchronously on the calling thread.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct MockFetcher {
    responses: std::sync::Mutex<std::collections::VecDeque<Result<Response>>>,
    requested_urls: std::sync::Mutex<Vec<String>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: Result<Response>) {
        self.responses
            .lock()
            .expect("mock fetcher lock")
            .push_back(response);
    }

    pub fn push_json(&self, status: u16, body: &str) {
        self.push_response(Ok(canned_response("mock://", status, body.as_bytes())));
    }

    /// URLs of every request seen so far, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requested_urls
            .lock()
            .expect("mock fetcher lock")
            .clone()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl FetchService for MockFetcher {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>) {
        self.requested_urls
            .lock()
            .expect("mock fetcher lock")
            .push(request.url.clone());

        let canned = self
            .responses
            .lock()
            .expect("mock fetcher lock")
            .pop_front()
            .unwrap_or_else(|| Err("MockFetcher: no canned response".to_owned()));
        on_done(canned);
    }
}
