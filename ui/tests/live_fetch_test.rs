//! Integration tests for the live fetch path: the full app against a real
//! HTTP server, exercising the auto-fetch on startup and the paging cursor.

use egui_kittest::Harness;
use kittest::Queryable;
use roster_business::DirectoryState;
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_json(id: u64, first: &str, last: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "firstName": first,
        "lastName": last,
        "age": 30 + id,
        "gender": "female",
        "image": format!("https://example.com/{id}.png"),
        "company": { "title": "Engineer" },
        "address": { "city": "Springfield", "country": "United States" },
    })
}

/// Test context for live fetch tests.
struct FetchTestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    #[allow(dead_code)]
    mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

/// Setup the app against a server with one short page followed by an
/// empty one.
async fn setup_fetch_test<'a>() -> FetchTestCtx<'a> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("limit", "10"))
        .and(query_param("skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": [
                user_json(1, "Ada", "Lovelace"),
                user_json(2, "Grace", "Hopper"),
            ]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("limit", "10"))
        .and(query_param("skip", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": []
        })))
        .mount(&mock_server)
        .await;

    let state = State::test(mock_server.uri());
    let app = RosterApp::new(state);
    let harness = Harness::new_eframe(|_| app);

    FetchTestCtx {
        mock_server,
        harness,
    }
}

/// Run frames with pauses until pending responses have been processed.
async fn settle(harness: &mut Harness<'_, RosterApp>) {
    for _ in 0..20 {
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        harness.step();
    }
}

/// The first page is fetched on startup without any scrolling.
#[tokio::test]
async fn startup_fetches_and_displays_users() {
    let mut ctx = setup_fetch_test().await;
    let harness = &mut ctx.harness;

    harness.step();
    settle(harness).await;

    assert!(
        harness.query_by_label_contains("Ada Lovelace").is_some(),
        "first page should be displayed after the startup fetch"
    );
    assert!(harness.query_by_label_contains("Grace Hopper").is_some());
}

/// A short page keeps paging alive; the following empty page ends it and
/// removes the loading indicator.
#[tokio::test]
async fn empty_page_ends_paging() {
    let mut ctx = setup_fetch_test().await;
    let harness = &mut ctx.harness;

    harness.step();
    settle(harness).await;

    let directory = ctx.harness.state().state.ctx.state::<DirectoryState>();
    assert_eq!(directory.users().len(), 2);
    assert!(!directory.has_more(), "empty page should end paging");
    assert!(
        ctx.harness
            .query_by_label_contains("Loading more users")
            .is_none()
    );
}

/// A failed fetch is logged and swallowed: no error surfaces in the UI and
/// the page is not retried until the next scroll trigger.
#[tokio::test]
async fn failed_fetch_is_silent_and_not_retried() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = State::test(mock_server.uri());
    let app = RosterApp::new(state);
    let mut harness = Harness::new_eframe(|_| app);

    harness.step();
    settle(&mut harness).await;

    let directory = harness.state().state.ctx.state::<DirectoryState>();
    assert!(directory.users().is_empty());
    assert!(directory.has_more());
    assert!(!directory.is_fetching());

    assert!(harness.query_by_label_contains("Error").is_none());
    // The mock server verifies on drop that exactly one request was made.
}
