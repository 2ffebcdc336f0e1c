//! Fetch wiring for the users table.
//!
//! Completion callbacks run off the UI thread; results are parked in
//! `egui::Context` temp memory and applied by
//! [`poll_users_responses`](super::panel::poll_users_responses) on the next
//! frame, so every state mutation happens on the UI thread.

use log::error;
use roster_business::{FetcherHandle, fetch_page};

/// Temp-memory key carrying a successfully decoded page.
pub(crate) const PAGE_RESPONSE_ID: &str = "users_page_response";

/// Temp-memory key flagging an abandoned fetch.
pub(crate) const PAGE_FAILED_ID: &str = "users_page_failed";

/// Fetches one page of users from the directory endpoint.
pub(crate) fn fetch_users_page(
    fetcher: &FetcherHandle,
    users_url: &str,
    page: u32,
    ctx: egui::Context,
) {
    fetch_page(fetcher.0.as_ref(), users_url, page, move |result| {
        ctx.request_repaint();
        match result {
            Ok(users) => {
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(egui::Id::new(PAGE_RESPONSE_ID), users);
                });
            }
            Err(err) => {
                // Log-and-continue policy: no retry, no user-visible error.
                error!("Error fetching users page {page}: {err}");
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(egui::Id::new(PAGE_FAILED_ID), true);
                });
            }
        }
    });
}
