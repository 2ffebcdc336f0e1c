//! The users table widget: scroll-driven fetching, client-side
//! sort/filter, and the rendered table.

mod api;
mod panel;
mod table;

pub use panel::{poll_users_responses, request_next_page, users_panel};
