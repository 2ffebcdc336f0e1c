mod users;

pub use users::{poll_users_responses, request_next_page, users_panel};
