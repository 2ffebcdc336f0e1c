//! The accumulated collection plus the pagination state machine.

use std::any::Any;

use chrono::{DateTime, Utc};
use log::info;
use roster_states::State;

use crate::user::UserRecord;
use crate::view::{Filters, SortConfig, SortKey, derive_view};

/// Records requested per page; the source offsets by `(page - 1) * PAGE_SIZE`.
pub const PAGE_SIZE: u32 = 10;

/// All mutable state of the directory component: the append-only collection,
/// the pagination cursor, the has-more flag, and the sort/filter criteria.
///
/// Registered in the `StateCtx`; the fetch path is the only writer of the
/// collection, the view deriver only reads it.
#[derive(Debug)]
pub struct DirectoryState {
    users: Vec<UserRecord>,
    /// Next page to request, starting at 1.
    next_page: u32,
    /// True until a fetch returns zero records.
    has_more: bool,
    /// Guards the cursor so rapid scroll triggers cannot issue overlapping
    /// requests for the same page.
    fetch_in_flight: bool,
    last_fetch: Option<DateTime<Utc>>,
    pub sort: SortConfig,
    pub filters: Filters,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_page: 1,
            has_more: true,
            fetch_in_flight: false,
            last_fetch: None,
            sort: SortConfig::default(),
            filters: Filters::default(),
        }
    }
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated collection, in fetch order. Never deduplicated.
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch_in_flight
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    /// When the collection last grew, for the status line.
    pub fn last_fetch(&self) -> Option<DateTime<Utc>> {
        self.last_fetch
    }

    /// Claims the next page for fetching.
    ///
    /// Returns the page number to request, or `None` when a fetch is already
    /// outstanding or the source is exhausted.
    pub fn begin_fetch(&mut self) -> Option<u32> {
        if self.fetch_in_flight || !self.has_more {
            return None;
        }
        self.fetch_in_flight = true;
        Some(self.next_page)
    }

    /// Applies a successfully fetched page: appends the records, advances
    /// the cursor, and clears has-more only when the page came back empty.
    ///
    /// `now` is passed in so tests control the clock.
    pub fn apply_page(&mut self, users: Vec<UserRecord>, now: DateTime<Utc>) {
        info!(
            "directory: page {} returned {} records",
            self.next_page,
            users.len()
        );
        self.has_more = !users.is_empty();
        self.users.extend(users);
        self.next_page += 1;
        self.fetch_in_flight = false;
        self.last_fetch = Some(now);
    }

    /// Abandons the outstanding fetch. Collection, cursor, and has-more are
    /// left exactly as they were; the caller has already logged the error.
    pub fn fetch_failed(&mut self) {
        self.fetch_in_flight = false;
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = self.sort.toggled(key);
    }

    /// The projection actually rendered. Recomputed on every call; a pure
    /// function of (collection, sort, filters) at the time of the call.
    pub fn derived_view(&self) -> Vec<UserRecord> {
        derive_view(&self.users, &self.sort, &self.filters)
    }
}

impl State for DirectoryState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
