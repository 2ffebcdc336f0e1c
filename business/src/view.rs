//! The derived view: a sorted-then-filtered projection of the accumulated
//! collection. Pure functions only; the UI recomputes the projection every
//! frame instead of diffing.

use std::cmp::Ordering;

use crate::user::{Gender, UserRecord};

/// Fields a column header can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    FirstName,
    Age,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Id,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortConfig {
    /// Header-click behavior: clicking the already-ascending key flips to
    /// descending; any other click restarts ascending on the clicked key.
    /// A column never returns to unsorted once clicked.
    #[must_use]
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key && self.direction == SortDirection::Ascending {
            Self {
                key,
                direction: SortDirection::Descending,
            }
        } else {
            Self {
                key,
                direction: SortDirection::Ascending,
            }
        }
    }

    fn compare(&self, a: &UserRecord, b: &UserRecord) -> Ordering {
        let natural = match self.key {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::FirstName => a.first_name.cmp(&b.first_name),
            SortKey::Age => a.age.cmp(&b.age),
        };
        match self.direction {
            SortDirection::Ascending => natural,
            SortDirection::Descending => natural.reverse(),
        }
    }
}

/// Active filter criteria. `None` / empty string mean "no constraint";
/// both constraints are conjunctive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub gender: Option<Gender>,
    pub city: String,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.gender.is_none() && self.city.is_empty()
    }

    /// Gender must match exactly; the city constraint is a case-insensitive
    /// substring match.
    pub fn matches(&self, user: &UserRecord) -> bool {
        let gender_ok = self.gender.is_none_or(|gender| gender == user.gender);
        let city_ok = self.city.is_empty()
            || user
                .address
                .city
                .to_lowercase()
                .contains(&self.city.to_lowercase());
        gender_ok && city_ok
    }
}

/// Computes the projection actually rendered: sort a copy of the collection,
/// then drop records the filters reject. The output replaces the previous
/// view entirely.
pub fn derive_view(users: &[UserRecord], sort: &SortConfig, filters: &Filters) -> Vec<UserRecord> {
    let mut view = users.to_vec();
    view.sort_by(|a, b| sort.compare(a, b));
    if !filters.is_empty() {
        view.retain(|user| filters.matches(user));
    }
    view
}
