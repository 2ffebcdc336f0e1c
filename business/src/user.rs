//! Wire model for the user directory endpoint.
//!
//! Field names are camelCase on the wire; extra fields the source sends are
//! ignored on decode. Records are immutable once fetched.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub country: String,
}

/// One user record as returned by the directory endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: Gender,
    /// Avatar URL. Rendered as a link; image decoding is out of scope.
    pub image: String,
    pub company: Company,
    pub address: Address,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The "Demography" column: `age / gender`.
    pub fn demography(&self) -> String {
        format!("{} / {}", self.age, self.gender)
    }

    /// The "Location" column: `city, country`.
    pub fn location(&self) -> String {
        format!("{}, {}", self.address.city, self.address.country)
    }
}

/// Response body of `GET {users_url}?limit=..&skip=..`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersPage {
    pub users: Vec<UserRecord>,
}
