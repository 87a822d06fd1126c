//! User model as served by the presence API.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::lenient;
use crate::time_utils::age_of;

/// Avatar shown for users without a picture.
pub const PLACEHOLDER_PICTURE_URL: &str = "https://www.gravatar.com/avatar/?d=mp";

/// User classification. Gates UI behaviour such as the top-students ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Admin,
    Professor,
    Student,
    Moderator,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Professor, Role::Student, Role::Moderator];

    /// Role for a numeric enum value (declaration order, starting at 0).
    pub fn from_index(index: u64) -> Option<Role> {
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Professor => "Professor",
            Role::Student => "Student",
            Role::Moderator => "Moderator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Role string that matches none of the known roles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct UnknownRole(pub String);

/// A user as listed by `GET /users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-side user ID
    #[serde(default, deserialize_with = "lenient::id")]
    pub user_id: String,
    /// Login-style display name (e.g. "john.doe")
    #[serde(default, deserialize_with = "lenient::text")]
    pub username: String,
    /// Profile picture URL
    #[serde(
        rename = "userPicUrl",
        default,
        deserialize_with = "lenient::non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub picture_url: Option<String>,
    /// Date of birth
    #[serde(
        default,
        deserialize_with = "lenient::date",
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_date: Option<NaiveDate>,
    /// Room/class the user belongs to
    #[serde(
        default,
        deserialize_with = "lenient::non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub room_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::role",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<Role>,
    #[serde(
        default,
        deserialize_with = "lenient::non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<String>,
    /// Classes attended
    #[serde(default, alias = "presenceCount", deserialize_with = "lenient::count")]
    pub attendance: u32,
}

impl User {
    /// Age in whole years on `today`, if the birth date is known.
    pub fn age(&self, today: NaiveDate) -> Option<i32> {
        self.birth_date.map(|birth| age_of(birth, today))
    }

    pub fn picture_or_placeholder(&self) -> &str {
        self.picture_url
            .as_deref()
            .unwrap_or(PLACEHOLDER_PICTURE_URL)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }

    /// Short label for charts: the username up to the first `.`.
    pub fn short_name(&self) -> &str {
        self.username.split('.').next().unwrap_or_default()
    }
}

/// Body of `GET /users`: a bare array or `{"Users": [...]}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UsersResponse {
    List(Vec<User>),
    Wrapped {
        #[serde(rename = "Users", alias = "users")]
        users: Vec<User>,
    },
}

impl UsersResponse {
    pub fn into_users(self) -> Vec<User> {
        match self {
            UsersResponse::List(users) | UsersResponse::Wrapped { users } => users,
        }
    }
}
