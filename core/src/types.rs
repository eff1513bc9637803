//! DTOs for the placeholder and reqres APIs.
//!
//! # Design
//! Only the fields the views render are modelled; serde ignores the rest of
//! the upstream payload (addresses, phone numbers, company, ...). The
//! mock-server defines its own copies of these shapes and the integration
//! tests catch drift between the two.

use serde::{Deserialize, Serialize};

/// A user as returned by `GET /users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub username: String,
    pub email: String,
}

/// A blog post as returned by `GET /posts` and `GET /posts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    pub title: String,
    pub body: String,
}

/// Payload of the add-user form, posted verbatim to `POST /api/users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
