//! Wire types for the lost-and-found REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend stores lost and found reports in separate tables but serves
//! them through one listing endpoint, tagging each record with
//! `type: "Lost" | "Found"`. Parsing is strict: a record with an unknown
//! tag or status fails the whole decode instead of being silently skipped,
//! so schema drift surfaces as a loud payload error rather than a
//! mysteriously short list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account record returned by `/register` and `/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// Lifecycle state shared by both item tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Pending,
    Finished,
}

/// Which table an item belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemType {
    Lost,
    Found,
}

impl ItemType {
    /// Badge label, matching the wire tag.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Lost => "Lost",
            ItemType::Found => "Found",
        }
    }
}

/// A record from the lost-items table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LostItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date_lost: String,
    pub status: ItemStatus,
    pub created_at: String,
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

/// A record from the found-items table. Older rows predate the
/// `date_found` column, so it stays optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoundItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub date_found: Option<String>,
    pub status: ItemStatus,
    pub created_at: String,
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

/// One listing entry from `GET /items`, discriminated by the `type` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Item {
    Lost(LostItem),
    Found(FoundItem),
}

/// Payload for `POST /items/lost`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PostLostItemInput {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date_lost: String,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

/// Payload for `POST /items/found`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PostFoundItemInput {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date_found: String,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}
