//! Listing state: display entries derived from wire records.
//!
//! DESIGN
//! ======
//! Wire records stay in `net::types`; everything the dashboard renders is a
//! flattened `ListedItem`. Derivation is total over successfully parsed
//! records: presentation-only gaps (category, contact) get documented
//! fallbacks, while structural problems are rejected earlier, at decode
//! time.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use crate::net::types::{Item, ItemStatus, ItemType};
use crate::util::netid;

/// Item categories the campus service recognizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Category {
    Wallet,
    Electronic,
    Keys,
    Jewelry,
    Clothing,
    Bag,
    Documents,
    #[default]
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 8] = [
        Category::Wallet,
        Category::Electronic,
        Category::Keys,
        Category::Jewelry,
        Category::Clothing,
        Category::Bag,
        Category::Documents,
        Category::Other,
    ];

    /// Wire identifier used in payloads and filter values.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Wallet => "wallet",
            Category::Electronic => "electronic",
            Category::Keys => "keys",
            Category::Jewelry => "jewelry",
            Category::Clothing => "clothing",
            Category::Bag => "bag",
            Category::Documents => "documents",
            Category::Other => "other",
        }
    }

    /// Label shown in selects and on cards.
    pub fn label(self) -> &'static str {
        match self {
            Category::Wallet => "Wallet",
            Category::Electronic => "Electronic",
            Category::Keys => "Keys",
            Category::Jewelry => "Jewelry",
            Category::Clothing => "Clothing",
            Category::Bag => "Bag",
            Category::Documents => "Documents",
            Category::Other => "Other",
        }
    }

    /// Parse a wire identifier. Unknown identifiers are `None`.
    pub fn parse(value: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.as_str() == value)
    }

    /// Category for an optional wire value. Missing and unknown values both
    /// read as `Other` so one odd record cannot hide an entry.
    pub fn from_wire(value: Option<&str>) -> Category {
        value.and_then(Category::parse).unwrap_or(Category::Other)
    }
}

/// One dashboard entry, flattened from either wire variant.
#[derive(Clone, Debug, PartialEq)]
pub struct ListedItem {
    pub id: String,
    pub kind: ItemType,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: String,
    pub date: String,
    pub status: ItemStatus,
    pub contact_netid: String,
}

impl ListedItem {
    /// Whether the listing shows this entry at all.
    ///
    /// Lost items disappear once claimed; found items stay visible in every
    /// status so their reports remain discoverable.
    pub fn is_listed(&self) -> bool {
        match self.kind {
            ItemType::Lost => self.status == ItemStatus::Pending,
            ItemType::Found => true,
        }
    }

    /// Whether the claim action applies. Only pending lost items take
    /// claims.
    pub fn claimable(&self) -> bool {
        self.kind == ItemType::Lost && self.status == ItemStatus::Pending
    }
}

impl From<Item> for ListedItem {
    fn from(item: Item) -> Self {
        match item {
            Item::Lost(record) => Self {
                id: record.id.to_string(),
                kind: ItemType::Lost,
                title: record.title,
                description: record.description,
                category: Category::from_wire(record.category.as_deref()),
                location: record.location,
                date: record.date_lost,
                status: record.status,
                contact_netid: netid::contact_netid(
                    record.contact_email.as_deref(),
                    record.user_id,
                ),
            },
            Item::Found(record) => Self {
                id: record.id.to_string(),
                kind: ItemType::Found,
                title: record.title,
                description: record.description,
                category: Category::from_wire(record.category.as_deref()),
                location: record.location,
                date: record.date_found.unwrap_or(record.created_at),
                status: record.status,
                contact_netid: netid::contact_netid(
                    record.contact_email.as_deref(),
                    record.user_id,
                ),
            },
        }
    }
}

/// Listing state provided as an app-level context signal.
#[derive(Clone, Debug, Default)]
pub struct ItemsState {
    pub items: Vec<ListedItem>,
    pub loading: bool,
}
