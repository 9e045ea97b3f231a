//! Reusable view components.

pub mod item_card;
pub mod post_item_modal;
