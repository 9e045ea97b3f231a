//! Draft state for the post-item modal.
//!
//! DESIGN
//! ======
//! The draft lives in the dashboard, not the modal, so closing and reopening
//! keeps the non-text selections. A successful post clears only the
//! free-text fields: kind, category, and date survive so reporting several
//! items from the same day stays quick.

#[cfg(test)]
#[path = "post_form_test.rs"]
mod post_form_test;

use super::items::Category;
use crate::net::types::{ItemType, PostFoundItemInput, PostLostItemInput, User};

/// Draft of the post-item form.
#[derive(Clone, Debug, PartialEq)]
pub struct PostForm {
    pub kind: ItemType,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: String,
    pub date: String,
}

impl PostForm {
    /// Fresh draft for a lost-item report dated `date`.
    pub fn new(date: String) -> Self {
        Self {
            kind: ItemType::Lost,
            title: String::new(),
            description: String::new(),
            category: Category::Other,
            location: String::new(),
            date,
        }
    }

    /// Clear the free-text fields after a successful post. Kind, category,
    /// and date keep their last values.
    pub fn reset_after_post(&mut self) {
        self.title.clear();
        self.description.clear();
        self.location.clear();
    }

    /// Lost-item payload for this draft, reported by `user`.
    pub fn lost_input(&self, user: &User) -> PostLostItemInput {
        PostLostItemInput {
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            date_lost: self.date.clone(),
            user_id: user.id,
            category: Some(self.category.as_str().to_owned()),
            contact_email: Some(user.email.clone()),
        }
    }

    /// Found-item payload for this draft, reported by `user`.
    pub fn found_input(&self, user: &User) -> PostFoundItemInput {
        PostFoundItemInput {
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            date_found: self.date.clone(),
            user_id: user.id,
            category: Some(self.category.as_str().to_owned()),
            contact_email: Some(user.email.clone()),
        }
    }
}
