//! Listing card for a single lost or found item.
//!
//! DESIGN
//! ======
//! Purely presentational: the claim click hands the entry back to the
//! dashboard, which owns the claim flow and the follow-up reload.

#[cfg(test)]
#[path = "item_card_test.rs"]
mod item_card_test;

use leptos::prelude::*;

use crate::net::types::ItemType;
use crate::state::items::ListedItem;

/// Campus mail domain appended to reporter NetIDs.
const CONTACT_DOMAIN: &str = "illinois.edu";

fn card_class(kind: ItemType) -> String {
    format!("item-card {}", kind.as_str().to_ascii_lowercase())
}

fn contact_address(netid: &str) -> String {
    format!("{netid}@{CONTACT_DOMAIN}")
}

/// One grid card. The claim button appears only on claimable entries.
#[component]
pub fn ItemCard(entry: ListedItem, on_claim: Callback<ListedItem>) -> impl IntoView {
    let claimable = entry.claimable();
    let badge = entry.kind.as_str();
    let card = card_class(entry.kind);
    let location_line = format!("📍 {}", entry.location);
    let date_line = format!("📅 {}", entry.date);
    let category_line = format!("🏷️ {}", entry.category.label());
    let contact_line = format!("📧 {}", contact_address(&entry.contact_netid));
    let on_claim_click = Callback::new({
        let entry = entry.clone();
        move |()| on_claim.run(entry.clone())
    });

    view! {
        <div class=card>
            <div class="item-badge">{badge}</div>
            <h3>{entry.title}</h3>
            <p class="item-desc">{entry.description}</p>
            <div class="item-details">
                <span>{location_line}</span>
                <span>{date_line}</span>
                <span>{category_line}</span>
            </div>
            <div class="item-contact">{contact_line}</div>
            <Show when=move || claimable>
                <button class="claim-btn" on:click=move |_| on_claim_click.run(())>
                    "Claim This Item"
                </button>
            </Show>
        </div>
    }
}
