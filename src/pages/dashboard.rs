//! Dashboard page: the filterable listing grid plus the post-item modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the filter and draft signals, hosts the modal, and runs every
//! mutation's read-after-write refresh. Claims and posts never patch the
//! list locally; they trigger a full reload so the client observes whatever
//! the backend actually stored.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::item_card::ItemCard;
use crate::components::post_item_modal::PostItemModal;
use crate::net::types::{ItemType, User};
use crate::state::auth::AuthState;
use crate::state::filters::{Filters, visible_entries};
use crate::state::items::{Category, ItemsState, ListedItem};
use crate::state::post_form::PostForm;
use crate::util::auth::install_unauth_redirect;
use crate::util::{browser, session};

/// Reload the full listing, replacing current entries on success and
/// keeping them on failure.
#[cfg(feature = "csr")]
fn load_items(items: RwSignal<ItemsState>) {
    items.update(|state| state.loading = true);
    leptos::task::spawn_local(async move {
        match crate::net::api::get_all_items().await {
            Ok(records) => items.update(|state| {
                state.items = records.into_iter().map(ListedItem::from).collect();
                state.loading = false;
            }),
            Err(e) => {
                log::error!("failed to load items: {e}");
                items.update(|state| state.loading = false);
            }
        }
    });
}

fn greeting_line(user: Option<&User>) -> String {
    user.map(|user| format!("Hello, {}", user.email)).unwrap_or_default()
}

/// Listing page for the `/` route.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let items = expect_context::<RwSignal<ItemsState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let filters = RwSignal::new(Filters::default());
    let post_form = RwSignal::new(PostForm::new(browser::today()));
    let show_post_modal = RwSignal::new(false);

    #[cfg(feature = "csr")]
    load_items(items);

    let visible = move || visible_entries(&items.get().items, &filters.get());
    let greeting = move || greeting_line(auth.get().user.as_ref());

    let on_claim = Callback::new(move |entry: ListedItem| {
        #[cfg(feature = "csr")]
        {
            let Some(user) = auth.get_untracked().user else {
                return;
            };
            let Ok(item_id) = entry.id.parse::<i64>() else {
                log::error!("claim skipped: non-numeric item id {:?}", entry.id);
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::claim_item(item_id, user.id, None).await {
                    Ok(()) => {
                        browser::alert("Claim submitted. The reporter has been notified.");
                        load_items(items);
                    }
                    Err(e) => browser::alert(&e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = entry;
        }
    });

    let on_modal_added = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        load_items(items);
    });
    let on_modal_close = Callback::new(move |()| show_post_modal.set(false));

    let on_logout = move |_| {
        session::clear();
        auth.update(|state| state.user = None);
    };

    view! {
        <div class="dashboard-container">
            <header class="dashboard-header">
                <div class="header-left">
                    <h1>"Find & Seek"</h1>
                    <span class="user-welcome">{greeting}</span>
                </div>
                <div class="header-right">
                    <button class="post-btn" on:click=move |_| show_post_modal.set(true)>
                        "+ Post Item"
                    </button>
                    <button class="logout-btn" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </header>

            <div class="dashboard-controls">
                <div class="search-bar">
                    <input
                        type="text"
                        placeholder="Search items or locations..."
                        prop:value=move || filters.get().search_term
                        on:input=move |ev| {
                            filters.update(|f| f.search_term = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="filters">
                    <div class="type-toggle">
                        <button
                            class:active=move || filters.get().type_filter.is_none()
                            on:click=move |_| filters.update(|f| f.type_filter = None)
                        >
                            "All"
                        </button>
                        <button
                            class:active=move || filters.get().type_filter == Some(ItemType::Lost)
                            on:click=move |_| {
                                filters.update(|f| f.type_filter = Some(ItemType::Lost));
                            }
                        >
                            "Lost"
                        </button>
                        <button
                            class:active=move || filters.get().type_filter == Some(ItemType::Found)
                            on:click=move |_| {
                                filters.update(|f| f.type_filter = Some(ItemType::Found));
                            }
                        >
                            "Found"
                        </button>
                    </div>

                    <select
                        class="category-select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            filters.update(|f| f.category_filter = Category::parse(&value));
                        }
                    >
                        <option value="all" selected=move || filters.get().category_filter.is_none()>
                            "All Categories"
                        </option>
                        {Category::ALL
                            .iter()
                            .map(|category| {
                                let category = *category;
                                view! {
                                    <option
                                        value=category.as_str()
                                        selected=move || {
                                            filters.get().category_filter == Some(category)
                                        }
                                    >
                                        {category.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
            </div>

            <Show
                when=move || !items.get().loading
                fallback=|| view! { <p class="loading-note">"Loading items..."</p> }
            >
                <Show
                    when=move || !visible().is_empty()
                    fallback=|| {
                        view! {
                            <p class="no-items">"No items found matching your criteria."</p>
                        }
                    }
                >
                    <div class="items-grid">
                        {move || {
                            visible()
                                .into_iter()
                                .map(|entry| view! { <ItemCard entry=entry on_claim=on_claim/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <Show when=move || show_post_modal.get()>
                <PostItemModal form=post_form on_added=on_modal_added on_close=on_modal_close/>
            </Show>
        </div>
    }
}
