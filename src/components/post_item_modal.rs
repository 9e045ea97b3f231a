//! Modal form for reporting a lost or found item.
//!
//! DESIGN
//! ======
//! The draft signal is owned by the dashboard so selections survive close
//! and reopen. The modal owns only its in-flight flag. On success the
//! draft's text fields are cleared and the parent is told to refresh and
//! close, in that order; close paths are blocked while a post is in flight
//! so the flag is never written after unmount.

use leptos::prelude::*;

use crate::net::types::ItemType;
use crate::state::auth::AuthState;
use crate::state::items::Category;
use crate::state::post_form::PostForm;
use crate::util::netid;

fn heading(kind: ItemType) -> String {
    format!("Post {} Item", kind.as_str())
}

fn date_label(kind: ItemType) -> String {
    format!("Date {}", kind.as_str())
}

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Posting..." } else { "Post Item" }
}

/// Posting dialog hosted by the dashboard.
#[component]
pub fn PostItemModal(
    form: RwSignal<PostForm>,
    on_added: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let submitting = RwSignal::new(false);

    let reporter_netid = move || {
        auth.get()
            .user
            .map(|user| netid::local_part(&user.email).to_owned())
            .unwrap_or_default()
    };

    let request_close = move |_| {
        if submitting.get_untracked() {
            return;
        }
        on_close.run(());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let Some(user) = auth.get_untracked().user else {
            return;
        };
        let draft = form.get_untracked();
        submitting.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = match draft.kind {
                ItemType::Lost => crate::net::api::post_lost_item(&draft.lost_input(&user))
                    .await
                    .map(|_| ()),
                ItemType::Found => crate::net::api::post_found_item(&draft.found_input(&user))
                    .await
                    .map(|_| ()),
            };
            match result {
                Ok(()) => {
                    // Settle local state before close unmounts this modal.
                    submitting.set(false);
                    form.update(PostForm::reset_after_post);
                    on_added.run(());
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("post item failed: {e}");
                    crate::util::browser::alert("Failed to post item. Please try again.");
                    submitting.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user, draft);
            submitting.set(false);
        }
    };

    view! {
        <div class="modal-overlay">
            <div class="modal-content">
                <div class="modal-header">
                    <h2>{move || heading(form.get().kind)}</h2>
                    <button class="close-btn" on:click=request_close>
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit>
                    <div class="form-toggle">
                        <label>"I ..."</label>
                        <div class="toggle-options">
                            <button
                                type="button"
                                class:active=move || form.get().kind == ItemType::Lost
                                class:lost=move || form.get().kind == ItemType::Lost
                                on:click=move |_| form.update(|f| f.kind = ItemType::Lost)
                            >
                                "Lost an Item"
                            </button>
                            <button
                                type="button"
                                class:active=move || form.get().kind == ItemType::Found
                                class:found=move || form.get().kind == ItemType::Found
                                on:click=move |_| form.update(|f| f.kind = ItemType::Found)
                            >
                                "Found an Item"
                            </button>
                        </div>
                    </div>

                    <div class="form-group">
                        <label>"Title"</label>
                        <input
                            type="text"
                            required=true
                            placeholder="e.g. Blue Nike Backpack"
                            prop:value=move || form.get().title
                            on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Category"</label>
                        <select on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.category = Category::from_wire(Some(value.as_str())));
                        }>
                            {Category::ALL
                                .iter()
                                .map(|category| {
                                    let category = *category;
                                    view! {
                                        <option
                                            value=category.as_str()
                                            selected=move || form.get().category == category
                                        >
                                            {category.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label>"Description"</label>
                        <textarea
                            required=true
                            placeholder="Describe the item details..."
                            prop:value=move || form.get().description
                            on:input=move |ev| {
                                form.update(|f| f.description = event_target_value(&ev));
                            }
                        ></textarea>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label>"Location"</label>
                            <input
                                type="text"
                                required=true
                                placeholder="Where was it?"
                                prop:value=move || form.get().location
                                on:input=move |ev| {
                                    form.update(|f| f.location = event_target_value(&ev));
                                }
                            />
                        </div>
                        <div class="form-group">
                            <label>{move || date_label(form.get().kind)}</label>
                            <input
                                type="date"
                                required=true
                                prop:value=move || form.get().date
                                on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label>"Contact Info (NetID)"</label>
                        <input
                            type="text"
                            class="disabled-input"
                            disabled=true
                            prop:value=move || reporter_netid()
                        />
                        <small>
                            {move || format!("Users will contact you via {}@illinois.edu", reporter_netid())}
                        </small>
                    </div>

                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=request_close>
                            "Cancel"
                        </button>
                        <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                            {move || submit_label(submitting.get())}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
