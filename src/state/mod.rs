//! Reactive application state shared via Leptos contexts.

pub mod auth;
pub mod filters;
pub mod items;
pub mod post_form;
