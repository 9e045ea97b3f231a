//! Network layer: wire types, API calls, and the shared error model.

pub mod api;
pub mod error;
pub mod types;
