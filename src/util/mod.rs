//! Cross-cutting helpers shared by pages and components.

pub mod auth;
pub mod browser;
pub mod netid;
pub mod session;
