//! Campus NetID derivation from account emails.

#[cfg(test)]
#[path = "netid_test.rs"]
mod netid_test;

/// Portion of `email` before the first `@`, or the whole string when no `@`
/// is present.
pub fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Synthetic handle for accounts whose email is missing or empty.
pub fn fallback_netid(user_id: i64) -> String {
    format!("user{user_id}")
}

/// NetID to display for an item's reporter.
///
/// Prefers the local part of `email`; records with no usable address get the
/// synthetic `user{id}` handle instead.
pub fn contact_netid(email: Option<&str>, user_id: i64) -> String {
    match email {
        Some(address) if !address.is_empty() => local_part(address).to_owned(),
        _ => fallback_netid(user_id),
    }
}
