//! Small web-sys wrappers for browser facilities outside the DOM tree.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Calendar-date portion of an ISO-8601 timestamp (`YYYY-MM-DD`).
#[cfg(any(test, feature = "csr"))]
fn date_part(iso: &str) -> &str {
    iso.split('T').next().unwrap_or(iso)
}

/// Today's date as `YYYY-MM-DD` in UTC. Empty off the browser.
pub fn today() -> String {
    #[cfg(feature = "csr")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        date_part(&iso).to_owned()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Show a blocking browser alert. No-op off the browser.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}
