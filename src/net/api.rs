//! REST API calls against the lost-and-found backend.
//!
//! Browser builds (csr): real HTTP via `gloo-net`, with every endpoint
//! addressed relative to the page origin.
//! Native builds: stubs returning a transport error.
//!
//! ERROR HANDLING
//! ==============
//! Every call funnels failures into `ApiError`: transport problems keep
//! their own text, non-success statuses surface whatever message the
//! backend put in the body, and an undecodable success body becomes a
//! payload error rather than an empty-handed `Ok`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "csr")]
use super::error::{ErrorBody, failure_message};
use super::types::{FoundItem, Item, LostItem, PostFoundItemInput, PostLostItemInput, User};
#[cfg(feature = "csr")]
use serde::Deserialize;

#[cfg(any(test, feature = "csr"))]
fn claim_endpoint(item_id: i64) -> String {
    format!("/items/{item_id}/claim")
}

#[cfg(any(test, feature = "csr"))]
fn register_body(email: &str, password: &str, location: Option<&str>) -> serde_json::Value {
    let mut body = serde_json::json!({ "email": email, "password": password });
    if let Some(location) = location {
        body["location"] = serde_json::Value::String(location.to_owned());
    }
    body
}

#[cfg(any(test, feature = "csr"))]
fn claim_body(claimant_id: i64, message: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "claimant_id": claimant_id,
        "message": message.unwrap_or(""),
    })
}

/// Success envelope for `/register` and `/login`.
#[cfg(feature = "csr")]
#[derive(Debug, Deserialize)]
struct UserResponse {
    user: User,
}

/// Success envelope for the item post endpoints.
#[cfg(feature = "csr")]
#[derive(Debug, Deserialize)]
struct ItemResponse<T> {
    item: T,
}

#[cfg(not(feature = "csr"))]
fn off_browser<T>() -> Result<T, ApiError> {
    Err(ApiError::Transport("not available outside the browser".to_owned()))
}

#[cfg(feature = "csr")]
async fn require_success(
    resp: gloo_net::http::Response,
) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.json::<ErrorBody>().await.ok();
    Err(ApiError::Api {
        status,
        message: failure_message(status, body.as_ref()),
    })
}

#[cfg(feature = "csr")]
async fn decode<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    let resp = require_success(resp).await?;
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Payload(e.to_string()))
}

/// Create an account via `POST /register`.
///
/// # Errors
///
/// Fails when the email is already registered, the request cannot be sent,
/// or the response cannot be decoded.
pub async fn register(
    email: &str,
    password: &str,
    location: Option<&str>,
) -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = register_body(email, password, location);
        let resp = gloo_net::http::Request::post("/register")
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body: UserResponse = decode(resp).await?;
        Ok(body.user)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password, location);
        off_browser()
    }
}

/// Authenticate via `POST /login`.
///
/// # Errors
///
/// Fails on rejected credentials, transport problems, or an undecodable
/// response.
pub async fn login(email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/login")
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body: UserResponse = decode(resp).await?;
        Ok(body.user)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        off_browser()
    }
}

/// Fetch every listing via `GET /items`.
///
/// The response is a flat array mixing both record kinds, discriminated by
/// the `type` tag.
///
/// # Errors
///
/// Fails on transport problems, a non-success status, or any record the
/// client cannot parse.
pub async fn get_all_items() -> Result<Vec<Item>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/items")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        off_browser()
    }
}

/// Report a lost item via `POST /items/lost`.
///
/// # Errors
///
/// Fails on transport problems, a non-success status, or an undecodable
/// response.
pub async fn post_lost_item(input: &PostLostItemInput) -> Result<LostItem, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/items/lost")
            .json(input)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body: ItemResponse<LostItem> = decode(resp).await?;
        Ok(body.item)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input;
        off_browser()
    }
}

/// Report a found item via `POST /items/found`.
///
/// # Errors
///
/// Fails on transport problems, a non-success status, or an undecodable
/// response.
pub async fn post_found_item(input: &PostFoundItemInput) -> Result<FoundItem, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/items/found")
            .json(input)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body: ItemResponse<FoundItem> = decode(resp).await?;
        Ok(body.item)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input;
        off_browser()
    }
}

/// Claim a pending lost item via `POST /items/{id}/claim`.
///
/// `message` goes on the wire as an empty string when `None`.
///
/// # Errors
///
/// Fails when the item is already claimed, on transport problems, or on a
/// non-success status.
pub async fn claim_item(
    item_id: i64,
    claimant_id: i64,
    message: Option<&str>,
) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = claim_endpoint(item_id);
        let payload = claim_body(claimant_id, message);
        let resp = gloo_net::http::Request::post(&url)
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        require_success(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (item_id, claimant_id, message);
        off_browser()
    }
}
