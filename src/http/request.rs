//! Admin credential extraction.
//!
//! The key may arrive as `?key=`, `X-Admin-Key`, or `Authorization: Bearer`;
//! the session id arrives in a cookie. Missing or malformed values are
//! simply absent, the gate decides what that means.

use axum::extract::{FromRequestParts, Query};
use axum::http::{header, request::Parts, HeaderMap, Uri};
use serde::Deserialize;
use std::convert::Infallible;
use uuid::Uuid;

use crate::admin::RequestAuth;
use crate::http::server::AppState;

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";
pub const X_REQUEST_ID: &str = "x-request-id";

#[derive(Debug, Default, Deserialize)]
struct KeyQuery {
    key: Option<String>,
}

/// Admin key from the `key` query parameter.
pub fn query_key(uri: &Uri) -> Option<String> {
    Query::<KeyQuery>::try_from_uri(uri)
        .ok()
        .and_then(|Query(q)| q.key)
}

/// Admin key from the dedicated header or a Bearer token.
pub fn header_key(headers: &HeaderMap) -> Option<String> {
    if let Some(key) = headers.get(ADMIN_KEY_HEADER).and_then(|v| v.to_str().ok()) {
        return Some(key.to_string());
    }
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Session id from the named cookie.
pub fn session_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

impl FromRequestParts<AppState> for RequestAuth {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let key = query_key(&parts.uri).or_else(|| header_key(&parts.headers));
        let session = session_cookie(&parts.headers, &state.config.admin.cookie_name);
        Ok(RequestAuth { session, key })
    }
}
