//! Route handlers.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::time::Instant;

use crate::admin::RequestAuth;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Record the outcome of one operation and turn it into a response.
fn observe<T: IntoResponse>(op: &'static str, start: Instant, result: Result<T, ApiError>) -> Response {
    let response = match result {
        Ok(ok) => ok.into_response(),
        Err(e) => e.into_response(),
    };
    metrics::record_request(op, response.status().as_u16(), start);
    response
}

/// Parse a JSON object body. Anything else reads as an empty submission,
/// which then fails validation with the accepted field list.
fn json_object(body: &[u8]) -> Map<String, Value> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

pub async fn submit(State(state): State<AppState>, body: Bytes) -> Response {
    let start = Instant::now();
    let result = state
        .service
        .submit(&json_object(&body))
        .await
        .map(|entry| (StatusCode::CREATED, Json(entry)))
        .map_err(ApiError::from);
    observe("submit", start, result)
}

pub async fn list(State(state): State<AppState>, auth: RequestAuth) -> Response {
    let start = Instant::now();
    let result = state.service.list(&auth).await.map(Json).map_err(ApiError::from);
    observe("list", start, result)
}

pub async fn delete(
    State(state): State<AppState>,
    auth: RequestAuth,
    Path(id): Path<String>,
) -> Response {
    let start = Instant::now();
    let result = state
        .service
        .delete(&auth, &id)
        .await
        .map(|deleted| Json(json!({ "ok": true, "deleted": deleted })))
        .map_err(ApiError::from);
    observe("delete", start, result)
}

pub async fn stats(State(state): State<AppState>, auth: RequestAuth) -> Response {
    let start = Instant::now();
    let result = state.service.stats(&auth).await.map(Json).map_err(ApiError::from);
    observe("stats", start, result)
}

/// Start an admin session. The key comes from the JSON body (`key` or
/// `password`) or, failing that, from any of the per-request channels.
pub async fn login(State(state): State<AppState>, auth: RequestAuth, body: Bytes) -> Response {
    let start = Instant::now();
    let body = json_object(&body);
    let key = ["key", "password"]
        .iter()
        .find_map(|k| body.get(*k).and_then(Value::as_str).map(str::to_string))
        .or(auth.key)
        .unwrap_or_default();

    let admin = &state.config.admin;
    let result = state
        .service
        .login(&key)
        .map(|session| {
            let cookie = format!(
                "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
                admin.cookie_name, session, admin.session_ttl_secs
            );
            set_cookie(Json(json!({ "ok": true })).into_response(), &cookie)
        })
        .map_err(ApiError::from);
    observe("login", start, result)
}

pub async fn logout(State(state): State<AppState>, auth: RequestAuth) -> Response {
    let start = Instant::now();
    state.service.logout(auth.session.as_ref());

    let cookie = format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        state.config.admin.cookie_name
    );
    let response = set_cookie(Json(json!({ "ok": true })).into_response(), &cookie);
    observe("logout", start, Ok::<_, ApiError>(response))
}

fn set_cookie(mut response: Response, cookie: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(cookie) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    response
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn root() -> Redirect {
    Redirect::to("/lista")
}
