//! Concurrent submissions must not lose updates.

use std::collections::HashSet;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use rsvp_backend::http::server::{build_router, AppState};

mod common;
use common::{client, start_server, test_config, ADMIN_KEY};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submits_over_http() {
    const N: usize = 40;
    let server = start_server().await;
    let client = client();

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let client = client.clone();
            let url = server.url("/rsvp");
            tokio::spawn(async move {
                client
                    .post(url)
                    .json(&json!({"nume": format!("guest-{i}"), "status": "da"}))
                    .send()
                    .await
                    .unwrap()
                    .status()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::CREATED);
    }

    let entries: Vec<Value> = client
        .get(server.url("/lista"))
        .header("x-admin-key", ADMIN_KEY)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(entries.len(), N);
    let ids: HashSet<&str> = entries.iter().map(|e| e["id"].as_str().unwrap()).collect();
    assert_eq!(ids.len(), N);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submits_through_router() {
    const N: usize = 20;
    let dir = tempfile::tempdir().unwrap();
    let app = build_router(AppState::from_config(test_config(&dir)));

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let request = Request::post("/rsvp")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        json!({"name": format!("guest-{i}"), "particip": true}).to_string(),
                    ))
                    .unwrap();
                app.oneshot(request).await.unwrap().status()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::CREATED);
    }

    let request = Request::get(format!("/stats?key={ADMIN_KEY}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let stats: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(stats["confirmari"], N);
    assert_eq!(stats["total_persoane"], N);
    assert_eq!(stats["total_inregistrari"], N);
}
