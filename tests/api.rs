//! End-to-end tests over HTTP.

use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;
use common::{client, start_server, ADMIN_KEY};

#[tokio::test]
async fn test_submit_and_list_with_key() {
    let server = start_server().await;
    let client = client();

    let res = client
        .post(server.url("/rsvp"))
        .json(&json!({"name": "Ana", "status": "particip", "persons": 2}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["nume"], "Ana");
    assert_eq!(created["status"], "particip");
    assert_eq!(created["persoane"], 2);

    let res = client.get(server.url("/lista")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client
        .get(server.url(&format!("/lista?key={ADMIN_KEY}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let entries: Vec<Value> = res.json().await.unwrap();
    assert_eq!(entries, vec![created]);
    assert!(server.data_file.exists());
}

#[tokio::test]
async fn test_invalid_submission_lists_accepted_fields() {
    let server = start_server().await;
    let client = client();

    let res = client
        .post(server.url("/rsvp"))
        .json(&json!({"name": "", "status": "nu"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body["error"].is_string());
    assert_eq!(body["accepted_fields"]["name"], json!(["nume", "name"]));

    let res = client
        .post(server.url("/rsvp"))
        .body("not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(!server.data_file.exists());
}

#[tokio::test]
async fn test_delete_and_stats_via_header() {
    let server = start_server().await;
    let client = client();

    let mut ids = Vec::new();
    for body in [
        json!({"nume": "Ana", "prezenta": "da", "persoane": 2}),
        json!({"nume": "Ion", "particip": false}),
        json!({"nume": "Maria", "participare": 1, "persoane": "3"}),
    ] {
        let created: Value = client
            .post(server.url("/rsvp"))
            .json(&body)
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        ids.push(created["id"].as_str().unwrap().to_string());
    }

    let stats: Value = client
        .get(server.url("/stats"))
        .header("x-admin-key", ADMIN_KEY)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        stats,
        json!({"confirmari": 2, "refuzuri": 1, "total_persoane": 5, "total_inregistrari": 3})
    );

    let res = client
        .delete(server.url(&format!("/sterge/{}", ids[0])))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    for expected in [StatusCode::OK, StatusCode::NOT_FOUND, StatusCode::NOT_FOUND] {
        let res = client
            .delete(server.url(&format!("/sterge/{}", ids[0])))
            .bearer_auth(ADMIN_KEY)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), expected);
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
    let names: Vec<&str> = entries.iter().map(|e| e["nume"].as_str().unwrap()).collect();
    assert_eq!(names, ["Ion", "Maria"]);
}

#[tokio::test]
async fn test_login_session_and_logout() {
    let server = start_server().await;
    let client = client();

    let res = client
        .post(server.url("/login"))
        .json(&json!({"key": "wrong"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client
        .post(server.url("/login"))
        .json(&json!({"key": ADMIN_KEY}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let set_cookie = res.headers()["set-cookie"].to_str().unwrap().to_string();
    let cookie = set_cookie.split(';').next().unwrap().to_string();
    assert!(cookie.starts_with("rsvp_session="));

    let res = client
        .get(server.url("/lista"))
        .header("cookie", &cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    for _ in 0..2 {
        let res = client
            .post(server.url("/logout"))
            .header("cookie", &cookie)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = client
        .get(server.url("/lista"))
        .header("cookie", &cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_failed_write_returns_server_error() {
    let server = start_server().await;
    let client = client();

    let res = client
        .post(server.url("/rsvp"))
        .json(&json!({"nume": "Ana", "status": "da"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let mut tmp = server.data_file.clone().into_os_string();
    tmp.push(".tmp");
    std::fs::create_dir(&tmp).unwrap();

    let res = client
        .post(server.url("/rsvp"))
        .json(&json!({"nume": "Ion", "status": "da"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert!(body["error"].is_string());

    let entries: Vec<Value> = client
        .get(server.url("/lista"))
        .header("x-admin-key", ADMIN_KEY)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e["nume"].as_str().unwrap()).collect();
    assert_eq!(names, ["Ana"]);
}

#[tokio::test]
async fn test_health_and_root_redirect() {
    let server = start_server().await;
    let client = client();

    let res = client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    let res = client.get(server.url("/")).send().await.unwrap();
    assert!(res.status().is_redirection());
    assert_eq!(res.headers()["location"], "/lista");

    let addr = server.addr;
    server.stop().await.unwrap();
    assert!(tokio::net::TcpStream::connect(addr).await.is_err());
}
