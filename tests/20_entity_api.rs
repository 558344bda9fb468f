mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use common::{app, data, request};

fn member_body(email: &str) -> serde_json::Value {
    json!({
        "email": email,
        "fullName": "Ada",
        "middleName": "Augusta",
        "surname": "Lovelace",
        "birthday": "2002-05-17",
        "faculty": "Informatics",
        "group": "KI-41"
    })
}

fn cadence_body(number: i32) -> serde_json::Value {
    json!({
        "number": number,
        "isEnd": false,
        "startDate": "2025-09-01T00:00:00Z",
        "endDate": "2026-08-31T00:00:00Z"
    })
}

#[tokio::test]
async fn member_crud_round_trip() -> Result<()> {
    let app = app();

    let (status, body) = request(&app, "POST", "/member", Some(member_body("Ada@Example.com"))).await;
    assert_eq!(status, StatusCode::OK, "create failed: {}", body);
    let member = data(&body).clone();
    // fields are normalized on the way in
    assert_eq!(member["email"], json!("ada@example.com"));
    assert_eq!(member["fullName"], json!("ada"));
    assert_eq!(member["group"], json!("ki-41"));
    let id = member["id"].as_str().unwrap().to_string();

    let (status, body) = request(&app, "GET", &format!("/member/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data(&body)["id"], json!(id));

    let (status, body) = request(&app, "GET", "/member", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data(&body).as_array().unwrap().len(), 1);

    let mut update = member_body("ada@example.com");
    update["id"] = json!(id);
    update["faculty"] = json!("Mathematics");
    let (status, body) = request(&app, "PUT", "/member", Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data(&body)["faculty"], json!("mathematics"));

    let (status, body) = request(&app, "DELETE", &format!("/member/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data(&body)["id"], json!([id]));

    let (status, body) = request(&app, "GET", &format!("/member/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], json!("NOT_FOUND"));

    Ok(())
}

#[tokio::test]
async fn duplicate_member_email_is_conflict() -> Result<()> {
    let app = app();

    let (status, _) = request(&app, "POST", "/member", Some(member_body("ada@example.com"))).await;
    assert_eq!(status, StatusCode::OK);

    // same address modulo case
    let (status, body) = request(&app, "POST", "/member", Some(member_body("ADA@example.com"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], json!(true));
    assert_eq!(body["code"], json!("CONFLICT"));

    Ok(())
}

#[tokio::test]
async fn member_bulk_delete_is_position_correlated() -> Result<()> {
    let app = app();

    let (_, body) = request(&app, "POST", "/member", Some(member_body("a@example.com"))).await;
    let a = data(&body)["id"].as_str().unwrap().to_string();
    let (_, body) = request(&app, "POST", "/member", Some(member_body("c@example.com"))).await;
    let c = data(&body)["id"].as_str().unwrap().to_string();
    let missing = "00000000-0000-4000-8000-000000000000";

    let (status, body) = request(
        &app,
        "DELETE",
        "/member",
        Some(json!({ "id": [a, missing, c] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data(&body)["id"], json!([a, null, c]));

    // second pass: everything already gone, still a success
    let (status, body) = request(
        &app,
        "DELETE",
        "/member",
        Some(json!({ "id": [a, missing, c] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data(&body)["id"], json!([null, null, null]));

    Ok(())
}

#[tokio::test]
async fn cadence_number_is_unique() -> Result<()> {
    let app = app();

    let (status, body) = request(&app, "POST", "/cadence", Some(cadence_body(12))).await;
    assert_eq!(status, StatusCode::OK, "create failed: {}", body);

    let (status, body) = request(&app, "POST", "/cadence", Some(cadence_body(12))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], json!("CONFLICT"));

    Ok(())
}

#[tokio::test]
async fn board_crud_and_bulk_delete() -> Result<()> {
    let app = app();

    let (status, body) = request(&app, "POST", "/board", Some(json!({ "name": "HR" }))).await;
    assert_eq!(status, StatusCode::OK);
    let first = data(&body)["id"].as_i64().unwrap();

    let (_, body) = request(&app, "POST", "/board", Some(json!({ "name": "IT" }))).await;
    let second = data(&body)["id"].as_i64().unwrap();

    let (status, body) = request(
        &app,
        "DELETE",
        "/board",
        Some(json!({ "id": [first, second, 999] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data(&body)["count"], json!(2));

    let (status, _) = request(&app, "GET", &format!("/board/{}", first), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn health_and_banner() -> Result<()> {
    let app = app();

    let (status, body) = request(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data(&body)["status"], json!("ok"));

    let (status, body) = request(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data(&body)["name"], json!("CRM API (Rust)"));

    Ok(())
}
