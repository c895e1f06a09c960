mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use common::{FakeCollection, state_with};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use store_admin::app;
use tower::ServiceExt;

async fn call(router: axum::Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn validate_endpoint_reports_each_field() {
    let router = app(state_with(FakeCollection::seeded()));
    let (status, body) = call(
        router,
        Method::POST,
        "/api/forms/validate",
        Some(json!({ "Email": "a@b.co", "Price": "12.5", "Name": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Invalid");
    assert_eq!(
        body["data"],
        json!({ "Email": "valid", "Price": "invalid", "Name": "invalid" })
    );
}

#[tokio::test]
async fn invalid_store_form_is_unprocessable() {
    let fake = FakeCollection::seeded();
    let router = app(state_with(fake.clone()));
    let (status, body) = call(
        router,
        Method::POST,
        "/api/stores",
        Some(json!({ "Name": "New", "PhoneNumber": "12-34" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["data"]["fields"]["PhoneNumber"], "invalid");
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn products_without_selection_conflict() {
    let router = app(state_with(FakeCollection::seeded()));
    let (status, _) = call(router, Method::GET, "/api/products", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn select_then_sort_through_the_router() {
    let state = state_with(FakeCollection::seeded());

    let (status, body) = call(
        app(state.clone()),
        Method::POST,
        "/api/stores/select",
        Some(json!({ "name": "Central" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["products"]["counts"], json!({ "ok": 1, "storage": 2, "out_of_stock": 1 }));

    let (status, body) = call(
        app(state.clone()),
        Method::POST,
        "/api/products/sort",
        Some(json!({ "column": "Name" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["sort"], json!({ "active_column": "Name", "phase": 1 }));

    let (_, body) = call(app(state), Method::GET, "/api/session", None).await;
    assert_eq!(body["data"]["store_id"], 1);
}

#[tokio::test]
async fn unknown_status_filter_is_bad_request() {
    let state = state_with(FakeCollection::seeded());
    call(
        app(state.clone()),
        Method::POST,
        "/api/stores/select",
        Some(json!({ "name": "Central" })),
    )
    .await;

    let (status, _) = call(
        app(state.clone()),
        Method::POST,
        "/api/products/filter",
        Some(json!({ "status": "LOST" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call(
        app(state),
        Method::POST,
        "/api/products/filter",
        Some(json!({ "status": "Out of stock" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["products"][0]["Name"], "Blender");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let router = app(state_with(FakeCollection::seeded()));
    let (status, body) = call(router, Method::GET, "/nowhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["path"], "/nowhere");
}
