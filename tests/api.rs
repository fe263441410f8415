use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use shipkeep_web::voyages::ScheduleStore;
use shipkeep_web::{router, AppState};

fn app() -> Router {
    router(AppState::new(ScheduleStore::reference()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn sign_up(app: &Router, username: &str) -> String {
    let (status, body) = post(
        app,
        "/api/accounts",
        json!({
            "username": username,
            "email": format!("{username}@shipkeep.co"),
            "password": "Seaworthy1",
            "confirm_password": "Seaworthy1",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_str().unwrap().to_string()
}

fn lisbon_to_amsterdam(account_id: &str) -> Value {
    json!({
        "account_id": account_id,
        "passenger_name": "Ada Lovelace",
        "voyage": "Europe B",
        "departure_date": "2026-01-01",
        "departure_port": "Lisbon, Portugal",
        "arrival_date": "2026-01-10",
        "arrival_port": "Amsterdam, Netherlands",
    })
}

// ==================== schedule endpoints ====================

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".into()));
}

#[tokio::test]
async fn test_schedule_dates() {
    let app = app();
    let (status, body) = get(&app, "/api/schedule/dates").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dates"].as_array().unwrap().len(), 31);
    assert_eq!(body["first_date"], "2026-01-01");
    assert_eq!(body["last_date"], "2026-01-31");
}

#[tokio::test]
async fn test_departures_skip_ships_at_sea() {
    let app = app();
    let (status, body) = get(&app, "/api/schedule/2026-01-02/departures").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["departures"],
        json!([
            { "voyage": "Americas A", "port": "Wilmington, NC" },
            { "voyage": "Europe A", "port": "Cherbourg, France" },
            { "voyage": "Europe B", "port": "Cobh, Ireland" },
        ])
    );
}

#[tokio::test]
async fn test_departures_unknown_date_is_empty() {
    let app = app();
    let (status, body) = get(&app, "/api/schedule/2027-01-02/departures").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["departures"], json!([]));
}

#[tokio::test]
async fn test_departures_malformed_date_is_bad_request() {
    let app = app();
    let (status, body) = get(&app, "/api/schedule/January-2/departures").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "bad_request");
}

#[tokio::test]
async fn test_future_stops() {
    let app = app();
    let (status, body) = get(&app, "/api/schedule/2026-01-01/voyages/Europe%20A/stops").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["voyage"], "Europe A");
    assert_eq!(
        body["stops"][0],
        json!({ "date": "2026-01-02", "port": "Cherbourg, France" })
    );
}

#[tokio::test]
async fn test_future_stops_unknown_voyage_is_empty() {
    let app = app();
    let (status, body) = get(&app, "/api/schedule/2026-01-01/voyages/Pacific%20A/stops").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stops"], json!([]));
}

#[tokio::test]
async fn test_quote() {
    let app = app();
    let (status, body) = get(
        &app,
        "/api/routes/quote?departure_date=2026-01-01&arrival_date=2026-01-03&voyage=Americas%20A",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
    assert_eq!(body["nights"], 2);
    assert_eq!(body["cost"], json!({ "amount": "499.98", "currency": "USD" }));
    assert_eq!(body["nightly_rate"]["amount"], "249.99");
}

#[tokio::test]
async fn test_quote_invalid_route() {
    let app = app();
    let (status, body) = get(
        &app,
        "/api/routes/quote?departure_date=2026-01-01&arrival_date=2026-01-04&voyage=Europe%20B",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(body["cost"], Value::Null);
}

// ==================== accounts ====================

#[tokio::test]
async fn test_create_account_hides_password() {
    let app = app();
    sign_up(&app, "sailor_01").await;

    let (status, body) = get(&app, "/api/accounts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["username"], "sailor_01");
    assert!(body[0].get("password").is_none());
}

#[tokio::test]
async fn test_create_account_validation_errors() {
    let app = app();
    let (status, body) = post(
        &app,
        "/api/accounts",
        json!({ "username": "x", "email": "nope", "password": "weak", "confirm_password": "weak" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_type"], "validation");
    let fields = &body["details"]["fields"];
    assert!(fields.get("username").is_some());
    assert!(fields.get("email").is_some());
    assert!(fields.get("password").is_some());
}

#[tokio::test]
async fn test_create_account_duplicate_username() {
    let app = app();
    sign_up(&app, "sailor_01").await;
    let (status, body) = post(
        &app,
        "/api/accounts",
        json!({
            "username": "sailor_01",
            "email": "other@shipkeep.co",
            "password": "Seaworthy1",
            "confirm_password": "Seaworthy1",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error_type"], "conflict");
}

#[tokio::test]
async fn test_password_strength() {
    let app = app();
    let (status, body) = post(&app, "/api/accounts/password-strength", json!({ "password": "abc" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["strength"], "weak");
    assert_eq!(body["message"], "Weak password");
}

// ==================== bookings ====================

#[tokio::test]
async fn test_book_trip() {
    let app = app();
    let account_id = sign_up(&app, "sailor_01").await;

    let (status, body) = post(&app, "/api/bookings", lisbon_to_amsterdam(&account_id)).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["voyage"], "Europe B");
    assert_eq!(body["departure_port"], "Lisbon, Portugal");
    assert_eq!(body["arrival_port"], "Amsterdam, Netherlands");
    assert_eq!(body["nights"], 9);
    assert_eq!(body["cost"]["amount"], "2249.91");
    assert_eq!(body["account_id"], account_id.as_str());

    let (_, listed) = get(&app, &format!("/api/bookings?account_id={account_id}")).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_book_same_day_is_invalid_route() {
    let app = app();
    let account_id = sign_up(&app, "sailor_01").await;
    let mut request = lisbon_to_amsterdam(&account_id);
    request["departure_date"] = json!("2026-01-10");
    request["departure_port"] = json!("Amsterdam, Netherlands");

    let (status, body) = post(&app, "/api/bookings", request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_type"], "invalid_route");
    assert_eq!(
        body["message"],
        "Invalid route: arrival date must be after departure date"
    );
}

#[tokio::test]
async fn test_book_cross_voyage_transfer_rejected() {
    let app = app();
    let account_id = sign_up(&app, "sailor_01").await;
    let mut request = lisbon_to_amsterdam(&account_id);
    // Lisbon on 01-10 is Europe A, not Europe B
    request["arrival_port"] = json!("Lisbon, Portugal");

    let (status, body) = post(&app, "/api/bookings", request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_type"], "invalid_route");
}

#[tokio::test]
async fn test_book_missing_fields() {
    let app = app();
    let account_id = sign_up(&app, "sailor_01").await;

    let (status, body) = post(&app, "/api/bookings", json!({ "account_id": account_id })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields = &body["details"]["fields"];
    for field in ["passenger_name", "voyage", "departure_date", "departure_port", "arrival_date", "arrival_port"] {
        assert!(fields.get(field).is_some(), "missing error for {field}");
    }
}

#[tokio::test]
async fn test_book_unknown_account() {
    let app = app();
    let (status, body) = post(
        &app,
        "/api/bookings",
        lisbon_to_amsterdam("6f1c2a4e-0000-4000-8000-000000000000"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_type"], "not_found");
}

// ==================== admin ====================

#[tokio::test]
async fn test_admin_summary() {
    let app = app();
    let account_id = sign_up(&app, "sailor_01").await;
    sign_up(&app, "sailor_02").await;
    post(&app, "/api/bookings", lisbon_to_amsterdam(&account_id)).await;

    let mut second = lisbon_to_amsterdam(&account_id);
    second["arrival_date"] = json!("2026-01-02");
    second["arrival_port"] = json!("Cobh, Ireland");
    let (status, _) = post(&app, "/api/bookings", second).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, "/api/admin/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_accounts"], 2);
    assert_eq!(body["total_bookings"], 2);
    assert_eq!(body["total_revenue"], json!({ "amount": "2499.90", "currency": "USD" }));
}
