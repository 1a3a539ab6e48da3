mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chrono::{DateTime, FixedOffset};
use serde_json::{Value, json};
use tower::ServiceExt;

use restaurant_api::{routes::build_app, state::AppState};

async fn app() -> anyhow::Result<(Router, AppState)> {
    let (state, config) = common::setup().await?;
    Ok((build_app(state.clone(), &config), state))
}

fn bearer(state: &AppState) -> anyhow::Result<String> {
    let pair = state.tokens.issue_pair("chef@example.com", "Chef", "Cook", "uid-1")?;
    Ok(format!("Bearer {}", pair.token))
}

async fn send(app: &Router, request: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, body))
}

fn timestamp(value: &Value) -> anyhow::Result<DateTime<FixedOffset>> {
    let raw = value
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("timestamp is not a string: {value}"))?;
    Ok(DateTime::parse_from_rfc3339(raw)?)
}

fn json_request(method: &str, uri: &str, body: Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))?)
}

#[tokio::test]
async fn health_is_public() -> anyhow::Result<()> {
    let (app, _) = app().await?;
    let (status, body) = send(&app, Request::get("/health").body(Body::empty())?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
    Ok(())
}

#[tokio::test]
async fn protected_routes_need_a_token() -> anyhow::Result<()> {
    let (app, _) = app().await?;
    let (status, body) = send(&app, Request::get("/table").body(Body::empty())?).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "No Authorization header provided" }));

    let request = Request::get("/table")
        .header(header::AUTHORIZATION, "Bearer not-a-jwt")
        .body(Body::empty())?;
    let (status, body) = send(&app, request).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn raw_token_header_is_accepted() -> anyhow::Result<()> {
    let (app, state) = app().await?;
    let pair = state.tokens.issue_pair("chef@example.com", "Chef", "Cook", "uid-1")?;
    let request = Request::get("/menu")
        .header("token", pair.token)
        .body(Body::empty())?;
    let (status, body) = send(&app, request).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn non_bearer_authorization_falls_back_to_token_header() -> anyhow::Result<()> {
    let (app, state) = app().await?;
    let pair = state.tokens.issue_pair("chef@example.com", "Chef", "Cook", "uid-1")?;
    let request = Request::get("/order")
        .header(header::AUTHORIZATION, "Basic Y2hlZjpzZWNyZXQ=")
        .header("token", pair.token)
        .body(Body::empty())?;
    let (status, _) = send(&app, request).await?;
    assert_eq!(status, StatusCode::OK);

    let request = Request::get("/order")
        .header(header::AUTHORIZATION, "Basic Y2hlZjpzZWNyZXQ=")
        .body(Body::empty())?;
    let (status, _) = send(&app, request).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() -> anyhow::Result<()> {
    let (app, state) = app().await?;
    let mut request = json_request("POST", "/table", json!({ "table_number": "seven" }))?;
    request
        .headers_mut()
        .insert(header::AUTHORIZATION, bearer(&state)?.parse()?);
    let (status, body) = send(&app, request).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let mut request = json_request(
        "POST",
        "/table",
        json!({ "table_number": 0, "number_of_guests": 2 }),
    )?;
    request
        .headers_mut()
        .insert(header::AUTHORIZATION, bearer(&state)?.parse()?);
    let (status, _) = send(&app, request).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn table_roundtrip_over_http() -> anyhow::Result<()> {
    let (app, state) = app().await?;
    let auth = bearer(&state)?;

    let mut request = json_request(
        "POST",
        "/table",
        json!({ "table_number": 4, "number_of_guests": 2 }),
    )?;
    request
        .headers_mut()
        .insert(header::AUTHORIZATION, auth.parse()?);
    let (status, body) = send(&app, request).await?;
    assert_eq!(status, StatusCode::OK);
    let table_id = body["inserted_id"].as_str().unwrap_or_default().to_string();
    assert_eq!(table_id.len(), 32);
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let mut request = json_request(
        "PATCH",
        &format!("/table/{table_id}"),
        json!({ "number_of_guests": 6 }),
    )?;
    request
        .headers_mut()
        .insert(header::AUTHORIZATION, auth.parse()?);
    let (status, body) = send(&app, request).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modified_count"], 1);

    let request = Request::get(format!("/table/{table_id}"))
        .header(header::AUTHORIZATION, auth.as_str())
        .body(Body::empty())?;
    let (status, body) = send(&app, request).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["table_number"], 4);
    assert_eq!(body["number_of_guests"], 6);

    let created = timestamp(&body["created_at"])?;
    let updated = timestamp(&body["updated_at"])?;
    assert!(updated > created);
    Ok(())
}

#[tokio::test]
async fn signup_then_login_then_use_the_token() -> anyhow::Result<()> {
    let (app, _) = app().await?;
    let signup = json!({
        "first_name": "Grace",
        "last_name": "Hopper",
        "email": "grace@example.com",
        "password": "cobol1959",
        "phone": "555-0100"
    });
    let (status, body) = send(&app, json_request("POST", "/user/signup", signup.clone())?).await?;
    assert_eq!(status, StatusCode::OK);
    let user_id = body["inserted_id"].as_str().unwrap_or_default().to_string();

    let (status, body) = send(&app, json_request("POST", "/user/signup", signup)?).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Email or phone already exists");

    let login = json!({ "email": "grace@example.com", "password": "cobol1959" });
    let (status, body) = send(&app, json_request("POST", "/user/login", login)?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["user_id"], user_id.as_str());
    assert!(body["user"].get("password_hash").is_none());
    let token = body["token"].as_str().unwrap_or_default().to_string();

    let request = Request::get("/food")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())?;
    let (status, body) = send(&app, request).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "total_count": 0, "food_items": [] }));

    let (status, body) = send(&app, Request::get("/user/").body(Body::empty())?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 1);
    Ok(())
}

#[tokio::test]
async fn unknown_paths_fall_through_to_not_found() -> anyhow::Result<()> {
    let (app, _) = app().await?;
    let (status, body) = send(&app, Request::get("/kitchen").body(Body::empty())?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not Found" }));
    Ok(())
}
