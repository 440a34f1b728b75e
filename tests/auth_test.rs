use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use temp_dir::TempDir;
use tower::ServiceExt;

mod helpers;

#[tokio::test]
async fn test_login_rejects_wrong_credentials() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let app = shiftboard::routes::router(state);

    let body = serde_urlencoded::to_string([("username", "admin"), ("password", "wrong")])?;
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    let html = String::from_utf8(response.into_body().collect().await?.to_bytes().to_vec())?;
    assert!(html.contains("Invalid credentials"));

    Ok(())
}

#[tokio::test]
async fn test_login_sets_a_session_cookie() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let app = shiftboard::routes::router(state);

    let body = serde_urlencoded::to_string([
        ("username", helpers::ADMIN_USERNAME),
        ("password", helpers::ADMIN_PASSWORD),
    ])?;
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/roster");

    let cookie = response.headers()[header::SET_COOKIE].to_str()?;
    assert!(cookie.starts_with(shiftboard::auth::SESSION_COOKIE));
    assert!(cookie.contains("HttpOnly"));

    Ok(())
}

#[tokio::test]
async fn test_admin_pages_redirect_anonymous_visitors() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let app = shiftboard::routes::router(state);

    let response = app
        .oneshot(Request::builder().uri("/staff").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");

    Ok(())
}

#[tokio::test]
async fn test_roster_is_public() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let app = shiftboard::routes::router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/roster?month=2024-01")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}
