use axum::{
    RequestPartsExt,
    extract::FromRequestParts,
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::CookieJar;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

pub const SESSION_COOKIE: &str = "shiftboard_session";

#[derive(Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub exp: i64,
}

pub fn issue_session(secret: &str, username: &str, hours: i64) -> anyhow::Result<String> {
    let exp = (OffsetDateTime::now_utc() + Duration::hours(hours)).unix_timestamp();
    let claims = SessionClaims {
        sub: username.to_owned(),
        exp,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

pub fn verify_session(secret: &str, token: &str) -> Option<String> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims.sub)
    .ok()
}

pub fn session_user(config: &crate::Config, jar: &CookieJar) -> Option<String> {
    let cookie = jar.get(SESSION_COOKIE)?;

    verify_session(&config.auth.session_secret, cookie.value())
}

/// Guards mutating routes; anonymous visitors are sent to the login form.
pub struct AdminSession(pub String);

impl FromRequestParts<crate::routes::AppState> for AdminSession {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = parts
            .extract::<CookieJar>()
            .await
            .expect("cookie jar extraction is infallible");

        match session_user(&state.config, &jar) {
            Some(username) => Ok(AdminSession(username)),
            None => Err(Redirect::to("/login")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_minimum_32_characters_long";

    #[test]
    fn test_session_round_trip() {
        let token = issue_session(SECRET, "admin", 1).unwrap();

        assert_eq!(verify_session(SECRET, &token), Some("admin".to_owned()));
    }

    #[test]
    fn test_session_rejects_wrong_secret() {
        let token = issue_session(SECRET, "admin", 1).unwrap();

        assert!(verify_session("another_secret_that_is_long_enough_too", &token).is_none());
    }

    #[test]
    fn test_session_rejects_garbage() {
        assert!(verify_session(SECRET, "not-a-token").is_none());
    }
}
