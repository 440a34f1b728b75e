use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

use crate::{auth, routes::AppState, template::Template};

#[derive(askama::Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error_message: Option<String>,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(LoginTemplate {
        error_message: None,
    })
}

#[derive(Deserialize)]
pub struct ActionInput {
    pub username: String,
    pub password: String,
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    jar: CookieJar,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    // Single administrator account, compared verbatim against configuration.
    if input.username != app.config.auth.username || input.password != app.config.auth.password {
        return template
            .render(LoginTemplate {
                error_message: Some("Invalid credentials".to_owned()),
            })
            .into_response();
    }

    let token = match auth::issue_session(
        &app.config.auth.session_secret,
        &input.username,
        app.config.auth.session_hours,
    ) {
        Ok(token) => token,
        Err(err) => {
            tracing::error!("{err}");

            return template
                .render(LoginTemplate {
                    error_message: Some(crate::template::SERVER_ERROR_MESSAGE.to_owned()),
                })
                .into_response();
        }
    };

    let mut cookie = Cookie::new(auth::SESSION_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);

    (jar.add(cookie), Redirect::to("/roster")).into_response()
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let mut cookie = Cookie::from(auth::SESSION_COOKIE);
    cookie.set_path("/");

    (jar.remove(cookie), Redirect::to("/login"))
}
