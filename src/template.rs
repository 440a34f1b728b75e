use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Renders askama templates into responses; a failed render becomes a plain
/// 500 instead of a panic.
#[derive(Clone)]
pub struct Template;

impl Template {
    pub fn to_string<T: askama::Template>(&self, template: T) -> String {
        match template.render() {
            Ok(html) => html,
            Err(err) => format!("Failed to render template. Error: {err}"),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template. Error: {err}"),
            )
                .into_response(),
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Template)
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;

#[macro_export]
macro_rules! try_page_response {
    ($result:expr, $template:expr) => {
        match $result.await {
            Ok(r) => r,
            Err(err) => {
                tracing::error!("{err}");

                return $template
                    .render($crate::template::ServerTemplate)
                    .into_response();
            }
        }
    };

    (sync: $result:expr, $template:expr) => {
        match $result {
            Ok(r) => r,
            Err(err) => {
                tracing::error!("{err}");

                return $template
                    .render($crate::template::ServerTemplate)
                    .into_response();
            }
        }
    };

    (opt: $result:expr, $template:expr) => {
        match $result.await {
            Ok(Some(r)) => r,
            Ok(_) => {
                return $template
                    .render($crate::template::NotFoundTemplate)
                    .into_response();
            }
            Err(err) => {
                tracing::error!("{err}");

                return $template
                    .render($crate::template::ServerTemplate)
                    .into_response();
            }
        }
    };
}
