use std::str::FromStr;

use axum::{
    extract::{Form, Path, Query, State},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use shiftboard_staff::{DayStatus, RosterRow, SetOverrideInput, ShiftType};
use strum::VariantArray;
use time::{Date, Month, OffsetDateTime};

use crate::{
    auth::AdminSession,
    routes::AppState,
    template::{NotFoundTemplate, ServerTemplate, Template},
};

#[derive(askama::Template)]
#[template(path = "roster.html")]
pub struct RosterTemplate {
    pub month_label: String,
    pub prev_month: String,
    pub next_month: String,
    pub days: Vec<DayStatus>,
    pub rows: Vec<RosterRow>,
    pub logged_in: bool,
}

pub async fn index() -> Redirect {
    Redirect::to("/roster")
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub month: Option<String>,
}

#[tracing::instrument(skip_all)]
pub async fn page(
    template: Template,
    State(app): State<AppState>,
    jar: CookieJar,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let (year, month) = match query.month.as_deref().map(parse_month) {
        Some(Some(parsed)) => parsed,
        Some(None) => return template.render(NotFoundTemplate).into_response(),
        None => current_month(),
    };

    let (from, to) = month_bounds(year, month);
    let roster = crate::try_page_response!(app.staff_query.roster(from, to), template);
    let logged_in = crate::auth::session_user(&app.config, &jar).is_some();

    let (prev_year, prev) = previous(year, month);
    let (next_year, next) = next(year, month);

    template
        .render(RosterTemplate {
            month_label: format!("{month} {year}"),
            prev_month: month_param(prev_year, prev),
            next_month: month_param(next_year, next),
            days: roster.days,
            rows: roster.rows,
            logged_in,
        })
        .into_response()
}

#[tracing::instrument(skip_all, fields(user = user, staff = id, date = date))]
pub async fn quick_cycle(
    template: Template,
    AdminSession(user): AdminSession,
    State(app): State<AppState>,
    Path((id, date)): Path<(String, String)>,
) -> impl IntoResponse {
    match app.staff_command.quick_cycle(&id, &date).await {
        Ok(state) => {
            tracing::debug!(label = state.label, "shift state cycled");

            Redirect::to(&roster_url(&date)).into_response()
        }
        Err(shiftboard_shared::Error::NotFound) => {
            template.render(NotFoundTemplate).into_response()
        }
        Err(err) => {
            tracing::error!("{err}");

            template.render(ServerTemplate).into_response()
        }
    }
}

#[derive(askama::Template)]
#[template(path = "override-form.html")]
pub struct OverrideFormTemplate {
    pub staff_id: String,
    pub staff_name: String,
    pub date: String,
    pub month: String,
    pub start_time: String,
    pub end_time: String,
    pub is_day_off: bool,
    pub shift_type: String,
    pub shift_types: Vec<String>,
    pub error_message: Option<String>,
}

pub async fn override_page(
    template: Template,
    AdminSession(_): AdminSession,
    State(app): State<AppState>,
    Path((id, date)): Path<(String, String)>,
) -> impl IntoResponse {
    let staff = crate::try_page_response!(opt: app.staff_query.find(&id), template);

    let Ok(day) = shiftboard_shared::parse_date(&date) else {
        return template.render(NotFoundTemplate).into_response();
    };

    let rows = crate::try_page_response!(app.staff_query.overrides_for(&id, day, day), template);
    let row = rows.first();

    template
        .render(OverrideFormTemplate {
            staff_id: staff.id.to_owned(),
            staff_name: staff.name.to_owned(),
            date: shiftboard_shared::format_date(day),
            month: date.get(..7).unwrap_or_default().to_owned(),
            start_time: row
                .and_then(|r| r.start_time.to_owned())
                .unwrap_or_default(),
            end_time: row.and_then(|r| r.end_time.to_owned()).unwrap_or_default(),
            is_day_off: row.map(|r| r.is_day_off).unwrap_or_default(),
            shift_type: row
                .and_then(|r| r.shift_type.as_ref())
                .map(|t| t.0.to_string())
                .unwrap_or_default(),
            shift_types: ShiftType::VARIANTS.iter().map(|t| t.to_string()).collect(),
            error_message: None,
        })
        .into_response()
}

#[derive(Deserialize)]
pub struct OverrideActionInput {
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub is_day_off: Option<String>,
    #[serde(default)]
    pub shift_type: String,
}

#[tracing::instrument(skip_all, fields(user = user, staff = id, date = date))]
pub async fn override_action(
    template: Template,
    AdminSession(user): AdminSession,
    State(app): State<AppState>,
    Path((id, date)): Path<(String, String)>,
    Form(input): Form<OverrideActionInput>,
) -> impl IntoResponse {
    let shift_type = match input.shift_type.as_str() {
        "" => None,
        value => match ShiftType::from_str(value) {
            Ok(shift_type) => Some(shift_type),
            Err(_) => {
                return override_form_again(&template, &app, &id, &date, &input, "invalid shift type")
                    .await;
            }
        },
    };

    let result = app
        .staff_command
        .set_override(
            &id,
            SetOverrideInput {
                date: date.to_owned(),
                start_time: none_if_empty(&input.start_time),
                end_time: none_if_empty(&input.end_time),
                is_day_off: input.is_day_off.is_some(),
                shift_type,
            },
        )
        .await;

    match result {
        Ok(_) => Redirect::to(&roster_url(&date)).into_response(),
        Err(shiftboard_shared::Error::NotFound) => {
            template.render(NotFoundTemplate).into_response()
        }
        Err(
            err @ (shiftboard_shared::Error::Validate(_) | shiftboard_shared::Error::Server(_)),
        ) => override_form_again(&template, &app, &id, &date, &input, &err.to_string()).await,
        Err(err) => {
            tracing::error!("{err}");

            template.render(ServerTemplate).into_response()
        }
    }
}

#[tracing::instrument(skip_all, fields(user = user, staff = id, date = date))]
pub async fn override_clear(
    AdminSession(user): AdminSession,
    State(app): State<AppState>,
    Path((id, date)): Path<(String, String)>,
    template: Template,
) -> impl IntoResponse {
    match app.staff_command.clear_override(&id, &date).await {
        Ok(_) => Redirect::to(&roster_url(&date)).into_response(),
        Err(err) => {
            tracing::error!("{err}");

            template.render(ServerTemplate).into_response()
        }
    }
}

async fn override_form_again(
    template: &Template,
    app: &AppState,
    id: &str,
    date: &str,
    input: &OverrideActionInput,
    error: &str,
) -> axum::response::Response {
    let staff_name = match app.staff_query.find(id).await {
        Ok(Some(staff)) => staff.name,
        Ok(None) => return template.render(NotFoundTemplate),
        Err(err) => {
            tracing::error!("{err}");

            return template.render(ServerTemplate);
        }
    };

    template.render(OverrideFormTemplate {
        staff_id: id.to_owned(),
        staff_name,
        date: date.to_owned(),
        month: date.get(..7).unwrap_or_default().to_owned(),
        start_time: input.start_time.to_owned(),
        end_time: input.end_time.to_owned(),
        is_day_off: input.is_day_off.is_some(),
        shift_type: input.shift_type.to_owned(),
        shift_types: ShiftType::VARIANTS.iter().map(|t| t.to_string()).collect(),
        error_message: Some(error.to_owned()),
    })
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn roster_url(date: &str) -> String {
    match date.get(..7) {
        Some(month) => format!("/roster?month={month}"),
        None => "/roster".to_owned(),
    }
}

fn parse_month(value: &str) -> Option<(i32, Month)> {
    let (year, month) = value.split_once('-')?;
    let year = year.parse::<i32>().ok()?;

    if !(1970..=9999).contains(&year) {
        return None;
    }

    let month = Month::try_from(month.parse::<u8>().ok()?).ok()?;

    Some((year, month))
}

fn current_month() -> (i32, Month) {
    let today = OffsetDateTime::now_utc().date();

    (today.year(), today.month())
}

fn month_bounds(year: i32, month: Month) -> (Date, Date) {
    let last_day = time::util::days_in_year_month(year, month);
    let from = Date::from_calendar_date(year, month, 1).expect("first day of month");
    let to = Date::from_calendar_date(year, month, last_day).expect("last day of month");

    (from, to)
}

fn month_param(year: i32, month: Month) -> String {
    format!("{year:04}-{:02}", month as u8)
}

fn previous(year: i32, month: Month) -> (i32, Month) {
    match month {
        Month::January => (year - 1, Month::December),
        _ => (year, month.previous()),
    }
}

fn next(year: i32, month: Month) -> (i32, Month) {
    match month {
        Month::December => (year + 1, Month::January),
        _ => (year, month.next()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-01"), Some((2024, Month::January)));
        assert_eq!(parse_month("2024-13"), None);
        assert_eq!(parse_month("garbage"), None);
        assert_eq!(parse_month("10000-01"), None);
    }

    #[test]
    fn test_month_navigation_wraps_the_year() {
        assert_eq!(previous(2024, Month::January), (2023, Month::December));
        assert_eq!(next(2024, Month::December), (2025, Month::January));
        assert_eq!(next(2024, Month::June), (2024, Month::July));
    }

    #[test]
    fn test_month_bounds_cover_the_whole_month() {
        let (from, to) = month_bounds(2024, Month::February);

        assert_eq!(shiftboard_shared::format_date(from), "2024-02-01");
        assert_eq!(shiftboard_shared::format_date(to), "2024-02-29");
    }

    #[test]
    fn test_roster_url_narrows_to_the_month() {
        assert_eq!(roster_url("2024-01-15"), "/roster?month=2024-01");
        assert_eq!(roster_url("x"), "/roster");
    }
}
