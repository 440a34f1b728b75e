use std::str::FromStr;

use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use shiftboard_staff::{
    CreateStaffInput, ShiftType, StaffRow, StaffStatus, UpdateStaffInput,
};
use strum::VariantArray;
use time::OffsetDateTime;

use crate::{
    auth::AdminSession,
    routes::AppState,
    template::{NotFoundTemplate, ServerTemplate, Template},
};

#[derive(askama::Template)]
#[template(path = "staff-list.html")]
pub struct StaffListTemplate {
    pub rows: Vec<StaffRow>,
}

pub async fn page(
    template: Template,
    AdminSession(_): AdminSession,
    State(app): State<AppState>,
) -> impl IntoResponse {
    let rows = crate::try_page_response!(app.staff_query.list(), template);

    template.render(StaffListTemplate { rows }).into_response()
}

#[derive(askama::Template)]
#[template(path = "staff-form.html")]
pub struct StaffFormTemplate {
    pub title: &'static str,
    pub action: String,
    pub name: String,
    pub role: String,
    pub status: String,
    pub shift_type: String,
    pub cycle_start: String,
    pub pattern_on: u32,
    pub pattern_off: u32,
    pub display_order: u32,
    pub statuses: Vec<String>,
    pub shift_types: Vec<String>,
    pub error_message: Option<String>,
}

fn variant_names<T: VariantArray + ToString>() -> Vec<String> {
    T::VARIANTS.iter().map(|v| v.to_string()).collect()
}

impl StaffFormTemplate {
    fn create_defaults() -> Self {
        Self {
            title: "Add staff member",
            action: "/staff/create".to_owned(),
            name: String::new(),
            role: String::new(),
            status: StaffStatus::Permanent.to_string(),
            shift_type: ShiftType::Normal.to_string(),
            cycle_start: shiftboard_shared::format_date(OffsetDateTime::now_utc().date()),
            pattern_on: 5,
            pattern_off: 2,
            display_order: 0,
            statuses: variant_names::<StaffStatus>(),
            shift_types: variant_names::<ShiftType>(),
            error_message: None,
        }
    }

    fn from_input(title: &'static str, action: String, input: &StaffFormInput) -> Self {
        Self {
            title,
            action,
            name: input.name.to_owned(),
            role: input.role.to_owned(),
            status: input.status.to_owned(),
            shift_type: input.shift_type.to_owned(),
            cycle_start: input.cycle_start.to_owned(),
            pattern_on: input.pattern_on,
            pattern_off: input.pattern_off,
            display_order: input.display_order,
            statuses: variant_names::<StaffStatus>(),
            shift_types: variant_names::<ShiftType>(),
            error_message: None,
        }
    }

    fn from_row(row: &StaffRow) -> Self {
        Self {
            title: "Edit staff member",
            action: format!("/staff/edit/{}", row.id),
            name: row.name.to_owned(),
            role: row.role.to_owned(),
            status: row.status.0.to_string(),
            shift_type: row.shift_type.0.to_string(),
            cycle_start: row.cycle_start.to_owned(),
            pattern_on: row.pattern_on,
            pattern_off: row.pattern_off,
            display_order: row.display_order,
            statuses: variant_names::<StaffStatus>(),
            shift_types: variant_names::<ShiftType>(),
            error_message: None,
        }
    }
}

pub async fn create_page(template: Template, AdminSession(_): AdminSession) -> impl IntoResponse {
    template.render(StaffFormTemplate::create_defaults())
}

#[derive(Deserialize)]
pub struct StaffFormInput {
    pub name: String,
    #[serde(default)]
    pub role: String,
    pub status: String,
    pub shift_type: String,
    pub cycle_start: String,
    pub pattern_on: u32,
    pub pattern_off: u32,
    #[serde(default)]
    pub display_order: u32,
}

enum ParsedForm {
    Ok {
        status: StaffStatus,
        shift_type: ShiftType,
    },
    Invalid(&'static str),
}

fn parse_form(input: &StaffFormInput) -> ParsedForm {
    let Ok(status) = StaffStatus::from_str(&input.status) else {
        return ParsedForm::Invalid("invalid status");
    };

    let Ok(shift_type) = ShiftType::from_str(&input.shift_type) else {
        return ParsedForm::Invalid("invalid shift type");
    };

    ParsedForm::Ok { status, shift_type }
}

#[tracing::instrument(skip_all, fields(user = user))]
pub async fn create_action(
    template: Template,
    AdminSession(user): AdminSession,
    State(app): State<AppState>,
    Form(input): Form<StaffFormInput>,
) -> impl IntoResponse {
    let (status, shift_type) = match parse_form(&input) {
        ParsedForm::Ok { status, shift_type } => (status, shift_type),
        ParsedForm::Invalid(message) => {
            return template.render(StaffFormTemplate {
                error_message: Some(message.to_owned()),
                ..StaffFormTemplate::from_input("Add staff member", "/staff/create".to_owned(), &input)
            });
        }
    };

    let result = app
        .staff_command
        .create(CreateStaffInput {
            name: input.name.to_owned(),
            role: input.role.to_owned(),
            status,
            shift_type,
            cycle_start: input.cycle_start.to_owned(),
            pattern_on: input.pattern_on,
            pattern_off: input.pattern_off,
            display_order: input.display_order,
        })
        .await;

    match result {
        Ok(id) => {
            tracing::debug!(id, "staff member created");

            Redirect::to("/staff").into_response()
        }
        Err(
            err @ (shiftboard_shared::Error::Validate(_) | shiftboard_shared::Error::Server(_)),
        ) => template.render(StaffFormTemplate {
            error_message: Some(err.to_string()),
            ..StaffFormTemplate::from_input("Add staff member", "/staff/create".to_owned(), &input)
        }),
        Err(err) => {
            tracing::error!("{err}");

            template.render(ServerTemplate)
        }
    }
}

pub async fn edit_page(
    template: Template,
    AdminSession(_): AdminSession,
    State(app): State<AppState>,
    Path((id,)): Path<(String,)>,
) -> impl IntoResponse {
    let row = crate::try_page_response!(opt: app.staff_query.find(&id), template);

    template
        .render(StaffFormTemplate::from_row(&row))
        .into_response()
}

#[tracing::instrument(skip_all, fields(user = user, staff = id))]
pub async fn edit_action(
    template: Template,
    AdminSession(user): AdminSession,
    State(app): State<AppState>,
    Path((id,)): Path<(String,)>,
    Form(input): Form<StaffFormInput>,
) -> impl IntoResponse {
    let action = format!("/staff/edit/{id}");

    let (status, shift_type) = match parse_form(&input) {
        ParsedForm::Ok { status, shift_type } => (status, shift_type),
        ParsedForm::Invalid(message) => {
            return template.render(StaffFormTemplate {
                error_message: Some(message.to_owned()),
                ..StaffFormTemplate::from_input("Edit staff member", action, &input)
            });
        }
    };

    let result = app
        .staff_command
        .update(
            &id,
            UpdateStaffInput {
                name: input.name.to_owned(),
                role: input.role.to_owned(),
                status,
                shift_type,
                cycle_start: input.cycle_start.to_owned(),
                pattern_on: input.pattern_on,
                pattern_off: input.pattern_off,
                display_order: input.display_order,
            },
        )
        .await;

    match result {
        Ok(_) => Redirect::to("/staff").into_response(),
        Err(shiftboard_shared::Error::NotFound) => template.render(NotFoundTemplate),
        Err(
            err @ (shiftboard_shared::Error::Validate(_) | shiftboard_shared::Error::Server(_)),
        ) => template.render(StaffFormTemplate {
            error_message: Some(err.to_string()),
            ..StaffFormTemplate::from_input("Edit staff member", action, &input)
        }),
        Err(err) => {
            tracing::error!("{err}");

            template.render(ServerTemplate)
        }
    }
}

#[tracing::instrument(skip_all, fields(user = user, staff = id))]
pub async fn delete_action(
    template: Template,
    AdminSession(user): AdminSession,
    State(app): State<AppState>,
    Path((id,)): Path<(String,)>,
) -> impl IntoResponse {
    match app.staff_command.delete(&id).await {
        Ok(_) => Redirect::to("/staff").into_response(),
        Err(shiftboard_shared::Error::NotFound) => template.render(NotFoundTemplate),
        Err(err) => {
            tracing::error!("{err}");

            template.render(ServerTemplate)
        }
    }
}
