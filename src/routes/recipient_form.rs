use std::sync::Arc;

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use rinja_axum::Template;

use crate::{
    domain::{RecipientField, RecipientFormData, RecipientId},
    form::{FormError, FormMode, RECIPIENT_NOT_LOADED, RecipientForm},
    navigation::{HxRedirect, RECIPIENT_LIST_ROUTE},
    notification::{Notifier, Toast, Toasts},
    startup::AppState,
};

pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub pattern: &'static str,
    pub max_length: &'static str,
    pub input_mode: &'static str,
    pub value: String,
    pub error: String,
    pub has_error: bool,
}

impl FieldView {
    fn new(field: RecipientField, form: &RecipientForm) -> Self {
        let (input_type, placeholder) = match field {
            RecipientField::Name => ("text", "Recipient name"),
            RecipientField::Street => ("text", "Recipient street"),
            RecipientField::Number => ("number", "house number"),
            RecipientField::Complement => ("text", ""),
            RecipientField::City => ("text", "Recipient city"),
            RecipientField::State => ("text", "Recipient state"),
            RecipientField::ZipCode => ("text", "_____-___"),
        };
        // the zip-code input mirrors the 99999-999 mask
        let (pattern, max_length, input_mode) = match field {
            RecipientField::ZipCode => ("[0-9]{5}-[0-9]{3}", "9", "numeric"),
            _ => ("", "", ""),
        };
        let error = form.errors().get(field);
        Self {
            name: field.as_str(),
            label: field.label(),
            input_type,
            placeholder,
            pattern,
            max_length,
            input_mode,
            value: form.data().value(field).to_string(),
            error: error.unwrap_or_default().to_string(),
            has_error: error.is_some(),
        }
    }
}

#[derive(Template)]
#[template(path = "recipient_form.html")]
struct RecipientFormPage {
    title: &'static str,
    list_route: &'static str,
    action: String,
    fields: Vec<FieldView>,
    toasts: Vec<Toast>,
}

#[derive(Template)]
#[template(path = "recipient_form_fields.html")]
struct RecipientFormFields {
    action: String,
    fields: Vec<FieldView>,
    toasts: Vec<Toast>,
}

fn form_action(form: &RecipientForm) -> String {
    match form.mode() {
        FormMode::Create => RECIPIENT_LIST_ROUTE.to_string(),
        FormMode::Edit(id) => format!("{}/{}", RECIPIENT_LIST_ROUTE, id),
    }
}

fn field_views(form: &RecipientForm) -> Vec<FieldView> {
    RecipientField::ALL
        .iter()
        .map(|field| FieldView::new(*field, form))
        .collect()
}

fn render_page(form: &RecipientForm, toasts: Toasts) -> Result<Html<String>, RecipientPageError> {
    let page = RecipientFormPage {
        title: "Recipient register",
        list_route: RECIPIENT_LIST_ROUTE,
        action: form_action(form),
        fields: field_views(form),
        toasts: toasts.into_vec(),
    };
    page.render()
        .map(Html)
        .map_err(|e| RecipientPageError::Render(e.to_string()))
}

fn render_fields(
    form: &RecipientForm,
    toasts: Toasts,
) -> Result<Html<String>, RecipientPageError> {
    let fragment = RecipientFormFields {
        action: form_action(form),
        fields: field_views(form),
        toasts: toasts.into_vec(),
    };
    fragment
        .render()
        .map(Html)
        .map_err(|e| RecipientPageError::Render(e.to_string()))
}

#[tracing::instrument(name = "Rendering the new recipient page")]
pub async fn new_recipient_page() -> Result<impl IntoResponse, RecipientPageError> {
    let form = RecipientForm::new(None);
    render_page(&form, Toasts::new())
}

#[tracing::instrument(name = "Rendering the edit recipient page", skip(app_state))]
pub async fn edit_recipient_page(
    State(app_state): State<Arc<AppState>>,
    Path(recipient_id): Path<String>,
) -> Result<impl IntoResponse, RecipientPageError> {
    let recipient_id = RecipientId::parse(recipient_id).map_err(RecipientPageError::InvalidId)?;

    let mut form = RecipientForm::new(Some(recipient_id));
    let mut toasts = Toasts::new();
    let status = match form.load(&app_state.api_client).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::error!("{}", e);
            toasts.error(RECIPIENT_NOT_LOADED);
            load_failure_status(&e)
        }
    };

    Ok((status, render_page(&form, toasts)?))
}

fn load_failure_status(error: &FormError) -> StatusCode {
    match error {
        FormError::Load { source, .. } if source.status() == Some(StatusCode::NOT_FOUND) => {
            StatusCode::NOT_FOUND
        }
        _ => StatusCode::BAD_GATEWAY,
    }
}

#[tracing::instrument(
    name = "Registering a new recipient",
    skip(form_data, app_state),
    fields(recipient_name = %form_data.name)
)]
pub async fn submit_new_recipient(
    State(app_state): State<Arc<AppState>>,
    Form(form_data): Form<RecipientFormData>,
) -> Result<Response, RecipientPageError> {
    submit(RecipientForm::new(None), form_data, &app_state).await
}

#[tracing::instrument(
    name = "Updating a recipient",
    skip(form_data, app_state),
    fields(recipient_name = %form_data.name)
)]
pub async fn submit_recipient_update(
    State(app_state): State<Arc<AppState>>,
    Path(recipient_id): Path<String>,
    Form(form_data): Form<RecipientFormData>,
) -> Result<Response, RecipientPageError> {
    let recipient_id = RecipientId::parse(recipient_id).map_err(RecipientPageError::InvalidId)?;
    submit(RecipientForm::new(Some(recipient_id)), form_data, &app_state).await
}

async fn submit(
    mut form: RecipientForm,
    form_data: RecipientFormData,
    app_state: &AppState,
) -> Result<Response, RecipientPageError> {
    let mut navigator = HxRedirect::new();
    let mut toasts = Toasts::new();

    // a failed save keeps the submitted values so the user can retry
    let status = match form
        .submit(form_data, &app_state.api_client, &mut navigator, &mut toasts)
        .await
    {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("{}", e);
            StatusCode::BAD_GATEWAY
        }
    };

    let fragment = render_fields(&form, toasts)?;
    Ok(match navigator.location() {
        Some(location) => (
            status,
            [("HX-Redirect", location.to_string())],
            fragment,
        )
            .into_response(),
        None => (status, fragment).into_response(),
    })
}

#[derive(thiserror::Error, Debug)]
pub enum RecipientPageError {
    #[error("invalid recipient id, {0}")]
    InvalidId(String),
    #[error("couldn't render the recipient form, {0}")]
    Render(String),
}

impl IntoResponse for RecipientPageError {
    fn into_response(self) -> Response {
        match self {
            RecipientPageError::InvalidId(e) => {
                tracing::error!("{}", e);
                StatusCode::BAD_REQUEST.into_response()
            }
            RecipientPageError::Render(e) => {
                tracing::error!("{}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
