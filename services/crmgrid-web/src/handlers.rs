//! Route handlers
//!
//! Three CRM routes plus a health probe. Every CRM route is guarded by the
//! credential check and never propagates an error past its HTTP response.

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crmgrid_core::mapper;

use crate::render::{self, FormView, ListView};
use crate::state::AppState;

const LIST_TITLE: &str = "Custom Object List";
const FORM_TITLE: &str = "Create Custom Object";

const MISSING_TOKEN_MESSAGE: &str =
    "Missing access token. Set CRMGRID_ACCESS_TOKEN in the environment or your .env file.";

/// Build the application router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_records))
        .route("/update-cobj", get(show_create_form).post(submit_create_form))
        .route("/health", get(health))
        .with_state(state)
}

/// GET / - record table
async fn list_records(State(state): State<Arc<AppState>>) -> Response {
    let Some(client) = state.client.as_ref() else {
        return missing_token_response();
    };

    let columns = state.resolver.resolve(client, &state.object_type).await;
    match client.fetch_records(&state.object_type, &columns).await {
        Ok(records) => {
            let view = ListView {
                title: LIST_TITLE.to_string(),
                records: mapper::display_rows(&columns, &records),
                columns,
                error: None,
            };
            Html(render::list_page(&view)).into_response()
        }
        Err(err) => {
            let view = ListView {
                title: LIST_TITLE.to_string(),
                records: Vec::new(),
                columns,
                error: Some(err.to_string()),
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render::list_page(&view)),
            )
                .into_response()
        }
    }
}

/// GET /update-cobj - create form
async fn show_create_form(State(state): State<Arc<AppState>>) -> Response {
    let Some(client) = state.client.as_ref() else {
        return missing_token_response();
    };

    let fields = state.resolver.resolve(client, &state.object_type).await;
    let view = FormView {
        title: FORM_TITLE.to_string(),
        fields,
        error: None,
    };
    Html(render::form_page(&view)).into_response()
}

/// POST /update-cobj - create a record, then redirect to the list
async fn submit_create_form(
    State(state): State<Arc<AppState>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let Some(client) = state.client.as_ref() else {
        return missing_token_response();
    };

    let fields = state.resolver.resolve(client, &state.object_type).await;
    let properties = mapper::create_properties(&fields, &form);

    match client.create_record(&state.object_type, &properties).await {
        Ok(record) => {
            info!(record_id = %record.id, "record created");
            Redirect::to("/").into_response()
        }
        Err(err) => {
            let view = FormView {
                title: FORM_TITLE.to_string(),
                fields,
                error: Some(err.to_string()),
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render::form_page(&view)),
            )
                .into_response()
        }
    }
}

/// GET /health - health probe
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "crmgrid-web"
    }))
}

fn missing_token_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(render::message_page("Configuration error", MISSING_TOKEN_MESSAGE)),
    )
        .into_response()
}
