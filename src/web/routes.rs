use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Form;
use axum::Json;
use axum::Router;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::forms::{KeywordForm, RelatedForm, ValidationError};
use super::pages;
use super::AppState;
use crate::components::NavItem;
use crate::pipeline::{run_keyword_search, run_related_search, PipelineError};

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(keyword_page).post(keyword_submit))
        .route("/related", get(related_page).post(related_submit))
        .route("/api/keyword", get(api_keyword))
        .route("/api/related", get(api_related))
        .route("/healthz", get(health))
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Query parameters of the form pages; `error` is set after a rejected submission.
#[derive(Debug, Default, Deserialize)]
pub struct FormPageParams {
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn redirect_with_error(path: &str, err: &ValidationError) -> Response {
    let target = format!("{path}?error={}", urlencoding::encode(&err.to_string()));
    Redirect::to(&target).into_response()
}

fn failure_status(err: &PipelineError) -> StatusCode {
    match err {
        PipelineError::Upstream(_) => StatusCode::BAD_GATEWAY,
        PipelineError::Merge(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn failure_page(err: &PipelineError, back: NavItem) -> Response {
    let status = failure_status(err);
    let html = pages::render_error_page("Search failed", &err.to_string(), back);
    (status, Html(html.into_string())).into_response()
}

fn json_error(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

// ========== Keyword Search ==========

async fn keyword_page(Query(params): Query<FormPageParams>) -> Response {
    let form = KeywordForm::with_defaults(today());
    let html = pages::render_keyword_page(&form, params.error.as_deref(), None);
    Html(html.into_string()).into_response()
}

async fn keyword_submit(State(state): State<AppState>, Form(form): Form<KeywordForm>) -> Response {
    let params = match form.validate() {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected keyword search form");
            return redirect_with_error("/", &e);
        }
    };

    match run_keyword_search(state.api.as_ref(), &params).await {
        Ok(rows) => {
            let html = pages::render_keyword_page(&form, None, Some(&rows));
            Html(html.into_string()).into_response()
        }
        Err(e) => {
            tracing::error!(keyword = %params.keyword, "Keyword search failed: {e}");
            failure_page(&e, NavItem::Keyword)
        }
    }
}

// ========== Related Search ==========

async fn related_page(Query(params): Query<FormPageParams>) -> Response {
    let form = RelatedForm::with_defaults(today());
    let html = pages::render_related_page(&form, params.error.as_deref(), None);
    Html(html.into_string()).into_response()
}

async fn related_submit(State(state): State<AppState>, Form(form): Form<RelatedForm>) -> Response {
    let params = match form.validate() {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected related search form");
            return redirect_with_error("/related", &e);
        }
    };

    match run_related_search(state.api.as_ref(), &params).await {
        Ok(rows) => {
            let html = pages::render_related_page(&form, None, Some(&rows));
            Html(html.into_string()).into_response()
        }
        Err(e) => {
            tracing::error!(my_channel_id = %params.my_channel_id, "Related search failed: {e}");
            failure_page(&e, NavItem::Related)
        }
    }
}

// ========== JSON API ==========

async fn api_keyword(State(state): State<AppState>, Query(form): Query<KeywordForm>) -> Response {
    let params = match form.validate() {
        Ok(p) => p,
        Err(e) => return json_error(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match run_keyword_search(state.api.as_ref(), &params).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            tracing::error!(keyword = %params.keyword, "Keyword search failed: {e}");
            json_error(failure_status(&e), e.to_string())
        }
    }
}

async fn api_related(State(state): State<AppState>, Query(form): Query<RelatedForm>) -> Response {
    let params = match form.validate() {
        Ok(p) => p,
        Err(e) => return json_error(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match run_related_search(state.api.as_ref(), &params).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            tracing::error!(my_channel_id = %params.my_channel_id, "Related search failed: {e}");
            json_error(failure_status(&e), e.to_string())
        }
    }
}

async fn health() -> &'static str {
    "OK"
}
