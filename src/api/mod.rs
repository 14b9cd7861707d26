mod input;

pub use input::{
    InvestmentPayload, MAX_DURATION_YEARS, ProjectArgs, build_input, default_args_for_api,
    input_from_payload,
};

use axum::{
    Router,
    extract::{
        Json, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use log::{debug, info, warn};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::core::{
    InputStore, InvestmentInput, InvestmentYearRecord, LedgerSummary,
    calculate_investment_results, summarize_ledger,
};
use crate::error::InputError;

#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<InputStore>,
}

#[derive(Debug, Serialize)]
struct InputResponse {
    input: Option<InvestmentInput>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub input: Option<InvestmentInput>,
    pub years: Vec<InvestmentYearRecord>,
    pub summary: Option<LedgerSummary>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/input",
            get(get_input_handler)
                .post(submit_input_handler)
                .delete(clear_input_handler),
        )
        .route("/api/results", get(results_handler))
        .route(
            "/api/calculate",
            get(calculate_get_handler).post(calculate_post_handler),
        )
        .fallback(not_found_handler)
        .with_state(state)
}

pub async fn run_http_server(host: &str, port: u16) -> std::io::Result<()> {
    let listener = bind_listener(host, port).await?;
    let app = router(AppState::default());
    axum::serve(listener, app).await
}

/// Accepts hostnames (`localhost`) as well as bare IPv4/IPv6 addresses.
async fn bind_listener(host: &str, port: u16) -> std::io::Result<TcpListener> {
    let listener = TcpListener::bind((host, port)).await?;
    info!("Investment API listening on {}", listener.local_addr()?);
    Ok(listener)
}

/// Builds the ledger for `input`; no input means nothing to display.
pub fn build_projection_response(input: Option<InvestmentInput>) -> ProjectionResponse {
    let years = input
        .as_ref()
        .map(calculate_investment_results)
        .unwrap_or_default();
    let summary = summarize_ledger(&years);
    debug!("projected {} year(s)", years.len());
    ProjectionResponse {
        input,
        years,
        summary,
    }
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn get_input_handler(State(state): State<AppState>) -> Response {
    json_response(
        StatusCode::OK,
        InputResponse {
            input: state.store.get(),
        },
    )
}

async fn submit_input_handler(
    State(state): State<AppState>,
    payload: Result<Json<InvestmentPayload>, JsonRejection>,
) -> Response {
    let input = match json_payload(payload).and_then(input_from_payload) {
        Ok(input) => input,
        Err(e) => return input_error_response(&e),
    };
    state.store.set(input);
    info!(
        "stored input: initial={} annual={} return={}% duration={}y",
        input.initial_investment,
        input.annual_investment,
        input.expected_return_percent,
        input.investment_duration_years
    );
    json_response(StatusCode::OK, InputResponse { input: Some(input) })
}

async fn clear_input_handler(State(state): State<AppState>) -> Response {
    state.store.clear();
    info!("cleared stored input");
    with_cache_control(StatusCode::NO_CONTENT)
}

async fn results_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, build_projection_response(state.store.get()))
}

async fn calculate_get_handler(
    payload: Result<Query<InvestmentPayload>, QueryRejection>,
) -> Response {
    let payload = payload
        .map(|Query(payload)| payload)
        .map_err(|rejection| InputError::Payload(rejection.body_text()));
    calculate_handler_impl(payload)
}

async fn calculate_post_handler(
    payload: Result<Json<InvestmentPayload>, JsonRejection>,
) -> Response {
    calculate_handler_impl(json_payload(payload))
}

fn json_payload(
    payload: Result<Json<InvestmentPayload>, JsonRejection>,
) -> Result<InvestmentPayload, InputError> {
    payload
        .map(|Json(payload)| payload)
        .map_err(|rejection| InputError::Payload(rejection.body_text()))
}

fn calculate_handler_impl(payload: Result<InvestmentPayload, InputError>) -> Response {
    match payload.and_then(input_from_payload) {
        Ok(input) => json_response(StatusCode::OK, build_projection_response(Some(input))),
        Err(e) => input_error_response(&e),
    }
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

fn input_error_response(err: &InputError) -> Response {
    warn!("rejected input: {err}");
    error_response(StatusCode::BAD_REQUEST, &err.to_string())
}
