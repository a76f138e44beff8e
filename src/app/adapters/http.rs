//! HTTP transport over the catalog
//!
//! Handlers only translate query strings into engine calls and results into
//! JSON. Malformed numeric parameters fall back to their defaults instead of
//! rejecting the request.

use crate::app::services::catalog::Catalog;
use crate::app::services::query_engine::SurveyQuery;
use crate::config::ServerConfig;
use crate::constants::DEFAULT_PAGE;
use crate::{Error, Result};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    default_limit: usize,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, default_limit: usize) -> Self {
        Self {
            catalog,
            default_limit,
        }
    }
}

/// Raw query string pairs; repeated keys are kept
type QueryPairs = Vec<(String, String)>;

/// Build the router for every read endpoint
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/data", get(query_surveys))
        .route("/graph", get(fish_count_graph))
        .route("/counties", get(list_counties))
        .route("/counties/:id", get(county_by_id))
        .route("/counties/:id/stats", get(county_stats))
        .route("/species", get(list_species))
        .route("/species/:id/stats", get(species_stats))
        .with_state(state)
}

/// Serve the catalog until `shutdown` is cancelled
///
/// # Errors
/// * Returns `Error::Io` if the address cannot be bound or the server fails
pub async fn serve(
    catalog: Arc<Catalog>,
    config: &ServerConfig,
    shutdown: CancellationToken,
) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| Error::io(format!("Failed to bind {}", config.bind_addr), e))?;
    info!("Listening on http://{}", config.bind_addr);

    let app = router(AppState::new(catalog, config.default_limit));
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| Error::io("HTTP server failed", e))?;

    info!("HTTP server stopped");
    Ok(())
}

/// Translate `/data` parameters into a survey query
///
/// `species`, `county` and `lake` may repeat. Unparseable years become 0,
/// and an unparseable or non-positive limit or page becomes its default.
pub fn survey_query_from_params(params: &[(String, String)], default_limit: usize) -> SurveyQuery {
    let mut query = SurveyQuery::new().with_page(DEFAULT_PAGE, default_limit);

    for (key, value) in params {
        match key.as_str() {
            "species" => query.species.push(value.clone()),
            "county" => query.counties.push(value.clone()),
            "lake" => query.lakes.push(value.clone()),
            "minYear" => query.min_year = value.trim().parse().unwrap_or(0),
            "maxYear" => query.max_year = value.trim().parse().unwrap_or(0),
            "sort_by" => query.sort_by = value.clone(),
            "order" => query.order = value.clone(),
            "game_fish" => query.game_fish_only = is_truthy(value),
            "search" => query.search = value.clone(),
            "limit" => query.limit = positive_or(value, default_limit),
            "page" => query.page = positive_or(value, DEFAULT_PAGE),
            _ => {}
        }
    }

    query
}

fn positive_or(value: &str, default: usize) -> usize {
    match value.trim().parse::<usize>() {
        Ok(parsed) if parsed > 0 => parsed,
        _ => default,
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(name, value)| name == key && !value.is_empty())
        .map(|(_, value)| value.as_str())
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn found<T: Serialize>(value: Option<T>, message: &str) -> Response {
    match value {
        Some(value) => Json(value).into_response(),
        None => error_response(StatusCode::NOT_FOUND, message),
    }
}

async fn query_surveys(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Response {
    let query = survey_query_from_params(&params, state.default_limit);
    debug!("GET /data {:?}", query);
    Json(state.catalog.filter_and_sort(&query)).into_response()
}

async fn fish_count_graph(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Response {
    let (Some(dow), Some(species), Some(date)) = (
        first_param(&params, "dow"),
        first_param(&params, "species"),
        first_param(&params, "date"),
    ) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Missing request query parameters: dow, species, or date",
        );
    };

    let data = dow
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|dow| state.catalog.fish_count_data(dow, species, date));
    found(data, "No data found for the specified parameters")
}

async fn list_counties(State(state): State<AppState>) -> Response {
    Json(json!({ "data": state.catalog.list_counties() })).into_response()
}

async fn county_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    found(state.catalog.county_by_id(&id), "County not found")
}

async fn county_stats(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    found(state.catalog.county_stats_by_id(&id), "County not found")
}

async fn list_species(State(state): State<AppState>) -> Response {
    Json(json!({ "data": state.catalog.list_species() })).into_response()
}

async fn species_stats(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    found(state.catalog.species_stats_by_id(&id), "Species not found")
}
