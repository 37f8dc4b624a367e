//! HTTP surface for the analytics engine.
//!
//! Every route is a GET that maps 1:1 onto an [`AnalyticsEngine`] facet or
//! the bulk reload. Errors are answered as `{message, error}` JSON.

use crate::adapters::HttpSeedPipeline;
use crate::config::AppConfig;
use crate::core::seed::SeedEngine;
use crate::core::{
    AnalyticsEngine, CategoryCount, CombinedReport, PriceRangeCount, SaleRecord, SaleStore,
    SalesQuery, Statistics,
};
use crate::utils::error::AnalyticsError;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub struct AppState<S: SaleStore> {
    pub engine: AnalyticsEngine<S>,
    pub config: Arc<AppConfig>,
}

impl<S: SaleStore> AppState<S> {
    pub fn new(store: Arc<S>, config: AppConfig) -> Self {
        Self {
            engine: AnalyticsEngine::new(store),
            config: Arc::new(config),
        }
    }
}

impl<S: SaleStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

/// Failure answered to the client.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    detail: Option<String>,
}

impl ApiError {
    fn engine(message: &str, err: AnalyticsError) -> Self {
        tracing::error!("{}: {} ({})", message, err, err.recovery_suggestion());
        Self {
            status: StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message: message.to_string(),
            detail: Some(err.to_string()),
        }
    }

    fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
            detail: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.detail {
            Some(detail) => json!({ "message": self.message, "error": detail }),
            None => json!({ "message": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

#[derive(Debug, Default, Deserialize)]
struct MonthParams {
    month: Option<String>,
}

pub fn router<S: SaleStore + 'static>(state: AppState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::<S>))
        .route("/api/initialize", get(initialize::<S>))
        .route("/api/transactions", get(transactions::<S>))
        .route("/api/statistics", get(statistics::<S>))
        .route("/api/barchart", get(bar_chart::<S>))
        .route("/api/piechart", get(pie_chart::<S>))
        .route("/api/combined", get(combined::<S>))
        .layer(cors)
        .with_state(state)
}

async fn health<S: SaleStore + 'static>(State(state): State<AppState<S>>) -> ApiResult<Value> {
    let records = state
        .engine
        .store()
        .total_records()
        .await
        .map_err(|e| {
            let source = AnalyticsError::query("counting records")(e);
            ApiError::engine("Store unavailable", source)
        })?;

    Ok(Json(json!({ "status": "ok", "records": records })))
}

async fn initialize<S: SaleStore + 'static>(
    State(state): State<AppState<S>>,
) -> ApiResult<Value> {
    let pipeline = HttpSeedPipeline::new(Arc::clone(state.engine.store()), (*state.config).clone())
        .map_err(|e| ApiError::engine("Error initializing database", e))?;

    let report = SeedEngine::new(pipeline)
        .run()
        .await
        .map_err(|e| ApiError::engine("Error initializing database", e))?;

    Ok(Json(json!({
        "message": "Database initialized successfully",
        "recordsLoaded": report.records_loaded,
    })))
}

async fn transactions<S: SaleStore + 'static>(
    State(state): State<AppState<S>>,
    Query(query): Query<SalesQuery>,
) -> ApiResult<Vec<SaleRecord>> {
    state
        .engine
        .list_transactions(&query)
        .await
        .map(Json)
        .map_err(|e| ApiError::engine("Error fetching transactions", e))
}

async fn statistics<S: SaleStore + 'static>(
    State(state): State<AppState<S>>,
    Query(params): Query<MonthParams>,
) -> ApiResult<Statistics> {
    state
        .engine
        .statistics(params.month.as_deref())
        .await
        .map(Json)
        .map_err(|e| ApiError::engine("Error fetching statistics", e))
}

async fn bar_chart<S: SaleStore + 'static>(
    State(state): State<AppState<S>>,
    Query(params): Query<MonthParams>,
) -> ApiResult<Vec<PriceRangeCount>> {
    let Some(month) = params.month.as_deref().filter(|m| !m.trim().is_empty()) else {
        return Err(ApiError::bad_request("Month parameter is required"));
    };
    tracing::info!("Fetching bar chart data for month: {}", month);

    state
        .engine
        .price_histogram(Some(month))
        .await
        .map(Json)
        .map_err(|e| ApiError::engine("Error fetching bar chart data", e))
}

async fn pie_chart<S: SaleStore + 'static>(
    State(state): State<AppState<S>>,
    Query(params): Query<MonthParams>,
) -> ApiResult<Vec<CategoryCount>> {
    state
        .engine
        .category_breakdown(params.month.as_deref())
        .await
        .map(Json)
        .map_err(|e| ApiError::engine("Error fetching pie chart data", e))
}

async fn combined<S: SaleStore + 'static>(
    State(state): State<AppState<S>>,
    Query(query): Query<SalesQuery>,
) -> ApiResult<CombinedReport> {
    state
        .engine
        .combined(&query)
        .await
        .map(Json)
        .map_err(|e| ApiError::engine("Error fetching combined data", e))
}
