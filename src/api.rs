//! HTTP adapter over [`InventoryService`].
//!
//! - GET  /health
//! - GET  /api/v1/products?search&warehouse&status&offset&limit
//! - GET  /api/v1/products/:id
//! - PUT  /api/v1/products/:id/demand
//! - POST /api/v1/products/:id/transfer
//! - GET  /api/v1/warehouses
//! - GET  /api/v1/totals
//! - GET  /api/v1/kpis?range

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::path::Path as FsPath;
use std::str::FromStr;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use crate::domain::query::DEFAULT_LIMIT;
use crate::domain::{KpiPoint, ProductFilter, ProductPage, ProductView, StockStatus, Totals};
use crate::{InventoryError, InventoryService};

const DEFAULT_KPI_RANGE: i64 = 7;

/// API routes only, without middleware.
pub fn router(service: InventoryService) -> Router {
    Router::new()
        .route("/health", get(|| async { Json(serde_json::json!({"status": "healthy", "service": "inventory-visibility"})) }))
        .route("/api/v1/products", get(list_products))
        .route("/api/v1/products/:id", get(get_product))
        .route("/api/v1/products/:id/demand", put(update_demand))
        .route("/api/v1/products/:id/transfer", post(transfer_stock))
        .route("/api/v1/warehouses", get(list_warehouses))
        .route("/api/v1/totals", get(get_totals))
        .route("/api/v1/kpis", get(get_kpis))
        .with_state(service)
}

/// Full application: routes, tracing, CORS and, when given, the built client.
pub fn app(service: InventoryService, static_dir: Option<&FsPath>) -> Router {
    let mut app = router(service);
    if let Some(dir) = static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(dir).not_found_service(index));
    }
    app.layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive())
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let status = match self {
            InventoryError::NotFound(_) => StatusCode::NOT_FOUND,
            InventoryError::InsufficientStock { .. } | InventoryError::CapacityExceeded { .. } => StatusCode::CONFLICT,
            InventoryError::InvalidSeed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Query strings cannot tell an empty selection from an absent one; treat `key=` as absent.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => raw.parse().map(Some).map_err(de::Error::custom),
        _ => Ok(None),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub warehouse: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<StockStatus>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

/// Negative paging values act as zero.
fn non_negative(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

impl From<ListParams> for ProductFilter {
    fn from(p: ListParams) -> Self {
        ProductFilter {
            search: p.search,
            warehouse: p.warehouse,
            status: p.status,
            offset: p.offset.map_or(0, non_negative),
            limit: p.limit.map_or(DEFAULT_LIMIT, non_negative),
        }
    }
}

#[derive(Debug, Deserialize)] pub struct KpiParams { pub range: Option<i64> }
#[derive(Debug, Deserialize)] pub struct UpdateDemandRequest { pub demand: i64 }
#[derive(Debug, Deserialize)] #[serde(rename_all = "camelCase")] pub struct TransferStockRequest { pub to_warehouse: String, pub amount: i64 }

async fn list_products(State(s): State<InventoryService>, Query(p): Query<ListParams>) -> Json<ProductPage> {
    Json(s.products(&p.into()).await)
}

async fn get_product(State(s): State<InventoryService>, Path(id): Path<String>) -> Json<Option<ProductView>> {
    Json(s.product(&id).await)
}

async fn update_demand(State(s): State<InventoryService>, Path(id): Path<String>, Json(r): Json<UpdateDemandRequest>) -> Result<Json<ProductView>, InventoryError> {
    s.update_demand(&id, r.demand).await.map(Json)
}

async fn transfer_stock(State(s): State<InventoryService>, Path(id): Path<String>, Json(r): Json<TransferStockRequest>) -> Result<Json<Vec<ProductView>>, InventoryError> {
    s.transfer_stock(&id, &r.to_warehouse, r.amount).await.map(Json)
}

async fn list_warehouses(State(s): State<InventoryService>) -> Json<Vec<String>> {
    Json(s.warehouses().await)
}

async fn get_totals(State(s): State<InventoryService>) -> Json<Totals> {
    Json(s.totals().await)
}

async fn get_kpis(State(s): State<InventoryService>, Query(p): Query<KpiParams>) -> Json<Vec<KpiPoint>> {
    Json(s.kpis(p.range.unwrap_or(DEFAULT_KPI_RANGE)).await)
}
