//! Request handlers for the product endpoints.
//!
//! Each handler extracts its inputs, validates them, performs exactly one
//! store operation under the state lock and shapes the JSON response.
//! Failures are returned as [`ApiError`] and rendered by the error responder.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, RawQuery, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use products_lib::{CategoryCounts, Product};
use products_service_shared::{
    record_product_mutation, record_search, ApiError, AppState, ListQuery, ProductPayload,
    SearchQuery, Validate,
};

/// Message returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to the Products API";

/// Message returned alongside a deleted product.
pub const DELETED_MESSAGE: &str = "Product deleted";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Body of `GET /api/products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    /// Number of products matching the filter, across all pages.
    pub total: usize,
    /// Echo of the parsed page; `null` when it was not a number.
    pub page: Option<i64>,
    /// Echo of the parsed limit; `null` when it was not a number.
    pub limit: Option<i64>,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Product>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Categories in the order they first appear in the catalog.
    pub count_by_category: CategoryCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub product: Product,
}

/// `GET /`
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// `GET /api/products?category=&page=&limit=`
///
/// Never fails: the query string is read leniently and bad paging values
/// select an empty page.
pub async fn list_products(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Json<ListResponse> {
    let query = ListQuery::parse(raw.as_deref());
    let page = state
        .read()
        .await
        .list_filtered(query.category(), query.paging());

    Json(ListResponse {
        total: page.total,
        page: page.page,
        limit: page.limit,
        products: page.items,
    })
}

/// `GET /api/products/search?name=`
pub async fn search_products(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(query) = query?;
    let name = query.validate()?;

    let results = state.read().await.search(&name)?;
    record_search(results.len());

    Ok(Json(SearchResponse { results }))
}

/// `GET /api/products/stats`
pub async fn product_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let count_by_category = state.read().await.stats();
    Json(StatsResponse { count_by_category })
}

/// `GET /api/products/{id}`
pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(id) = id?;
    let product = state.read().await.get(&id)?.clone();
    Ok(Json(product))
}

/// `POST /api/products` (API key required)
pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(payload) = body?;
    let fields = payload.validate()?;

    let product = state.write().await.create(fields);
    record_product_mutation("create");
    info!(id = %product.id, name = %product.name, "product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /api/products/{id}` (API key required)
pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = body?;
    let fields = payload.validate()?;

    let product = state.write().await.replace(&id, fields)?;
    record_product_mutation("update");
    info!(id = %product.id, "product updated");

    Ok(Json(product))
}

/// `DELETE /api/products/{id}` (API key required)
pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path(id) = id?;
    let product = state.write().await.delete(&id)?;
    record_product_mutation("delete");
    info!(id = %product.id, "product deleted");

    Ok(Json(DeleteResponse {
        message: DELETED_MESSAGE.to_string(),
        product,
    }))
}
