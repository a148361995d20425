//! HTTP handlers for the product endpoints

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{
    AppJson,
    errors::responses::{
        BadRequestJsonResponse, InternalServerErrorResponse, UnprocessableJsonResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{ProductRequest, ProductResponse};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the product endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product),
    components(
        schemas(ProductRequest, ProductResponse),
        responses(
            BadRequestJsonResponse,
            UnprocessableJsonResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalogue endpoints")
    )
)]
pub struct ApiDoc;

/// `GET /` and `POST /`, with the service as state
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .with_state(shared_service)
}

/// List every product
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All stored products", body = Vec<ProductResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<ProductResponse>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created"),
        (status = 400, response = BadRequestJsonResponse),
        (status = 422, response = UnprocessableJsonResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    AppJson(request): AppJson<ProductRequest>,
) -> ProductResult<StatusCode> {
    service.create_product(request).await?;
    Ok(StatusCode::CREATED)
}
