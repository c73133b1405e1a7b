// src/docs.rs

use axum::Json;
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Products ---
        handlers::products::create_product,
        handlers::products::get_all_products,
        handlers::products::get_product,
        handlers::products::update_product,
        handlers::products::delete_product,

        // --- Sales ---
        handlers::sales::create_sale,
        handlers::sales::get_sales,

        // --- Dashboard ---
        handlers::dashboard::get_stats,

        // --- Color ---
        handlers::color::detect_color,
    ),
    components(
        schemas(
            // --- Products ---
            models::product::ProductCategory,
            models::product::Product,

            // --- Sales ---
            models::sale::Sale,

            // --- Color ---
            models::color::ColorName,
            models::color::RgbColor,
            models::color::Hsv,
            models::color::ColorDetection,

            // --- Dashboard ---
            models::dashboard::RevenueBreakdown,
            models::dashboard::CountBreakdown,
            models::dashboard::TopSellerEntry,
            models::dashboard::DashboardStats,

            // --- Payloads ---
            handlers::products::CreateProductPayload,
            handlers::products::UpdateProductPayload,
            handlers::sales::CreateSalePayload,
            handlers::color::DetectColorPayload,
        )
    ),
    tags(
        (name = "Products", description = "Catálogo de Xales"),
        (name = "Sales", description = "Registro de Vendas"),
        (name = "Dashboard", description = "Indicadores de Vendas"),
        (name = "Color", description = "Classificação de Cor por Amostra RGB")
    )
)]
pub struct ApiDoc;

// GET /api/openapi.json — o documento OpenAPI em JSON cru.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
