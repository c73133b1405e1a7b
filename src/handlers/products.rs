// src/handlers/products.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        color::ColorName,
        product::{Product, ProductCategory},
    },
};

// ---
// Validações customizadas
// ---
fn validate_hex_color(hex: &str) -> Result<(), ValidationError> {
    let valid = hex.len() == 7
        && hex.starts_with('#')
        && hex[1..].chars().all(|c| c.is_ascii_hexdigit());

    if !valid {
        let mut err = ValidationError::new("hex_color");
        err.message = Some("A cor deve estar no formato #rrggbb.".into());
        return Err(err);
    }
    Ok(())
}

fn validate_positive(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O preço deve ser maior que zero.".into());
        return Err(err);
    }
    Ok(())
}

// ---
// Payload: CreateProduct
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    // Se não vier, o serviço gera um código sequencial SH-NNNN.
    pub code: Option<String>,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    pub color_name: ColorName,

    #[validate(custom(function = validate_hex_color))]
    pub color_hex: String,

    #[validate(custom(function = validate_positive))]
    pub price: Decimal,

    pub category: ProductCategory,

    #[serde(default)] // Se o JSON não tiver esse campo, assume 0
    #[validate(range(min = 0, message = "O estoque não pode ser negativo."))]
    pub stock_qty: i32,
}

// ---
// Payload: UpdateProduct (todos os campos opcionais)
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductPayload {
    #[validate(length(min = 1, message = "O nome não pode ficar vazio."))]
    pub name: Option<String>,

    pub color_name: Option<ColorName>,

    #[validate(custom(function = validate_hex_color))]
    pub color_hex: Option<String>,

    #[validate(custom(function = validate_positive))]
    pub price: Option<Decimal>,

    pub category: Option<ProductCategory>,

    #[validate(range(min = 0, message = "O estoque não pode ser negativo."))]
    pub stock_qty: Option<i32>,
}

// ---
// Filtros da listagem
// ---
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListProductsParams {
    pub category: Option<ProductCategory>,
    pub search: Option<String>,
}

// ---
// Handler: create_product
// ---
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProductPayload,
    responses(
        (status = 201, description = "Produto criado", body = Product),
        (status = 400, description = "Um ou mais campos são inválidos"),
        (status = 409, description = "Código de produto já em uso")
    )
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let product = app_state
        .catalog_service
        .create_product(
            payload.code,
            &payload.name,
            payload.color_name,
            &payload.color_hex,
            payload.price,
            payload.category,
            payload.stock_qty,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

// ---
// Handler: get_all_products
// ---
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(ListProductsParams),
    responses(
        (status = 200, description = "Lista de produtos do catálogo", body = Vec<Product>)
    )
)]
pub async fn get_all_products(
    State(app_state): State<AppState>,
    Query(params): Query<ListProductsParams>,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state
        .catalog_service
        .get_all_products(params.category, params.search.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(products)))
}

// ---
// Handler: get_product
// ---
#[utoipa::path(
    get,
    path = "/api/products/{code}",
    tag = "Products",
    params(("code" = String, Path, description = "Código do produto")),
    responses(
        (status = 200, description = "Produto encontrado", body = Product),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn get_product(
    State(app_state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let product = app_state.catalog_service.get_product(&code).await?;
    Ok((StatusCode::OK, Json(product)))
}

// ---
// Handler: update_product
// ---
#[utoipa::path(
    put,
    path = "/api/products/{code}",
    tag = "Products",
    params(("code" = String, Path, description = "Código do produto")),
    request_body = UpdateProductPayload,
    responses(
        (status = 200, description = "Produto atualizado", body = Product),
        (status = 400, description = "Um ou mais campos são inválidos"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    Path(code): Path<String>,
    Json(payload): Json<UpdateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let product = app_state
        .catalog_service
        .update_product(
            &code,
            payload.name.as_deref(),
            payload.color_name,
            payload.color_hex.as_deref(),
            payload.price,
            payload.category,
            payload.stock_qty,
        )
        .await?;

    Ok((StatusCode::OK, Json(product)))
}

// ---
// Handler: delete_product
// ---
#[utoipa::path(
    delete,
    path = "/api/products/{code}",
    tag = "Products",
    params(("code" = String, Path, description = "Código do produto")),
    responses(
        (status = 200, description = "Produto removido"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalog_service.delete_product(&code).await?;
    Ok((StatusCode::OK, Json(json!({ "message": "Produto removido com sucesso." }))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_accepts_lower_and_upper_digits() {
        assert!(validate_hex_color("#ff00aa").is_ok());
        assert!(validate_hex_color("#FF00AA").is_ok());
    }

    #[test]
    fn hex_color_rejects_malformed_values() {
        assert!(validate_hex_color("ff00aa").is_err());
        assert!(validate_hex_color("#ff00a").is_err());
        assert!(validate_hex_color("#ff00aaa").is_err());
        assert!(validate_hex_color("#gg00aa").is_err());
    }

    #[test]
    fn create_payload_validation() {
        let valid = CreateProductPayload {
            code: None,
            name: "Xale de Seda".to_string(),
            color_name: ColorName::Red,
            color_hex: "#ff0000".to_string(),
            price: Decimal::from(120),
            category: ProductCategory::Silk,
            stock_qty: 5,
        };
        assert!(valid.validate().is_ok());

        let bad_price = CreateProductPayload { price: Decimal::ZERO, ..valid };
        assert!(bad_price.validate().is_err());
    }

    #[test]
    fn update_payload_ignores_absent_fields() {
        let empty = UpdateProductPayload {
            name: None,
            color_name: None,
            color_hex: None,
            price: None,
            category: None,
            stock_qty: None,
        };
        assert!(empty.validate().is_ok());

        let bad_hex = UpdateProductPayload {
            color_hex: Some("vermelho".to_string()),
            ..empty
        };
        assert!(bad_hex.validate().is_err());
    }
}
