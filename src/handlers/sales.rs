// src/handlers/sales.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{common::error::AppError, config::AppState, models::sale::Sale};

fn default_quantity() -> i32 {
    1
}

// ---
// Payload: CreateSale
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSalePayload {
    #[validate(length(min = 1, message = "O código do produto é obrigatório."))]
    pub product_code: String,

    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "A quantidade deve ser pelo menos 1."))]
    pub quantity: i32,
}

// ---
// Filtros da listagem
// ---
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListSalesParams {
    // Padrão: 100 registros mais recentes.
    pub limit: Option<i64>,
    pub search: Option<String>,
}

// ---
// Handler: create_sale
// ---
#[utoipa::path(
    post,
    path = "/api/sales",
    tag = "Sales",
    request_body = CreateSalePayload,
    responses(
        (status = 201, description = "Venda registrada", body = Sale),
        (status = 400, description = "Payload inválido ou estoque insuficiente"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn create_sale(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateSalePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let sale = app_state
        .sales_service
        .create_sale(&payload.product_code, payload.quantity)
        .await?;

    Ok((StatusCode::CREATED, Json(sale)))
}

// ---
// Handler: get_sales
// ---
#[utoipa::path(
    get,
    path = "/api/sales",
    tag = "Sales",
    params(ListSalesParams),
    responses(
        (status = 200, description = "Vendas mais recentes primeiro", body = Vec<Sale>)
    )
)]
pub async fn get_sales(
    State(app_state): State<AppState>,
    Query(params): Query<ListSalesParams>,
) -> Result<impl IntoResponse, AppError> {
    let sales = app_state
        .sales_service
        .get_sales(params.limit, params.search.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(sales)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_must_be_at_least_one() {
        let payload = CreateSalePayload { product_code: "SH-0001".to_string(), quantity: 0 };
        assert!(payload.validate().is_err());

        let payload = CreateSalePayload { product_code: "SH-0001".to_string(), quantity: 1 };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn quantity_defaults_to_one() {
        let payload: CreateSalePayload =
            serde_json::from_str(r#"{"productCode": "SH-0001"}"#).unwrap();
        assert_eq!(payload.quantity, 1);
    }
}
