// src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::color::ColorName;

// --- 1. Categorias de tecido ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "product_category", rename_all = "snake_case")] // Banco
#[serde(rename_all = "snake_case")] // JSON
pub enum ProductCategory {
    Wool,
    Silk,
    Cotton,
    Cashmere,
    Synthetic,
    Mixed,
}

// --- 2. Produto (catálogo) ---
// stock_qty não tem piso: vendas concorrentes podem deixá-lo negativo.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub code: String,
    pub name: String,
    pub color_name: ColorName,
    pub color_hex: String,
    pub price: Decimal,
    pub category: ProductCategory,
    pub stock_qty: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
