// src/models/sale.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Snapshot do produto no instante da venda. Imutável depois de criado:
// uma mudança de preço no catálogo não altera a receita histórica.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: Uuid,
    pub product_code: String,
    pub product_name: String,
    pub price_at_sale: Decimal,
    pub color_at_sale: String,
    pub quantity: i32,
    pub timestamp: DateTime<Utc>,
}
