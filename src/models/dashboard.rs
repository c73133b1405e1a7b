// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

// 1. Receita por janela (hoje / mês corrente / todo o período)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueBreakdown {
    pub today: Decimal,
    pub month: Decimal,
    pub all_time: Decimal,
}

// 2. Contagens por janela (unidades vendidas, produtos distintos)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountBreakdown {
    pub today: i64,
    pub month: i64,
    pub all_time: i64,
}

// 3. Ranking de mais vendidos (sempre sobre todo o período)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopSellerEntry {
    pub product_code: String,
    pub product_name: String,
    pub total_units: i64,
    pub total_revenue: Decimal,
}

// 4. O payload completo do dashboard
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_revenue: RevenueBreakdown,
    pub total_units: CountBreakdown,
    pub distinct_products: CountBreakdown,
    pub top_sellers: Vec<TopSellerEntry>,
}
