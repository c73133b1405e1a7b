// src/services/dashboard_service.rs

use chrono::Utc;

use crate::{
    common::error::AppError,
    db::SalesRepository,
    models::dashboard::DashboardStats,
    services::analytics_service,
};

#[derive(Clone)]
pub struct DashboardService {
    sales_repo: SalesRepository,
}

impl DashboardService {
    pub fn new(sales_repo: SalesRepository) -> Self {
        Self { sales_repo }
    }

    // Busca o conjunto completo de vendas e agrega em memória. A
    // agregação em si é pura; o instante de referência entra aqui.
    pub async fn get_stats(&self) -> Result<DashboardStats, AppError> {
        let sales = self.sales_repo.find_all().await?;
        Ok(analytics_service::aggregate(&sales, Utc::now()))
    }
}
