// src/config.rs

use crate::{
    db::{ProductRepository, SalesRepository},
    services::{
        catalog_service::CatalogService, dashboard_service::DashboardService,
        sales_service::SalesService,
    },
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub catalog_service: CatalogService,
    pub sales_service: SalesService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let product_repo = ProductRepository::new(db_pool.clone());
        let sales_repo = SalesRepository::new(db_pool.clone());

        let catalog_service = CatalogService::new(product_repo.clone());
        let sales_service = SalesService::new(product_repo, sales_repo.clone());
        let dashboard_service = DashboardService::new(sales_repo);

        Ok(Self {
            db_pool,
            catalog_service,
            sales_service,
            dashboard_service,
        })
    }
}
