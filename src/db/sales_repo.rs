// src/db/sales_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::sale::Sale};

const SALE_COLUMNS: &str =
    r#"id, product_code, product_name, price_at_sale, color_at_sale, quantity, "timestamp""#;

#[derive(Clone)]
pub struct SalesRepository {
    pool: PgPool,
}

impl SalesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, sale: &Sale) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO sales
                (id, product_code, product_name, price_at_sale, color_at_sale, quantity, "timestamp")
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(sale.id)
        .bind(&sale.product_code)
        .bind(&sale.product_name)
        .bind(sale.price_at_sale)
        .bind(&sale.color_at_sale)
        .bind(sale.quantity)
        .bind(sale.timestamp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // Listagem da tela de vendas: mais recentes primeiro, com busca opcional.
    pub async fn find_recent(
        &self,
        limit: i64,
        search: Option<&str>,
    ) -> Result<Vec<Sale>, AppError> {
        let sales = sqlx::query_as::<_, Sale>(&format!(
            r#"
            SELECT {SALE_COLUMNS}
            FROM sales
            WHERE ($1::text IS NULL
                   OR product_name ILIKE '%' || $1 || '%'
                   OR product_code ILIKE '%' || $1 || '%')
            ORDER BY "timestamp" DESC
            LIMIT $2
            "#
        ))
        .bind(search)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    // O dashboard agrega em memória sobre o conjunto completo.
    pub async fn find_all(&self) -> Result<Vec<Sale>, AppError> {
        let sales = sqlx::query_as::<_, Sale>(&format!("SELECT {SALE_COLUMNS} FROM sales"))
            .fetch_all(&self.pool)
            .await?;

        Ok(sales)
    }
}
