// src/db/product_repo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::{
        color::ColorName,
        product::{Product, ProductCategory},
    },
};

const PRODUCT_COLUMNS: &str =
    "code, name, color_name, color_hex, price, category, stock_qty, created_at, updated_at";

#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    // Filtros opcionais: categoria exata e busca (nome OU código, sem caixa).
    pub async fn find_all(
        &self,
        category: Option<ProductCategory>,
        search: Option<&str>,
    ) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE ($1::product_category IS NULL OR category = $1)
              AND ($2::text IS NULL
                   OR name ILIKE '%' || $2 || '%'
                   OR code ILIKE '%' || $2 || '%')
            ORDER BY created_at DESC
            "#
        ))
        .bind(category)
        .bind(search)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    pub async fn insert(&self, product: &Product) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO products
                (code, name, color_name, color_hex, price, category, stock_qty, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(&product.code)
        .bind(&product.name)
        .bind(product.color_name)
        .bind(&product.color_hex)
        .bind(product.price)
        .bind(product.category)
        .bind(product.stock_qty)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // Atualização parcial: campos None mantêm o valor atual.
    // Retorna None quando o código não existe.
    pub async fn update(
        &self,
        code: &str,
        name: Option<&str>,
        color_name: Option<ColorName>,
        color_hex: Option<&str>,
        price: Option<Decimal>,
        category: Option<ProductCategory>,
        stock_qty: Option<i32>,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products SET
                name       = COALESCE($2, name),
                color_name = COALESCE($3::color_name, color_name),
                color_hex  = COALESCE($4, color_hex),
                price      = COALESCE($5, price),
                category   = COALESCE($6::product_category, category),
                stock_qty  = COALESCE($7, stock_qty),
                updated_at = $8
            WHERE code = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(code)
        .bind(name)
        .bind(color_name)
        .bind(color_hex)
        .bind(price)
        .bind(category)
        .bind(stock_qty)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    pub async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    // Baixa de estoque sem piso: o saldo pode ficar negativo sob concorrência.
    pub async fn decrement_stock(&self, code: &str, quantity: i32) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE products SET stock_qty = stock_qty - $2, updated_at = $3 WHERE code = $1",
        )
        .bind(code)
        .bind(quantity)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
