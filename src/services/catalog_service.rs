// src/services/catalog_service.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::ProductRepository,
    models::{
        color::ColorName,
        product::{Product, ProductCategory},
    },
};

#[derive(Clone)]
pub struct CatalogService {
    repo: ProductRepository,
}

impl CatalogService {
    pub fn new(repo: ProductRepository) -> Self {
        Self { repo }
    }

    // Código sequencial no padrão da etiqueta: SH-0001, SH-0002, ...
    async fn generate_product_code(&self) -> Result<String, AppError> {
        let count = self.repo.count().await?;
        Ok(format!("SH-{:04}", count + 1))
    }

    // --- CREATE PRODUCT ---
    pub async fn create_product(
        &self,
        code: Option<String>,
        name: &str,
        color_name: ColorName,
        color_hex: &str,
        price: Decimal,
        category: ProductCategory,
        stock_qty: i32,
    ) -> Result<Product, AppError> {
        let code = match code {
            Some(code) => code,
            None => self.generate_product_code().await?,
        };

        // Código é a chave do catálogo: duplicata é rejeitada antes do insert.
        if self.repo.find_by_code(&code).await?.is_some() {
            return Err(AppError::ProductCodeAlreadyExists);
        }

        let now: DateTime<Utc> = Utc::now();
        let product = Product {
            code,
            name: name.to_string(),
            color_name,
            color_hex: color_hex.to_lowercase(),
            price,
            category,
            stock_qty,
            created_at: now,
            updated_at: now,
        };

        self.repo.insert(&product).await?;
        tracing::info!("Produto {} cadastrado", product.code);
        Ok(product)
    }

    pub async fn get_all_products(
        &self,
        category: Option<ProductCategory>,
        search: Option<&str>,
    ) -> Result<Vec<Product>, AppError> {
        self.repo.find_all(category, search).await
    }

    pub async fn get_product(&self, code: &str) -> Result<Product, AppError> {
        self.repo.find_by_code(code).await?.ok_or(AppError::ProductNotFound)
    }

    // --- UPDATE PRODUCT (parcial) ---
    pub async fn update_product(
        &self,
        code: &str,
        name: Option<&str>,
        color_name: Option<ColorName>,
        color_hex: Option<&str>,
        price: Option<Decimal>,
        category: Option<ProductCategory>,
        stock_qty: Option<i32>,
    ) -> Result<Product, AppError> {
        let normalized_hex = color_hex.map(|hex| hex.to_lowercase());

        self.repo
            .update(
                code,
                name,
                color_name,
                normalized_hex.as_deref(),
                price,
                category,
                stock_qty,
                Utc::now(),
            )
            .await?
            .ok_or(AppError::ProductNotFound)
    }

    pub async fn delete_product(&self, code: &str) -> Result<(), AppError> {
        let deleted = self.repo.delete(code).await?;
        if !deleted {
            return Err(AppError::ProductNotFound);
        }
        tracing::info!("Produto {} removido", code);
        Ok(())
    }
}
