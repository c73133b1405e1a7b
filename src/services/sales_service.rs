// src/services/sales_service.rs

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ProductRepository, SalesRepository},
    models::sale::Sale,
};

const DEFAULT_SALES_LIMIT: i64 = 100;

#[derive(Clone)]
pub struct SalesService {
    product_repo: ProductRepository,
    sales_repo: SalesRepository,
}

impl SalesService {
    pub fn new(product_repo: ProductRepository, sales_repo: SalesRepository) -> Self {
        Self { product_repo, sales_repo }
    }

    // --- CREATE SALE (VENDA) ---
    // A venda copia os campos do produto no instante da compra; edições
    // posteriores do catálogo não tocam o histórico.
    pub async fn create_sale(&self, product_code: &str, quantity: i32) -> Result<Sale, AppError> {
        // 1. Busca o produto
        let product = self
            .product_repo
            .find_by_code(product_code)
            .await?
            .ok_or(AppError::ProductNotFound)?;

        // 2. Checa o saldo
        if product.stock_qty < quantity {
            return Err(AppError::InsufficientStock);
        }

        // 3. Monta o snapshot
        let sale = Sale {
            id: Uuid::new_v4(),
            product_code: product.code.clone(),
            product_name: product.name.clone(),
            price_at_sale: product.price,
            color_at_sale: format!("{} ({})", product.color_name.as_str(), product.color_hex),
            quantity,
            timestamp: Utc::now(),
        };

        // 4. Baixa o estoque e grava a venda, em sequência e sem transação.
        // Duas vendas concorrentes podem passar pela checagem de saldo antes
        // de qualquer baixa, e o estoque pode ficar negativo.
        self.product_repo.decrement_stock(product_code, quantity).await?;
        self.sales_repo.insert(&sale).await?;

        tracing::info!("Venda registrada: {} x{}", sale.product_code, sale.quantity);
        Ok(sale)
    }

    pub async fn get_sales(
        &self,
        limit: Option<i64>,
        search: Option<&str>,
    ) -> Result<Vec<Sale>, AppError> {
        let limit = limit.unwrap_or(DEFAULT_SALES_LIMIT);
        self.sales_repo.find_recent(limit, search).await
    }
}
