//src/main.rs

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::env;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;

// GET /api/ — banner de sanidade usado pelo frontend.
async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Shawl Scan & Sales API is running!" }))
}

// Origens liberadas para o frontend; "*" (o padrão) libera tudo.
fn cors_layer() -> CorsLayer {
    let origins = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());

    let allow_origin = if origins.trim() == "*" {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            origins
                .split(',')
                .filter_map(|origin| origin.trim().parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let product_routes = Router::new()
        .route(
            "/",
            post(handlers::products::create_product).get(handlers::products::get_all_products),
        )
        .route(
            "/{code}",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        );

    let sales_routes = Router::new()
        .route("/", post(handlers::sales::create_sale).get(handlers::sales::get_sales));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/", get(root))
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/openapi.json", get(docs::openapi_json))
        .nest("/api/products", product_routes)
        .nest("/api/sales", sales_routes)
        .route("/api/dashboard/stats", get(handlers::dashboard::get_stats))
        .route("/api/detect-color", post(handlers::color::detect_color))
        .layer(cors_layer())
        .with_state(app_state);

    // Inicia o servidor
    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
