// src/handlers/color.rs

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{models::color::ColorDetection, services::color_service};

// Os componentes são u8: um valor fora de [0,255] é rejeitado já na
// desserialização, antes de chegar ao classificador.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DetectColorPayload {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

// POST /api/detect-color
#[utoipa::path(
    post,
    path = "/api/detect-color",
    tag = "Color",
    request_body = DetectColorPayload,
    responses(
        (status = 200, description = "Cor classificada a partir da amostra RGB", body = ColorDetection)
    )
)]
pub async fn detect_color(Json(payload): Json<DetectColorPayload>) -> impl IntoResponse {
    let detection = color_service::classify(payload.r, payload.g, payload.b);
    (StatusCode::OK, Json(detection))
}
