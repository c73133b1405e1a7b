// src/models/color.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- 1. Nomes de Cor (enum fixo) ---
// O classificador só produz um subconjunto destes; navy, teal, olive,
// beige e cream existem apenas como escolha manual no cadastro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "color_name", rename_all = "snake_case")] // Banco
#[serde(rename_all = "snake_case")] // JSON
pub enum ColorName {
    Black,
    White,
    Grey,
    LightGrey,
    DarkGrey,
    Red,
    LightRed,
    DarkRed,
    Orange,
    Brown,
    Yellow,
    LightYellow,
    Green,
    LightGreen,
    DarkGreen,
    Blue,
    LightBlue,
    DarkBlue,
    Purple,
    LightPurple,
    DarkPurple,
    Pink,
    LightPink,
    Maroon,
    Navy,
    Teal,
    Olive,
    Beige,
    Cream,
}

impl ColorName {
    // O mesmo texto que vai para o JSON, para montar o snapshot "nome (#hex)".
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::Black => "black",
            ColorName::White => "white",
            ColorName::Grey => "grey",
            ColorName::LightGrey => "light_grey",
            ColorName::DarkGrey => "dark_grey",
            ColorName::Red => "red",
            ColorName::LightRed => "light_red",
            ColorName::DarkRed => "dark_red",
            ColorName::Orange => "orange",
            ColorName::Brown => "brown",
            ColorName::Yellow => "yellow",
            ColorName::LightYellow => "light_yellow",
            ColorName::Green => "green",
            ColorName::LightGreen => "light_green",
            ColorName::DarkGreen => "dark_green",
            ColorName::Blue => "blue",
            ColorName::LightBlue => "light_blue",
            ColorName::DarkBlue => "dark_blue",
            ColorName::Purple => "purple",
            ColorName::LightPurple => "light_purple",
            ColorName::DarkPurple => "dark_purple",
            ColorName::Pink => "pink",
            ColorName::LightPink => "light_pink",
            ColorName::Maroon => "maroon",
            ColorName::Navy => "navy",
            ColorName::Teal => "teal",
            ColorName::Olive => "olive",
            ColorName::Beige => "beige",
            ColorName::Cream => "cream",
        }
    }
}

// --- 2. RGB (entrada transiente, não persistida) ---
// Os componentes são u8: valores fora de [0,255] nem desserializam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

// --- 3. HSV (derivado, não armazenado) ---
// h em [0,360), s e v em [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

// --- 4. Resultado da classificação ---
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ColorDetection {
    pub hex: String,
    pub rgb: RgbColor,
    pub hsv: Hsv,
    pub name: ColorName,
    pub confidence: f64,
}
