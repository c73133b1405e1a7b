// src/services/color_service.rs

use crate::models::color::{ColorDetection, ColorName, Hsv, RgbColor};

// O classificador não modela certeza de verdade; o valor é fixo.
const CONFIDENCE: f64 = 0.8;

// --- Conversão RGB -> HSV ---
// Fórmula padrão de seis setores. O ramo testado primeiro em caso de
// empate no máximo é sempre r, depois g, depois b.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let r_norm = f64::from(r) / 255.0;
    let g_norm = f64::from(g) / 255.0;
    let b_norm = f64::from(b) / 255.0;

    let max_val = r_norm.max(g_norm).max(b_norm);
    let min_val = r_norm.min(g_norm).min(b_norm);
    let diff = max_val - min_val;

    // rem_euclid reduz para [0, 360) mesmo quando a fórmula dá negativo.
    let hue = if diff == 0.0 {
        0.0
    } else if max_val == r_norm {
        (60.0 * ((g_norm - b_norm) / diff) + 360.0).rem_euclid(360.0)
    } else if max_val == g_norm {
        (60.0 * ((b_norm - r_norm) / diff) + 120.0).rem_euclid(360.0)
    } else {
        (60.0 * ((r_norm - g_norm) / diff) + 240.0).rem_euclid(360.0)
    };

    let saturation = if max_val == 0.0 { 0.0 } else { diff / max_val };

    Hsv { h: hue, s: saturation, v: max_val }
}

// --- Tabela de decisão ---
// Regras ordenadas, avaliadas de cima para baixo; a primeira que casar
// vence. A ordem é parte do contrato: perto do preto o brilho domina o
// matiz, e a faixa acromática vem antes de qualquer faixa de matiz.
struct ClassificationRule {
    name: ColorName,
    matches: fn(&Hsv) -> bool,
}

fn hue_in(hsv: &Hsv, lo: f64, hi: f64) -> bool {
    hsv.h >= lo && hsv.h < hi
}

// Família do vermelho: a faixa atravessa o zero do círculo de matiz.
fn red_band(hsv: &Hsv) -> bool {
    hsv.h < 15.0 || hsv.h >= 345.0
}

const RULES: &[ClassificationRule] = &[
    // Quase preto: o brilho decide sozinho.
    ClassificationRule { name: ColorName::Black, matches: |hsv| hsv.v < 0.15 },
    // Faixa acromática (saturação baixa), subdividida por brilho.
    ClassificationRule { name: ColorName::White, matches: |hsv| hsv.s < 0.1 && hsv.v > 0.9 },
    ClassificationRule { name: ColorName::LightGrey, matches: |hsv| hsv.s < 0.1 && hsv.v > 0.6 },
    ClassificationRule { name: ColorName::Grey, matches: |hsv| hsv.s < 0.1 && hsv.v > 0.3 },
    ClassificationRule { name: ColorName::DarkGrey, matches: |hsv| hsv.s < 0.1 },
    // [345, 360) ∪ [0, 15): vermelhos
    ClassificationRule { name: ColorName::DarkRed, matches: |hsv| red_band(hsv) && hsv.v < 0.5 },
    ClassificationRule {
        name: ColorName::LightRed,
        matches: |hsv| red_band(hsv) && hsv.v > 0.8 && hsv.s < 0.7,
    },
    ClassificationRule { name: ColorName::Red, matches: red_band },
    // [15, 45): laranja / marrom
    ClassificationRule {
        name: ColorName::Orange,
        matches: |hsv| hue_in(hsv, 15.0, 45.0) && hsv.s > 0.5,
    },
    ClassificationRule { name: ColorName::Brown, matches: |hsv| hue_in(hsv, 15.0, 45.0) },
    // [45, 75): amarelos
    ClassificationRule {
        name: ColorName::LightYellow,
        matches: |hsv| hue_in(hsv, 45.0, 75.0) && hsv.v > 0.8,
    },
    ClassificationRule { name: ColorName::Yellow, matches: |hsv| hue_in(hsv, 45.0, 75.0) },
    // [75, 150): verdes
    ClassificationRule {
        name: ColorName::LightGreen,
        matches: |hsv| hue_in(hsv, 75.0, 150.0) && hsv.v > 0.7 && hsv.s < 0.6,
    },
    ClassificationRule {
        name: ColorName::DarkGreen,
        matches: |hsv| hue_in(hsv, 75.0, 150.0) && hsv.v < 0.4,
    },
    ClassificationRule { name: ColorName::Green, matches: |hsv| hue_in(hsv, 75.0, 150.0) },
    // [150, 210): azuis
    ClassificationRule {
        name: ColorName::LightBlue,
        matches: |hsv| hue_in(hsv, 150.0, 210.0) && hsv.v > 0.7 && hsv.s < 0.6,
    },
    ClassificationRule {
        name: ColorName::DarkBlue,
        matches: |hsv| hue_in(hsv, 150.0, 210.0) && hsv.v < 0.4,
    },
    ClassificationRule { name: ColorName::Blue, matches: |hsv| hue_in(hsv, 150.0, 210.0) },
    // [210, 270): roxos
    ClassificationRule {
        name: ColorName::LightPurple,
        matches: |hsv| hue_in(hsv, 210.0, 270.0) && hsv.v > 0.7 && hsv.s < 0.6,
    },
    ClassificationRule {
        name: ColorName::DarkPurple,
        matches: |hsv| hue_in(hsv, 210.0, 270.0) && hsv.v < 0.4,
    },
    ClassificationRule { name: ColorName::Purple, matches: |hsv| hue_in(hsv, 210.0, 270.0) },
    // [270, 330): rosas
    ClassificationRule {
        name: ColorName::LightPink,
        matches: |hsv| hue_in(hsv, 270.0, 330.0) && hsv.v > 0.8 && hsv.s < 0.5,
    },
    ClassificationRule { name: ColorName::Pink, matches: |hsv| hue_in(hsv, 270.0, 330.0) },
    // [330, 345): faixa residual entre o rosa e o vermelho.
    ClassificationRule {
        name: ColorName::Maroon,
        matches: |hsv| hue_in(hsv, 330.0, 345.0) && hsv.v < 0.4,
    },
    ClassificationRule { name: ColorName::Red, matches: |_| true },
];

fn classify_hsv(hsv: &Hsv) -> ColorName {
    RULES
        .iter()
        .find(|rule| (rule.matches)(hsv))
        .map_or(ColorName::Red, |rule| rule.name)
}

// --- Classificação completa ---
// Puro e determinístico: mesma tripla de entrada, mesmo resultado.
pub fn classify(r: u8, g: u8, b: u8) -> ColorDetection {
    let hsv = rgb_to_hsv(r, g, b);
    let name = classify_hsv(&hsv);

    ColorDetection {
        hex: format!("#{r:02x}{g:02x}{b:02x}"),
        rgb: RgbColor { r, g, b },
        hsv,
        name,
        confidence: CONFIDENCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn pure_red_is_red_with_full_saturation() {
        let result = classify(255, 0, 0);
        assert_eq!(result.name, ColorName::Red);
        assert!(close(result.hsv.h, 0.0));
        assert!(close(result.hsv.s, 1.0));
        assert!(close(result.hsv.v, 1.0));
    }

    #[test]
    fn black_and_white_extremes() {
        assert_eq!(classify(0, 0, 0).name, ColorName::Black);
        assert_eq!(classify(255, 255, 255).name, ColorName::White);
    }

    #[test]
    fn near_black_wins_over_hue() {
        // Matiz de vermelho, mas brilho abaixo de 0,15: preto.
        assert_eq!(classify(20, 0, 0).name, ColorName::Black);
    }

    #[test]
    fn achromatic_band_split_by_value() {
        assert_eq!(classify(200, 200, 200).name, ColorName::LightGrey);
        assert_eq!(classify(128, 128, 128).name, ColorName::Grey);
        assert_eq!(classify(60, 60, 60).name, ColorName::DarkGrey);
    }

    #[test]
    fn hex_is_lowercase_two_digit_pairs() {
        assert_eq!(classify(1, 2, 3).hex, "#010203");
        assert_eq!(classify(255, 171, 205).hex, "#ffabcd");
        assert_eq!(classify(0, 0, 0).hex, "#000000");
    }

    #[test]
    fn hsv_components_stay_in_range() {
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(17) {
                    let hsv = rgb_to_hsv(r as u8, g as u8, b as u8);
                    assert!(hsv.h >= 0.0 && hsv.h < 360.0, "h fora da faixa: {}", hsv.h);
                    assert!(hsv.s >= 0.0 && hsv.s <= 1.0, "s fora da faixa: {}", hsv.s);
                    assert!(hsv.v >= 0.0 && hsv.v <= 1.0, "v fora da faixa: {}", hsv.v);
                }
            }
        }
    }

    #[test]
    fn red_family_refinements() {
        // Escuro: v < 0,5
        assert_eq!(classify(100, 0, 0).name, ColorName::DarkRed);
        // Claro: v > 0,8 e s < 0,7
        assert_eq!(classify(255, 180, 180).name, ColorName::LightRed);
    }

    #[test]
    fn orange_versus_brown_by_saturation() {
        assert_eq!(classify(255, 165, 0).name, ColorName::Orange);
        // Mesma faixa de matiz, saturação 1/3: marrom.
        assert_eq!(classify(150, 120, 100).name, ColorName::Brown);
    }

    #[test]
    fn yellow_band() {
        assert_eq!(classify(255, 255, 200).name, ColorName::LightYellow);
        assert_eq!(classify(180, 180, 0).name, ColorName::Yellow);
    }

    #[test]
    fn green_band_refinements() {
        assert_eq!(classify(0, 200, 0).name, ColorName::Green);
        assert_eq!(classify(180, 255, 180).name, ColorName::LightGreen);
        assert_eq!(classify(0, 80, 0).name, ColorName::DarkGreen);
    }

    #[test]
    fn blue_band_refinements() {
        assert_eq!(classify(0, 150, 200).name, ColorName::Blue);
        assert_eq!(classify(170, 220, 230).name, ColorName::LightBlue);
        assert_eq!(classify(0, 60, 80).name, ColorName::DarkBlue);
    }

    #[test]
    fn pure_blue_falls_in_purple_band() {
        // Matiz 240 cai na faixa [210, 270): o algoritmo chama de roxo.
        assert_eq!(classify(0, 0, 255).name, ColorName::Purple);
    }

    #[test]
    fn pink_band() {
        assert_eq!(classify(255, 0, 255).name, ColorName::Pink);
        assert_eq!(classify(255, 200, 240).name, ColorName::LightPink);
    }

    #[test]
    fn maroon_fallback_band() {
        // Matiz 336: maroon quando escuro, vermelho quando claro.
        assert_eq!(classify(100, 0, 40).name, ColorName::Maroon);
        assert_eq!(classify(200, 0, 80).name, ColorName::Red);
    }

    #[test]
    fn confidence_is_constant() {
        assert!(close(classify(0, 0, 0).confidence, 0.8));
        assert!(close(classify(12, 200, 99).confidence, 0.8));
    }

    #[test]
    fn detection_wire_shape() {
        let value = serde_json::to_value(classify(200, 200, 200)).unwrap();
        assert_eq!(value["name"], "light_grey");
        assert_eq!(value["hex"], "#c8c8c8");
        assert_eq!(value["rgb"]["r"], 200);
        assert!(value["hsv"].get("h").is_some());
        assert!(value["hsv"].get("s").is_some());
        assert!(value["hsv"].get("v").is_some());
    }

    #[test]
    fn classification_is_deterministic() {
        let first = classify(137, 42, 210);
        let second = classify(137, 42, 210);
        assert_eq!(first.name, second.name);
        assert_eq!(first.hex, second.hex);
        assert!(close(first.hsv.h, second.hsv.h));
    }
}
