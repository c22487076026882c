// ============================================================================
// COLORS - Matemática pura del extractor de color dominante
// ============================================================================
// Esta parte no toca el DOM: recibe el buffer RGBA ya muestreado por
// color_service y devuelve siempre un color #rrggbb. Los umbrales llegan
// por ColorConfig (difieren entre tema claro y oscuro).
// ============================================================================

use crate::config::ColorConfig;
use std::collections::HashMap;

/// Convertir RGB a #rrggbb
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Parsear #rrggbb (con o sin '#') a canales RGB
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Color dominante de un buffer RGBA (4 bytes por píxel).
///
/// Cuantiza cada canal al bucket inferior, descarta píxeles casi negros,
/// casi blancos o casi grises, y puntúa cada bucket ponderando por
/// saturación para que un color vivo gane a uno apagado más frecuente.
/// Si ningún píxel sobrevive a los filtros devuelve el color de fallback:
/// una imagen degenerada nunca es un error.
pub fn dominant_from_rgba(data: &[u8], cfg: &ColorConfig) -> String {
    let bucket = cfg.bucket_size.max(1) as u32;
    let mut scores: HashMap<(u8, u8, u8), u64> = HashMap::new();

    for pixel in data.chunks_exact(4) {
        let r = (pixel[0] as u32 / bucket) * bucket;
        let g = (pixel[1] as u32 / bucket) * bucket;
        let b = (pixel[2] as u32 / bucket) * bucket;

        // Filtro de brillo: fuera van fondos casi negros y casi blancos
        let brightness = (r + g + b) / 3;
        if brightness < cfg.brightness_min || brightness > cfg.brightness_max {
            continue;
        }

        // Filtro de saturación: los grises no tematizan nada
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let saturation = max - min;
        if saturation < cfg.saturation_min {
            continue;
        }

        // Peso extra por saturación: vivo > frecuente pero apagado
        let score = 255 + saturation as u64;
        *scores.entry((r as u8, g as u8, b as u8)).or_insert(0) += score;
    }

    let winner = scores
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    match winner {
        Some(((r, g, b), _)) => {
            let (r, g, b) = boost_brightness(r, g, b, cfg.brightness_floor);
            rgb_to_hex(r, g, b)
        }
        None => cfg.fallback_color.clone(),
    }
}

/// Si el color queda perceptualmente oscuro, escalar los canales hasta
/// alcanzar el brillo medio objetivo, con clamp a 255.
fn boost_brightness(r: u8, g: u8, b: u8, floor: u32) -> (u8, u8, u8) {
    let mean = (r as u32 + g as u32 + b as u32) / 3;
    if mean >= floor || mean == 0 {
        return (r, g, b);
    }
    let ratio = floor as f32 / mean as f32;
    let scale = |c: u8| ((c as f32 * ratio).round().min(255.0)) as u8;
    (scale(r), scale(g), scale(b))
}

/// Color secundario: aclarar cada canal hacia blanco según el ratio.
/// Es una transformación con pérdida (no hay round-trip posible); lo que
/// sí se garantiza es que el brillo nunca baja y que el blanco es punto
/// fijo. Un color imparseable se devuelve tal cual, como hace el form.
pub fn derive_secondary(primary: &str, ratio: f32) -> String {
    let Some((r, g, b)) = hex_to_rgb(primary) else {
        return primary.to_string();
    };
    let lighten = |c: u8| -> u8 {
        let lifted = c as f32 + (255.0 - c as f32) * ratio;
        (lifted.floor().min(255.0)) as u8
    };
    rgb_to_hex(lighten(r), lighten(g), lighten(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorConfig;

    fn solid_rgba(r: u8, g: u8, b: u8, pixels: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            data.extend_from_slice(&[r, g, b, 255]);
        }
        data
    }

    #[test]
    fn hex_codec_round_trip() {
        assert_eq!(rgb_to_hex(99, 102, 241), "#6366f1");
        assert_eq!(hex_to_rgb("#6366f1"), Some((99, 102, 241)));
        assert_eq!(hex_to_rgb("6366f1"), Some((99, 102, 241)));
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#zzzzzz"), None);
    }

    #[test]
    fn solid_saturated_image_wins_its_bucket() {
        let cfg = ColorConfig::default();
        let data = solid_rgba(255, 0, 0, 200);
        // 255 cae en el bucket 250 con tamaño 10
        assert_eq!(dominant_from_rgba(&data, &cfg), "#fa0000");
    }

    #[test]
    fn gray_image_falls_back() {
        let cfg = ColorConfig::default();
        let data = solid_rgba(128, 128, 128, 200);
        assert_eq!(dominant_from_rgba(&data, &cfg), cfg.fallback_color);
    }

    #[test]
    fn near_black_and_near_white_fall_back() {
        let cfg = ColorConfig::default();
        assert_eq!(dominant_from_rgba(&solid_rgba(5, 5, 20, 50), &cfg), cfg.fallback_color);
        assert_eq!(dominant_from_rgba(&solid_rgba(250, 250, 230, 50), &cfg), cfg.fallback_color);
    }

    #[test]
    fn empty_buffer_falls_back() {
        let cfg = ColorConfig::default();
        assert_eq!(dominant_from_rgba(&[], &cfg), cfg.fallback_color);
    }

    #[test]
    fn vivid_minority_beats_dull_majority() {
        let cfg = ColorConfig::default();
        // 60 píxeles apagados (saturación justa) contra 40 muy vivos
        let mut data = solid_rgba(100, 80, 75, 60);
        data.extend(solid_rgba(255, 40, 40, 40));
        let result = dominant_from_rgba(&data, &cfg);
        assert_eq!(result, "#fa2828");
    }

    #[test]
    fn dark_winner_is_boosted_to_floor() {
        let cfg = ColorConfig::default();
        // (100, 30, 30) -> buckets (100, 30, 30), brillo medio 53 < 60
        let data = solid_rgba(100, 30, 30, 100);
        let result = dominant_from_rgba(&data, &cfg);
        let (r, g, b) = hex_to_rgb(&result).unwrap();
        let mean = (r as u32 + g as u32 + b as u32) / 3;
        assert!(mean >= cfg.brightness_floor, "brillo {} < floor", mean);
        // La proporción entre canales se conserva (sigue siendo rojizo)
        assert!(r > g && g == b);
    }

    #[test]
    fn extraction_result_is_valid_hex() {
        let cfg = ColorConfig::default();
        let data = solid_rgba(40, 200, 90, 120);
        let result = dominant_from_rgba(&data, &cfg);
        assert!(result.starts_with('#'));
        assert!(hex_to_rgb(&result).is_some());
    }

    #[test]
    fn secondary_never_darkens() {
        let cfg = ColorConfig::default();
        for hex in ["#000000", "#6366f1", "#fa0000", "#123456", "#aabbcc"] {
            let (r, g, b) = hex_to_rgb(hex).unwrap();
            let before = r as u32 + g as u32 + b as u32;
            let secondary = derive_secondary(hex, cfg.lighten_ratio);
            let (r2, g2, b2) = hex_to_rgb(&secondary).unwrap();
            let after = r2 as u32 + g2 as u32 + b2 as u32;
            assert!(after >= before, "{} se oscureció a {}", hex, secondary);
        }
    }

    #[test]
    fn white_is_a_fixed_point() {
        assert_eq!(derive_secondary("#FFFFFF", 0.25), "#ffffff");
    }

    #[test]
    fn unparseable_primary_passes_through() {
        assert_eq!(derive_secondary("not-a-color", 0.25), "not-a-color");
    }
}
