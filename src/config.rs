use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub color_config: ColorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:4555".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            color_config: ColorConfig::default(),
        }
    }
}

/// Parámetros de la extracción de color dominante.
/// Los umbrales difieren entre temas claros y oscuros, por eso son
/// configuración y no constantes del algoritmo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Ancho al que se reduce la imagen antes de muestrear píxeles
    pub sample_width: u32,
    /// Tamaño del bucket de cuantización por canal (agrupa colores casi iguales)
    pub bucket_size: u8,
    /// Brillo medio mínimo aceptado (descarta fondos casi negros)
    pub brightness_min: u32,
    /// Brillo medio máximo aceptado (descarta fondos casi blancos)
    pub brightness_max: u32,
    /// Saturación mínima (max-min de canales) para no contar grises
    pub saturation_min: u32,
    /// Si el ganador queda por debajo de este brillo medio, se aclara hasta él
    pub brightness_floor: u32,
    /// Proporción de mezcla hacia blanco para el color secundario (0.0 - 1.0)
    pub lighten_ratio: f32,
    /// Color devuelto cuando ningún bucket sobrevive a los filtros
    pub fallback_color: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            sample_width: 100,
            bucket_size: 10,
            brightness_min: 30,
            brightness_max: 240,
            saturation_min: 20,
            brightness_floor: 60,
            lighten_ratio: 0.25,
            fallback_color: "#6366f1".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = ColorConfig::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .unwrap_or("http://localhost:4555").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            color_config: ColorConfig {
                sample_width: option_env!("COLOR_SAMPLE_WIDTH")
                    .unwrap_or("100").parse().unwrap_or(defaults.sample_width),
                bucket_size: option_env!("COLOR_BUCKET_SIZE")
                    .unwrap_or("10").parse().unwrap_or(defaults.bucket_size),
                brightness_min: option_env!("COLOR_BRIGHTNESS_MIN")
                    .unwrap_or("30").parse().unwrap_or(defaults.brightness_min),
                brightness_max: option_env!("COLOR_BRIGHTNESS_MAX")
                    .unwrap_or("240").parse().unwrap_or(defaults.brightness_max),
                saturation_min: option_env!("COLOR_SATURATION_MIN")
                    .unwrap_or("20").parse().unwrap_or(defaults.saturation_min),
                brightness_floor: option_env!("COLOR_BRIGHTNESS_FLOOR")
                    .unwrap_or("60").parse().unwrap_or(defaults.brightness_floor),
                lighten_ratio: option_env!("COLOR_LIGHTEN_RATIO")
                    .unwrap_or("0.25").parse().unwrap_or(defaults.lighten_ratio),
                fallback_color: option_env!("COLOR_FALLBACK")
                    .unwrap_or("#6366f1").to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_color_config_is_consistent() {
        let cfg = ColorConfig::default();
        assert!(cfg.brightness_min < cfg.brightness_max);
        assert!(cfg.lighten_ratio > 0.0 && cfg.lighten_ratio < 1.0);
        assert!(cfg.fallback_color.starts_with('#'));
    }
}
