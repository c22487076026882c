use std::env;
use std::fs;
use std::path::Path;

// Claves que la app lee con option_env! en config.rs
const KNOWN_KEYS: &[&str] = &[
    "API_BASE_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "COLOR_SAMPLE_WIDTH",
    "COLOR_BUCKET_SIZE",
    "COLOR_BRIGHTNESS_MIN",
    "COLOR_BRIGHTNESS_MAX",
    "COLOR_SATURATION_MIN",
    "COLOR_BRIGHTNESS_FLOOR",
    "COLOR_LIGHTEN_RATIO",
    "COLOR_FALLBACK",
];

fn main() {
    // Cargar variables de entorno desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                // Ignorar comentarios y líneas vacías
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // Parsear KEY=VALUE, solo claves conocidas por la app
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();

                    if !KNOWN_KEYS.contains(&key) {
                        println!("cargo:warning=Clave desconocida en .env ignorada: {}", key);
                        continue;
                    }

                    // Solo configurar si no está ya definida
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default values. Copy .env.example to .env and configure your settings.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
