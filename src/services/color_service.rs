// ============================================================================
// COLOR SERVICE - Muestreo de píxeles de una imagen vía canvas
// ============================================================================
// Única operación asíncrona del core: espera el decode de la imagen y lee
// los píxeles de un canvas reducido. La matemática vive en utils::colors.
// Cada llamada es dueña de su imagen y su canvas: varias extracciones en
// paralelo no comparten estado.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::config::ColorConfig;
use crate::utils::colors::{derive_secondary, dominant_from_rgba};

/// Par (dominante, secundario) listo para volcar en el formulario.
/// Transitorio: no se persiste en ningún sitio.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSample {
    pub dominant: String,
    pub secondary: String,
}

/// Extraer el color dominante de una imagen por URL (o data URI).
/// Falla solo si la imagen no carga/decodifica o si el navegador bloquea
/// la lectura de píxeles por CORS; con píxeles en mano siempre hay color.
pub async fn extract_dominant_color(image_url: &str, cfg: &ColorConfig) -> Result<String, String> {
    let pixels = sample_image_pixels(image_url, cfg.sample_width).await?;
    Ok(dominant_from_rgba(&pixels, cfg))
}

/// Extraer el par completo de colores de tema para una conferencia
pub async fn extract_color_sample(image_url: &str, cfg: &ColorConfig) -> Result<ColorSample, String> {
    let dominant = extract_dominant_color(image_url, cfg).await?;
    let secondary = derive_secondary(&dominant, cfg.lighten_ratio);
    Ok(ColorSample { dominant, secondary })
}

/// Cargar la imagen y devolver el buffer RGBA reducido a `sample_width`
/// de ancho (aspecto preservado) para acotar el coste del escaneo.
async fn sample_image_pixels(url: &str, sample_width: u32) -> Result<Vec<u8>, String> {
    let img = HtmlImageElement::new()
        .map_err(|e| format!("No se pudo crear el elemento imagen: {:?}", e))?;

    // Sin esto el canvas queda "tainted" y getImageData lanza SecurityError
    img.set_cross_origin(Some("anonymous"));

    let load = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::once(move |_event: web_sys::Event| {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once(move |_event: web_sys::Event| {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("Failed to load image"));
        });
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        // El navegador es dueño del elemento mientras carga
        onload.forget();
        onerror.forget();
    });

    img.set_src(url);

    JsFuture::from(load)
        .await
        .map_err(|_| "Error cargando la imagen (red, formato o decode)".to_string())?;

    if img.natural_width() == 0 {
        return Err("La imagen decodificada no tiene píxeles".to_string());
    }

    // Reducir manteniendo el aspecto
    let width = sample_width.max(1);
    let height = ((img.natural_height() as f64 / img.natural_width() as f64) * width as f64)
        .round()
        .max(1.0) as u32;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| format!("No se pudo crear el canvas: {:?}", e))?
        .dyn_into()
        .map_err(|_| "El elemento creado no es un canvas".to_string())?;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| format!("Error obteniendo contexto 2d: {:?}", e))?
        .ok_or("Canvas context not available")?
        .dyn_into()
        .map_err(|_| "Contexto 2d con tipo inesperado".to_string())?;

    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        &img,
        0.0,
        0.0,
        width as f64,
        height as f64,
    )
    .map_err(|e| format!("Error dibujando la imagen: {:?}", e))?;

    let image_data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|_| "Lectura de píxeles bloqueada (CORS) o canvas inválido".to_string())?;

    let pixels = image_data.data().to_vec();

    // Liberar los recursos transitorios del canvas
    canvas.set_width(0);
    canvas.set_height(0);

    Ok(pixels)
}
