// ============================================================================
// INCREMENTAL - Actualizaciones puntuales del DOM sin re-render completo
// ============================================================================
// El toggle de favorito es el caso caliente: re-renderizar toda la página
// por un corazón haría saltar el scroll de la lista.
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{add_class, query_selector, remove_class, set_text_content};
use crate::state::AppState;

/// Refrescar el botón de favorito de una conferencia concreta.
/// Cada ruta monta como mucho un botón por conferencia (card en la lista
/// o botón del detalle), identificado por data-conference-id.
pub fn update_favorite_button(state: &AppState, conference_id: &str) -> Result<(), JsValue> {
    let is_favorite = state.favorites.is_favorite(conference_id);
    let selector = format!(
        "button.favorite-btn[data-conference-id=\"{}\"]",
        conference_id
    );

    // Puede no haber botón montado (p.ej. en una ruta de admin)
    if let Some(button) = query_selector(&selector)? {
        if is_favorite {
            add_class(&button, "is-favorite")?;
        } else {
            remove_class(&button, "is-favorite")?;
        }
        set_text_content(&button, if is_favorite { "♥" } else { "♡" });
    }

    Ok(())
}

/// Contador de favoritos del navbar
pub fn update_favorites_badge(state: &AppState) -> Result<(), JsValue> {
    if let Some(badge) = query_selector("#favorites-count")? {
        let count = state.favorites.count();
        set_text_content(&badge, &count.to_string());
    }
    Ok(())
}
