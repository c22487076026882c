// ============================================================================
// FAVORITE BUTTON - Corazón de toggle compartido por cards y detalle
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::incremental::{update_favorite_button, update_favorites_badge};
use crate::dom::{on_click, ElementBuilder};
use crate::state::{AppState, Route};

/// Botón de favorito para una conferencia. Anónimo -> redirige a login.
/// El toggle actualiza el DOM de forma incremental (sin re-render, el
/// scroll de la lista no se mueve).
pub fn render_favorite_button(state: &AppState, conference_id: &str) -> Result<Element, JsValue> {
    let is_favorite = state.favorites.is_favorite(conference_id);

    let button = ElementBuilder::new("button")?
        .class(if is_favorite {
            "favorite-btn is-favorite"
        } else {
            "favorite-btn"
        })
        .attr("data-conference-id", conference_id)?
        .attr("title", "Ajouter aux favoris")?
        .text(if is_favorite { "♥" } else { "♡" })
        .build();

    {
        let state = state.clone();
        let conference_id = conference_id.to_string();
        on_click(&button, move |event| {
            event.prevent_default();
            event.stop_propagation();

            if !state.session.is_authenticated() {
                state.navigate(Route::Login);
                return;
            }

            state.favorites.toggle_favorite(&conference_id);
            if let Err(e) = update_favorite_button(&state, &conference_id) {
                log::warn!("⚠️ Error actualizando botón de favorito: {:?}", e);
            }
            if let Err(e) = update_favorites_badge(&state) {
                log::warn!("⚠️ Error actualizando contador de favoritos: {:?}", e);
            }
        })?;
    }

    Ok(button)
}
