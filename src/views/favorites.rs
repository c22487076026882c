// ============================================================================
// FAVORITES - Conferencias marcadas, filtradas sobre el cache del catálogo
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::views::conference_list::ensure_conferences_loaded;
use crate::views::render_conference_card;

pub fn render_favorites(state: &AppState) -> Result<Element, JsValue> {
    // La página de favoritos necesita el catálogo para resolver los ids
    ensure_conferences_loaded(state);

    let page = ElementBuilder::new("section")?.class("favorites-page").build();

    let heading = ElementBuilder::new("h1")?
        .class("page-title")
        .text("Mes favoris")
        .build();
    append_child(&page, &heading)?;

    let favorite_ids = state.favorites.all();
    let conferences = state.conferences.snapshot();

    let favorites: Vec<_> = conferences
        .iter()
        .filter(|c| favorite_ids.contains(&c.id))
        .collect();

    if favorites.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty-message")
            .text(if favorite_ids.is_empty() {
                "Vous n'avez pas encore de favoris."
            } else if *state.conferences_loaded.borrow() && !conferences.is_empty() {
                // Ids persistidos que ya no existen en el catálogo
                "Vos favoris ne sont plus disponibles."
            } else {
                "Chargement..."
            })
            .build();
        append_child(&page, &empty)?;
        return Ok(page);
    }

    let grid = ElementBuilder::new("div")?.class("conference-grid").build();
    for conference in favorites {
        append_child(&grid, &render_conference_card(state, conference)?)?;
    }
    append_child(&page, &grid)?;

    Ok(page)
}
