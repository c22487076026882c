// ============================================================================
// CONFERENCE LIST - Catálogo público (home)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::ConferenceViewModel;
use crate::views::app::render_error_banner;
use crate::views::render_conference_card;

pub fn render_conference_list(state: &AppState) -> Result<Element, JsValue> {
    // Primera visita: disparar la carga del catálogo (el set del estado
    // re-renderiza cuando llegan los datos)
    ensure_conferences_loaded(state);

    let page = ElementBuilder::new("section")?.class("conference-list").build();

    let heading = ElementBuilder::new("h1")?
        .class("page-title")
        .text("Conférences")
        .build();
    append_child(&page, &heading)?;

    if let Some(banner) = render_error_banner(state)? {
        append_child(&page, &banner)?;
    }

    let conferences = state.conferences.snapshot();

    if conferences.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty-message")
            .text(if *state.conferences_loaded.borrow() {
                "Aucune conférence pour le moment."
            } else {
                "Chargement..."
            })
            .build();
        append_child(&page, &empty)?;
        return Ok(page);
    }

    let grid = ElementBuilder::new("div")?.class("conference-grid").build();
    for conference in &conferences {
        append_child(&grid, &render_conference_card(state, conference)?)?;
    }
    append_child(&page, &grid)?;

    Ok(page)
}

/// Cargar el catálogo una única vez por sesión de página
pub fn ensure_conferences_loaded(state: &AppState) {
    if *state.conferences_loaded.borrow() {
        return;
    }
    *state.conferences_loaded.borrow_mut() = true;

    let state = state.clone();
    spawn_local(async move {
        let vm = ConferenceViewModel::new();
        if let Err(e) = vm.load_conferences(&state).await {
            log::error!("❌ Error cargando conferencias: {}", e);
            state.error.set(Some(e));
        }
    });
}
