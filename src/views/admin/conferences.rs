// ============================================================================
// ADMIN CONFERENCES - Tabla del back-office con acciones CRUD
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::ConferenceViewModel;
use crate::views::app::render_error_banner;
use crate::views::conference_list::ensure_conferences_loaded;

pub fn render_admin_conferences(state: &AppState) -> Result<Element, JsValue> {
    ensure_conferences_loaded(state);

    let page = ElementBuilder::new("section")?.class("admin-page").build();

    let toolbar = ElementBuilder::new("div")?.class("admin-toolbar").build();
    let heading = ElementBuilder::new("h1")?
        .class("page-title")
        .text("Gestion des conférences")
        .build();
    append_child(&toolbar, &heading)?;

    let new_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("Nouvelle conférence")
        .build();
    {
        let state = state.clone();
        on_click(&new_btn, move |_| {
            state.navigate(Route::AdminConferenceNew);
        })?;
    }
    append_child(&toolbar, &new_btn)?;

    let users_btn = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .text("Utilisateurs")
        .build();
    {
        let state = state.clone();
        on_click(&users_btn, move |_| {
            state.navigate(Route::AdminUsers);
        })?;
    }
    append_child(&toolbar, &users_btn)?;
    append_child(&page, &toolbar)?;

    if let Some(banner) = render_error_banner(state)? {
        append_child(&page, &banner)?;
    }

    let conferences = state.conferences.snapshot();

    if conferences.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty-message")
            .text(if *state.conferences_loaded.borrow() {
                "Aucune conférence."
            } else {
                "Chargement..."
            })
            .build();
        append_child(&page, &empty)?;
        return Ok(page);
    }

    let table = ElementBuilder::new("table")?.class("admin-table").build();

    let thead = ElementBuilder::new("thead")?.html(
        "<tr><th>Titre</th><th>Date</th><th>Couleurs</th><th>Actions</th></tr>",
    )
    .build();
    append_child(&table, &thead)?;

    let tbody = ElementBuilder::new("tbody")?.build();
    for conference in &conferences {
        let row = ElementBuilder::new("tr")?.build();

        let title_cell = ElementBuilder::new("td")?.text(&conference.title).build();
        append_child(&row, &title_cell)?;

        let date_cell = ElementBuilder::new("td")?.text(&conference.date).build();
        append_child(&row, &date_cell)?;

        // Muestra visual del par de colores del diseño
        let colors_cell = ElementBuilder::new("td")?.build();
        let main_swatch = ElementBuilder::new("span")?
            .class("color-swatch")
            .attr("title", &conference.design.main_color)?
            .style("background-color", &conference.design.main_color)?
            .build();
        let second_swatch = ElementBuilder::new("span")?
            .class("color-swatch")
            .attr("title", &conference.design.second_color)?
            .style("background-color", &conference.design.second_color)?
            .build();
        append_child(&colors_cell, &main_swatch)?;
        append_child(&colors_cell, &second_swatch)?;
        append_child(&row, &colors_cell)?;

        let actions_cell = ElementBuilder::new("td")?.class("admin-actions").build();

        let edit_btn = ElementBuilder::new("button")?
            .class("btn btn-small")
            .text("Modifier")
            .build();
        {
            let state = state.clone();
            let id = conference.id.clone();
            on_click(&edit_btn, move |_| {
                state.navigate(Route::AdminConferenceEdit(id.clone()));
            })?;
        }
        append_child(&actions_cell, &edit_btn)?;

        let delete_btn = ElementBuilder::new("button")?
            .class("btn btn-small btn-danger")
            .text("Supprimer")
            .build();
        {
            let state = state.clone();
            let id = conference.id.clone();
            on_click(&delete_btn, move |_| {
                let state = state.clone();
                let id = id.clone();
                spawn_local(async move {
                    let vm = ConferenceViewModel::new();
                    match vm.delete(&state, &id).await {
                        Ok(()) => log::info!("💾 Conferencia {} eliminada", id),
                        Err(e) => {
                            log::error!("❌ Error eliminando conferencia {}: {}", id, e);
                            state.error.set(Some(e));
                        }
                    }
                });
            })?;
        }
        append_child(&actions_cell, &delete_btn)?;

        append_child(&row, &actions_cell)?;
        append_child(&tbody, &row)?;
    }
    append_child(&table, &tbody)?;
    append_child(&page, &table)?;

    Ok(page)
}
