// ============================================================================
// CONFERENCE CARD - Card del catálogo con el acento de color del diseño
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::Conference;
use crate::state::{AppState, Route};
use crate::views::shared::render_favorite_button;

pub fn render_conference_card(state: &AppState, conference: &Conference) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("article")?
        .class("conference-card")
        .style("--conf-primary", &conference.design.main_color)?
        .style("--conf-secondary", &conference.design.second_color)?
        .build();

    let poster = ElementBuilder::new("img")?
        .class("card-poster")
        .attr("src", &conference.img)?
        .attr("alt", &conference.title)?
        .attr("loading", "lazy")?
        .build();
    append_child(&card, &poster)?;

    let body = ElementBuilder::new("div")?.class("card-body").build();

    let title = ElementBuilder::new("h3")?
        .class("card-title")
        .text(&conference.title)
        .build();
    append_child(&body, &title)?;

    let date = ElementBuilder::new("p")?
        .class("card-date")
        .text(&conference.date)
        .build();
    append_child(&body, &date)?;

    let description = ElementBuilder::new("p")?
        .class("card-description")
        .text(&conference.description)
        .build();
    append_child(&body, &description)?;

    append_child(&card, &body)?;

    // El corazón solo se muestra con sesión (sin sesión no significa nada)
    if state.session.is_authenticated() {
        let actions = ElementBuilder::new("div")?.class("card-actions").build();
        append_child(&actions, &render_favorite_button(state, &conference.id)?)?;
        append_child(&card, &actions)?;
    }

    {
        let state = state.clone();
        let id = conference.id.clone();
        on_click(&card, move |_| {
            state.navigate(Route::Conference(id.clone()));
        })?;
    }

    Ok(card)
}
