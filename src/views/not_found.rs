// ============================================================================
// NOT FOUND - Ruta desconocida
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::{AppState, Route};

pub fn render_not_found(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?.class("not-found-page").build();

    let heading = ElementBuilder::new("h1")?.text("404").build();
    append_child(&page, &heading)?;

    let message = ElementBuilder::new("p")?
        .text("Cette page n'existe pas.")
        .build();
    append_child(&page, &message)?;

    let home_link = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("Retour à l'accueil")
        .build();
    {
        let state = state.clone();
        on_click(&home_link, move |_| {
            state.navigate(Route::Home);
        })?;
    }
    append_child(&page, &home_link)?;

    Ok(page)
}
