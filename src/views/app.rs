// ============================================================================
// APP VIEW - Shell de la aplicación (navbar + página según ruta)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::{AppState, Route};
use crate::views;
use crate::views::admin;
use crate::views::shared::render_navbar;

/// Renderizar la aplicación completa para la ruta actual.
/// La guardia se evalúa aquí con los flags derivados recalculados: un
/// snapshot persistido manipulado no abre el back-office.
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let requested = state.route.snapshot();
    let effective = state.guarded_route();

    if effective != requested {
        log::info!(
            "🛡️ [GUARD] Ruta {:?} denegada, redirigiendo a {:?}",
            requested,
            effective
        );
        // Sincronizar el fragment; el listener de hashchange ya apunta
        // a la ruta efectiva, así que no hay bucle
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&effective.to_hash());
        }
    }

    let shell = ElementBuilder::new("div")?.class("app-shell").build();

    append_child(&shell, &render_navbar(state)?)?;

    let main = ElementBuilder::new("main")?.class("app-main").build();
    let page = match &effective {
        Route::Home => views::render_conference_list(state)?,
        Route::Conference(id) => views::render_conference_detail(state, id)?,
        Route::Favorites => views::render_favorites(state)?,
        Route::Login => views::render_login(state)?,
        Route::Register => views::render_register(state)?,
        Route::AdminConferences => admin::render_admin_conferences(state)?,
        Route::AdminConferenceNew => admin::render_conference_form(state, None)?,
        Route::AdminConferenceEdit(id) => admin::render_conference_form(state, Some(id))?,
        Route::AdminUsers => admin::render_admin_users(state)?,
        Route::NotFound => views::render_not_found(state)?,
    };
    append_child(&main, &page)?;
    append_child(&shell, &main)?;

    Ok(shell)
}

/// Banner de error compartido por las vistas (solo se monta si hay mensaje)
pub fn render_error_banner(state: &AppState) -> Result<Option<Element>, JsValue> {
    match state.error.snapshot() {
        Some(message) => {
            let banner = ElementBuilder::new("div")?
                .class("error-banner")
                .text(&message)
                .build();
            Ok(Some(banner))
        }
        None => Ok(None),
    }
}
