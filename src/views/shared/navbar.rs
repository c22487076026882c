// ============================================================================
// NAVBAR - Cabecera fija con navegación y estado de sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::AuthViewModel;

pub fn render_navbar(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("navbar").build();
    let inner = ElementBuilder::new("div")?.class("navbar-inner").build();

    // Logo -> home
    let brand = ElementBuilder::new("button")?
        .class("navbar-brand")
        .text("Axiom")
        .build();
    {
        let state = state.clone();
        on_click(&brand, move |_| {
            state.navigate(Route::Home);
        })?;
    }
    append_child(&inner, &brand)?;

    let nav = ElementBuilder::new("nav")?.class("navbar-links").build();

    // Favoritos solo tiene sentido con sesión iniciada
    if state.session.is_authenticated() {
        let favorites_btn = ElementBuilder::new("button")?
            .class("navbar-link")
            .build();
        let label = ElementBuilder::new("span")?.text("Mes favoris").build();
        let badge = ElementBuilder::new("span")?
            .class("favorites-badge")
            .id("favorites-count")?
            .text(&state.favorites.count().to_string())
            .build();
        append_child(&favorites_btn, &label)?;
        append_child(&favorites_btn, &badge)?;
        {
            let state = state.clone();
            on_click(&favorites_btn, move |_| {
                state.navigate(Route::Favorites);
            })?;
        }
        append_child(&nav, &favorites_btn)?;
    }

    // Back-office solo para admins (la guardia lo re-verifica igualmente)
    if state.session.is_admin() {
        let admin_btn = ElementBuilder::new("button")?
            .class("navbar-link")
            .text("Administration")
            .build();
        {
            let state = state.clone();
            on_click(&admin_btn, move |_| {
                state.navigate(Route::AdminConferences);
            })?;
        }
        append_child(&nav, &admin_btn)?;
    }

    if let Some(user) = state.session.user() {
        let user_label = ElementBuilder::new("span")?
            .class("navbar-user")
            .text(&user.id)
            .build();
        append_child(&nav, &user_label)?;

        let logout_btn = ElementBuilder::new("button")?
            .class("navbar-link logout")
            .text("Déconnexion")
            .build();
        {
            let state = state.clone();
            on_click(&logout_btn, move |_| {
                let vm = AuthViewModel::new();
                vm.logout(&state);
            })?;
        }
        append_child(&nav, &logout_btn)?;
    } else {
        let login_btn = ElementBuilder::new("button")?
            .class("navbar-link login")
            .text("Connexion")
            .build();
        {
            let state = state.clone();
            on_click(&login_btn, move |_| {
                state.navigate(Route::Login);
            })?;
        }
        append_child(&nav, &login_btn)?;
    }

    append_child(&inner, &nav)?;
    append_child(&header, &inner)?;
    Ok(header)
}
