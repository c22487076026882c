// ============================================================================
// ADMIN USERS - Tabla de usuarios con promoción a admin
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::UserRole;
use crate::state::AppState;
use crate::viewmodels::UserViewModel;
use crate::views::app::render_error_banner;

pub fn render_admin_users(state: &AppState) -> Result<Element, JsValue> {
    ensure_users_loaded(state);

    let page = ElementBuilder::new("section")?.class("admin-page").build();

    let heading = ElementBuilder::new("h1")?
        .class("page-title")
        .text("Gestion des utilisateurs")
        .build();
    append_child(&page, &heading)?;

    if let Some(banner) = render_error_banner(state)? {
        append_child(&page, &banner)?;
    }

    let users = state.users.snapshot();

    if users.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty-message")
            .text(if *state.users_loaded.borrow() {
                "Aucun utilisateur."
            } else {
                "Chargement..."
            })
            .build();
        append_child(&page, &empty)?;
        return Ok(page);
    }

    let table = ElementBuilder::new("table")?.class("admin-table").build();
    let thead = ElementBuilder::new("thead")?
        .html("<tr><th>Identifiant</th><th>Rôle</th><th>Actions</th></tr>")
        .build();
    append_child(&table, &thead)?;

    let tbody = ElementBuilder::new("tbody")?.build();
    for user in &users {
        let row = ElementBuilder::new("tr")?.build();

        let id_cell = ElementBuilder::new("td")?.text(&user.id).build();
        append_child(&row, &id_cell)?;

        let role_cell = ElementBuilder::new("td")?
            .text(match user.role {
                UserRole::Admin => "admin",
                UserRole::User => "user",
            })
            .build();
        append_child(&row, &role_cell)?;

        let actions_cell = ElementBuilder::new("td")?.class("admin-actions").build();
        if user.role != UserRole::Admin {
            let promote_btn = ElementBuilder::new("button")?
                .class("btn btn-small")
                .text("Promouvoir admin")
                .build();
            {
                let state = state.clone();
                let id = user.id.clone();
                on_click(&promote_btn, move |_| {
                    let state = state.clone();
                    let id = id.clone();
                    spawn_local(async move {
                        let vm = UserViewModel::new();
                        match vm.promote(&state, &id).await {
                            Ok(()) => log::info!("✅ Usuario {} promovido a admin", id),
                            Err(e) => {
                                log::error!("❌ Error promoviendo a {}: {}", id, e);
                                state.error.set(Some(e));
                            }
                        }
                    });
                })?;
            }
            append_child(&actions_cell, &promote_btn)?;
        }
        append_child(&row, &actions_cell)?;

        append_child(&tbody, &row)?;
    }
    append_child(&table, &tbody)?;
    append_child(&page, &table)?;

    Ok(page)
}

/// Cargar la tabla de usuarios una única vez por sesión de página
fn ensure_users_loaded(state: &AppState) {
    if *state.users_loaded.borrow() {
        return;
    }
    *state.users_loaded.borrow_mut() = true;

    let state = state.clone();
    spawn_local(async move {
        let vm = UserViewModel::new();
        if let Err(e) = vm.load_users(&state).await {
            log::error!("❌ Error cargando usuarios: {}", e);
            state.error.set(Some(e));
        }
    });
}
