// ============================================================================
// LOGIN - Formulario de conexión
// ============================================================================
// El 401 de credenciales malas se muestra aquí mismo: la sesión sigue
// LoggedOut y no hay redirección.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, input_value, on_click, on_submit, set_text_content, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::AuthViewModel;

const ID_INPUT: &str = "login-id";
const PASSWORD_INPUT: &str = "login-password";
const ERROR_BOX: &str = "login-error";

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?.class("auth-page").build();

    let card = ElementBuilder::new("div")?.class("auth-card").build();

    let heading = ElementBuilder::new("h1")?.text("Connexion").build();
    append_child(&card, &heading)?;

    // Caja de error rellenada tras el submit, sin re-render completo
    let error_box = ElementBuilder::new("p")?
        .class("form-error")
        .id(ERROR_BOX)?
        .build();
    append_child(&card, &error_box)?;

    let form = ElementBuilder::new("form")?.class("auth-form").build();

    append_child(&form, &render_field("Identifiant", ID_INPUT, "text")?)?;
    append_child(&form, &render_field("Mot de passe", PASSWORD_INPUT, "password")?)?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text("Se connecter")
        .build();
    append_child(&form, &submit)?;

    {
        let state = state.clone();
        on_submit(&form, move || {
            let id = input_value(ID_INPUT).unwrap_or_default();
            let password = input_value(PASSWORD_INPUT).unwrap_or_default();
            let state = state.clone();
            spawn_local(async move {
                let vm = AuthViewModel::new();
                if let Err(message) = vm.login(&state, &id, &password).await {
                    log::warn!("⚠️ Login rechazado: {}", message);
                    show_form_error(&message);
                }
            });
        })?;
    }
    append_child(&card, &form)?;

    let register_link = ElementBuilder::new("button")?
        .class("link-button")
        .text("Pas encore de compte ? Inscrivez-vous")
        .build();
    {
        let state = state.clone();
        on_click(&register_link, move |_| {
            state.navigate(Route::Register);
        })?;
    }
    append_child(&card, &register_link)?;

    append_child(&page, &card)?;
    Ok(page)
}

pub(crate) fn render_field(label: &str, id: &str, input_type: &str) -> Result<Element, JsValue> {
    let field = ElementBuilder::new("div")?.class("form-field").build();
    let label_el = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label)
        .build();
    append_child(&field, &label_el)?;
    let input = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", input_type)?
        .attr("autocomplete", "off")?
        .build();
    append_child(&field, &input)?;
    Ok(field)
}

fn show_form_error(message: &str) {
    if let Some(error_box) = crate::dom::get_element_by_id(ERROR_BOX) {
        set_text_content(&error_box, message);
    }
}
