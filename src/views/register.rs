// ============================================================================
// REGISTER - Formulario de alta de cuenta
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, input_value, on_click, on_submit, set_text_content, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::AuthViewModel;
use crate::views::login::render_field;

const ID_INPUT: &str = "register-id";
const PASSWORD_INPUT: &str = "register-password";
const CONFIRM_INPUT: &str = "register-confirm";
const ERROR_BOX: &str = "register-error";
const SUCCESS_BOX: &str = "register-success";

pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?.class("auth-page").build();

    let card = ElementBuilder::new("div")?.class("auth-card").build();

    let heading = ElementBuilder::new("h1")?.text("Inscription").build();
    append_child(&card, &heading)?;

    let error_box = ElementBuilder::new("p")?
        .class("form-error")
        .id(ERROR_BOX)?
        .build();
    append_child(&card, &error_box)?;

    let success_box = ElementBuilder::new("p")?
        .class("form-success")
        .id(SUCCESS_BOX)?
        .build();
    append_child(&card, &success_box)?;

    let form = ElementBuilder::new("form")?.class("auth-form").build();

    append_child(&form, &render_field("Identifiant", ID_INPUT, "text")?)?;
    append_child(&form, &render_field("Mot de passe", PASSWORD_INPUT, "password")?)?;
    append_child(
        &form,
        &render_field("Confirmer le mot de passe", CONFIRM_INPUT, "password")?,
    )?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text("S'inscrire")
        .build();
    append_child(&form, &submit)?;

    {
        let state = state.clone();
        on_submit(&form, move || {
            let id = input_value(ID_INPUT).unwrap_or_default();
            let password = input_value(PASSWORD_INPUT).unwrap_or_default();
            let confirm = input_value(CONFIRM_INPUT).unwrap_or_default();

            // Validación local antes de tocar la API
            if id.is_empty() || password.is_empty() {
                show_box(ERROR_BOX, "Veuillez remplir tous les champs");
                return;
            }
            if password != confirm {
                show_box(ERROR_BOX, "Les mots de passe ne correspondent pas");
                return;
            }

            let state = state.clone();
            spawn_local(async move {
                let vm = AuthViewModel::new();
                match vm.register(&id, &password).await {
                    Ok(()) => {
                        show_box(ERROR_BOX, "");
                        show_box(SUCCESS_BOX, "Compte créé ! Redirection...");
                        // Dejar leer el mensaje antes de ir al login
                        let state = state.clone();
                        Timeout::new(2_000, move || {
                            state.navigate(Route::Login);
                        })
                        .forget();
                    }
                    Err(message) => {
                        log::warn!("⚠️ Registro rechazado: {}", message);
                        show_box(ERROR_BOX, &message);
                    }
                }
            });
        })?;
    }
    append_child(&card, &form)?;

    let login_link = ElementBuilder::new("button")?
        .class("link-button")
        .text("Déjà un compte ? Connectez-vous")
        .build();
    {
        let state = state.clone();
        on_click(&login_link, move |_| {
            state.navigate(Route::Login);
        })?;
    }
    append_child(&card, &login_link)?;

    append_child(&page, &card)?;
    Ok(page)
}

fn show_box(id: &str, message: &str) {
    if let Some(element) = crate::dom::get_element_by_id(id) {
        set_text_content(&element, message);
    }
}
