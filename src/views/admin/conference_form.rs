// ============================================================================
// ADMIN CONFERENCE FORM - Creación/edición con generación de colores
// ============================================================================
// La varita lee la URL del póster, extrae el color dominante en un canvas
// y rellena mainColor/secondColor. El admin puede retocar los valores a
// mano antes de guardar.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::config::AppConfig;
use crate::dom::{
    append_child, get_element_by_id, input_value, on_click, on_submit, set_input_value, set_style,
    set_text_content, textarea_value, ElementBuilder,
};
use crate::models::{ConferenceDesign, ConferencePayload, OsMap, Speaker, Stakeholder};
use crate::state::{AppState, Route};
use crate::utils::colors::derive_secondary;
use crate::viewmodels::ConferenceViewModel;
use crate::views::conference_list::ensure_conferences_loaded;

const TITLE_INPUT: &str = "conf-title";
const DATE_INPUT: &str = "conf-date";
const DURATION_INPUT: &str = "conf-duration";
const DESCRIPTION_INPUT: &str = "conf-description";
const CONTENT_INPUT: &str = "conf-content";
const IMG_INPUT: &str = "conf-img";
const MAIN_COLOR_INPUT: &str = "conf-main-color";
const SECOND_COLOR_INPUT: &str = "conf-second-color";
const MAIN_SWATCH: &str = "conf-main-swatch";
const SECOND_SWATCH: &str = "conf-second-swatch";
const ADDRESSL1_INPUT: &str = "conf-addressl1";
const ADDRESSL2_INPUT: &str = "conf-addressl2";
const POSTAL_CODE_INPUT: &str = "conf-postal-code";
const CITY_INPUT: &str = "conf-city";
const SPEAKERS_ROWS: &str = "speakers-rows";
const STAKEHOLDERS_ROWS: &str = "stakeholders-rows";
const ERROR_BOX: &str = "conf-form-error";

pub fn render_conference_form(state: &AppState, edit_id: Option<&str>) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?.class("admin-page").build();

    // En edición necesitamos la conferencia en el cache para prellenar
    let editing = match edit_id {
        Some(id) => {
            ensure_conferences_loaded(state);
            match state.conference_by_id(id) {
                Some(conference) => Some(conference),
                None => {
                    let loading = ElementBuilder::new("p")?
                        .class("empty-message")
                        .text("Chargement...")
                        .build();
                    append_child(&page, &loading)?;
                    return Ok(page);
                }
            }
        }
        None => None,
    };

    let heading = ElementBuilder::new("h1")?
        .class("page-title")
        .text(if editing.is_some() {
            "Modifier la conférence"
        } else {
            "Nouvelle conférence"
        })
        .build();
    append_child(&page, &heading)?;

    let error_box = ElementBuilder::new("p")?
        .class("form-error")
        .id(ERROR_BOX)?
        .build();
    append_child(&page, &error_box)?;

    let form = ElementBuilder::new("form")?.class("conference-form").build();

    append_child(
        &form,
        &text_field("Titre", TITLE_INPUT, editing.as_ref().map(|c| c.title.as_str()))?,
    )?;
    append_child(
        &form,
        &text_field("Date", DATE_INPUT, editing.as_ref().map(|c| c.date.as_str()))?,
    )?;
    append_child(
        &form,
        &text_field(
            "Durée",
            DURATION_INPUT,
            editing.as_ref().and_then(|c| c.duration.as_deref()),
        )?,
    )?;
    append_child(
        &form,
        &textarea_field(
            "Description",
            DESCRIPTION_INPUT,
            editing.as_ref().map(|c| c.description.as_str()),
        )?,
    )?;
    append_child(
        &form,
        &textarea_field(
            "Contenu",
            CONTENT_INPUT,
            editing.as_ref().map(|c| c.content.as_str()),
        )?,
    )?;
    append_child(
        &form,
        &text_field("Affiche (URL)", IMG_INPUT, editing.as_ref().map(|c| c.img.as_str()))?,
    )?;

    append_child(&form, &render_design_block(editing.as_ref().map(|c| &c.design))?)?;
    append_child(&form, &render_address_block(editing.as_ref().and_then(|c| c.os_map.as_ref()))?)?;

    append_child(
        &form,
        &render_people_block(
            "Intervenants",
            SPEAKERS_ROWS,
            "speaker",
            false,
            editing
                .as_ref()
                .and_then(|c| c.speakers.as_ref())
                .map(|s| {
                    s.iter()
                        .map(|p| (p.firstname.clone(), p.lastname.clone(), None))
                        .collect()
                })
                .unwrap_or_default(),
        )?,
    )?;
    append_child(
        &form,
        &render_people_block(
            "Organisateurs",
            STAKEHOLDERS_ROWS,
            "stakeholder",
            true,
            editing
                .as_ref()
                .and_then(|c| c.stakeholders.as_ref())
                .map(|s| {
                    s.iter()
                        .map(|p| (p.firstname.clone(), p.lastname.clone(), p.job.clone()))
                        .collect()
                })
                .unwrap_or_default(),
        )?,
    )?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text(if editing.is_some() { "Enregistrer" } else { "Créer" })
        .build();
    append_child(&form, &submit)?;

    let cancel = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .attr("type", "button")?
        .text("Annuler")
        .build();
    {
        let state = state.clone();
        on_click(&cancel, move |_| {
            state.navigate(Route::AdminConferences);
        })?;
    }
    append_child(&form, &cancel)?;

    {
        let state = state.clone();
        let edit_id = edit_id.map(str::to_string);
        on_submit(&form, move || {
            submit_form(&state, edit_id.as_deref());
        })?;
    }

    append_child(&page, &form)?;
    Ok(page)
}

// ----------------------------------------------------------------------------
// Bloques del formulario
// ----------------------------------------------------------------------------

fn text_field(label: &str, id: &str, value: Option<&str>) -> Result<Element, JsValue> {
    let field = ElementBuilder::new("div")?.class("form-field").build();
    let label_el = ElementBuilder::new("label")?.attr("for", id)?.text(label).build();
    append_child(&field, &label_el)?;
    let mut input = ElementBuilder::new("input")?.id(id)?.attr("type", "text")?;
    if let Some(value) = value {
        input = input.attr("value", value)?;
    }
    append_child(&field, &input.build())?;
    Ok(field)
}

fn textarea_field(label: &str, id: &str, value: Option<&str>) -> Result<Element, JsValue> {
    let field = ElementBuilder::new("div")?.class("form-field").build();
    let label_el = ElementBuilder::new("label")?.attr("for", id)?.text(label).build();
    append_child(&field, &label_el)?;
    let mut area = ElementBuilder::new("textarea")?.id(id)?.attr("rows", "4")?;
    if let Some(value) = value {
        area = area.text(value);
    }
    append_child(&field, &area.build())?;
    Ok(field)
}

/// Colores de tema + botón de generación a partir del póster
fn render_design_block(design: Option<&ConferenceDesign>) -> Result<Element, JsValue> {
    let cfg = AppConfig::from_env().color_config;
    let main = design
        .map(|d| d.main_color.clone())
        .unwrap_or_else(|| cfg.fallback_color.clone());
    let second = design
        .map(|d| d.second_color.clone())
        .unwrap_or_else(|| derive_secondary(&cfg.fallback_color, cfg.lighten_ratio));

    let block = ElementBuilder::new("fieldset")?.class("design-block").build();
    let legend = ElementBuilder::new("legend")?.text("Couleurs du thème").build();
    append_child(&block, &legend)?;

    let row = ElementBuilder::new("div")?.class("design-row").build();

    let main_field = ElementBuilder::new("div")?.class("form-field inline").build();
    let main_label = ElementBuilder::new("label")?
        .attr("for", MAIN_COLOR_INPUT)?
        .text("Couleur principale")
        .build();
    append_child(&main_field, &main_label)?;
    let main_input = ElementBuilder::new("input")?
        .id(MAIN_COLOR_INPUT)?
        .attr("type", "text")?
        .attr("value", &main)?
        .build();
    append_child(&main_field, &main_input)?;
    let main_swatch = ElementBuilder::new("span")?
        .class("color-swatch")
        .id(MAIN_SWATCH)?
        .style("background-color", &main)?
        .build();
    append_child(&main_field, &main_swatch)?;
    append_child(&row, &main_field)?;

    let second_field = ElementBuilder::new("div")?.class("form-field inline").build();
    let second_label = ElementBuilder::new("label")?
        .attr("for", SECOND_COLOR_INPUT)?
        .text("Couleur secondaire")
        .build();
    append_child(&second_field, &second_label)?;
    let second_input = ElementBuilder::new("input")?
        .id(SECOND_COLOR_INPUT)?
        .attr("type", "text")?
        .attr("value", &second)?
        .build();
    append_child(&second_field, &second_input)?;
    let second_swatch = ElementBuilder::new("span")?
        .class("color-swatch")
        .id(SECOND_SWATCH)?
        .style("background-color", &second)?
        .build();
    append_child(&second_field, &second_swatch)?;
    append_child(&row, &second_field)?;

    let wand = ElementBuilder::new("button")?
        .class("btn btn-wand")
        .attr("type", "button")?
        .attr("title", "Générer depuis l'affiche")?
        .text("🪄 Générer")
        .build();
    on_click(&wand, move |_| {
        let image_url = input_value(IMG_INPUT).unwrap_or_default();
        if image_url.is_empty() {
            show_form_error("Renseignez d'abord l'URL de l'affiche");
            return;
        }
        spawn_local(async move {
            let vm = ConferenceViewModel::new();
            let sample = vm.generate_colors(&image_url).await;
            log::info!(
                "🎨 Colores generados: {} / {}",
                sample.dominant,
                sample.secondary
            );
            set_input_value(MAIN_COLOR_INPUT, &sample.dominant);
            set_input_value(SECOND_COLOR_INPUT, &sample.secondary);
            update_swatch(MAIN_SWATCH, &sample.dominant);
            update_swatch(SECOND_SWATCH, &sample.secondary);
        });
    })?;
    append_child(&row, &wand)?;

    append_child(&block, &row)?;
    Ok(block)
}

fn render_address_block(os_map: Option<&OsMap>) -> Result<Element, JsValue> {
    let block = ElementBuilder::new("fieldset")?.class("address-block").build();
    let legend = ElementBuilder::new("legend")?.text("Adresse").build();
    append_child(&block, &legend)?;

    append_child(
        &block,
        &text_field("Adresse (ligne 1)", ADDRESSL1_INPUT, os_map.and_then(|m| m.addressl1.as_deref()))?,
    )?;
    append_child(
        &block,
        &text_field("Adresse (ligne 2)", ADDRESSL2_INPUT, os_map.and_then(|m| m.addressl2.as_deref()))?,
    )?;
    append_child(
        &block,
        &text_field("Code postal", POSTAL_CODE_INPUT, os_map.and_then(|m| m.postal_code.as_deref()))?,
    )?;
    append_child(
        &block,
        &text_field("Ville", CITY_INPUT, os_map.and_then(|m| m.city.as_deref()))?,
    )?;
    Ok(block)
}

/// Bloque de filas dinámicas (intervenants / organisateurs).
/// Las filas viven solo en el DOM: se recogen al hacer submit.
fn render_people_block(
    title: &str,
    container_id: &str,
    class_prefix: &'static str,
    with_job: bool,
    initial: Vec<(String, String, Option<String>)>,
) -> Result<Element, JsValue> {
    let block = ElementBuilder::new("fieldset")?.class("people-block").build();
    let legend = ElementBuilder::new("legend")?.text(title).build();
    append_child(&block, &legend)?;

    let rows = ElementBuilder::new("div")?
        .class("people-rows")
        .id(container_id)?
        .build();
    for (firstname, lastname, job) in &initial {
        append_child(
            &rows,
            &render_person_row(class_prefix, with_job, firstname, lastname, job.as_deref())?,
        )?;
    }
    append_child(&block, &rows)?;

    let add_btn = ElementBuilder::new("button")?
        .class("btn btn-small")
        .attr("type", "button")?
        .text("+ Ajouter")
        .build();
    {
        let container_id = container_id.to_string();
        on_click(&add_btn, move |_| {
            let Some(container) = get_element_by_id(&container_id) else {
                return;
            };
            match render_person_row(class_prefix, with_job, "", "", None) {
                Ok(row) => {
                    let _ = append_child(&container, &row);
                }
                Err(e) => log::warn!("⚠️ Error añadiendo fila: {:?}", e),
            }
        })?;
    }
    append_child(&block, &add_btn)?;

    Ok(block)
}

fn render_person_row(
    class_prefix: &str,
    with_job: bool,
    firstname: &str,
    lastname: &str,
    job: Option<&str>,
) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("div")?.class("person-row").build();

    let firstname_input = ElementBuilder::new("input")?
        .class(&format!("{}-firstname", class_prefix))
        .attr("type", "text")?
        .attr("placeholder", "Prénom")?
        .attr("value", firstname)?
        .build();
    append_child(&row, &firstname_input)?;

    let lastname_input = ElementBuilder::new("input")?
        .class(&format!("{}-lastname", class_prefix))
        .attr("type", "text")?
        .attr("placeholder", "Nom")?
        .attr("value", lastname)?
        .build();
    append_child(&row, &lastname_input)?;

    if with_job {
        let job_input = ElementBuilder::new("input")?
            .class(&format!("{}-job", class_prefix))
            .attr("type", "text")?
            .attr("placeholder", "Fonction")?
            .attr("value", job.unwrap_or(""))?
            .build();
        append_child(&row, &job_input)?;
    }

    let remove_btn = ElementBuilder::new("button")?
        .class("btn btn-small btn-danger")
        .attr("type", "button")?
        .text("×")
        .build();
    {
        let row = row.clone();
        on_click(&remove_btn, move |_| {
            row.remove();
        })?;
    }
    append_child(&row, &remove_btn)?;

    Ok(row)
}

// ----------------------------------------------------------------------------
// Submit
// ----------------------------------------------------------------------------

fn submit_form(state: &AppState, edit_id: Option<&str>) {
    let payload = match collect_payload(edit_id) {
        Ok(payload) => payload,
        Err(message) => {
            show_form_error(&message);
            return;
        }
    };

    let state = state.clone();
    let edit_id = edit_id.map(str::to_string);
    spawn_local(async move {
        let vm = ConferenceViewModel::new();
        let result = match &edit_id {
            Some(id) => vm.update(&state, id, &payload).await,
            None => vm.create(&state, &payload).await,
        };
        match result {
            Ok(()) => {
                log::info!("💾 Conferencia guardada: {}", payload.title);
                state.navigate(Route::AdminConferences);
            }
            Err(message) => {
                log::error!("❌ Error guardando conferencia: {}", message);
                show_form_error(&message);
            }
        }
    });
}

fn collect_payload(edit_id: Option<&str>) -> Result<ConferencePayload, String> {
    let title = input_value(TITLE_INPUT).unwrap_or_default();
    let date = input_value(DATE_INPUT).unwrap_or_default();
    let description = textarea_value(DESCRIPTION_INPUT).unwrap_or_default();
    let content = textarea_value(CONTENT_INPUT).unwrap_or_default();
    let img = input_value(IMG_INPUT).unwrap_or_default();

    if title.is_empty() || date.is_empty() || description.is_empty() || img.is_empty() {
        return Err("Veuillez remplir le titre, la date, la description et l'affiche".to_string());
    }

    let duration = non_empty(input_value(DURATION_INPUT));

    let cfg = AppConfig::from_env().color_config;
    let main_color = non_empty(input_value(MAIN_COLOR_INPUT)).unwrap_or(cfg.fallback_color);
    let second_color = non_empty(input_value(SECOND_COLOR_INPUT))
        .unwrap_or_else(|| derive_secondary(&main_color, cfg.lighten_ratio));

    let os_map = collect_os_map();
    let speakers = collect_people(SPEAKERS_ROWS, "speaker", false)
        .into_iter()
        .map(|(firstname, lastname, _)| Speaker { firstname, lastname })
        .collect();
    let stakeholders = collect_people(STAKEHOLDERS_ROWS, "stakeholder", true)
        .into_iter()
        .map(|(firstname, lastname, job)| Stakeholder {
            firstname,
            lastname,
            job,
            img: None,
        })
        .collect();

    Ok(ConferencePayload {
        id: edit_id.map(str::to_string),
        title,
        date,
        description,
        img,
        content,
        duration,
        os_map,
        speakers,
        stakeholders,
        design: ConferenceDesign {
            main_color,
            second_color,
        },
    })
}

fn collect_os_map() -> Option<OsMap> {
    let os_map = OsMap {
        addressl1: non_empty(input_value(ADDRESSL1_INPUT)),
        addressl2: non_empty(input_value(ADDRESSL2_INPUT)),
        postal_code: non_empty(input_value(POSTAL_CODE_INPUT)),
        city: non_empty(input_value(CITY_INPUT)),
        coordinates: None,
    };
    if os_map == OsMap::default() {
        None
    } else {
        Some(os_map)
    }
}

/// Recoger las filas dinámicas directamente del DOM; las filas sin nombre
/// ni apellido se descartan
fn collect_people(
    container_id: &str,
    class_prefix: &str,
    with_job: bool,
) -> Vec<(String, String, Option<String>)> {
    let Some(container) = get_element_by_id(container_id) else {
        return Vec::new();
    };

    let mut people = Vec::new();
    let rows = container.children();
    for index in 0..rows.length() {
        let Some(row) = rows.item(index) else { continue };
        let firstname = row_input_value(&row, &format!(".{}-firstname", class_prefix));
        let lastname = row_input_value(&row, &format!(".{}-lastname", class_prefix));
        if firstname.is_empty() && lastname.is_empty() {
            continue;
        }
        let job = if with_job {
            non_empty(Some(row_input_value(&row, &format!(".{}-job", class_prefix))))
        } else {
            None
        };
        people.push((firstname, lastname, job));
    }
    people
}

fn row_input_value(row: &Element, selector: &str) -> String {
    row.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_ref::<HtmlInputElement>().map(|input| input.value()))
        .unwrap_or_default()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn update_swatch(id: &str, color: &str) {
    if let Some(swatch) = get_element_by_id(id) {
        let _ = set_style(&swatch, "background-color", color);
    }
}

fn show_form_error(message: &str) {
    if let Some(error_box) = get_element_by_id(ERROR_BOX) {
        set_text_content(&error_box, message);
    }
}
