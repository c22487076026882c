// ============================================================================
// CONFERENCE DETAIL - Página de detalle con hero tematizado
// ============================================================================
// El gradiente del hero usa el par (mainColor, secondColor) calculado por
// el extractor cuando el admin creó la conferencia.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::Conference;
use crate::state::AppState;
use crate::viewmodels::ConferenceViewModel;
use crate::views::shared::render_favorite_button;

pub fn render_conference_detail(state: &AppState, id: &str) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?.class("conference-detail").build();

    let Some(conference) = state.conference_by_id(id) else {
        // Enlace directo sin la lista cacheada: pedir solo esta conferencia
        fetch_into_cache(state, id);
        let loading = ElementBuilder::new("p")?
            .class("empty-message")
            .text("Chargement...")
            .build();
        append_child(&page, &loading)?;
        return Ok(page);
    };

    append_child(&page, &render_hero(state, &conference)?)?;

    // Contenido largo
    let content = ElementBuilder::new("div")?
        .class("detail-content")
        .text(&conference.content)
        .build();
    append_child(&page, &content)?;

    if let Some(speakers) = &conference.speakers {
        if !speakers.is_empty() {
            let block = ElementBuilder::new("div")?.class("detail-speakers").build();
            let heading = ElementBuilder::new("h2")?.text("Intervenants").build();
            append_child(&block, &heading)?;
            let list = ElementBuilder::new("ul")?.build();
            for speaker in speakers {
                let item = ElementBuilder::new("li")?
                    .text(&format!("{} {}", speaker.firstname, speaker.lastname))
                    .build();
                append_child(&list, &item)?;
            }
            append_child(&block, &list)?;
            append_child(&page, &block)?;
        }
    }

    if let Some(stakeholders) = &conference.stakeholders {
        if !stakeholders.is_empty() {
            let block = ElementBuilder::new("div")?.class("detail-stakeholders").build();
            let heading = ElementBuilder::new("h2")?.text("Organisateurs").build();
            append_child(&block, &heading)?;
            let list = ElementBuilder::new("ul")?.build();
            for person in stakeholders {
                let mut label = format!("{} {}", person.firstname, person.lastname);
                if let Some(job) = &person.job {
                    label.push_str(&format!(" — {}", job));
                }
                let item = ElementBuilder::new("li")?.text(&label).build();
                append_child(&list, &item)?;
            }
            append_child(&block, &list)?;
            append_child(&page, &block)?;
        }
    }

    if let Some(os_map) = &conference.os_map {
        let block = ElementBuilder::new("div")?.class("detail-address").build();
        let heading = ElementBuilder::new("h2")?.text("Adresse").build();
        append_child(&block, &heading)?;
        let lines = [
            os_map.addressl1.as_deref(),
            os_map.addressl2.as_deref(),
            os_map.postal_code.as_deref(),
            os_map.city.as_deref(),
        ];
        for line in lines.into_iter().flatten().filter(|l| !l.is_empty()) {
            let p = ElementBuilder::new("p")?.text(line).build();
            append_child(&block, &p)?;
        }
        append_child(&page, &block)?;
    }

    Ok(page)
}

fn render_hero(state: &AppState, conference: &Conference) -> Result<Element, JsValue> {
    let hero = ElementBuilder::new("div")?
        .class("conference-hero")
        .style("--conf-primary", &conference.design.main_color)?
        .style("--conf-secondary", &conference.design.second_color)?
        .build();

    let backdrop = ElementBuilder::new("img")?
        .class("hero-backdrop")
        .attr("src", &conference.img)?
        .attr("alt", &conference.title)?
        .build();
    append_child(&hero, &backdrop)?;

    // Overlay de gradiente hacia el color dominante
    let overlay = ElementBuilder::new("div")?
        .class("hero-overlay")
        .style(
            "background",
            &format!(
                "linear-gradient(to right, {}e6 0%, {}40 40%, transparent 65%)",
                conference.design.main_color, conference.design.main_color
            ),
        )?
        .build();
    append_child(&hero, &overlay)?;

    let content = ElementBuilder::new("div")?.class("hero-content").build();

    let badge = ElementBuilder::new("span")?
        .class("hero-badge")
        .style("background-color", &conference.design.second_color)?
        .text("À la une")
        .build();
    append_child(&content, &badge)?;

    let title = ElementBuilder::new("h1")?
        .class("hero-title")
        .text(&conference.title)
        .build();
    append_child(&content, &title)?;

    let mut meta = conference.date.clone();
    if let Some(duration) = &conference.duration {
        meta.push_str(&format!(" · {}", duration));
    }
    let meta_el = ElementBuilder::new("p")?.class("hero-meta").text(&meta).build();
    append_child(&content, &meta_el)?;

    let description = ElementBuilder::new("p")?
        .class("hero-description")
        .text(&conference.description)
        .build();
    append_child(&content, &description)?;

    if state.session.is_authenticated() {
        append_child(&content, &render_favorite_button(state, &conference.id)?)?;
    }

    append_child(&hero, &content)?;
    Ok(hero)
}

fn fetch_into_cache(state: &AppState, id: &str) {
    let state = state.clone();
    let id = id.to_string();
    spawn_local(async move {
        let vm = ConferenceViewModel::new();
        match vm.load_conference(&state, &id).await {
            Ok(conference) => {
                // Insertar en el cache dispara el re-render del detalle
                state.conferences.update(|list| {
                    if !list.iter().any(|c| c.id == conference.id) {
                        list.push(conference);
                    }
                });
            }
            Err(e) => {
                log::error!("❌ Error cargando conferencia {}: {}", id, e);
                state.error.set(Some(e));
            }
        }
    });
}
