// ============================================================================
// AXIOM - CATÁLOGO DE CONFERENCIAS - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI
// - Services: SOLO comunicación API (+ extracción de color en canvas)
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_logger::Config;

use crate::app::App;
use crate::config::AppConfig;
use crate::state::Route;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    let app_config = AppConfig::from_env();
    if app_config.enable_logging {
        wasm_logger::init(Config::default());
    }
    log::info!(
        "🚀 Axiom - Catálogo de conferencias - Rust Puro + MVVM ({})",
        app_config.environment
    );

    // Crear y renderizar app
    let mut app = App::new()?;
    app.render()?;

    let state = app.state().clone();

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Navegación por el fragment (botones atrás/adelante, enlaces externos).
    // Este listener global solo se registra UNA VEZ en init(), por lo que
    // closure.forget() es seguro.
    if let Some(win) = web_sys::window() {
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            let hash = web_sys::window()
                .map(|w| w.location().hash().unwrap_or_default())
                .unwrap_or_default();
            let route = Route::parse(&hash);
            log::info!("🔄 [MAIN] hashchange -> {:?}", route);
            // set() notifica a los suscriptores y dispara el re-render
            state.route.set(route);
        }) as Box<dyn FnMut(web_sys::Event)>);

        win.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Re-renderizar la app completa (llamado por la suscripción al estado)
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app) = *app_cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ [RERENDER] App no está inicializada");
        }
    });
}
