// ============================================================================
// APP - Aplicación principal (shell de render sobre #app)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::{AppState, Route};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación. El estado rehidrata la sesión y los
    /// favoritos desde localStorage en su constructor.
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Ruta inicial desde el fragment actual (deep link / recarga)
        if let Some(window) = web_sys::window() {
            if let Ok(hash) = window.location().hash() {
                let route = Route::parse(&hash);
                log::info!("📋 [APP] Ruta inicial: {:?}", route);
                state.route.set(route);
            }
        }

        // Suscribirse a cambios de estado para re-renderizar automáticamente
        state.subscribe_to_changes(move || {
            // Usar gloo_timers para batchear múltiples updates
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// Renderizar aplicación completa
    pub fn render(&mut self) -> Result<(), JsValue> {
        // Limpiar contenido anterior
        set_inner_html(&self.root, "");

        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)?;
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
