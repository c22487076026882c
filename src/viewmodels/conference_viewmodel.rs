// ============================================================================
// CONFERENCE VIEWMODEL - Catálogo y CRUD de administración
// ============================================================================

use crate::config::AppConfig;
use crate::models::{Conference, ConferencePayload};
use crate::services::color_service::{extract_color_sample, ColorSample};
use crate::services::{conference_service, ApiClient};
use crate::state::AppState;
use crate::utils::colors::derive_secondary;
use crate::viewmodels::report_api_error;

/// ViewModel de conferencias - SOLO lógica de negocio
pub struct ConferenceViewModel {
    api: ApiClient,
}

impl ConferenceViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    /// Cargar el catálogo completo en el estado (cache para la lista,
    /// el detalle y la página de favoritos)
    pub async fn load_conferences(&self, state: &AppState) -> Result<(), String> {
        let token = state.session.token();
        match conference_service::get_all(&self.api, token.as_deref()).await {
            Ok(conferences) => {
                state.conferences.set(conferences);
                Ok(())
            }
            Err(e) => Err(report_api_error(state, e)),
        }
    }

    /// Detalle de una conferencia, con el cache de la lista como atajo
    pub async fn load_conference(&self, state: &AppState, id: &str) -> Result<Conference, String> {
        if let Some(cached) = state.conference_by_id(id) {
            return Ok(cached);
        }
        let token = state.session.token();
        conference_service::get_by_id(&self.api, id, token.as_deref())
            .await
            .map_err(|e| report_api_error(state, e))
    }

    /// Crear conferencia (solo admin)
    pub async fn create(&self, state: &AppState, payload: &ConferencePayload) -> Result<(), String> {
        let token = state.session.token();
        match conference_service::create(&self.api, payload, token.as_deref()).await {
            Ok(created) => {
                state.conferences.update(|list| list.push(created));
                Ok(())
            }
            Err(e) => Err(report_api_error(state, e)),
        }
    }

    /// Actualizar conferencia (solo admin)
    pub async fn update(
        &self,
        state: &AppState,
        id: &str,
        payload: &ConferencePayload,
    ) -> Result<(), String> {
        let token = state.session.token();
        match conference_service::update(&self.api, id, payload, token.as_deref()).await {
            Ok(updated) => {
                state.conferences.update(|list| {
                    if let Some(slot) = list.iter_mut().find(|c| c.id == updated.id) {
                        *slot = updated;
                    }
                });
                Ok(())
            }
            Err(e) => Err(report_api_error(state, e)),
        }
    }

    /// Eliminar conferencia (solo admin)
    pub async fn delete(&self, state: &AppState, id: &str) -> Result<(), String> {
        let token = state.session.token();
        match conference_service::delete(&self.api, id, token.as_deref()).await {
            Ok(()) => {
                let id = id.to_string();
                state.conferences.update(|list| list.retain(|c| c.id != id));
                Ok(())
            }
            Err(e) => Err(report_api_error(state, e)),
        }
    }

    /// Generar el par de colores de tema a partir del póster.
    /// Si la imagen no carga o los píxeles están bloqueados por CORS se
    /// devuelve el par por defecto: nunca es fatal, el admin siempre
    /// recibe colores con los que trabajar.
    pub async fn generate_colors(&self, image_url: &str) -> ColorSample {
        let cfg = AppConfig::from_env().color_config;
        match extract_color_sample(image_url, &cfg).await {
            Ok(sample) => sample,
            Err(e) => {
                log::warn!("⚠️ Extracción de color fallida ({}), usando fallback", e);
                ColorSample {
                    dominant: cfg.fallback_color.clone(),
                    secondary: derive_secondary(&cfg.fallback_color, cfg.lighten_ratio),
                }
            }
        }
    }
}

impl Default for ConferenceViewModel {
    fn default() -> Self {
        Self::new()
    }
}
