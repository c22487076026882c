// ============================================================================
// VIEWMODELS - Lógica de negocio entre vistas y servicios
// ============================================================================

pub mod auth_viewmodel;
pub mod conference_viewmodel;
pub mod user_viewmodel;

pub use auth_viewmodel::AuthViewModel;
pub use conference_viewmodel::ConferenceViewModel;
pub use user_viewmodel::UserViewModel;

use crate::services::ApiError;
use crate::state::{AppState, Route};

/// Política única ante errores de la API: un 401 fuerza el logout y la
/// redirección a login (el token expiró o fue revocado); el resto de
/// errores se devuelve como mensaje para que la vista lo muestre.
pub(crate) fn report_api_error(state: &AppState, error: ApiError) -> String {
    if error.is_unauthorized() {
        log::warn!("🔒 Sesión expirada, redirigiendo a login...");
        state.session.clear_auth();
        state.navigate(Route::Login);
    }
    error.to_string()
}
