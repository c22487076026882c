// ============================================================================
// USER VIEWMODEL - Gestión de usuarios del back-office
// ============================================================================

use crate::services::{user_service, ApiClient};
use crate::state::AppState;
use crate::viewmodels::report_api_error;

/// ViewModel de usuarios (solo rutas de admin)
pub struct UserViewModel {
    api: ApiClient,
}

impl UserViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    /// Cargar la tabla de usuarios en el estado
    pub async fn load_users(&self, state: &AppState) -> Result<(), String> {
        let token = state.session.token();
        match user_service::get_all(&self.api, token.as_deref()).await {
            Ok(users) => {
                state.users.set(users);
                Ok(())
            }
            Err(e) => Err(report_api_error(state, e)),
        }
    }

    /// Promover a admin y refrescar la fila en el estado
    pub async fn promote(&self, state: &AppState, id: &str) -> Result<(), String> {
        let token = state.session.token();
        match user_service::promote_to_admin(&self.api, id, token.as_deref()).await {
            Ok(updated) => {
                state.users.update(|list| {
                    if let Some(slot) = list.iter_mut().find(|u| u.id == updated.id) {
                        *slot = updated;
                    }
                });
                Ok(())
            }
            Err(e) => Err(report_api_error(state, e)),
        }
    }
}

impl Default for UserViewModel {
    fn default() -> Self {
        Self::new()
    }
}
