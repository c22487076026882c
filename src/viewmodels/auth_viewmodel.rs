// ============================================================================
// AUTH VIEWMODEL - Login, registro y logout
// ============================================================================

use crate::services::{auth_service, ApiClient, ApiError};
use crate::state::{AppState, Route};

/// ViewModel de autenticación - SOLO lógica de negocio
pub struct AuthViewModel {
    api: ApiClient,
}

impl AuthViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    /// Login contra la API. Con credenciales malas la API devuelve 401:
    /// aquí NO es una sesión expirada, la sesión sigue LoggedOut y el
    /// mensaje se muestra en el formulario (sin redirección).
    pub async fn login(&self, state: &AppState, id: &str, password: &str) -> Result<(), String> {
        if id.is_empty() || password.is_empty() {
            return Err("Veuillez remplir tous les champs".to_string());
        }

        match auth_service::login(&self.api, id, password).await {
            Ok((user, token)) => {
                state.session.set_auth(user, token);
                state.navigate(Route::Home);
                Ok(())
            }
            Err(ApiError::Unauthorized) => {
                Err("Identifiant ou mot de passe incorrect".to_string())
            }
            Err(e) => Err(e.to_string()),
        }
    }

    /// Alta de cuenta. 409 = identificador ya usado.
    pub async fn register(&self, id: &str, password: &str) -> Result<(), String> {
        match auth_service::signup(&self.api, id, password).await {
            Ok(()) => Ok(()),
            Err(ApiError::Conflict) => Err("Cet identifiant est déjà utilisé.".to_string()),
            Err(_) => Err("Une erreur est survenue. Veuillez réessayer.".to_string()),
        }
    }

    /// Logout explícito. Los favoritos NO se tocan: son del navegador,
    /// no de la identidad.
    pub fn logout(&self, state: &AppState) {
        state.session.clear_auth();
        state.navigate(Route::Home);
    }
}

impl Default for AuthViewModel {
    fn default() -> Self {
        Self::new()
    }
}
