// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: construye requests, adjunta el bearer token
// cuando existe y clasifica los errores HTTP. La reacción al 401 (logout
// forzado + redirección) vive en los viewmodels.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use crate::config::AppConfig;

/// Taxonomía de errores del boundary HTTP
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 401: token ausente, expirado o inválido
    Unauthorized,
    /// 403: autenticado pero sin permisos
    Forbidden,
    /// 404: recurso inexistente
    NotFound,
    /// 409: conflicto (p.ej. identificador ya registrado)
    Conflict,
    /// >= 500
    Server(u16, String),
    /// Otros códigos HTTP
    Http(u16, String),
    /// Fallo de red antes de obtener respuesta
    Network(String),
    /// Respuesta 2xx con cuerpo imparseable
    Parse(String),
}

impl ApiError {
    /// Clasificar un status HTTP no-2xx
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            409 => ApiError::Conflict,
            s if s >= 500 => ApiError::Server(s, message),
            s => ApiError::Http(s, message),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Session expirée (401)"),
            ApiError::Forbidden => write!(f, "Accès refusé (403)"),
            ApiError::NotFound => write!(f, "Ressource introuvable (404)"),
            ApiError::Conflict => write!(f, "Conflit (409)"),
            ApiError::Server(status, msg) => write!(f, "Erreur serveur ({}): {}", status, msg),
            ApiError::Http(status, msg) => write!(f, "HTTP {}: {}", status, msg),
            ApiError::Network(msg) => write!(f, "Erreur de connexion au serveur: {}", msg),
            ApiError::Parse(msg) => write!(f, "Réponse invalide: {}", msg),
        }
    }
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: AppConfig::from_env().api_base_url,
        }
    }

    #[cfg(test)]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Adjuntar Authorization: Bearer cuando hay token de sesión
    fn authorize(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| response.status_text());
            log::error!("❌ [API] HTTP {}: {}", status, message);
            return Err(ApiError::from_status(status, message));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Igual que parse_response pero para endpoints sin cuerpo (204)
    async fn check_response(response: Response) -> Result<(), ApiError> {
        if !response.ok() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| response.status_text());
            log::error!("❌ [API] HTTP {}: {}", status, message);
            return Err(ApiError::from_status(status, message));
        }
        Ok(())
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let response = Self::authorize(Request::get(&self.url(path)), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse_response(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let response = Self::authorize(Request::post(&self.url(path)), token)
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse_response(response).await
    }

    /// POST sin cuerpo de respuesta esperado
    pub async fn post_empty<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        let response = Self::authorize(Request::post(&self.url(path)), token)
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_response(response).await
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let response = Self::authorize(Request::patch(&self.url(path)), token)
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse_response(response).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<(), ApiError> {
        let response = Self::authorize(Request::delete(&self.url(path)), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_response(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_matches_taxonomy() {
        assert_eq!(
            ApiError::from_status(401, String::new()),
            ApiError::Unauthorized
        );
        assert_eq!(
            ApiError::from_status(403, String::new()),
            ApiError::Forbidden
        );
        assert_eq!(
            ApiError::from_status(404, String::new()),
            ApiError::NotFound
        );
        assert_eq!(
            ApiError::from_status(409, String::new()),
            ApiError::Conflict
        );
        assert!(matches!(
            ApiError::from_status(500, "boom".into()),
            ApiError::Server(500, _)
        ));
        assert!(matches!(
            ApiError::from_status(503, String::new()),
            ApiError::Server(503, _)
        ));
        assert!(matches!(
            ApiError::from_status(418, String::new()),
            ApiError::Http(418, _)
        ));
    }

    #[test]
    fn only_401_is_unauthorized() {
        assert!(ApiError::from_status(401, String::new()).is_unauthorized());
        assert!(!ApiError::from_status(403, String::new()).is_unauthorized());
        assert!(!ApiError::Network("down".into()).is_unauthorized());
    }
}
