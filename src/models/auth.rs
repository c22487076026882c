// ============================================================================
// AUTH MODELS - Payloads de login / registro
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub id: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub id: String,
    pub password: String,
}

/// PATCH /users/{id} para promover a admin
#[derive(Debug, Clone, Serialize)]
pub struct PromoteRequest {
    #[serde(rename = "type")]
    pub role: crate::models::UserRole,
}

/// POST /login devuelve o bien el token JWT a pelo como string JSON,
/// o bien un objeto con campo `token` (o `Token` según versión de la API).
/// La ambigüedad se normaliza aquí y en ningún otro sitio.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LoginReply {
    Bare(String),
    Object {
        #[serde(default, alias = "Token")]
        token: Option<String>,
    },
}

impl LoginReply {
    /// Extraer el token sea cual sea la forma de la respuesta
    pub fn into_token(self) -> Option<String> {
        match self {
            LoginReply::Bare(token) => Some(token),
            LoginReply::Object { token } => token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_reply_accepts_bare_string() {
        let reply: LoginReply = serde_json::from_str("\"abc.def.ghi\"").unwrap();
        assert_eq!(reply.into_token().as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn login_reply_accepts_token_object() {
        let reply: LoginReply = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(reply.into_token().as_deref(), Some("abc"));
    }

    #[test]
    fn login_reply_accepts_capitalized_token_object() {
        let reply: LoginReply = serde_json::from_str(r#"{"Token":"abc"}"#).unwrap();
        assert_eq!(reply.into_token().as_deref(), Some("abc"));
    }

    #[test]
    fn login_reply_without_token_yields_none() {
        let reply: LoginReply = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert!(reply.into_token().is_none());
    }
}
