// ============================================================================
// AUTH SERVICE - Login, registro y decodificación del token
// ============================================================================

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use crate::models::{AuthUser, LoginReply, LoginRequest, SignupRequest, UserRole};
use crate::services::{ApiClient, ApiError};

/// Claims del payload JWT que nos interesan
#[derive(Debug, Deserialize)]
struct JwtClaims {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "type", default)]
    role: UserRole,
}

/// Decodificar el payload de un JWT (segmento central, base64url + JSON).
/// Función pura: no verifica la firma, solo recupera la identidad que el
/// servidor ya validó. Un token malformado es un error recuperable, nunca
/// un pánico.
pub fn decode_jwt(token: &str) -> Result<AuthUser, String> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) if !payload.is_empty() => payload,
        _ => return Err("Token sin los tres segmentos de un JWT".to_string()),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| format!("Payload base64 inválido: {}", e))?;

    let claims: JwtClaims = serde_json::from_slice(&bytes)
        .map_err(|e| format!("Payload JSON inválido: {}", e))?;

    Ok(AuthUser {
        id: claims.id,
        role: claims.role,
    })
}

/// POST /login: normaliza la respuesta (string a pelo u objeto con token)
/// y decodifica el JWT para recuperar `{ id, type }`.
pub async fn login(
    api: &ApiClient,
    id: &str,
    password: &str,
) -> Result<(AuthUser, String), ApiError> {
    log::info!("🔐 Iniciando sesión para: {}", id);

    let request = LoginRequest {
        id: id.to_string(),
        password: password.to_string(),
    };

    let reply: LoginReply = api.post_json("/login", &request, None).await?;
    let token = reply
        .into_token()
        .ok_or_else(|| ApiError::Parse("La API no devolvió ningún token".to_string()))?;

    let user = decode_jwt(&token).map_err(ApiError::Parse)?;
    log::info!("✅ Login correcto: {} ({:?})", user.id, user.role);

    Ok((user, token))
}

/// POST /signup: alta de cuenta. 409 significa identificador ya usado.
pub async fn signup(api: &ApiClient, id: &str, password: &str) -> Result<(), ApiError> {
    log::info!("📝 Creando cuenta: {}", id);

    let request = SignupRequest {
        id: id.to_string(),
        password: password.to_string(),
    };

    api.post_empty("/signup", &request, None).await?;
    log::info!("✅ Cuenta creada: {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Payloads generados a mano: base64url de {"_id":"alice","type":"admin"}
    // y {"_id":"bob","type":"user"} con cabecera HS256 estándar
    const HEADER: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";
    const ADMIN_PAYLOAD: &str = "eyJfaWQiOiJhbGljZSIsInR5cGUiOiJhZG1pbiJ9";
    const USER_PAYLOAD: &str = "eyJfaWQiOiJib2IiLCJ0eXBlIjoidXNlciJ9";

    #[test]
    fn decodes_admin_token() {
        let token = format!("{}.{}.firma", HEADER, ADMIN_PAYLOAD);
        let user = decode_jwt(&token).unwrap();
        assert_eq!(user.id, "alice");
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn decodes_user_token() {
        let token = format!("{}.{}.firma", HEADER, USER_PAYLOAD);
        let user = decode_jwt(&token).unwrap();
        assert_eq!(user.id, "bob");
        assert_eq!(user.role, UserRole::User);
    }

    #[test]
    fn rejects_token_without_three_segments() {
        assert!(decode_jwt("solo-un-segmento").is_err());
        assert!(decode_jwt("dos.segmentos").is_err());
        assert!(decode_jwt("").is_err());
    }

    #[test]
    fn rejects_garbage_payload() {
        assert!(decode_jwt("aaa.!!!no-base64!!!.ccc").is_err());
        // base64 válido pero JSON inválido
        assert!(decode_jwt("aaa.bm8tanNvbg.ccc").is_err());
    }
}
