// ============================================================================
// SESSION STATE - Máquina de estados de autenticación
// ============================================================================
// Dos estados: LoggedOut (user = None, token = None) y LoggedIn(user, token).
// user y token se escriben siempre juntos; los flags derivados se recalculan
// en cada lectura y JAMÁS se persisten: el snapshot guardado puede ser viejo
// o estar manipulado (un cambio de rol entre sesiones, por ejemplo).
// ============================================================================

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{AuthUser, UserRole};
use crate::utils::constants::{AUTH_STORAGE_KEY, TOKEN_COOKIE, TOKEN_COOKIE_MAX_AGE};
use crate::utils::cookies::CookieJar;
use crate::utils::storage::{load_json, save_json, StorageAdapter};

/// Snapshot persistido: SOLO user y token. Cualquier campo extra de
/// versiones anteriores (flags guardados, etc.) se ignora al deserializar.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedAuth {
    #[serde(default)]
    user: Option<AuthUser>,
    #[serde(default)]
    token: Option<String>,
}

/// Proyección pura de los flags derivados a partir del estado crudo
pub fn derive_flags(user: &Option<AuthUser>, token: &Option<String>) -> (bool, bool) {
    let is_authenticated = token.is_some();
    let is_admin = user
        .as_ref()
        .map(|u| u.role == UserRole::Admin)
        .unwrap_or(false);
    (is_authenticated, is_admin)
}

/// Estado de sesión, singleton a nivel de app e inyectado en las vistas.
/// El medio de persistencia entra por los traits para poder testear la
/// máquina sin navegador.
#[derive(Clone)]
pub struct SessionState {
    user: Rc<RefCell<Option<AuthUser>>>,
    token: Rc<RefCell<Option<String>>>,
    storage: Rc<dyn StorageAdapter>,
    cookies: Rc<dyn CookieJar>,
}

impl SessionState {
    /// Arranque en frío: rehidratar user/token del storage si existen.
    /// Un snapshot malformado colapsa a LoggedOut, nunca rompe el arranque.
    pub fn new(storage: Rc<dyn StorageAdapter>, cookies: Rc<dyn CookieJar>) -> Self {
        let persisted: PersistedAuth =
            load_json(storage.as_ref(), AUTH_STORAGE_KEY).unwrap_or_default();

        // user y token viajan juntos: un snapshot a medias no es LoggedIn
        let (user, token) = match (persisted.user, persisted.token) {
            (Some(user), Some(token)) => {
                log::info!("💾 [SESSION] Sesión restaurada para: {}", user.id);
                (Some(user), Some(token))
            }
            _ => (None, None),
        };

        Self {
            user: Rc::new(RefCell::new(user)),
            token: Rc::new(RefCell::new(token)),
            storage,
            cookies,
        }
    }

    /// Transición LoggedOut -> LoggedIn tras un login externo exitoso.
    /// Persiste el snapshot y espeja el token en la cookie de guardia.
    pub fn set_auth(&self, user: AuthUser, token: String) {
        let snapshot = PersistedAuth {
            user: Some(user.clone()),
            token: Some(token.clone()),
        };
        if let Err(e) = save_json(self.storage.as_ref(), AUTH_STORAGE_KEY, &snapshot) {
            log::error!("❌ [SESSION] Error persistiendo la sesión: {}", e);
        }
        self.cookies.set(TOKEN_COOKIE, &token, TOKEN_COOKIE_MAX_AGE);

        *self.user.borrow_mut() = Some(user);
        *self.token.borrow_mut() = Some(token);
        log::info!("🔐 [SESSION] Sesión iniciada");
    }

    /// Transición LoggedIn -> LoggedOut: logout explícito o 401 de la API.
    /// Borra la copia durable y la cookie espejo.
    pub fn clear_auth(&self) {
        if let Err(e) = self.storage.remove(AUTH_STORAGE_KEY) {
            log::warn!("⚠️ [SESSION] Error borrando la sesión persistida: {}", e);
        }
        self.cookies.clear(TOKEN_COOKIE);

        *self.user.borrow_mut() = None;
        *self.token.borrow_mut() = None;
        log::info!("👋 [SESSION] Sesión cerrada");
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.user.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    /// Derivado: hay token. Nunca se lee de storage.
    pub fn is_authenticated(&self) -> bool {
        derive_flags(&self.user.borrow(), &self.token.borrow()).0
    }

    /// Derivado: el rol del user es admin. Nunca se lee de storage.
    pub fn is_admin(&self) -> bool {
        derive_flags(&self.user.borrow(), &self.token.borrow()).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::cookies::testing::MemoryCookies;
    use crate::utils::storage::testing::MemoryStorage;

    fn session_with(
        storage: Rc<MemoryStorage>,
        cookies: Rc<MemoryCookies>,
    ) -> SessionState {
        SessionState::new(storage, cookies)
    }

    #[test]
    fn starts_logged_out() {
        let session = session_with(Rc::new(MemoryStorage::new()), Rc::new(MemoryCookies::new()));
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert!(session.user().is_none());
        assert!(session.token().is_none());
    }

    #[test]
    fn set_auth_flips_both_flags_for_admin() {
        let storage = Rc::new(MemoryStorage::new());
        let cookies = Rc::new(MemoryCookies::new());
        let session = session_with(storage.clone(), cookies.clone());

        session.set_auth(
            AuthUser {
                id: "alice".to_string(),
                role: UserRole::Admin,
            },
            "tok123".to_string(),
        );

        assert!(session.is_authenticated());
        assert!(session.is_admin());
        // Persistencia + cookie espejo escritas juntas
        assert!(storage.contains(AUTH_STORAGE_KEY));
        assert_eq!(cookies.get(TOKEN_COOKIE).as_deref(), Some("tok123"));
    }

    #[test]
    fn clear_auth_resets_everything() {
        let storage = Rc::new(MemoryStorage::new());
        let cookies = Rc::new(MemoryCookies::new());
        let session = session_with(storage.clone(), cookies.clone());

        session.set_auth(
            AuthUser {
                id: "alice".to_string(),
                role: UserRole::Admin,
            },
            "tok123".to_string(),
        );
        session.clear_auth();

        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert!(session.user().is_none());
        assert!(session.token().is_none());
        assert!(!storage.contains(AUTH_STORAGE_KEY));
        assert!(cookies.get(TOKEN_COOKIE).is_none());
    }

    #[test]
    fn rehydration_recomputes_derived_flags() {
        let snapshot = r#"{"user":{"id":"bob","type":"user"},"token":"tokABC"}"#;
        let storage = Rc::new(MemoryStorage::with_entry(AUTH_STORAGE_KEY, snapshot));
        let session = session_with(storage, Rc::new(MemoryCookies::new()));

        assert!(session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(session.user().map(|u| u.id).as_deref(), Some("bob"));
    }

    #[test]
    fn stale_persisted_flags_are_ignored() {
        // Un snapshot viejo con flags guardados en true no debe colarse:
        // el rol real del user manda
        let snapshot = r#"{
            "user": {"id":"bob","type":"user"},
            "token": "tokABC",
            "isAdmin": true,
            "isAuthenticated": true
        }"#;
        let storage = Rc::new(MemoryStorage::with_entry(AUTH_STORAGE_KEY, snapshot));
        let session = session_with(storage, Rc::new(MemoryCookies::new()));

        assert!(session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn malformed_snapshot_collapses_to_logged_out() {
        let storage = Rc::new(MemoryStorage::with_entry(AUTH_STORAGE_KEY, "{corrupto"));
        let session = session_with(storage, Rc::new(MemoryCookies::new()));
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn partial_snapshot_is_not_logged_in() {
        // token sin user (o al revés) no es un estado válido de la máquina
        let storage = Rc::new(MemoryStorage::with_entry(
            AUTH_STORAGE_KEY,
            r#"{"token":"tokSolo"}"#,
        ));
        let session = session_with(storage, Rc::new(MemoryCookies::new()));
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn derive_flags_is_a_pure_projection() {
        let admin = Some(AuthUser {
            id: "a".to_string(),
            role: UserRole::Admin,
        });
        assert_eq!(derive_flags(&admin, &Some("t".to_string())), (true, true));
        assert_eq!(derive_flags(&admin, &None), (false, true));
        assert_eq!(derive_flags(&None, &Some("t".to_string())), (true, false));
        assert_eq!(derive_flags(&None, &None), (false, false));
    }
}
