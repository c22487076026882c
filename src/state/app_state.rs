// ============================================================================
// APP STATE - Estado global de la aplicación + rutas
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Conference, User};
use crate::state::favorites_state::FavoritesState;
use crate::state::reactivity::ReactiveState;
use crate::state::session_state::SessionState;
use crate::utils::cookies::{BrowserCookies, CookieJar};
use crate::utils::storage::{BrowserStorage, StorageAdapter};

/// Rutas de la SPA (hash-based: "#/conference/ai-2026", etc.)
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Conference(String),
    Favorites,
    Login,
    Register,
    AdminConferences,
    AdminConferenceNew,
    AdminConferenceEdit(String),
    AdminUsers,
    NotFound,
}

impl Route {
    /// Parsear el fragment de la URL ("#/favorites" -> Favorites)
    pub fn parse(hash: &str) -> Route {
        let path = hash.trim_start_matches('#');
        let segments: Vec<&str> = path
            .trim_start_matches('/')
            .trim_end_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["conference", id] => Route::Conference((*id).to_string()),
            ["favorites"] => Route::Favorites,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["admin", "conferences"] => Route::AdminConferences,
            ["admin", "conferences", "new"] => Route::AdminConferenceNew,
            ["admin", "conferences", id] => Route::AdminConferenceEdit((*id).to_string()),
            ["admin", "users"] => Route::AdminUsers,
            _ => Route::NotFound,
        }
    }

    /// Fragment correspondiente a la ruta, para enlaces y navegación
    pub fn to_hash(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Conference(id) => format!("#/conference/{}", id),
            Route::Favorites => "#/favorites".to_string(),
            Route::Login => "#/login".to_string(),
            Route::Register => "#/register".to_string(),
            Route::AdminConferences => "#/admin/conferences".to_string(),
            Route::AdminConferenceNew => "#/admin/conferences/new".to_string(),
            Route::AdminConferenceEdit(id) => format!("#/admin/conferences/{}", id),
            Route::AdminUsers => "#/admin/users".to_string(),
            Route::NotFound => "#/404".to_string(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Favorites) || self.requires_admin()
    }

    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            Route::AdminConferences
                | Route::AdminConferenceNew
                | Route::AdminConferenceEdit(_)
                | Route::AdminUsers
        )
    }
}

/// Guardia de rutas: decide la ruta efectiva según los flags derivados de
/// la sesión. Anónimo en ruta protegida -> login; autenticado sin rol de
/// admin en el back-office -> home. Nunca un diálogo de error.
pub fn apply_guards(route: Route, is_authenticated: bool, is_admin: bool) -> Route {
    if route.requires_auth() && !is_authenticated {
        return Route::Login;
    }
    if route.requires_admin() && !is_admin {
        return Route::Home;
    }
    route
}

/// Estado global, construido una vez en el arranque e inyectado en vistas
/// y viewmodels (nada de singletons ambientales).
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub favorites: FavoritesState,
    pub route: ReactiveState<Route>,
    pub conferences: ReactiveState<Vec<Conference>>,
    pub users: ReactiveState<Vec<User>>,
    /// Mensaje de error a mostrar en la vista actual (reactivo)
    pub error: ReactiveState<Option<String>>,
    /// Flags de "ya se intentó cargar" para no relanzar fetches en cada
    /// render (el render dispara las cargas la primera vez)
    pub conferences_loaded: Rc<RefCell<bool>>,
    pub users_loaded: Rc<RefCell<bool>>,
}

impl AppState {
    /// Estado sobre el navegador real (localStorage + document.cookie)
    pub fn new() -> Self {
        Self::with_adapters(Rc::new(BrowserStorage), Rc::new(BrowserCookies))
    }

    /// Constructor con adapters inyectados (tests sin navegador)
    pub fn with_adapters(storage: Rc<dyn StorageAdapter>, cookies: Rc<dyn CookieJar>) -> Self {
        Self {
            session: SessionState::new(storage.clone(), cookies),
            favorites: FavoritesState::new(storage),
            route: ReactiveState::new(Route::Home),
            conferences: ReactiveState::new(Vec::new()),
            users: ReactiveState::new(Vec::new()),
            error: ReactiveState::new(None),
            conferences_loaded: Rc::new(RefCell::new(false)),
            users_loaded: Rc::new(RefCell::new(false)),
        }
    }

    /// Suscribirse a los cambios que requieren re-render
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        let callback = Rc::new(callback);
        let cb = callback.clone();
        self.route.subscribe(move || cb());
        let cb = callback.clone();
        self.conferences.subscribe(move || cb());
        let cb = callback.clone();
        self.users.subscribe(move || cb());
        let cb = callback;
        self.error.subscribe(move || cb());
    }

    /// Ruta efectiva tras pasar la guardia con los flags recalculados
    pub fn guarded_route(&self) -> Route {
        apply_guards(
            self.route.snapshot(),
            self.session.is_authenticated(),
            self.session.is_admin(),
        )
    }

    /// Navegar actualizando el fragment de la URL; el listener global de
    /// hashchange mantiene sincronizada la ruta si el cambio viene de fuera
    pub fn navigate(&self, route: Route) {
        if let Some(window) = web_sys::window() {
            if window.location().set_hash(&route.to_hash()).is_err() {
                log::warn!("⚠️ No se pudo actualizar el fragment de la URL");
            }
        }
        self.route.set(route);
    }

    /// Conferencia cacheada por id (la lista ya cargada)
    pub fn conference_by_id(&self, id: &str) -> Option<Conference> {
        self.conferences
            .with(|list| list.iter().find(|c| c.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::cookies::testing::MemoryCookies;
    use crate::utils::storage::testing::MemoryStorage;
    use std::cell::Cell;

    #[test]
    fn mutations_through_a_clone_trigger_the_rerender_subscription() {
        let state = AppState::with_adapters(
            Rc::new(MemoryStorage::new()),
            Rc::new(MemoryCookies::new()),
        );
        let fired = Rc::new(Cell::new(0u32));
        let fired_clone = fired.clone();
        state.subscribe_to_changes(move || fired_clone.set(fired_clone.get() + 1));

        // Los handlers de las vistas y el listener de hashchange mutan
        // siempre a través de clones del estado
        let clone = state.clone();
        clone.route.set(Route::Favorites);
        clone.conferences.set(Vec::new());
        clone.users.set(Vec::new());
        clone.error.set(Some("boom".to_string()));

        assert_eq!(fired.get(), 4);
        assert_eq!(state.route.snapshot(), Route::Favorites);
    }

    #[test]
    fn parses_all_known_routes() {
        assert_eq!(Route::parse("#/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(
            Route::parse("#/conference/ai-2026"),
            Route::Conference("ai-2026".to_string())
        );
        assert_eq!(Route::parse("#/favorites"), Route::Favorites);
        assert_eq!(Route::parse("#/login"), Route::Login);
        assert_eq!(Route::parse("#/register"), Route::Register);
        assert_eq!(Route::parse("#/admin/conferences"), Route::AdminConferences);
        assert_eq!(
            Route::parse("#/admin/conferences/new"),
            Route::AdminConferenceNew
        );
        assert_eq!(
            Route::parse("#/admin/conferences/ai-2026"),
            Route::AdminConferenceEdit("ai-2026".to_string())
        );
        assert_eq!(Route::parse("#/admin/users"), Route::AdminUsers);
        assert_eq!(Route::parse("#/lo-que-sea/raro"), Route::NotFound);
    }

    #[test]
    fn hash_round_trip() {
        for route in [
            Route::Home,
            Route::Conference("x".to_string()),
            Route::Favorites,
            Route::Login,
            Route::Register,
            Route::AdminConferences,
            Route::AdminConferenceNew,
            Route::AdminConferenceEdit("x".to_string()),
            Route::AdminUsers,
        ] {
            assert_eq!(Route::parse(&route.to_hash()), route);
        }
    }

    #[test]
    fn guards_redirect_anonymous_to_login() {
        assert_eq!(apply_guards(Route::Favorites, false, false), Route::Login);
        assert_eq!(
            apply_guards(Route::AdminConferences, false, false),
            Route::Login
        );
        assert_eq!(apply_guards(Route::Home, false, false), Route::Home);
    }

    #[test]
    fn guards_redirect_non_admin_to_home() {
        assert_eq!(
            apply_guards(Route::AdminUsers, true, false),
            Route::Home
        );
        assert_eq!(
            apply_guards(Route::AdminConferenceEdit("x".to_string()), true, true),
            Route::AdminConferenceEdit("x".to_string())
        );
    }

    #[test]
    fn favorites_allowed_when_authenticated() {
        assert_eq!(apply_guards(Route::Favorites, true, false), Route::Favorites);
    }
}
