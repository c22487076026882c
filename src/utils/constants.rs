// Claves de persistencia y cookie compartidas por la app

/// Entrada de localStorage con `{ user, token }` de la sesión
pub const AUTH_STORAGE_KEY: &str = "auth-storage";

/// Entrada de localStorage con el array de ids de conferencias favoritas
pub const FAVORITES_STORAGE_KEY: &str = "favorites-storage";

/// Cookie plana que espeja el token para la capa de guardia de rutas
pub const TOKEN_COOKIE: &str = "token";

/// Vida de la cookie del token: 7 días
pub const TOKEN_COOKIE_MAX_AGE: u32 = 60 * 60 * 24 * 7;
