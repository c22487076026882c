// ============================================================================
// COOKIES - Espejo del token en cookie plana
// ============================================================================
// La capa de guardia de rutas lee la cookie sin conocer el formato interno
// del storage persistido, por eso el token se espeja aquí (sin httpOnly).
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Escritura de cookies, inyectable para tests
pub trait CookieJar {
    fn set(&self, name: &str, value: &str, max_age: u32);
    fn clear(&self, name: &str);
}

/// Implementación sobre document.cookie
pub struct BrowserCookies;

impl BrowserCookies {
    fn html_document(&self) -> Option<HtmlDocument> {
        web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
    }
}

impl CookieJar for BrowserCookies {
    fn set(&self, name: &str, value: &str, max_age: u32) {
        if let Some(doc) = self.html_document() {
            let cookie = format!(
                "{}={}; path=/; max-age={}; SameSite=Lax",
                name, value, max_age
            );
            if doc.set_cookie(&cookie).is_err() {
                log::warn!("⚠️ No se pudo escribir la cookie {}", name);
            }
        }
    }

    fn clear(&self, name: &str) {
        if let Some(doc) = self.html_document() {
            let cookie = format!("{}=; path=/; max-age=0", name);
            if doc.set_cookie(&cookie).is_err() {
                log::warn!("⚠️ No se pudo borrar la cookie {}", name);
            }
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::CookieJar;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// CookieJar en memoria para tests
    #[derive(Default)]
    pub struct MemoryCookies {
        jar: RefCell<HashMap<String, String>>,
    }

    impl MemoryCookies {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn get(&self, name: &str) -> Option<String> {
            self.jar.borrow().get(name).cloned()
        }
    }

    impl CookieJar for MemoryCookies {
        fn set(&self, name: &str, value: &str, _max_age: u32) {
            self.jar
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
        }

        fn clear(&self, name: &str) {
            self.jar.borrow_mut().remove(name);
        }
    }
}
