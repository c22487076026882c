// ============================================================================
// STORAGE - Adapter de persistencia clave/valor
// ============================================================================
// El estado de sesión y los favoritos reciben el adapter por inyección para
// poder testearse sin navegador. BrowserStorage es la implementación real
// sobre localStorage.
// ============================================================================

use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

/// Contrato mínimo de persistencia clave/valor
pub trait StorageAdapter {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// Implementación sobre window.localStorage
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage(&self) -> Option<Storage> {
        window()?.local_storage().ok()?
    }
}

impl StorageAdapter for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = self
            .local_storage()
            .ok_or("No se pudo acceder a localStorage")?;
        storage
            .set_item(key, value)
            .map_err(|_| "Error guardando en localStorage".to_string())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let storage = self
            .local_storage()
            .ok_or("No se pudo acceder a localStorage")?;
        storage
            .remove_item(key)
            .map_err(|_| "Error eliminando de localStorage".to_string())
    }
}

/// Serializar y guardar como JSON
pub fn save_json<T: Serialize>(
    storage: &dyn StorageAdapter,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    storage.set(key, &json)
}

/// Cargar y deserializar JSON. Datos corruptos o ausentes devuelven None,
/// nunca un pánico: el snapshot persistido puede venir de versiones viejas.
pub fn load_json<T: DeserializeOwned>(storage: &dyn StorageAdapter, key: &str) -> Option<T> {
    let json = storage.get(key)?;
    serde_json::from_str(&json).ok()
}

#[cfg(test)]
pub mod testing {
    use super::StorageAdapter;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Adapter en memoria para tests (sin navegador)
    #[derive(Default)]
    pub struct MemoryStorage {
        entries: RefCell<HashMap<String, String>>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_entry(key: &str, value: &str) -> Self {
            let storage = Self::new();
            storage
                .entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            storage
        }

        pub fn contains(&self, key: &str) -> bool {
            self.entries.borrow().contains_key(key)
        }
    }

    impl StorageAdapter for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), String> {
            self.entries.borrow_mut().remove(key);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemoryStorage;
    use super::*;

    #[test]
    fn json_round_trip_through_adapter() {
        let storage = MemoryStorage::new();
        save_json(&storage, "k", &vec!["a".to_string(), "b".to_string()]).unwrap();
        let loaded: Vec<String> = load_json(&storage, "k").unwrap();
        assert_eq!(loaded, vec!["a", "b"]);
    }

    #[test]
    fn corrupt_json_loads_as_none() {
        let storage = MemoryStorage::with_entry("k", "{not json");
        let loaded: Option<Vec<String>> = load_json(&storage, "k");
        assert!(loaded.is_none());
    }
}
