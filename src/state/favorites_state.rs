// ============================================================================
// FAVORITES STATE - Conjunto persistido de conferencias favoritas
// ============================================================================
// Política elegida: los favoritos viven en el navegador, independientes de
// la identidad. Sobreviven al logout y solo clear_favorites() los vacía.
// (La variante servidor por-usuario queda descartada a propósito, ver
// DESIGN.md.)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::utils::constants::FAVORITES_STORAGE_KEY;
use crate::utils::storage::{load_json, save_json, StorageAdapter};

/// Set de ids de conferencias favoritas. add/remove son idempotentes:
/// repetir una operación nunca es un error ni duplica entradas.
#[derive(Clone)]
pub struct FavoritesState {
    ids: Rc<RefCell<Vec<String>>>,
    storage: Rc<dyn StorageAdapter>,
}

impl FavoritesState {
    /// Cargar los favoritos persistidos (vacío si no hay o están corruptos)
    pub fn new(storage: Rc<dyn StorageAdapter>) -> Self {
        let ids: Vec<String> =
            load_json(storage.as_ref(), FAVORITES_STORAGE_KEY).unwrap_or_default();
        Self {
            ids: Rc::new(RefCell::new(ids)),
            storage,
        }
    }

    fn persist(&self) {
        if let Err(e) = save_json(self.storage.as_ref(), FAVORITES_STORAGE_KEY, &*self.ids.borrow())
        {
            log::error!("❌ [FAVORITES] Error persistiendo favoritos: {}", e);
        }
    }

    pub fn is_favorite(&self, conference_id: &str) -> bool {
        self.ids.borrow().iter().any(|id| id == conference_id)
    }

    pub fn add_favorite(&self, conference_id: &str) {
        if !self.is_favorite(conference_id) {
            self.ids.borrow_mut().push(conference_id.to_string());
            self.persist();
        }
    }

    pub fn remove_favorite(&self, conference_id: &str) {
        let mut ids = self.ids.borrow_mut();
        let before = ids.len();
        ids.retain(|id| id != conference_id);
        let changed = ids.len() != before;
        drop(ids);
        if changed {
            self.persist();
        }
    }

    pub fn toggle_favorite(&self, conference_id: &str) {
        if self.is_favorite(conference_id) {
            self.remove_favorite(conference_id);
        } else {
            self.add_favorite(conference_id);
        }
    }

    /// Vaciado explícito; el logout NO pasa por aquí
    pub fn clear_favorites(&self) {
        self.ids.borrow_mut().clear();
        self.persist();
    }

    pub fn all(&self) -> Vec<String> {
        self.ids.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.ids.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::testing::MemoryStorage;

    fn favorites() -> (Rc<MemoryStorage>, FavoritesState) {
        let storage = Rc::new(MemoryStorage::new());
        let state = FavoritesState::new(storage.clone());
        (storage, state)
    }

    #[test]
    fn toggle_adds_then_removes() {
        let (_, favs) = favorites();
        favs.toggle_favorite("ai-2026");
        assert!(favs.is_favorite("ai-2026"));
        favs.toggle_favorite("ai-2026");
        assert!(!favs.is_favorite("ai-2026"));
    }

    #[test]
    fn add_is_idempotent() {
        let (_, favs) = favorites();
        favs.add_favorite("ai-2026");
        favs.add_favorite("ai-2026");
        assert_eq!(favs.count(), 1);
    }

    #[test]
    fn remove_of_absent_id_is_a_no_op() {
        let (_, favs) = favorites();
        favs.remove_favorite("nunca-existio");
        assert_eq!(favs.count(), 0);
    }

    #[test]
    fn persists_across_reloads() {
        let storage = Rc::new(MemoryStorage::new());
        {
            let favs = FavoritesState::new(storage.clone());
            favs.add_favorite("ai-2026");
            favs.add_favorite("rustconf-2026");
        }
        // "Recarga": nueva instancia sobre el mismo storage
        let favs = FavoritesState::new(storage);
        assert_eq!(favs.count(), 2);
        assert!(favs.is_favorite("rustconf-2026"));
    }

    #[test]
    fn clear_empties_the_set() {
        let (_, favs) = favorites();
        favs.add_favorite("a");
        favs.add_favorite("b");
        favs.clear_favorites();
        assert_eq!(favs.count(), 0);
    }

    #[test]
    fn corrupt_persisted_favorites_start_empty() {
        let storage = Rc::new(MemoryStorage::with_entry(
            FAVORITES_STORAGE_KEY,
            "{esto no es un array",
        ));
        let favs = FavoritesState::new(storage);
        assert_eq!(favs.count(), 0);
    }
}
