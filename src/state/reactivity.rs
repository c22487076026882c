// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Box<dyn Fn()>;

/// Estado reactivo con sistema de notificaciones.
/// Los clones comparten valor Y suscriptores: las vistas capturan clones
/// del estado en sus closures y un set() a través de cualquiera de ellos
/// tiene que disparar el re-render suscrito en el arranque.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    /// Leer el valor con un closure sin clonar el Rc
    pub fn with<R, F>(&self, reader: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        reader(&self.value.borrow())
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    /// Notificar a todos los subscribers
    fn notify(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    /// Copia del valor actual
    pub fn snapshot(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_notifies_subscribers() {
        let state = ReactiveState::new(0u32);
        let fired = Rc::new(Cell::new(0u32));
        let fired_clone = fired.clone();
        state.subscribe(move || fired_clone.set(fired_clone.get() + 1));

        state.set(1);
        state.update(|v| *v += 1);

        assert_eq!(state.snapshot(), 2);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(String::from("a"));
        let fired = Rc::new(Cell::new(0u32));
        let fired_clone = fired.clone();
        state.subscribe(move || fired_clone.set(fired_clone.get() + 1));

        // Las vistas mutan siempre a través de clones capturados en closures
        let clone = state.clone();
        clone.set("b".to_string());

        assert_eq!(state.snapshot(), "b");
        assert_eq!(fired.get(), 1);
    }
}
