// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod session_state;
pub mod favorites_state;
pub mod app_state;

pub use reactivity::*;
pub use session_state::*;
pub use favorites_state::*;
pub use app_state::*;
