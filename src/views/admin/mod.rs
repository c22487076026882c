// ============================================================================
// ADMIN MODULE - Back-office (solo rutas con guardia de admin)
// ============================================================================

pub mod conferences;
pub mod conference_form;
pub mod users;

pub use conferences::render_admin_conferences;
pub use conference_form::render_conference_form;
pub use users::render_admin_users;
