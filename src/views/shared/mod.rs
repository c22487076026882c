pub mod navbar;
pub mod favorite_button;

pub use navbar::render_navbar;
pub use favorite_button::render_favorite_button;
