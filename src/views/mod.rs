pub mod app;
pub mod conference_card;
pub mod conference_list;
pub mod conference_detail;
pub mod favorites;
pub mod login;
pub mod register;
pub mod not_found;
pub mod shared;
pub mod admin;

pub use app::render_app;
pub use conference_card::render_conference_card;
pub use conference_list::render_conference_list;
pub use conference_detail::render_conference_detail;
pub use favorites::render_favorites;
pub use login::render_login;
pub use register::render_register;
pub use not_found::render_not_found;
