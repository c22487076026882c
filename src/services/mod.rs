// ============================================================================
// SERVICES - SOLO comunicación API + extracción de color en canvas
// ============================================================================

pub mod api_client;
pub mod auth_service;
pub mod color_service;
pub mod conference_service;
pub mod user_service;

pub use api_client::{ApiClient, ApiError};
pub use color_service::{extract_color_sample, extract_dominant_color, ColorSample};
