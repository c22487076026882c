// ============================================================================
// USER SERVICE - Gestión de usuarios del back-office
// ============================================================================

use crate::models::{PromoteRequest, User, UserRole};
use crate::services::{ApiClient, ApiError};

/// GET /users (solo admin)
pub async fn get_all(api: &ApiClient, token: Option<&str>) -> Result<Vec<User>, ApiError> {
    let users: Vec<User> = api.get_json("/users", token).await?;
    log::info!("👥 {} usuarios recibidos", users.len());
    Ok(users)
}

/// PATCH /users/{id} con type=admin (solo admin)
pub async fn promote_to_admin(
    api: &ApiClient,
    id: &str,
    token: Option<&str>,
) -> Result<User, ApiError> {
    let request = PromoteRequest {
        role: UserRole::Admin,
    };
    let user: User = api
        .patch_json(&format!("/users/{}", id), &request, token)
        .await?;
    log::info!("⬆️ Usuario promovido a admin: {}", user.id);
    Ok(user)
}
