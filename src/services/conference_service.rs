// ============================================================================
// CONFERENCE SERVICE - CRUD de conferencias contra la API REST
// ============================================================================

use crate::models::{Conference, ConferencePayload};
use crate::services::{ApiClient, ApiError};

/// GET /conferences: catálogo completo
pub async fn get_all(api: &ApiClient, token: Option<&str>) -> Result<Vec<Conference>, ApiError> {
    let conferences: Vec<Conference> = api.get_json("/conferences", token).await?;
    log::info!("📋 {} conferencias recibidas", conferences.len());
    Ok(conferences)
}

/// GET /conference/{id}
pub async fn get_by_id(
    api: &ApiClient,
    id: &str,
    token: Option<&str>,
) -> Result<Conference, ApiError> {
    api.get_json(&format!("/conference/{}", id), token).await
}

/// POST /conference (solo admin)
pub async fn create(
    api: &ApiClient,
    payload: &ConferencePayload,
    token: Option<&str>,
) -> Result<Conference, ApiError> {
    let created: Conference = api.post_json("/conference", payload, token).await?;
    log::info!("✅ Conferencia creada: {}", created.id);
    Ok(created)
}

/// PATCH /conference/{id} (solo admin)
pub async fn update(
    api: &ApiClient,
    id: &str,
    payload: &ConferencePayload,
    token: Option<&str>,
) -> Result<Conference, ApiError> {
    let updated: Conference = api
        .patch_json(&format!("/conference/{}", id), payload, token)
        .await?;
    log::info!("✅ Conferencia actualizada: {}", updated.id);
    Ok(updated)
}

/// DELETE /conference/{id} (solo admin)
pub async fn delete(api: &ApiClient, id: &str, token: Option<&str>) -> Result<(), ApiError> {
    api.delete(&format!("/conference/{}", id), token).await?;
    log::info!("🗑️ Conferencia eliminada: {}", id);
    Ok(())
}
