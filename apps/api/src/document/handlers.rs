use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{
    DocumentSettings, Education, Experience, PersonalInfo, Project, ResumeData, ResumeDocument,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SummaryUpdate {
    pub summary: String,
}

#[derive(Deserialize)]
pub struct SkillsUpdate {
    pub skills: Vec<String>,
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeDocument> {
    Json(state.document.snapshot().await)
}

/// PUT /api/v1/resume
pub async fn handle_replace_resume(
    State(state): State<AppState>,
    Json(data): Json<ResumeData>,
) -> Result<Json<ResumeDocument>, AppError> {
    validate_accent(&data.settings.accent_color)?;
    Ok(Json(state.document.replace(data).await))
}

/// POST /api/v1/resume/reset
pub async fn handle_reset_resume(State(state): State<AppState>) -> Json<ResumeDocument> {
    Json(state.document.reset().await)
}

/// PATCH /api/v1/resume/personal
pub async fn handle_update_personal(
    State(state): State<AppState>,
    Json(info): Json<PersonalInfo>,
) -> Json<ResumeDocument> {
    Json(state.document.update_personal_info(info).await)
}

/// PATCH /api/v1/resume/summary
pub async fn handle_update_summary(
    State(state): State<AppState>,
    Json(req): Json<SummaryUpdate>,
) -> Json<ResumeDocument> {
    Json(state.document.update_summary(req.summary).await)
}

/// PATCH /api/v1/resume/settings
pub async fn handle_update_settings(
    State(state): State<AppState>,
    Json(settings): Json<DocumentSettings>,
) -> Result<Json<ResumeDocument>, AppError> {
    validate_accent(&settings.accent_color)?;
    Ok(Json(state.document.update_settings(settings).await))
}

/// Every write path that can change `accent_color` goes through this check,
/// so PUT and PATCH agree on what a valid color is.
fn validate_accent(color: &str) -> Result<(), AppError> {
    let color = color.trim();
    if !color.is_empty() && crate::render::pdf::parse_hex_color(color).is_none() {
        return Err(AppError::Validation(format!(
            "accent_color must be a #RRGGBB hex string, got '{color}'"
        )));
    }
    Ok(())
}

/// PUT /api/v1/resume/skills
pub async fn handle_set_skills(
    State(state): State<AppState>,
    Json(req): Json<SkillsUpdate>,
) -> Json<ResumeDocument> {
    let skills = req
        .skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    Json(state.document.set_skills(skills).await)
}

// ── Experience ──────────────────────────────────────────────────────────────

/// PUT /api/v1/resume/experience
pub async fn handle_set_experience(
    State(state): State<AppState>,
    Json(entries): Json<Vec<Experience>>,
) -> Json<ResumeDocument> {
    Json(state.document.set_experience(entries).await)
}

/// POST /api/v1/resume/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
    Json(entry): Json<Experience>,
) -> Json<ResumeDocument> {
    Json(state.document.add_experience(entry).await)
}

/// DELETE /api/v1/resume/experience/:id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDocument>, AppError> {
    state
        .document
        .remove_experience(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Experience entry {id} not found")))
}

// ── Education ───────────────────────────────────────────────────────────────

/// PUT /api/v1/resume/education
pub async fn handle_set_education(
    State(state): State<AppState>,
    Json(entries): Json<Vec<Education>>,
) -> Json<ResumeDocument> {
    Json(state.document.set_education(entries).await)
}

/// POST /api/v1/resume/education
pub async fn handle_add_education(
    State(state): State<AppState>,
    Json(entry): Json<Education>,
) -> Json<ResumeDocument> {
    Json(state.document.add_education(entry).await)
}

/// DELETE /api/v1/resume/education/:id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDocument>, AppError> {
    state
        .document
        .remove_education(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Education entry {id} not found")))
}

// ── Projects ────────────────────────────────────────────────────────────────

/// PUT /api/v1/resume/projects
pub async fn handle_set_projects(
    State(state): State<AppState>,
    Json(entries): Json<Vec<Project>>,
) -> Json<ResumeDocument> {
    Json(state.document.set_projects(entries).await)
}

/// POST /api/v1/resume/projects
pub async fn handle_add_project(
    State(state): State<AppState>,
    Json(entry): Json<Project>,
) -> Json<ResumeDocument> {
    Json(state.document.add_project(entry).await)
}

/// DELETE /api/v1/resume/projects/:id
pub async fn handle_remove_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDocument>, AppError> {
    state
        .document
        .remove_project(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))
}
