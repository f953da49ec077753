pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::document::handlers as document;
use crate::export::handlers as export;
use crate::state::AppState;
use crate::tailor::handlers as tailor;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document API
        .route(
            "/api/v1/resume",
            get(document::handle_get_resume).put(document::handle_replace_resume),
        )
        .route("/api/v1/resume/reset", post(document::handle_reset_resume))
        .route(
            "/api/v1/resume/personal",
            patch(document::handle_update_personal),
        )
        .route(
            "/api/v1/resume/summary",
            patch(document::handle_update_summary),
        )
        .route(
            "/api/v1/resume/settings",
            patch(document::handle_update_settings),
        )
        .route("/api/v1/resume/skills", put(document::handle_set_skills))
        .route(
            "/api/v1/resume/experience",
            put(document::handle_set_experience).post(document::handle_add_experience),
        )
        .route(
            "/api/v1/resume/experience/:id",
            delete(document::handle_remove_experience),
        )
        .route(
            "/api/v1/resume/education",
            put(document::handle_set_education).post(document::handle_add_education),
        )
        .route(
            "/api/v1/resume/education/:id",
            delete(document::handle_remove_education),
        )
        .route(
            "/api/v1/resume/projects",
            put(document::handle_set_projects).post(document::handle_add_project),
        )
        .route(
            "/api/v1/resume/projects/:id",
            delete(document::handle_remove_project),
        )
        // Template API
        .route("/api/v1/templates", get(templates::handle_list_templates))
        // Tailoring API
        .route("/api/v1/tailor", post(tailor::handle_tailor))
        // Export API
        .route("/api/v1/export", post(export::handle_export))
        .with_state(state)
}
