use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;
use crate::templates::TemplateKind;

#[derive(Serialize)]
pub struct TemplateInfo {
    pub id: TemplateKind,
    pub name: &'static str,
    pub selected: bool,
}

#[derive(Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<TemplateInfo>,
}

/// GET /api/v1/templates
/// Lists the available templates and marks the document's current selection.
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    let current = state.document.data().await.settings.template;
    let templates = TemplateKind::ALL
        .into_iter()
        .map(|kind| TemplateInfo {
            id: kind,
            name: kind.display_name(),
            selected: kind == current,
        })
        .collect();
    Json(TemplateListResponse { templates })
}
