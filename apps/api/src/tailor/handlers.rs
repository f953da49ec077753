use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tailor::TailoredContent;

#[derive(Deserialize)]
pub struct TailorRequest {
    pub job_role: String,
    /// When true, the generated content is merged into the document.
    #[serde(default)]
    pub apply: bool,
}

#[derive(Serialize)]
pub struct TailorResponse {
    pub content: TailoredContent,
    pub applied: bool,
}

/// POST /api/v1/tailor
pub async fn handle_tailor(
    State(state): State<AppState>,
    Json(req): Json<TailorRequest>,
) -> Result<Json<TailorResponse>, AppError> {
    let job_role = req.job_role.trim();
    if job_role.is_empty() {
        return Err(AppError::Validation("job_role must not be empty".to_string()));
    }

    info!("tailoring resume for role: {job_role}");
    let content = state.tailor.tailor(job_role).await?;

    if req.apply {
        state.document.apply_tailored(&content).await;
    }

    Ok(Json(TailorResponse {
        content,
        applied: req.apply,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::config::Config;
    use crate::document::DocumentStore;
    use crate::layout::PageMetrics;
    use crate::models::sample::sample_resume;
    use crate::tailor::{TailorError, TailorProvider};

    /// Provider that returns canned content without touching the network.
    struct FixedTailor(TailoredContent);

    #[async_trait]
    impl TailorProvider for FixedTailor {
        async fn tailor(&self, _job_role: &str) -> Result<TailoredContent, TailorError> {
            Ok(self.0.clone())
        }
    }

    fn canned_content() -> TailoredContent {
        TailoredContent {
            summary: "I ship design systems that scale.".to_string(),
            skills: (1..=8).map(|i| format!("Skill {i}")).collect(),
            experience_bullets: vec![
                "Led a cross-team redesign".to_string(),
                "Raised conversion by 18%".to_string(),
                "Mentored two designers".to_string(),
            ],
        }
    }

    fn test_state() -> AppState {
        AppState {
            document: Arc::new(DocumentStore::new(sample_resume())),
            tailor: Arc::new(FixedTailor(canned_content())),
            config: Config {
                google_genai_api_key: "test-key".to_string(),
                port: 8080,
                rust_log: "info".to_string(),
            },
            page_metrics: PageMetrics::a4(),
        }
    }

    #[tokio::test]
    async fn test_tailor_rejects_blank_job_role() {
        let state = test_state();
        let req = TailorRequest {
            job_role: "   ".to_string(),
            apply: false,
        };
        let result = handle_tailor(State(state), Json(req)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_tailor_without_apply_leaves_document_untouched() {
        let state = test_state();
        let before = state.document.data().await;

        let req = TailorRequest {
            job_role: "Product Designer".to_string(),
            apply: false,
        };
        let response = handle_tailor(State(state.clone()), Json(req)).await.unwrap();

        assert!(!response.0.applied);
        assert_eq!(response.0.content.summary, canned_content().summary);
        assert_eq!(state.document.data().await, before);
    }

    #[tokio::test]
    async fn test_tailor_with_apply_merges_into_document() {
        let state = test_state();
        let req = TailorRequest {
            job_role: "Product Designer".to_string(),
            apply: true,
        };
        let response = handle_tailor(State(state.clone()), Json(req)).await.unwrap();
        assert!(response.0.applied);

        let data = state.document.data().await;
        assert_eq!(data.summary, canned_content().summary);
        assert_eq!(data.skills, canned_content().skills);
        assert_eq!(
            data.experience[0].description,
            "- Led a cross-team redesign\n- Raised conversion by 18%\n- Mentored two designers"
        );
    }
}
