//! Resume tailoring: one structured LLM call that rewrites the summary,
//! skills, and headline experience bullets for a target job role.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::{LlmClient, LlmError};
use prompts::{build_tailor_prompt, TAILOR_SYSTEM};

/// Schema violations get one retry per attempt up to this many extra calls.
const MAX_TAILOR_RETRIES: u32 = 2;

const EXPECTED_SKILLS: std::ops::RangeInclusive<usize> = 8..=10;
const EXPECTED_BULLETS: usize = 3;

#[derive(Debug, Error)]
pub enum TailorError {
    #[error("LLM call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("LLM returned invalid content after {attempts} attempts: {reason}")]
    Invalid { reason: String, attempts: u32 },
}

/// The structured content a tailoring call must produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailoredContent {
    pub summary: String,
    pub skills: Vec<String>,
    pub experience_bullets: Vec<String>,
}

/// Rejects content that would blank out resume sections. Counts outside the
/// requested ranges are logged but accepted, since slightly short output is
/// still useful to the caller.
fn validate(content: &TailoredContent) -> Result<(), String> {
    if content.summary.trim().is_empty() {
        return Err("summary is empty".to_string());
    }
    if content.skills.iter().all(|s| s.trim().is_empty()) {
        return Err("skills list is empty".to_string());
    }
    if content
        .experience_bullets
        .iter()
        .all(|b| b.trim().is_empty())
    {
        return Err("experience bullets are empty".to_string());
    }

    if !EXPECTED_SKILLS.contains(&content.skills.len()) {
        warn!(
            "tailored content has {} skills, expected 8-10",
            content.skills.len()
        );
    }
    if content.experience_bullets.len() != EXPECTED_BULLETS {
        warn!(
            "tailored content has {} experience bullets, expected {}",
            content.experience_bullets.len(),
            EXPECTED_BULLETS
        );
    }
    Ok(())
}

/// Trims whitespace and strips any leading bullet markers the model added
/// despite instructions.
fn normalize(content: &mut TailoredContent) {
    content.summary = content.summary.trim().to_string();
    for list in [&mut content.skills, &mut content.experience_bullets] {
        for item in list.iter_mut() {
            let trimmed = item.trim();
            let trimmed = trimmed
                .strip_prefix("- ")
                .or_else(|| trimmed.strip_prefix("\u{2022} "))
                .unwrap_or(trimmed);
            *item = trimmed.to_string();
        }
        list.retain(|item| !item.is_empty());
    }
}

/// Seam for the tailoring backend, so handlers can be exercised without a
/// live API key.
#[async_trait]
pub trait TailorProvider: Send + Sync {
    async fn tailor(&self, job_role: &str) -> Result<TailoredContent, TailorError>;
}

/// Production provider backed by the Gemini client.
pub struct GeminiTailor {
    llm: LlmClient,
}

impl GeminiTailor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TailorProvider for GeminiTailor {
    async fn tailor(&self, job_role: &str) -> Result<TailoredContent, TailorError> {
        let prompt = build_tailor_prompt(job_role);
        let mut last_reason = String::new();

        for attempt in 0..=MAX_TAILOR_RETRIES {
            if attempt > 0 {
                warn!(
                    "tailoring attempt {} rejected ({}), retrying",
                    attempt, last_reason
                );
            }

            let mut content: TailoredContent =
                self.llm.call_json(&prompt, TAILOR_SYSTEM).await?;
            normalize(&mut content);

            match validate(&content) {
                Ok(()) => {
                    info!(
                        "tailored content generated: {} skills, {} bullets",
                        content.skills.len(),
                        content.experience_bullets.len()
                    );
                    return Ok(content);
                }
                Err(reason) => last_reason = reason,
            }
        }

        Err(TailorError::Invalid {
            reason: last_reason,
            attempts: MAX_TAILOR_RETRIES + 1,
        })
    }
}
