//! Prompt templates for resume tailoring.
//!
//! Keep prompts as module constants so changes are reviewable in one place.
//! `{job_role}` is substituted before the call.

pub const TAILOR_SYSTEM: &str = "\
You are a professional resume writer and career coach. You produce concise, \
ATS-optimized resume content and you always respond with valid JSON only, \
with no surrounding prose or markdown.";

pub const TAILOR_PROMPT_TEMPLATE: &str = r#"Generate tailored resume content for a candidate applying for the following job role:

Job Role: {job_role}

Produce:
1. A professional summary of 3-4 sentences, written in the first person, highlighting strengths relevant to the role.
2. A list of 8-10 skills that are most relevant to the role.
3. Three experience bullet points describing impactful, quantified achievements relevant to the role. Each bullet must start with a strong action verb. Do not include a leading dash or bullet character.

Respond with a JSON object in exactly this format:
{
  "summary": "...",
  "skills": ["...", "..."],
  "experience_bullets": ["...", "...", "..."]
}"#;

/// Substitutes the job role into the tailoring prompt.
pub fn build_tailor_prompt(job_role: &str) -> String {
    TAILOR_PROMPT_TEMPLATE.replace("{job_role}", job_role)
}
