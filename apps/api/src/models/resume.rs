//! The resume data object — the single record all section operations mutate
//! and all templates read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::templates::TemplateKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

/// A single work-experience entry. `description` holds newline-separated
/// bullet lines, each prefixed with `- ` (the format the templates split on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub degree: String,
    pub school: String,
    pub location: String,
    pub graduation_year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub link: String,
}

/// Presentation state that travels with the document so preview and export
/// agree: the selected template and the accent color hex (`#RRGGBB`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSettings {
    #[serde(default)]
    pub template: TemplateKind,
    #[serde(default = "default_accent")]
    pub accent_color: String,
}

fn default_accent() -> String {
    "#4A55A2".to_string()
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            template: TemplateKind::default(),
            accent_color: default_accent(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub settings: DocumentSettings,
}

/// Wrapper returned by the document API — the data plus the last-modified
/// timestamp the store maintains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDocument {
    #[serde(flatten)]
    pub data: ResumeData,
    pub updated_at: DateTime<Utc>,
}

impl ResumeData {
    /// Export filename, matching the original app: `Resume-{name-with-dashes}.pdf`.
    pub fn export_filename(&self) -> String {
        let name = self.personal_info.name.trim();
        if name.is_empty() {
            return "Resume.pdf".to_string();
        }
        format!("Resume-{}.pdf", name.replace(char::is_whitespace, "-"))
    }
}

/// Splits a description field into bullet lines, trimming the `- ` prefix.
/// Blank lines are dropped; lines without the prefix are kept as-is.
pub fn description_bullets(description: &str) -> Vec<String> {
    description
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.strip_prefix("- ")
                .or_else(|| line.strip_prefix('-'))
                .unwrap_or(line)
                .trim()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_data_round_trips_through_json() {
        let data = crate::models::sample::sample_resume();
        let json = serde_json::to_string(&data).unwrap();
        let recovered: ResumeData = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, data);
    }

    #[test]
    fn test_experience_without_id_gets_one_assigned() {
        let json = r#"{
            "job_title": "Senior Product Designer",
            "company": "Innovate Corp",
            "location": "San Francisco, CA",
            "start_date": "Jun 2018",
            "end_date": "Present",
            "description": "- Led the redesign"
        }"#;
        let exp: Experience = serde_json::from_str(json).unwrap();
        assert!(!exp.id.is_nil());
    }

    #[test]
    fn test_settings_default_when_absent() {
        let json = r#"{
            "personal_info": {
                "name": "", "title": "", "phone": "",
                "email": "", "linkedin": "", "github": ""
            },
            "summary": "",
            "experience": [],
            "education": [],
            "skills": [],
            "projects": []
        }"#;
        let data: ResumeData = serde_json::from_str(json).unwrap();
        assert_eq!(data.settings.template, TemplateKind::default());
        assert_eq!(data.settings.accent_color, "#4A55A2");
    }

    #[test]
    fn test_export_filename_replaces_whitespace() {
        let mut data = ResumeData::default();
        data.personal_info.name = "Amelia Vance".to_string();
        assert_eq!(data.export_filename(), "Resume-Amelia-Vance.pdf");
    }

    #[test]
    fn test_export_filename_falls_back_when_name_empty() {
        let data = ResumeData::default();
        assert_eq!(data.export_filename(), "Resume.pdf");
    }

    #[test]
    fn test_description_bullets_strips_prefix_and_blanks() {
        let desc = "- Led the redesign\n\n- Mentored a team of 3\nShipped weekly";
        let bullets = description_bullets(desc);
        assert_eq!(
            bullets,
            vec!["Led the redesign", "Mentored a team of 3", "Shipped weekly"]
        );
    }
}
