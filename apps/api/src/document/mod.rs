//! The shared resume document: one in-memory record that every section
//! operation mutates and every template reads. There is deliberately no
//! persistence behind this — the service holds exactly one document.

pub mod handlers;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::resume::{
    DocumentSettings, Education, Experience, PersonalInfo, Project, ResumeData, ResumeDocument,
};
use crate::models::sample::sample_resume;
use crate::tailor::TailoredContent;

pub struct DocumentStore {
    inner: RwLock<ResumeDocument>,
}

impl DocumentStore {
    pub fn new(data: ResumeData) -> Self {
        Self {
            inner: RwLock::new(ResumeDocument {
                data,
                updated_at: Utc::now(),
            }),
        }
    }

    pub async fn snapshot(&self) -> ResumeDocument {
        self.inner.read().await.clone()
    }

    pub async fn data(&self) -> ResumeData {
        self.inner.read().await.data.clone()
    }

    /// Applies a mutation under the write lock, stamps `updated_at`, and
    /// returns the new snapshot.
    async fn mutate<F>(&self, f: F) -> ResumeDocument
    where
        F: FnOnce(&mut ResumeData),
    {
        let mut guard = self.inner.write().await;
        f(&mut guard.data);
        guard.updated_at = Utc::now();
        guard.clone()
    }

    pub async fn replace(&self, data: ResumeData) -> ResumeDocument {
        self.mutate(|d| *d = data).await
    }

    pub async fn reset(&self) -> ResumeDocument {
        self.mutate(|d| *d = sample_resume()).await
    }

    // ── Section operations ──────────────────────────────────────────────────

    pub async fn update_personal_info(&self, info: PersonalInfo) -> ResumeDocument {
        self.mutate(|d| d.personal_info = info).await
    }

    pub async fn update_summary(&self, summary: String) -> ResumeDocument {
        self.mutate(|d| d.summary = summary).await
    }

    pub async fn update_settings(&self, settings: DocumentSettings) -> ResumeDocument {
        self.mutate(|d| d.settings = settings).await
    }

    pub async fn set_skills(&self, skills: Vec<String>) -> ResumeDocument {
        self.mutate(|d| d.skills = skills).await
    }

    pub async fn set_experience(&self, entries: Vec<Experience>) -> ResumeDocument {
        self.mutate(|d| d.experience = entries).await
    }

    pub async fn add_experience(&self, entry: Experience) -> ResumeDocument {
        self.mutate(|d| d.experience.push(entry)).await
    }

    pub async fn remove_experience(&self, id: Uuid) -> Option<ResumeDocument> {
        self.remove_entry(id, |d| &mut d.experience, |e| e.id).await
    }

    pub async fn set_education(&self, entries: Vec<Education>) -> ResumeDocument {
        self.mutate(|d| d.education = entries).await
    }

    pub async fn add_education(&self, entry: Education) -> ResumeDocument {
        self.mutate(|d| d.education.push(entry)).await
    }

    pub async fn remove_education(&self, id: Uuid) -> Option<ResumeDocument> {
        self.remove_entry(id, |d| &mut d.education, |e| e.id).await
    }

    pub async fn set_projects(&self, entries: Vec<Project>) -> ResumeDocument {
        self.mutate(|d| d.projects = entries).await
    }

    pub async fn add_project(&self, entry: Project) -> ResumeDocument {
        self.mutate(|d| d.projects.push(entry)).await
    }

    pub async fn remove_project(&self, id: Uuid) -> Option<ResumeDocument> {
        self.remove_entry(id, |d| &mut d.projects, |p| p.id).await
    }

    /// Removes the entry with the given id from a list section.
    /// Returns `None` when no entry matches.
    async fn remove_entry<T, L, I>(&self, id: Uuid, list: L, entry_id: I) -> Option<ResumeDocument>
    where
        L: FnOnce(&mut ResumeData) -> &mut Vec<T>,
        I: Fn(&T) -> Uuid,
    {
        let mut guard = self.inner.write().await;
        let entries = list(&mut guard.data);
        let before = entries.len();
        entries.retain(|e| entry_id(e) != id);
        if entries.len() == before {
            return None;
        }
        guard.updated_at = Utc::now();
        Some(guard.clone())
    }

    /// Merges tailored content into the document: summary and skills replace
    /// their sections; the experience bullets become the description of the
    /// most recent experience entry (a new entry is appended when none exist,
    /// so generated content is never dropped).
    pub async fn apply_tailored(&self, content: &TailoredContent) -> ResumeDocument {
        self.mutate(|d| {
            d.summary = content.summary.clone();
            d.skills = content.skills.clone();

            let description = content
                .experience_bullets
                .iter()
                .map(|b| format!("- {b}"))
                .collect::<Vec<_>>()
                .join("\n");
            if description.is_empty() {
                return;
            }
            match d.experience.first_mut() {
                Some(entry) => entry.description = description,
                None => d.experience.push(Experience {
                    id: Uuid::new_v4(),
                    job_title: String::new(),
                    company: String::new(),
                    location: String::new(),
                    start_date: String::new(),
                    end_date: String::new(),
                    description,
                }),
            }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> DocumentStore {
        DocumentStore::new(sample_resume())
    }

    #[tokio::test]
    async fn test_update_summary_stamps_updated_at() {
        let store = store();
        let before = store.snapshot().await.updated_at;
        let doc = store.update_summary("New summary".to_string()).await;
        assert_eq!(doc.data.summary, "New summary");
        assert!(doc.updated_at >= before);
    }

    #[tokio::test]
    async fn test_add_and_remove_experience() {
        let store = store();
        let entry = Experience {
            id: Uuid::new_v4(),
            job_title: "Staff Designer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            start_date: "Jan 2024".to_string(),
            end_date: "Present".to_string(),
            description: "- Shipped things".to_string(),
        };
        let id = entry.id;
        let doc = store.add_experience(entry).await;
        assert_eq!(doc.data.experience.len(), 3);

        let doc = store.remove_experience(id).await.expect("entry exists");
        assert_eq!(doc.data.experience.len(), 2);
        assert!(doc.data.experience.iter().all(|e| e.id != id));
    }

    #[tokio::test]
    async fn test_remove_unknown_entry_returns_none() {
        let store = store();
        assert!(store.remove_experience(Uuid::new_v4()).await.is_none());
        assert!(store.remove_education(Uuid::new_v4()).await.is_none());
        assert!(store.remove_project(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_reset_restores_sample() {
        let store = store();
        store.replace(ResumeData::default()).await;
        assert!(store.data().await.summary.is_empty());
        let doc = store.reset().await;
        assert_eq!(doc.data.personal_info.name, "Amelia Vance");
    }

    #[tokio::test]
    async fn test_apply_tailored_replaces_summary_and_skills() {
        let store = store();
        let content = TailoredContent {
            summary: "Tailored summary.".to_string(),
            skills: vec!["Rust".to_string(), "Design".to_string()],
            experience_bullets: vec![
                "Led a platform redesign".to_string(),
                "Cut latency by 40%".to_string(),
                "Mentored three engineers".to_string(),
            ],
        };
        let doc = store.apply_tailored(&content).await;
        assert_eq!(doc.data.summary, "Tailored summary.");
        assert_eq!(doc.data.skills.len(), 2);
        assert_eq!(
            doc.data.experience[0].description,
            "- Led a platform redesign\n- Cut latency by 40%\n- Mentored three engineers"
        );
    }

    #[tokio::test]
    async fn test_apply_tailored_creates_entry_when_none_exist() {
        let store = DocumentStore::new(ResumeData::default());
        let content = TailoredContent {
            summary: "s".to_string(),
            skills: vec![],
            experience_bullets: vec!["Did a thing".to_string()],
        };
        let doc = store.apply_tailored(&content).await;
        assert_eq!(doc.data.experience.len(), 1);
        assert_eq!(doc.data.experience[0].description, "- Did a thing");
    }
}
