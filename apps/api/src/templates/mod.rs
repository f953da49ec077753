//! The template set: ten interchangeable, stateless mappings from the resume
//! data object to a block document. Field selection and conditional rendering
//! differ per variant; every variant skips sections with no content.

pub mod handlers;
pub mod ir;

mod academic;
mod classic;
mod compact;
mod creative;
mod executive;
mod minimalist;
mod modern;
mod professional;
mod technical;
mod two_column;

use serde::{Deserialize, Serialize};

use crate::models::resume::{PersonalInfo, ResumeData};
use ir::Block;

/// The ten template variants. Serialized as kebab-case ids on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    #[default]
    Classic,
    Modern,
    Minimalist,
    Creative,
    Professional,
    Executive,
    Compact,
    Technical,
    Academic,
    TwoColumn,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 10] = [
        TemplateKind::Classic,
        TemplateKind::Modern,
        TemplateKind::Minimalist,
        TemplateKind::Creative,
        TemplateKind::Professional,
        TemplateKind::Executive,
        TemplateKind::Compact,
        TemplateKind::Technical,
        TemplateKind::Academic,
        TemplateKind::TwoColumn,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateKind::Classic => "Classic",
            TemplateKind::Modern => "Modern",
            TemplateKind::Minimalist => "Minimalist",
            TemplateKind::Creative => "Creative",
            TemplateKind::Professional => "Professional",
            TemplateKind::Executive => "Executive",
            TemplateKind::Compact => "Compact",
            TemplateKind::Technical => "Technical",
            TemplateKind::Academic => "Academic",
            TemplateKind::TwoColumn => "Two Column",
        }
    }
}

/// Renders the resume through the given template. Pure: same data and kind
/// always produce the same block document.
pub fn render(kind: TemplateKind, data: &ResumeData) -> Vec<Block> {
    match kind {
        TemplateKind::Classic => classic::render(data),
        TemplateKind::Modern => modern::render(data),
        TemplateKind::Minimalist => minimalist::render(data),
        TemplateKind::Creative => creative::render(data),
        TemplateKind::Professional => professional::render(data),
        TemplateKind::Executive => executive::render(data),
        TemplateKind::Compact => compact::render(data),
        TemplateKind::Technical => technical::render(data),
        TemplateKind::Academic => academic::render(data),
        TemplateKind::TwoColumn => two_column::render(data),
    }
}

/// Non-empty contact fields in display order: email, phone, linkedin, github.
pub(crate) fn contact_parts(info: &PersonalInfo) -> Vec<String> {
    [&info.email, &info.phone, &info.linkedin, &info.github]
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().to_string())
        .collect()
}

/// Contact fields joined into one line, or `None` when all are empty.
pub(crate) fn contact_line(info: &PersonalInfo, separator: &str) -> Option<String> {
    let parts = contact_parts(info);
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_resume;
    use crate::templates::ir::Block;

    fn text_contents(blocks: &[Block]) -> String {
        let mut out = String::new();
        collect_text(blocks, &mut out);
        out
    }

    fn collect_text(blocks: &[Block], out: &mut String) {
        for block in blocks {
            match block {
                Block::Text { text, .. } => {
                    out.push_str(text);
                    out.push('\n');
                }
                Block::KeyLine { left, right, .. } => {
                    out.push_str(left);
                    out.push(' ');
                    out.push_str(right);
                    out.push('\n');
                }
                Block::Bullets { items, .. } => {
                    for item in items {
                        out.push_str(item);
                        out.push('\n');
                    }
                }
                Block::Columns { left, right, .. } => {
                    collect_text(left, out);
                    collect_text(right, out);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_template_kind_serde_is_kebab_case() {
        assert_eq!(
            serde_json::to_string(&TemplateKind::TwoColumn).unwrap(),
            r#""two-column""#
        );
        let kind: TemplateKind = serde_json::from_str(r#""classic""#).unwrap();
        assert_eq!(kind, TemplateKind::Classic);
    }

    #[test]
    fn test_every_variant_renders_sample_data() {
        let data = sample_resume();
        for kind in TemplateKind::ALL {
            let blocks = render(kind, &data);
            assert!(!blocks.is_empty(), "{kind:?} produced no blocks");
            let text = text_contents(&blocks);
            assert!(text.contains("Amelia Vance"), "{kind:?} dropped the name");
            assert!(
                text.contains("Innovate Corp"),
                "{kind:?} dropped experience"
            );
        }
    }

    #[test]
    fn test_every_variant_is_pure() {
        let data = sample_resume();
        for kind in TemplateKind::ALL {
            assert_eq!(render(kind, &data), render(kind, &data), "{kind:?}");
        }
    }

    #[test]
    fn test_empty_document_renders_without_section_titles() {
        let data = crate::models::resume::ResumeData::default();
        for kind in TemplateKind::ALL {
            let text = text_contents(&render(kind, &data));
            assert!(
                !text.contains("Experience") && !text.contains("Education"),
                "{kind:?} rendered an empty section title"
            );
        }
    }

    #[test]
    fn test_executive_omits_projects() {
        let data = sample_resume();
        let text = text_contents(&render(TemplateKind::Executive, &data));
        assert!(!text.contains("Portfolio Website"));
    }

    #[test]
    fn test_technical_lists_projects() {
        let data = sample_resume();
        let text = text_contents(&render(TemplateKind::Technical, &data));
        assert!(text.contains("Portfolio Website"));
        assert!(text.contains("ameliavance.design"));
    }

    #[test]
    fn test_two_column_uses_columns_block() {
        let data = sample_resume();
        let blocks = render(TemplateKind::TwoColumn, &data);
        assert!(blocks
            .iter()
            .any(|b| matches!(b, Block::Columns { .. })));
    }

    #[test]
    fn test_contact_parts_skips_empty_fields() {
        let mut info = PersonalInfo::default();
        info.email = "amelia.vance@example.com".to_string();
        info.github = "github.com/ameliavance".to_string();
        let parts = contact_parts(&info);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], "amelia.vance@example.com");
    }

    #[test]
    fn test_contact_line_none_when_all_empty() {
        assert!(contact_line(&PersonalInfo::default(), " | ").is_none());
    }
}
