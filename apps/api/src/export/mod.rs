//! PDF export: template render, flow, page slicing, and PDF writing in one
//! synchronous pipeline. The pipeline is CPU-bound, so handlers run it on the
//! blocking pool.

pub mod handlers;

use crate::layout::{flow, slice_into_pages, PageMetrics};
use crate::models::resume::ResumeData;
use crate::render::{render_pdf, RenderError};
use crate::templates::{self, TemplateKind};

/// Renders the document to PDF bytes with the given template.
/// Call from `spawn_blocking` in async contexts.
pub fn export_pdf(
    data: &ResumeData,
    kind: TemplateKind,
    metrics: &PageMetrics,
) -> Result<Vec<u8>, RenderError> {
    let blocks = templates::render(kind, data);
    let canvas = flow::flow(&blocks, metrics);
    let pages = slice_into_pages(canvas, metrics);
    render_pdf(&pages, metrics, &data.settings.accent_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_resume;

    #[test]
    fn test_export_pdf_produces_document() {
        let data = sample_resume();
        let bytes = export_pdf(&data, TemplateKind::Classic, &PageMetrics::a4()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
    }

    #[test]
    fn test_export_pdf_empty_document_still_renders() {
        let data = ResumeData::default();
        let bytes = export_pdf(&data, TemplateKind::Minimalist, &PageMetrics::a4()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
    }
}
