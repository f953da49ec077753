use anyhow::Context;
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::export::export_pdf;
use crate::state::AppState;
use crate::templates::TemplateKind;

#[derive(Deserialize, Default)]
pub struct ExportRequest {
    /// Overrides the document's selected template for this export only.
    pub template: Option<TemplateKind>,
}

/// POST /api/v1/export
/// Renders the current document as a PDF attachment.
pub async fn handle_export(
    State(state): State<AppState>,
    body: Option<axum::Json<ExportRequest>>,
) -> Result<(HeaderMap, Bytes), AppError> {
    let req = body.map(|axum::Json(r)| r).unwrap_or_default();

    let data = state.document.data().await;
    let kind = req.template.unwrap_or(data.settings.template);
    let filename = data.export_filename();
    let metrics = state.page_metrics;

    let bytes = tokio::task::spawn_blocking(move || export_pdf(&data, kind, &metrics))
        .await
        .context("PDF export task panicked")??;

    info!(
        "exported {} bytes as {} using {:?} template",
        bytes.len(),
        filename,
        kind
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/pdf"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
            .unwrap_or_else(|_| HeaderValue::from_static("attachment; filename=\"Resume.pdf\"")),
    );

    Ok((headers, Bytes::from(bytes)))
}
