//! PDF writer: turns sliced canvas pages into an A4 PDF using the base-14
//! Type1 fonts with WinAnsi encoding. One content stream per page, one shared
//! resources dictionary.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};
use thiserror::Error;

use crate::layout::{CanvasItem, FontFamily, FontStyle, Page, PageMetrics};
use crate::templates::ir::Color;

/// Baseline offset from the top of a text line, as a fraction of font size.
const ASCENT_FACTOR: f32 = 0.75;
/// Fill color used for `Color::Muted`.
const MUTED_RGB: (f32, f32, f32) = (0.42, 0.45, 0.49);
/// Accent fallback when the document settings hold an unparseable hex string.
const DEFAULT_ACCENT_RGB: (f32, f32, f32) = (0.29, 0.33, 0.64);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF write error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("PDF write error: {0}")]
    Io(#[from] std::io::Error),
}

/// The nine base-14 fonts the templates can reach, keyed by resource name.
const FONTS: [(&str, &str); 9] = [
    ("F1", "Helvetica"),
    ("F2", "Helvetica-Bold"),
    ("F3", "Helvetica-Oblique"),
    ("F4", "Times-Roman"),
    ("F5", "Times-Bold"),
    ("F6", "Times-Italic"),
    ("F7", "Courier"),
    ("F8", "Courier-Bold"),
    ("F9", "Courier-Oblique"),
];

fn font_resource(family: FontFamily, style: FontStyle) -> &'static str {
    match (family, style) {
        (FontFamily::Sans, FontStyle::Regular) => "F1",
        (FontFamily::Sans, FontStyle::Bold) => "F2",
        (FontFamily::Sans, FontStyle::Italic) => "F3",
        (FontFamily::Serif, FontStyle::Regular) => "F4",
        (FontFamily::Serif, FontStyle::Bold) => "F5",
        (FontFamily::Serif, FontStyle::Italic) => "F6",
        (FontFamily::Mono, FontStyle::Regular) => "F7",
        (FontFamily::Mono, FontStyle::Bold) => "F8",
        (FontFamily::Mono, FontStyle::Italic) => "F9",
    }
}

/// Parses `#RRGGBB` into unit-range RGB.
pub fn parse_hex_color(hex: &str) -> Option<(f32, f32, f32)> {
    let hex = hex.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Renders sliced pages into a complete PDF document.
///
/// `accent_hex` is the document's accent color setting; invalid values fall
/// back to the default accent rather than failing the export.
pub fn render_pdf(
    pages: &[Page],
    metrics: &PageMetrics,
    accent_hex: &str,
) -> Result<Vec<u8>, RenderError> {
    let accent = parse_hex_color(accent_hex).unwrap_or(DEFAULT_ACCENT_RGB);

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut font_dict = Dictionary::new();
    for (resource_name, base_font) in FONTS {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base_font,
            "Encoding" => "WinAnsiEncoding",
        });
        font_dict.set(resource_name.as_bytes(), Object::Reference(font_id));
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => Object::Dictionary(font_dict),
    });

    let mut page_ids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = page_content(page, metrics, accent);
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), metrics.width_pt.into(), metrics.height_pt.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        page_ids.push(Object::Reference(page_id));
    }

    let count = page_ids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

/// Builds the content stream for one page, converting page-local top-down
/// coordinates into PDF bottom-up coordinates.
fn page_content(page: &Page, metrics: &PageMetrics, accent: (f32, f32, f32)) -> Content {
    let margin = metrics.margin_pt;
    let top = metrics.height_pt - margin;
    let mut operations = Vec::new();

    for item in &page.items {
        match item {
            CanvasItem::Text {
                x,
                y,
                text,
                family,
                style,
                size_pt,
                color,
            } => {
                let (r, g, b) = resolve_color(*color, accent);
                let baseline = top - y - size_pt * ASCENT_FACTOR;
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
                operations.push(Operation::new(
                    "Tf",
                    vec![font_resource(*family, *style).into(), (*size_pt).into()],
                ));
                operations.push(Operation::new(
                    "Td",
                    vec![(margin + x).into(), baseline.into()],
                ));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::String(
                        encode_win_ansi(text),
                        StringFormat::Literal,
                    )],
                ));
                operations.push(Operation::new("ET", vec![]));
            }

            CanvasItem::Line {
                x,
                y,
                width,
                thickness_pt,
                color,
            } => {
                let (r, g, b) = resolve_color(*color, accent);
                let line_y = top - y;
                operations.push(Operation::new("RG", vec![r.into(), g.into(), b.into()]));
                operations.push(Operation::new("w", vec![(*thickness_pt).into()]));
                operations.push(Operation::new(
                    "m",
                    vec![(margin + x).into(), line_y.into()],
                ));
                operations.push(Operation::new(
                    "l",
                    vec![(margin + x + width).into(), line_y.into()],
                ));
                operations.push(Operation::new("S", vec![]));
            }

            CanvasItem::Rect {
                x,
                y,
                width,
                height,
                color,
            } => {
                let (r, g, b) = resolve_color(*color, accent);
                let rect_y = top - y - height;
                operations.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
                operations.push(Operation::new(
                    "re",
                    vec![
                        (margin + x).into(),
                        rect_y.into(),
                        (*width).into(),
                        (*height).into(),
                    ],
                ));
                operations.push(Operation::new("f", vec![]));
            }
        }
    }

    Content { operations }
}

fn resolve_color(color: Color, accent: (f32, f32, f32)) -> (f32, f32, f32) {
    match color {
        Color::Black => (0.0, 0.0, 0.0),
        Color::Muted => MUTED_RGB,
        Color::Accent => accent,
    }
}

/// Maps a string to WinAnsi bytes. ASCII and Latin-1 pass through; the
/// punctuation the templates emit (bullet, dashes, middle dot, curly quotes)
/// maps to its CP-1252 slot; everything else becomes `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{0020}'..='\u{007e}' => c as u8,
            '\u{00a0}'..='\u{00ff}' => c as u8,
            '\u{2022}' => 0x95, // bullet
            '\u{2013}' => 0x96, // en dash
            '\u{2014}' => 0x97, // em dash
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2026}' => 0x85, // ellipsis
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{flow, slice_into_pages};
    use crate::models::sample::sample_resume;
    use crate::templates::{self, TemplateKind};

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    fn render_sample(kind: TemplateKind) -> Vec<u8> {
        let data = sample_resume();
        let metrics = PageMetrics::a4();
        let blocks = templates::render(kind, &data);
        let pages = slice_into_pages(flow::flow(&blocks, &metrics), &metrics);
        render_pdf(&pages, &metrics, &data.settings.accent_color).unwrap()
    }

    #[test]
    fn test_parse_hex_color_valid() {
        let (r, g, b) = parse_hex_color("#FF8000").unwrap();
        assert!((r - 1.0).abs() < 1e-3);
        assert!((g - 0.502).abs() < 1e-2);
        assert!(b.abs() < 1e-3);
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        assert!(parse_hex_color("").is_none());
        assert!(parse_hex_color("4A55A2").is_none());
        assert!(parse_hex_color("#12345").is_none());
        assert!(parse_hex_color("#GGGGGG").is_none());
    }

    #[test]
    fn test_encode_win_ansi_passthrough_and_mapping() {
        assert_eq!(encode_win_ansi("Rust"), b"Rust".to_vec());
        assert_eq!(encode_win_ansi("\u{2022}"), vec![0x95]);
        assert_eq!(encode_win_ansi("\u{00e9}"), vec![0xe9]);
        assert_eq!(encode_win_ansi("\u{4e2d}"), vec![b'?']);
    }

    #[test]
    fn test_render_pdf_starts_with_header() {
        let bytes = render_sample(TemplateKind::Classic);
        assert!(bytes.starts_with(b"%PDF-1.7"));
    }

    #[test]
    fn test_render_pdf_single_page_sample() {
        let bytes = render_sample(TemplateKind::Compact);
        assert!(contains(&bytes, b"/Type /Pages"));
        assert!(contains(&bytes, b"/Count 1"));
    }

    #[test]
    fn test_render_pdf_every_template_produces_output() {
        for kind in TemplateKind::ALL {
            let bytes = render_sample(kind);
            assert!(bytes.len() > 500, "{kind:?} produced a suspiciously small PDF");
        }
    }

    #[test]
    fn test_render_pdf_multiple_pages_for_tall_content() {
        use crate::templates::ir::{Block, TextStyle};

        let metrics = PageMetrics::a4();
        let blocks: Vec<Block> = (0..300)
            .map(|i| {
                Block::text(
                    format!("Paragraph {i} filling a line of the canvas"),
                    TextStyle::new(FontFamily::Sans, 11.0),
                )
            })
            .collect();
        let pages = slice_into_pages(flow::flow(&blocks, &metrics), &metrics);
        assert!(pages.len() >= 2);
        let bytes = render_pdf(&pages, &metrics, "#4A55A2").unwrap();
        let marker = format!("/Count {}", pages.len());
        assert!(contains(&bytes, marker.as_bytes()));
    }

    #[test]
    fn test_render_pdf_embeds_base_fonts() {
        let bytes = render_sample(TemplateKind::Classic);
        assert!(contains(&bytes, b"/BaseFont /Times-Roman"));
        assert!(contains(&bytes, b"/Encoding /WinAnsiEncoding"));
    }
}
