//! Block flow and pagination.
//!
//! `flow` places blocks top-down on an unbounded canvas at content width;
//! `slice_into_pages` then cuts the canvas into page-height strips until the
//! whole canvas is consumed. Page count is proportional to content height:
//! `pages.len() == ceil(canvas.height / usable_height)`. Text lines are
//! assigned to a strip by their top edge, so no line straddles a page break.

use crate::layout::font_metrics::{get_metrics, FontFamily, FontStyle, PageMetrics};
use crate::templates::ir::{Align, Block, Color, TextStyle};

/// Vertical advance per text line, as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.35;
/// Horizontal indent for bullet item text, in points.
const BULLET_INDENT_PT: f32 = 12.0;
/// Breathing room above and below a rule, in points.
const RULE_GAP_PT: f32 = 3.0;

// ────────────────────────────────────────────────────────────────────────────
// Canvas types
// ────────────────────────────────────────────────────────────────────────────

/// One positioned item on the canvas. Coordinates are top-down with the origin
/// at the top-left of the content area; `y` is the top edge of the item.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasItem {
    Text {
        x: f32,
        y: f32,
        text: String,
        family: FontFamily,
        style: FontStyle,
        size_pt: f32,
        color: Color,
    },
    /// Horizontal rule.
    Line {
        x: f32,
        y: f32,
        width: f32,
        thickness_pt: f32,
        color: Color,
    },
    /// Filled rectangle.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
}

impl CanvasItem {
    fn top(&self) -> f32 {
        match self {
            CanvasItem::Text { y, .. } | CanvasItem::Line { y, .. } | CanvasItem::Rect { y, .. } => {
                *y
            }
        }
    }

    fn shift_y(&mut self, delta: f32) {
        match self {
            CanvasItem::Text { y, .. } | CanvasItem::Line { y, .. } | CanvasItem::Rect { y, .. } => {
                *y -= delta
            }
        }
    }
}

/// The fully flowed document before pagination.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub items: Vec<CanvasItem>,
    pub width_pt: f32,
    /// Total content height consumed by the flow.
    pub height_pt: f32,
}

/// One exported page; item coordinates are page-local (top-down from the top
/// of the content area).
#[derive(Debug, Clone)]
pub struct Page {
    pub items: Vec<CanvasItem>,
}

// ────────────────────────────────────────────────────────────────────────────
// Flow
// ────────────────────────────────────────────────────────────────────────────

/// Flows the block list onto an unbounded canvas at the page's content width.
pub fn flow(blocks: &[Block], metrics: &PageMetrics) -> Canvas {
    let width = metrics.content_width_pt();
    let mut items = Vec::new();
    let height = flow_into(blocks, 0.0, width, 0.0, &mut items);
    Canvas {
        items,
        width_pt: width,
        height_pt: height,
    }
}

/// Flows `blocks` into the region starting at `(origin_x, y)` with the given
/// width. Returns the y cursor after the last block.
fn flow_into(
    blocks: &[Block],
    origin_x: f32,
    width: f32,
    mut y: f32,
    items: &mut Vec<CanvasItem>,
) -> f32 {
    for block in blocks {
        match block {
            Block::Text { text, style } => {
                y = flow_text(text, style, origin_x, width, y, items);
            }

            Block::KeyLine {
                left,
                right,
                left_style,
                right_style,
            } => {
                let size = left_style.size_pt.max(right_style.size_pt);
                items.push(text_item(left.clone(), origin_x, y, left_style));
                let right_metrics = get_metrics(right_style.family);
                let right_w =
                    right_metrics.measure_str(right, right_style.style) * right_style.size_pt;
                // Overlong right text (links, date ranges) starts at the
                // origin instead of running into the left margin.
                let right_x = (origin_x + width - right_w).max(origin_x);
                items.push(text_item(right.clone(), right_x, y, right_style));
                y += size * LINE_HEIGHT_FACTOR;
            }

            Block::Bullets { items: list, style } => {
                let metrics = get_metrics(style.family);
                let text_width_em = (width - BULLET_INDENT_PT) / style.size_pt;
                for item in list {
                    let lines = metrics.wrap_lines(item, style.style, text_width_em);
                    for (i, line) in lines.iter().enumerate() {
                        if i == 0 {
                            items.push(text_item("\u{2022}".to_string(), origin_x, y, style));
                        }
                        items.push(text_item(
                            line.clone(),
                            origin_x + BULLET_INDENT_PT,
                            y,
                            style,
                        ));
                        y += style.size_pt * LINE_HEIGHT_FACTOR;
                    }
                }
            }

            Block::Rule {
                color,
                thickness_pt,
            } => {
                y += RULE_GAP_PT;
                items.push(CanvasItem::Line {
                    x: origin_x,
                    y,
                    width,
                    thickness_pt: *thickness_pt,
                    color: *color,
                });
                y += thickness_pt + RULE_GAP_PT;
            }

            Block::Band { height_pt, color } => {
                items.push(CanvasItem::Rect {
                    x: origin_x,
                    y,
                    width,
                    height: *height_pt,
                    color: *color,
                });
                y += height_pt;
            }

            Block::Spacer { height_pt } => {
                y += height_pt;
            }

            Block::Columns {
                left,
                right,
                left_frac,
                gutter_pt,
            } => {
                let left_w = (width - gutter_pt) * left_frac;
                let right_w = width - gutter_pt - left_w;
                let left_end = flow_into(left, origin_x, left_w, y, items);
                let right_end = flow_into(right, origin_x + left_w + gutter_pt, right_w, y, items);
                y = left_end.max(right_end);
            }
        }
    }
    y
}

fn flow_text(
    text: &str,
    style: &TextStyle,
    origin_x: f32,
    width: f32,
    mut y: f32,
    items: &mut Vec<CanvasItem>,
) -> f32 {
    let metrics = get_metrics(style.family);
    let lines = metrics.wrap_lines(text, style.style, width / style.size_pt);
    for line in lines {
        let line_w = metrics.measure_str(&line, style.style) * style.size_pt;
        let x = match style.align {
            Align::Left => origin_x,
            Align::Center => origin_x + (width - line_w).max(0.0) / 2.0,
            Align::Right => origin_x + (width - line_w).max(0.0),
        };
        items.push(text_item(line, x, y, style));
        y += style.size_pt * LINE_HEIGHT_FACTOR;
    }
    y
}

fn text_item(text: String, x: f32, y: f32, style: &TextStyle) -> CanvasItem {
    CanvasItem::Text {
        x,
        y,
        text,
        family: style.family,
        style: style.style,
        size_pt: style.size_pt,
        color: style.color,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pagination
// ────────────────────────────────────────────────────────────────────────────

/// Slices the canvas into page-height strips. Each item lands on the strip
/// containing its top edge; rects spanning a boundary are clamped to the
/// strip remainder. Always returns at least one page.
pub fn slice_into_pages(canvas: Canvas, metrics: &PageMetrics) -> Vec<Page> {
    let usable = metrics.usable_height_pt();
    let page_count = ((canvas.height_pt / usable).ceil() as usize).max(1);

    let mut pages: Vec<Page> = (0..page_count).map(|_| Page { items: Vec::new() }).collect();

    for mut item in canvas.items {
        let index = ((item.top() / usable).floor() as usize).min(page_count - 1);
        item.shift_y(index as f32 * usable);
        if let CanvasItem::Rect { y, height, .. } = &mut item {
            *height = height.min(usable - *y);
        }
        pages[index].items.push(item);
    }

    pages
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sans(size: f32) -> TextStyle {
        TextStyle::new(FontFamily::Sans, size)
    }

    fn paragraph(words: usize) -> Block {
        Block::text("word ".repeat(words).trim().to_string(), sans(11.0))
    }

    #[test]
    fn test_flow_empty_blocks_is_empty_canvas() {
        let canvas = flow(&[], &PageMetrics::a4());
        assert!(canvas.items.is_empty());
        assert_eq!(canvas.height_pt, 0.0);
    }

    #[test]
    fn test_flow_single_line_height() {
        let canvas = flow(&[Block::text("Hello", sans(11.0))], &PageMetrics::a4());
        assert_eq!(canvas.items.len(), 1);
        assert!((canvas.height_pt - 11.0 * LINE_HEIGHT_FACTOR).abs() < 1e-3);
    }

    #[test]
    fn test_flow_center_alignment_offsets_x() {
        let metrics = PageMetrics::a4();
        let centered = flow(
            &[Block::text("Amelia Vance", sans(11.0).align(Align::Center))],
            &metrics,
        );
        match &centered.items[0] {
            CanvasItem::Text { x, .. } => {
                assert!(*x > 0.0 && *x < metrics.content_width_pt() / 2.0)
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_flow_keyline_right_side_is_right_aligned() {
        let metrics = PageMetrics::a4();
        let canvas = flow(
            &[Block::KeyLine {
                left: "Senior Product Designer".to_string(),
                right: "Jun 2018 - Present".to_string(),
                left_style: sans(11.0).bold(),
                right_style: sans(9.0),
            }],
            &metrics,
        );
        assert_eq!(canvas.items.len(), 2);
        let (left_x, right_x) = match (&canvas.items[0], &canvas.items[1]) {
            (CanvasItem::Text { x: a, .. }, CanvasItem::Text { x: b, .. }) => (*a, *b),
            other => panic!("expected two text items, got {other:?}"),
        };
        assert_eq!(left_x, 0.0);
        assert!(right_x > metrics.content_width_pt() / 2.0);
    }

    #[test]
    fn test_flow_keyline_overlong_right_text_never_crosses_origin() {
        let metrics = PageMetrics::a4();
        let canvas = flow(
            &[Block::KeyLine {
                left: "Portfolio Website".to_string(),
                right: "https://example.com/a-very-long-path".repeat(10),
                left_style: sans(10.0).bold(),
                right_style: sans(9.0),
            }],
            &metrics,
        );
        match &canvas.items[1] {
            CanvasItem::Text { x, .. } => assert!(*x >= 0.0),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_flow_bullets_indent_and_glyph() {
        let canvas = flow(
            &[Block::Bullets {
                items: vec!["Led the redesign".to_string()],
                style: sans(10.0),
            }],
            &PageMetrics::a4(),
        );
        // Glyph + text line.
        assert_eq!(canvas.items.len(), 2);
        match &canvas.items[0] {
            CanvasItem::Text { text, x, .. } => {
                assert_eq!(text, "\u{2022}");
                assert_eq!(*x, 0.0);
            }
            other => panic!("expected bullet glyph, got {other:?}"),
        }
        match &canvas.items[1] {
            CanvasItem::Text { x, .. } => assert!((x - BULLET_INDENT_PT).abs() < 1e-4),
            other => panic!("expected bullet text, got {other:?}"),
        }
    }

    #[test]
    fn test_flow_columns_advance_by_taller_side() {
        let short = vec![paragraph(5)];
        let tall = vec![paragraph(200)];
        let metrics = PageMetrics::a4();
        let canvas = flow(
            &[Block::Columns {
                left: short,
                right: tall,
                left_frac: 0.33,
                gutter_pt: 18.0,
            }],
            &metrics,
        );
        let tall_alone = flow(&[paragraph(200)], &metrics);
        // The right column is narrower than full width, so it wraps to at
        // least as many lines as the full-width flow.
        assert!(canvas.height_pt >= tall_alone.height_pt);
    }

    #[test]
    fn test_columns_do_not_overlap_gutter() {
        let metrics = PageMetrics::a4();
        let canvas = flow(
            &[Block::Columns {
                left: vec![paragraph(30)],
                right: vec![paragraph(30)],
                left_frac: 0.33,
                gutter_pt: 18.0,
            }],
            &metrics,
        );
        let left_w = (metrics.content_width_pt() - 18.0) * 0.33;
        for item in &canvas.items {
            if let CanvasItem::Text { x, .. } = item {
                assert!(*x <= left_w || *x >= left_w + 18.0);
            }
        }
    }

    #[test]
    fn test_slice_small_content_is_one_page() {
        let metrics = PageMetrics::a4();
        let canvas = flow(&[paragraph(50)], &metrics);
        let pages = slice_into_pages(canvas, &metrics);
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn test_slice_empty_canvas_still_yields_one_page() {
        let metrics = PageMetrics::a4();
        let pages = slice_into_pages(flow(&[], &metrics), &metrics);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].items.is_empty());
    }

    #[test]
    fn test_slice_page_count_proportional_to_height() {
        let metrics = PageMetrics::a4();
        let blocks: Vec<Block> = (0..400).map(|_| paragraph(3)).collect();
        let canvas = flow(&blocks, &metrics);
        let expected = (canvas.height_pt / metrics.usable_height_pt()).ceil() as usize;
        let pages = slice_into_pages(canvas, &metrics);
        assert!(expected > 1, "fixture should overflow one page");
        assert_eq!(pages.len(), expected);
    }

    #[test]
    fn test_slice_no_item_outside_page_bounds() {
        let metrics = PageMetrics::a4();
        let blocks: Vec<Block> = (0..400).map(|_| paragraph(3)).collect();
        let pages = slice_into_pages(flow(&blocks, &metrics), &metrics);
        for page in &pages {
            for item in &page.items {
                assert!(item.top() >= 0.0);
                assert!(item.top() < metrics.usable_height_pt() + 1e-3);
            }
        }
    }

    #[test]
    fn test_slice_preserves_every_item() {
        let metrics = PageMetrics::a4();
        let blocks: Vec<Block> = (0..300).map(|_| paragraph(4)).collect();
        let canvas = flow(&blocks, &metrics);
        let total = canvas.items.len();
        let pages = slice_into_pages(canvas, &metrics);
        let sliced: usize = pages.iter().map(|p| p.items.len()).sum();
        assert_eq!(sliced, total);
    }

    #[test]
    fn test_band_spanning_boundary_is_clamped() {
        let metrics = PageMetrics::a4();
        let usable = metrics.usable_height_pt();
        let blocks = vec![
            Block::spacer(usable - 10.0),
            Block::Band {
                height_pt: 40.0,
                color: Color::Accent,
            },
        ];
        let pages = slice_into_pages(flow(&blocks, &metrics), &metrics);
        let rect = pages[0]
            .items
            .iter()
            .find_map(|i| match i {
                CanvasItem::Rect { y, height, .. } => Some((*y, *height)),
                _ => None,
            })
            .expect("band should land on first page");
        assert!(rect.0 + rect.1 <= usable + 1e-3);
    }
}
