// Layout pipeline: templates emit blocks, `flow` places them on an unbounded
// canvas, and the canvas is sliced into page-height strips for the PDF writer.
// CPU-bound flow/render work must run inside tokio::task::spawn_blocking.

pub mod flow;
pub mod font_metrics;

pub use flow::{slice_into_pages, Canvas, CanvasItem, Page};
pub use font_metrics::{get_metrics, FontFamily, FontStyle, PageMetrics};
