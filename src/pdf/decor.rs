//! Branded header band and byline/page-number footer.

use crate::fonts::{FontMetrics, FontStyle};

use super::layout::{BLACK, DrawOp, Page, PageGeometry, centered_x, right_aligned_x};

const HEADER_FILL: [u8; 3] = [26, 35, 126];
const HEADER_TEXT: [u8; 3] = [255, 255, 255];
const HEADER_TITLE_SIZE: f32 = 16.0;
const HEADER_BASELINE: f32 = 25.0;

const FOOTER_SIZE: f32 = 8.0;
/// Footer baseline distance from the bottom edge.
const FOOTER_OFFSET: f32 = 20.0;

pub(super) fn draw_header(page: &mut Page, geometry: &PageGeometry, title: &str) {
    page.ops.push(DrawOp::FillRect {
        x: 0.0,
        y: 0.0,
        width: geometry.width,
        height: geometry.header_height,
        color: HEADER_FILL,
    });
    let metrics = FontMetrics::new(FontStyle::Bold, HEADER_TITLE_SIZE);
    page.ops.push(DrawOp::Text {
        x: centered_x(title, metrics, geometry.width / 2.0),
        y: HEADER_BASELINE,
        text: title.to_string(),
        style: FontStyle::Bold,
        size: HEADER_TITLE_SIZE,
        color: HEADER_TEXT,
    });
}

pub(super) fn draw_footer(page: &mut Page, geometry: &PageGeometry, byline: &str, page_number: usize) {
    let y = geometry.height - FOOTER_OFFSET;
    page.ops.push(DrawOp::Text {
        x: geometry.margin,
        y,
        text: byline.to_string(),
        style: FontStyle::Italic,
        size: FOOTER_SIZE,
        color: BLACK,
    });

    let label = format!("Page {page_number}");
    let metrics = FontMetrics::new(FontStyle::Italic, FOOTER_SIZE);
    page.ops.push(DrawOp::Text {
        x: right_aligned_x(&label, metrics, geometry.width - geometry.margin),
        y,
        text: label,
        style: FontStyle::Italic,
        size: FOOTER_SIZE,
        color: BLACK,
    });
}
