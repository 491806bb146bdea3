use crate::fonts::{FontMetrics, FontStyle, TextMeasure};
use crate::options::RenderOptions;

use super::decor::{draw_footer, draw_header};

/// Page geometry in millimetres, y growing downwards from the top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    /// Space reserved above the bottom edge for the footer.
    pub footer_height: f32,
    pub header_height: f32,
    /// Cursor position right after the header band.
    pub body_top: f32,
}

impl PageGeometry {
    pub const A4: PageGeometry = PageGeometry {
        width: 210.0,
        height: 297.0,
        margin: 20.0,
        footer_height: 30.0,
        header_height: 40.0,
        body_top: 50.0,
    };

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Lowest y any body content may reach.
    pub fn body_limit(&self) -> f32 {
        self.height - self.footer_height
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::A4
    }
}

pub const BLACK: [u8; 3] = [0, 0, 0];

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: [u8; 3],
    },
    /// `y` is the baseline.
    Text {
        x: f32,
        y: f32,
        text: String,
        style: FontStyle,
        size: f32,
        color: [u8; 3],
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
    },
    /// `index` points into `ClaimDocument::images`; `y` is the top edge.
    Image {
        index: usize,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

/// Where a label/value item ended up. `top` is the first baseline, `bottom`
/// the cursor after the item.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedItem {
    pub section: String,
    pub label: String,
    pub lines: Vec<String>,
    pub top: f32,
    pub bottom: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub ops: Vec<DrawOp>,
    /// Titles of the sections that start on this page, in drawing order.
    pub sections: Vec<String>,
    pub items: Vec<PlacedItem>,
}

impl Page {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }

    pub fn image_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Image { .. }))
            .count()
    }

    pub fn item(&self, label: &str) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.label == label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PagePhase {
    Body,
    FooterDrawn,
}

/// Cursor and page state for one render. Owned by a single invocation and
/// threaded through every drawing routine by `&mut`.
pub(crate) struct Layout<'a> {
    geometry: PageGeometry,
    title: &'a str,
    byline: String,
    y_pos: f32,
    current_page: usize,
    page: Page,
    phase: PagePhase,
    done: Vec<Page>,
}

impl<'a> Layout<'a> {
    /// First page with its header drawn, cursor at the body top.
    pub(crate) fn begin(options: &'a RenderOptions) -> Self {
        let geometry = options.geometry;
        let mut page = Page {
            number: 1,
            ..Page::default()
        };
        draw_header(&mut page, &geometry, &options.title);
        Layout {
            geometry,
            title: &options.title,
            byline: options.byline(),
            y_pos: geometry.body_top,
            current_page: 1,
            page,
            phase: PagePhase::Body,
            done: Vec::new(),
        }
    }

    pub(crate) fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub(crate) fn y(&self) -> f32 {
        self.y_pos
    }

    pub(crate) fn advance(&mut self, dy: f32) {
        self.y_pos += dy;
    }

    fn at_body_top(&self) -> bool {
        (self.y_pos - self.geometry.body_top).abs() < 0.01
    }

    /// Breaks the page when `required` more units would run into the footer.
    /// Returns whether a break happened.
    pub(crate) fn check_new_page(&mut self, required: f32) -> bool {
        if self.y_pos + required <= self.geometry.body_limit() {
            return false;
        }
        if self.at_body_top() {
            // a fresh page is as good as it gets
            log::warn!(
                "page {}: {:.1} units of content exceed the page body and will overflow",
                self.current_page,
                required
            );
            return false;
        }
        log::debug!(
            "page break after page {} (y={:.1}, required={:.1})",
            self.current_page,
            self.y_pos,
            required
        );
        self.add_new_page();
        true
    }

    /// Closes the current page (footer included) and opens the next one.
    pub(crate) fn add_new_page(&mut self) {
        self.add_footer();
        self.current_page += 1;
        let next = Page {
            number: self.current_page,
            ..Page::default()
        };
        let finished = std::mem::replace(&mut self.page, next);
        self.done.push(finished);
        draw_header(&mut self.page, &self.geometry, self.title);
        self.phase = PagePhase::Body;
        self.y_pos = self.geometry.body_top;
    }

    /// Draws the footer of the current page; a second call is a no-op.
    pub(crate) fn add_footer(&mut self) {
        if self.phase == PagePhase::FooterDrawn {
            return;
        }
        draw_footer(&mut self.page, &self.geometry, &self.byline, self.current_page);
        self.phase = PagePhase::FooterDrawn;
    }

    pub(crate) fn text(&mut self, x: f32, y: f32, text: impl Into<String>, style: FontStyle, size: f32) {
        self.page.ops.push(DrawOp::Text {
            x,
            y,
            text: text.into(),
            style,
            size,
            color: BLACK,
        });
    }

    pub(crate) fn rule(&mut self, x1: f32, x2: f32, y: f32) {
        self.page.ops.push(DrawOp::Line {
            x1,
            y1: y,
            x2,
            y2: y,
            width: 0.2,
        });
    }

    pub(crate) fn image(&mut self, index: usize, x: f32, y: f32, width: f32, height: f32) {
        self.page.ops.push(DrawOp::Image {
            index,
            x,
            y,
            width,
            height,
        });
    }

    pub(crate) fn mark_section(&mut self, title: &str) {
        self.page.sections.push(title.to_string());
    }

    pub(crate) fn place_item(&mut self, item: PlacedItem) {
        self.page.items.push(item);
    }

    /// Final footer; consumes the layout so nothing can be drawn afterwards.
    pub(crate) fn finish(mut self) -> Vec<Page> {
        self.add_footer();
        let mut pages = self.done;
        pages.push(self.page);
        pages
    }
}

/// Left edge for `text` centered on `center_x`.
pub(super) fn centered_x(text: &str, metrics: FontMetrics, center_x: f32) -> f32 {
    center_x - metrics.text_width(text) / 2.0
}

/// Left edge for `text` ending at `right_x`.
pub(super) fn right_aligned_x(text: &str, metrics: FontMetrics, right_x: f32) -> f32 {
    right_x - metrics.text_width(text)
}
