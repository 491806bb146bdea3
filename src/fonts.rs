use pdf_writer::{Name, Pdf, Ref};

/// Points per millimetre; layout works in millimetres, PDF user space in points.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// The three faces the claim document uses. All are PDF standard Type1
/// fonts, so nothing is embedded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

impl FontStyle {
    pub const ALL: [FontStyle; 3] = [FontStyle::Regular, FontStyle::Bold, FontStyle::Italic];

    fn base_font(self) -> &'static [u8] {
        match self {
            FontStyle::Regular => b"Helvetica",
            FontStyle::Bold => b"Helvetica-Bold",
            FontStyle::Italic => b"Helvetica-Oblique",
        }
    }

    pub(crate) fn pdf_name(self) -> &'static str {
        match self {
            FontStyle::Regular => "F1",
            FontStyle::Bold => "F2",
            FontStyle::Italic => "F3",
        }
    }

    /// Width of a single character in 1000-units.
    pub fn char_width_1000(self, ch: char) -> f32 {
        let widths = match self {
            FontStyle::Bold => &HELVETICA_BOLD_WIDTHS,
            // Helvetica-Oblique shares the upright metrics
            FontStyle::Regular | FontStyle::Italic => &HELVETICA_WIDTHS,
        };
        match winansi_byte(ch) {
            None => 0.0,
            Some(b @ 32..=126) => widths[(b - 32) as usize] as f32,
            Some(_) => 556.0,
        }
    }
}

/// Pluggable text measurement. Implementations must be deterministic and
/// monotonic: appending text never makes it narrower.
pub trait TextMeasure {
    fn text_width(&self, text: &str) -> f32;
}

/// A standard font at a point size, measuring in millimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    pub style: FontStyle,
    pub size: f32,
}

impl FontMetrics {
    pub fn new(style: FontStyle, size: f32) -> Self {
        FontMetrics { style, size }
    }
}

impl TextMeasure for FontMetrics {
    fn text_width(&self, text: &str) -> f32 {
        let units: f32 = text.chars().map(|ch| self.style.char_width_1000(ch)).sum();
        units * self.size / 1000.0 / PT_PER_MM
    }
}

pub(crate) struct FontEntry {
    pub(crate) style: FontStyle,
    pub(crate) font_ref: Ref,
}

pub(crate) fn register_fonts(pdf: &mut Pdf, alloc: &mut impl FnMut() -> Ref) -> Vec<FontEntry> {
    FontStyle::ALL
        .into_iter()
        .map(|style| {
            let font_ref = alloc();
            pdf.type1_font(font_ref)
                .base_font(Name(style.base_font()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
            log::debug!(
                "register_font: {} as /{}",
                String::from_utf8_lossy(style.base_font()),
                style.pdf_name()
            );
            FontEntry { style, font_ref }
        })
        .collect()
}

/// Map a single Unicode char to its WinAnsi byte, or 0 if unmappable.
fn char_to_winansi(c: char) -> u8 {
    match c as u32 {
        0x0020..=0x007E => c as u8,
        0x00A0..=0x00FF => c as u8,
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x02C6 => 0x88,
        0x2030 => 0x89,
        0x0160 => 0x8A,
        0x2039 => 0x8B,
        0x0152 => 0x8C,
        0x017D => 0x8E,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95,
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x02DC => 0x98,
        0x2122 => 0x99,
        0x0161 => 0x9A,
        0x203A => 0x9B,
        0x0153 => 0x9C,
        0x017E => 0x9E,
        0x0178 => 0x9F,
        _ => 0,
    }
}

/// Printed in place of characters the standard fonts cannot show.
const REPLACEMENT: u8 = b'?';

/// The byte `c` is drawn as: its WinAnsi code, `?` when the code page lacks
/// it, or nothing for control characters.
fn winansi_byte(c: char) -> Option<u8> {
    match char_to_winansi(c) {
        0 if c.is_control() => None,
        0 => Some(REPLACEMENT),
        b => Some(b),
    }
}

/// Convert a UTF-8 string to WinAnsi (Windows-1252) bytes for PDF Str encoding.
/// Characters outside the code page become `?` and are logged.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    let missing: String = s
        .chars()
        .filter(|&c| char_to_winansi(c) == 0 && !c.is_control())
        .collect();
    if !missing.is_empty() {
        log::warn!("{s:?}: no WinAnsi code for {missing:?}, printed as '?'");
    }
    s.chars().filter_map(winansi_byte).collect()
}

// Helvetica AFM advance widths for WinAnsi 32..=126.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // space - /
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // 0 - 9
    278, 278, 584, 584, 584, 556, 1015,                                             // : - @
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // A - M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // N - Z
    278, 278, 278, 469, 556, 333,                                                   // [ - `
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // a - m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // n - z
    334, 260, 334, 584,                                                             // { - ~
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];
