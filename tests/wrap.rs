use nofault_pdf::{FontMetrics, FontStyle, PT_PER_MM, TextMeasure, wrap_text};

/// Every character, spaces included, is the same width.
struct Monospace(f32);

impl TextMeasure for Monospace {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.0
    }
}

const DISCLAIMER: &str = "THIS AUTHORIZATION OR PHOTOCOPY HEREOF, WILL AUTHORIZE YOU TO \
    FURNISH ALL INFORMATION YOU MAY HAVE REGARDING MY CONDITION WHILE UNDER YOUR \
    OBSERVATION OR TREATMENT, INCLUDING THE HISTORY OBTAINED, X-RAY AND PHYSICAL \
    FINDINGS DIAGNOSIS AND PROGNOSIS.";

#[test]
fn short_text_is_a_single_unchanged_line() {
    let metrics = FontMetrics::new(FontStyle::Regular, 10.0);
    for text in ["Car accident on I-95", "N/A", "123 Main St, Miami, FL 33101"] {
        assert_eq!(wrap_text(text, 80.0, &metrics), vec![text.to_string()]);
    }
}

#[test]
fn empty_input_yields_no_lines() {
    let m = Monospace(1.0);
    assert!(wrap_text("", 10.0, &m).is_empty());
    assert!(wrap_text("   \n\t ", 10.0, &m).is_empty());
}

#[test]
fn greedy_fill_uses_the_full_width() {
    let m = Monospace(1.0);
    // "aa bb" is exactly 5 wide and still fits
    assert_eq!(wrap_text("aa bb cc", 5.0, &m), vec!["aa bb", "cc"]);
    assert_eq!(wrap_text("aa bb cc", 4.0, &m), vec!["aa", "bb", "cc"]);
}

#[test]
fn overlong_token_gets_its_own_line() {
    let m = Monospace(1.0);
    assert_eq!(
        wrap_text("ab abcdefghij cd", 5.0, &m),
        vec!["ab", "abcdefghij", "cd"]
    );
    assert_eq!(wrap_text("abcdefghij", 5.0, &m), vec!["abcdefghij"]);
}

#[test]
fn whitespace_runs_collapse_to_single_spaces() {
    let m = Monospace(1.0);
    assert_eq!(wrap_text("a   b\n c", 100.0, &m), vec!["a b c"]);
}

#[test]
fn lines_stay_within_width_unless_single_token() {
    let texts = [
        DISCLAIMER,
        "Whiplash and back pain after being rear-ended at a red light on US-1",
        "supercalifragilisticexpialidocious is long, and so is pneumonoultramicroscopicsilicovolcanoconiosis",
    ];
    let measures = [
        FontMetrics::new(FontStyle::Regular, 10.0),
        FontMetrics::new(FontStyle::Regular, 11.0),
        FontMetrics::new(FontStyle::Bold, 14.0),
    ];
    for text in texts {
        for metrics in &measures {
            for max_width in [20.0, 45.0, 80.0, 170.0] {
                let lines = wrap_text(text, max_width, metrics);
                assert!(!lines.is_empty());
                for line in &lines {
                    let fits = metrics.text_width(line) <= max_width;
                    assert!(
                        fits || !line.contains(' '),
                        "line {line:?} overflows {max_width} without being a single token"
                    );
                }
                let rejoined = lines.join(" ");
                let words: Vec<&str> = text.split_whitespace().collect();
                assert_eq!(rejoined, words.join(" "), "no words lost or reordered");
            }
        }
    }
}

#[test]
fn helvetica_metrics_follow_the_afm_tables() {
    let regular = FontMetrics::new(FontStyle::Regular, 10.0);
    let bold = FontMetrics::new(FontStyle::Bold, 10.0);
    let italic = FontMetrics::new(FontStyle::Italic, 10.0);

    let m_width = 833.0 * 10.0 / 1000.0 / PT_PER_MM;
    assert!((regular.text_width("M") - m_width).abs() < 1e-4);
    assert!(bold.text_width("Claim") > regular.text_width("Claim"));
    assert_eq!(italic.text_width("Claim"), regular.text_width("Claim"));
    assert!(regular.text_width("ab") > regular.text_width("a"));
    assert_eq!(regular.text_width(""), 0.0);
}

#[test]
fn characters_outside_winansi_measure_as_question_marks() {
    let regular = FontMetrics::new(FontStyle::Regular, 10.0);
    assert_eq!(regular.text_width("Đ"), regular.text_width("?"));
    assert_eq!(regular.text_width("Nguyễn"), regular.text_width("Nguy?n"));
    // Latin-1 letters are in the code page and keep their own width
    assert!(regular.text_width("é") > 0.0);
}
