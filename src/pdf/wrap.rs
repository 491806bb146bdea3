use crate::fonts::TextMeasure;

/// Greedy word wrap.
///
/// Tokens are taken in order and appended to the current line while the
/// measured width of `line + " " + token` stays within `max_width`; otherwise
/// the line is flushed and the token starts the next one. A token that is
/// wider than `max_width` on its own ends up alone on an overflowing line
/// (no hyphenation). Empty or whitespace-only input produces no lines.
pub fn wrap_text(text: &str, max_width: f32, measure: &impl TextMeasure) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for token in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(token);
            continue;
        }
        let candidate_len = current.len() + 1 + token.len();
        let mut candidate = String::with_capacity(candidate_len);
        candidate.push_str(&current);
        candidate.push(' ');
        candidate.push_str(token);

        if measure.text_width(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, token.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
