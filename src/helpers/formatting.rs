use crate::config::constants::{BAR_STEP, BAR_WIDTH, LABEL_WIDTH};

/// `floor(value / 5)` filled cells out of 20, clamped to the bar width.
pub fn render_bar(value: f64) -> String {
    let filled = if value.is_finite() && value > 0.0 {
        ((value / BAR_STEP).floor() as usize).min(BAR_WIDTH)
    } else {
        0
    };
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn format_score_line(label: &str, value: Option<f64>, weight: &str) -> String {
    match value {
        Some(value) => format!(
            "    {:<width$} {:6.1}/100 ({}) [{}]",
            label,
            value,
            weight,
            render_bar(value),
            width = LABEL_WIDTH
        ),
        None => format!(
            "    {:<width$} {:>6}/100 ({}) [{}]",
            label,
            "n/a",
            weight,
            render_bar(0.0),
            width = LABEL_WIDTH
        ),
    }
}

pub fn rule(width: usize) -> String {
    "=".repeat(width)
}
