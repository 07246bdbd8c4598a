//! HTML renderer: The diff-checker markup.
//!
//! Each row becomes:
//!
//! ```text
//! <div class="diff-line diff-added">
//!   <div class="line-num"></div>
//!   <div class="line-num">3</div>
//!   <div class="line-content">+ four</div>
//! </div>
//! ```
//!
//! Same rows carry only the `diff-line` class. All line text passes through
//! [`escape_html`].

use super::{rows, DiffRow, Marker};
use crate::config::RenderConfig;
use crate::engine::EditScript;
use crate::lines::Comparison;
use std::borrow::Cow;
use std::fmt::Write;

/// Escape `& < > " '` for inclusion in HTML text or attributes.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// CSS class for a row, after `diff-line`.
const fn row_class(marker: Marker) -> Option<&'static str> {
    match marker {
        Marker::Same => None,
        Marker::Add => Some("diff-added"),
        Marker::Remove => Some("diff-removed"),
    }
}

/// Centered message block shown in place of a diff.
pub fn placeholder_html(message: &str) -> String {
    format!(
        "<div style=\"padding: 20px; color: #666; text-align: center;\">{}</div>",
        escape_html(message)
    )
}

/// Placeholder for an output area with no comparison yet, or one that was
/// cleared.
pub fn render_cleared(config: &RenderConfig) -> String {
    placeholder_html(&config.cleared_message)
}

/// Render a comparison, or the empty-input placeholder.
pub fn render_html(comparison: &Comparison, config: &RenderConfig) -> String {
    match comparison {
        Comparison::Empty => placeholder_html(&config.empty_message),
        Comparison::Ready(script) => render_script_html(script, config),
    }
}

/// Render an edit script as a sequence of row `div`s.
pub fn render_script_html(script: &EditScript, config: &RenderConfig) -> String {
    let mut html = String::with_capacity(script.len() * 128);
    for row in rows(script) {
        write_row(&mut html, &row, config.line_numbers);
    }
    html
}

fn write_row(html: &mut String, row: &DiffRow<'_>, line_numbers: bool) {
    match row_class(row.marker) {
        Some(class) => {
            let _ = writeln!(html, "<div class=\"diff-line {class}\">");
        }
        None => html.push_str("<div class=\"diff-line\">\n"),
    }

    if line_numbers {
        for n in [row.left, row.right] {
            html.push_str("  <div class=\"line-num\">");
            if let Some(n) = n {
                let _ = write!(html, "{n}");
            }
            html.push_str("</div>\n");
        }
    }

    let _ = writeln!(
        html,
        "  <div class=\"line-content\">{}{}</div>",
        row.marker.prefix(),
        escape_html(row.text)
    );
    html.push_str("</div>\n");
}
