//! Unified plain-text renderer.

use super::{gutter_width, line_number, rows};
use crate::config::RenderConfig;
use crate::engine::EditScript;

/// Render one line per operation: optional gutters, marker, raw text.
///
/// ```
/// use diffcheck::{diff_text, render::unified::render_unified, RenderConfig};
///
/// let config = RenderConfig { line_numbers: false, ..RenderConfig::default() };
/// let text = render_unified(&diff_text("a\nb", "a\nc"), &config);
/// assert_eq!(text, "  a\n- b\n+ c\n");
/// ```
pub fn render_unified(script: &EditScript, config: &RenderConfig) -> String {
    let width = gutter_width(script, config.gutter_width);
    let mut text = String::new();

    for row in rows(script) {
        if config.line_numbers {
            text.push_str(&line_number(row.left, width));
            text.push(' ');
            text.push_str(&line_number(row.right, width));
            text.push(' ');
        }
        text.push_str(row.marker.prefix());
        text.push_str(row.text);
        text.push('\n');
    }
    text
}
