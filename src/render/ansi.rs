//! Terminal renderer: Colored diff output with minimal SGR traffic.
//!
//! Two layouts are provided:
//! 1. [`render_inline`]: One row per operation, like a unified diff
//! 2. [`render_side_by_side`]: Original on the left, modified on the right
//!
//! Both track the last emitted style so consecutive rows of the same kind
//! don't repeat color sequences, and both end with an attribute reset. All
//! output goes into an [`OutputBuffer`] that the caller flushes once.

use super::{gutter_width, line_number, rows, DiffRow, Marker, OutputBuffer};
use crate::config::{RenderConfig, ResolvedTheme};
use crate::engine::EditScript;
use crate::error::DiffError;
use crate::style::{Modifiers, Rgb, Style};
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Column separator between the two halves of a side-by-side view.
const SEPARATOR: &str = " │ ";
const SEPARATOR_WIDTH: usize = 3;
/// Appended to text cut at the column edge.
const ELLIPSIS: &str = "…";
/// Below this width a side-by-side half has no room for text.
const MIN_SIDE_BY_SIDE_WIDTH: u16 = 20;

/// Tracks the terminal's current style so unchanged attributes are skipped.
#[derive(Debug, Clone, Default)]
struct StyleState {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    modifiers: Option<Modifiers>,
}

/// Statistics from a terminal render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Number of rows written.
    pub rows: usize,
    /// Number of color change sequences emitted.
    pub color_changes: usize,
    /// Number of modifier change sequences emitted.
    pub modifier_changes: usize,
}

/// Writes styled spans, or plain text when color is disabled.
struct Painter<'a> {
    out: &'a mut OutputBuffer,
    state: StyleState,
    stats: RenderStats,
    color: bool,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut OutputBuffer, color: bool) -> Self {
        Self {
            out,
            state: StyleState::default(),
            stats: RenderStats::default(),
            color,
        }
    }

    fn apply(&mut self, style: Style) {
        if !self.color {
            return;
        }
        let current = self.state.modifiers.unwrap_or(Modifiers::empty());
        let removed = current.difference(style.modifiers);

        // Dropping a modifier or a background needs a full reset,
        // which also clears colors.
        if !removed.is_empty() || (self.state.bg.is_some() && style.bg.is_none()) {
            self.out.reset_attrs();
            self.state = StyleState::default();
        }

        if self.state.fg != Some(style.fg) {
            self.out.set_fg(style.fg);
            self.state.fg = Some(style.fg);
            self.stats.color_changes += 1;
        }

        if let Some(bg) = style.bg {
            if self.state.bg != Some(bg) {
                self.out.set_bg(bg);
                self.state.bg = Some(bg);
                self.stats.color_changes += 1;
            }
        }

        if self.state.modifiers != Some(style.modifiers) {
            let current = self.state.modifiers.unwrap_or(Modifiers::empty());
            let added = style.modifiers.difference(current);
            if !added.is_empty() {
                self.out.set_modifiers(added);
                self.stats.modifier_changes += 1;
            }
            self.state.modifiers = Some(style.modifiers);
        }
    }

    fn span(&mut self, style: Style, text: &str) {
        self.apply(style);
        self.out.write_str(text);
    }

    fn pad(&mut self, n: usize) {
        self.out.pad(n);
    }

    fn end_row(&mut self) {
        self.out.newline();
        self.stats.rows += 1;
    }

    fn finish(self) -> RenderStats {
        if self.color && self.state.fg.is_some() {
            self.out.reset_attrs();
        }
        self.stats
    }
}

const fn marker_style(theme: &ResolvedTheme, marker: Marker) -> Style {
    match marker {
        Marker::Same => theme.same,
        Marker::Add => theme.added,
        Marker::Remove => theme.removed,
    }
}

/// Make line text safe for a terminal: tabs become spaces, carriage returns
/// are dropped, other control characters become U+FFFD.
pub fn sanitize(text: &str, tab_width: usize) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }

    let mut clean = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' => clean.extend(std::iter::repeat(' ').take(tab_width)),
            '\r' => {}
            c if c.is_control() => clean.push('\u{fffd}'),
            c => clean.push(c),
        }
    }
    Cow::Owned(clean)
}

/// Cut `text` to at most `width` display columns on a grapheme boundary.
///
/// Returns the fitted text and its display width. Text that doesn't fit
/// ends in an ellipsis.
pub fn fit_width(text: &str, width: usize) -> (Cow<'_, str>, usize) {
    let full = text.width();
    if full <= width {
        return (Cow::Borrowed(text), full);
    }
    if width == 0 {
        return (Cow::Borrowed(""), 0);
    }

    let budget = width - ELLIPSIS.width();
    let mut used = 0;
    let mut end = 0;
    for (idx, grapheme) in text.grapheme_indices(true) {
        let w = grapheme.width();
        if used + w > budget {
            break;
        }
        used += w;
        end = idx + grapheme.len();
    }

    let mut fitted = String::with_capacity(end + ELLIPSIS.len());
    fitted.push_str(&text[..end]);
    fitted.push_str(ELLIPSIS);
    (Cow::Owned(fitted), used + ELLIPSIS.width())
}

/// Current terminal width, or the configured fallback.
pub fn terminal_width(config: &RenderConfig) -> u16 {
    match crossterm::terminal::size() {
        Ok((width, _)) if width > 0 => width,
        Ok(_) | Err(_) => {
            tracing::debug!(fallback = config.fallback_width, "terminal size unavailable");
            config.fallback_width
        }
    }
}

/// Render one colored row per operation.
///
/// ```text
///    1    1   one
///    2      - two
///    3    2   three
///         3 + four
/// ```
pub fn render_inline(
    script: &EditScript,
    config: &RenderConfig,
    out: &mut OutputBuffer,
) -> Result<RenderStats, DiffError> {
    let theme = config.theme.resolve()?;
    let width = gutter_width(script, config.gutter_width);
    let mut painter = Painter::new(out, config.color);

    for row in rows(script) {
        if config.line_numbers {
            let gutter = format!(
                "{} {} ",
                line_number(row.left, width),
                line_number(row.right, width)
            );
            painter.span(theme.gutter, &gutter);
        }
        let style = marker_style(&theme, row.marker);
        painter.span(style, row.marker.prefix());
        painter.span(style, &sanitize(row.text, config.tab_width));
        painter.end_row();
    }

    Ok(painter.finish())
}

/// One half of a side-by-side row.
type Half<'a> = Option<(Option<usize>, Marker, &'a str)>;

/// Pair rows for side-by-side display.
///
/// Unchanged rows fill both halves. A run of removals followed by a run of
/// additions is zipped so each removed line sits next to its replacement;
/// leftovers on either side get a blank partner.
fn pair_rows<'a>(rows: &[DiffRow<'a>]) -> Vec<(Half<'a>, Half<'a>)> {
    let mut pairs = Vec::with_capacity(rows.len());
    let mut i = 0;

    while i < rows.len() {
        let row = rows[i];
        if row.marker == Marker::Same {
            pairs.push((
                Some((row.left, Marker::Same, row.text)),
                Some((row.right, Marker::Same, row.text)),
            ));
            i += 1;
            continue;
        }

        let removed_start = i;
        while i < rows.len() && rows[i].marker == Marker::Remove {
            i += 1;
        }
        let added_start = i;
        while i < rows.len() && rows[i].marker == Marker::Add {
            i += 1;
        }

        let removed = &rows[removed_start..added_start];
        let added = &rows[added_start..i];
        for k in 0..removed.len().max(added.len()) {
            pairs.push((
                removed.get(k).map(|r| (r.left, Marker::Remove, r.text)),
                added.get(k).map(|r| (r.right, Marker::Add, r.text)),
            ));
        }
    }

    pairs
}

/// Render the original and modified text in two columns.
///
/// `width` is the total terminal width; each half gets an equal share
/// after the separator.
pub fn render_side_by_side(
    script: &EditScript,
    config: &RenderConfig,
    width: u16,
    out: &mut OutputBuffer,
) -> Result<RenderStats, DiffError> {
    let theme = config.theme.resolve()?;
    let width = width.max(MIN_SIDE_BY_SIDE_WIDTH) as usize;
    let half = (width - SEPARATOR_WIDTH) / 2;
    let gutter = if config.line_numbers {
        gutter_width(script, config.gutter_width)
    } else {
        0
    };
    // gutter + space, then the two-column marker
    let chrome = (if gutter > 0 { gutter + 1 } else { 0 }) + 2;
    let text_width = half.saturating_sub(chrome);

    let rows = rows(script);
    let mut painter = Painter::new(out, config.color);

    for (left, right) in pair_rows(&rows) {
        write_half(&mut painter, &theme, config, left, gutter, text_width, true);
        painter.span(theme.gutter, SEPARATOR);
        write_half(&mut painter, &theme, config, right, gutter, text_width, false);
        painter.end_row();
    }

    tracing::trace!(width, half, rows = rows.len(), "rendered side-by-side");
    Ok(painter.finish())
}

fn write_half(
    painter: &mut Painter<'_>,
    theme: &ResolvedTheme,
    config: &RenderConfig,
    half: Half<'_>,
    gutter: usize,
    text_width: usize,
    pad_right: bool,
) {
    let Some((number, marker, text)) = half else {
        if pad_right {
            let blank = (if gutter > 0 { gutter + 1 } else { 0 }) + 2 + text_width;
            painter.pad(blank);
        }
        return;
    };

    if gutter > 0 {
        painter.span(theme.gutter, &line_number(number, gutter));
        painter.pad(1);
    }

    let style = marker_style(theme, marker);
    painter.span(style, marker.prefix());
    let clean = sanitize(text, config.tab_width);
    let (fitted, used) = fit_width(&clean, text_width);
    painter.span(style, &fitted);
    if pad_right {
        painter.pad(text_width - used);
    }
}
