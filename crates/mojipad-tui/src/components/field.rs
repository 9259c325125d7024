//! Single-line text field with a width-aware caret.
//!
//! Emoji are 2 columns wide and multi-codepoint clusters must never be
//! split at the field edge, so trimming and caret placement work on
//! grapheme boundaries and display widths, not bytes.

use crate::theme::{focused_border, normal_text, unfocused_border};
use mojipad_editor::EditBuffer;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Longest suffix of `text` that fits in `max_width` columns, cut on a
/// grapheme boundary.
pub fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut start = text.len();
    let mut used = 0;
    for (offset, grapheme) in text.grapheme_indices(true).rev() {
        let width = grapheme.width();
        if used + width > max_width {
            break;
        }
        used += width;
        start = offset;
    }
    &text[start..]
}

/// Longest prefix of `text` that fits in `max_width` columns, cut on a
/// grapheme boundary.
fn visible_head(text: &str, max_width: usize) -> &str {
    let mut end = 0;
    let mut used = 0;
    for (offset, grapheme) in text.grapheme_indices(true) {
        let width = grapheme.width();
        if used + width > max_width {
            break;
        }
        used += width;
        end = offset + grapheme.len();
    }
    &text[..end]
}

/// Render a bordered one-line field. When focused, the terminal cursor is
/// parked at the buffer's caret; content scrolls so the caret stays
/// visible.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    buf: &EditBuffer,
    focused: bool,
) {
    let border = if focused {
        focused_border()
    } else {
        unfocused_border()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.saturating_sub(1) as usize;
    if width == 0 {
        return;
    }

    let text = buf.as_str();
    let cursor = buf.cursor();
    let shown_prefix = visible_tail(&text[..cursor], width);
    let prefix_width = shown_prefix.width();
    let shown_suffix = visible_head(&text[cursor..], width - prefix_width);

    let mut content = String::with_capacity(shown_prefix.len() + shown_suffix.len());
    content.push_str(shown_prefix);
    content.push_str(shown_suffix);
    frame.render_widget(Paragraph::new(content).style(normal_text()), inner);

    if focused {
        frame.set_cursor_position((inner.x + prefix_width as u16, inner.y));
    }
}
