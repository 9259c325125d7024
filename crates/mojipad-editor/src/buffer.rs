//! Cursor-aware editing over a UTF-8 string.
//!
//! All offsets are byte offsets into the string (UTF-8 code units). The
//! pure functions here never panic on out-of-range or mid-codepoint
//! offsets: inputs are clamped to the buffer and snapped back to the
//! nearest char boundary before use. [`EditBuffer`] wraps them with a
//! value + selection pair so callers hold a single piece of mutable state.

use unicode_segmentation::UnicodeSegmentation;

/// Clamp `idx` into `text` and snap it back onto a char boundary.
fn snap(text: &str, idx: usize) -> usize {
    let mut idx = idx.min(text.len());
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn normalize_range(text: &str, start: usize, end: usize) -> (usize, usize) {
    let start = snap(text, start);
    let end = snap(text, end);
    if start <= end {
        (start, end)
    } else {
        (end, start)
    }
}

/// Splice `fragment` into `text`, replacing the selected range.
///
/// Returns `text[..start] + fragment + text[end..]`. A caret is expressed
/// as `start == end`. The fragment lands as one contiguous unit, so a
/// multi-codepoint emoji sequence is never split.
pub fn insert_at(text: &str, fragment: &str, start: usize, end: usize) -> String {
    let (start, end) = normalize_range(text, start, end);
    let mut out = String::with_capacity(text.len() - (end - start) + fragment.len());
    out.push_str(&text[..start]);
    out.push_str(fragment);
    out.push_str(&text[end..]);
    out
}

/// Delete one step backward from the selection.
///
/// With a selected range, removes exactly `[start, end)` and places the
/// cursor at `start`. With a caret at 0, does nothing. Otherwise removes
/// exactly the last codepoint before the caret; trimming whole codepoints
/// (rather than bytes) means a 4-byte emoji can never be cut in half.
/// Returns the new text and the new cursor position.
pub fn delete_backward(text: &str, start: usize, end: usize) -> (String, usize) {
    let (start, end) = normalize_range(text, start, end);
    if start < end {
        return (insert_at(text, "", start, end), start);
    }
    if start == 0 {
        return (text.to_string(), 0);
    }
    let last = text[..start]
        .chars()
        .next_back()
        .map(char::len_utf8)
        .unwrap_or(0);
    let boundary = start - last;
    (insert_at(text, "", boundary, start), boundary)
}

/// Like [`delete_backward`], but removes one extended grapheme cluster.
///
/// A ZWJ family, flag, or skin-toned emoji disappears atomically instead
/// of one scalar at a time. Not bound to backspace by default; the
/// codepoint behavior above is the documented contract.
pub fn delete_backward_grapheme(text: &str, start: usize, end: usize) -> (String, usize) {
    let (start, end) = normalize_range(text, start, end);
    if start < end {
        return (insert_at(text, "", start, end), start);
    }
    if start == 0 {
        return (text.to_string(), 0);
    }
    let boundary = text[..start]
        .grapheme_indices(true)
        .last()
        .map(|(offset, _)| offset)
        .unwrap_or(0);
    (insert_at(text, "", boundary, start), boundary)
}

/// A string value plus a byte-offset selection, edited through the pure
/// functions above.
///
/// `start == end` is a caret; `start < end` is a selected range that the
/// next insertion or deletion replaces. Every mutation re-establishes the
/// invariants: offsets in bounds, ordered, and on char boundaries.
#[derive(Clone, Debug, Default)]
pub struct EditBuffer {
    value: String,
    start: usize,
    end: usize,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Selection as a `(start, end)` byte-offset pair.
    pub fn selection(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Caret position; for a range selection, its start.
    pub fn cursor(&self) -> usize {
        self.start
    }

    pub fn has_selection(&self) -> bool {
        self.start != self.end
    }

    pub fn set(&mut self, value: String) {
        self.start = value.len();
        self.end = value.len();
        self.value = value;
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.start = 0;
        self.end = 0;
    }

    pub fn set_selection(&mut self, start: usize, end: usize) {
        let (start, end) = normalize_range(&self.value, start, end);
        self.start = start;
        self.end = end;
    }

    pub fn select_all(&mut self) {
        self.start = 0;
        self.end = self.value.len();
    }

    /// Insert a fragment at the caret, replacing any selected range. The
    /// caret lands after the inserted fragment.
    pub fn insert_str(&mut self, fragment: &str) {
        self.value = insert_at(&self.value, fragment, self.start, self.end);
        let cursor = self.start + fragment.len();
        self.start = cursor;
        self.end = cursor;
    }

    pub fn insert_char(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut utf8));
    }

    pub fn backspace(&mut self) {
        let (value, cursor) = delete_backward(&self.value, self.start, self.end);
        self.value = value;
        self.start = cursor;
        self.end = cursor;
    }

    pub fn move_left(&mut self) {
        if self.has_selection() {
            self.end = self.start;
            return;
        }
        if self.start > 0 {
            let prev = self.value[..self.start]
                .chars()
                .next_back()
                .map(char::len_utf8)
                .unwrap_or(0);
            self.start -= prev;
            self.end = self.start;
        }
    }

    pub fn move_right(&mut self) {
        if self.has_selection() {
            self.start = self.end;
            return;
        }
        if self.end < self.value.len() {
            let next = self.value[self.end..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(0);
            self.end += next;
            self.start = self.end;
        }
    }

    pub fn move_home(&mut self) {
        self.start = 0;
        self.end = 0;
    }

    pub fn move_end(&mut self) {
        self.start = self.value.len();
        self.end = self.value.len();
    }
}
