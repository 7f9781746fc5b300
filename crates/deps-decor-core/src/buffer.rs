//! Text-buffer access for decoration ranges.
//!
//! Converts byte offsets to LSP positions (line, UTF-16 character) and finds
//! the end of the line containing an offset, so decorations can be anchored
//! at end-of-line.

use tower_lsp_server::ls_types::Position;

/// Offset and line lookups the composer needs from the host's buffer.
pub trait TextBuffer {
    /// Converts a byte offset to an LSP position.
    fn position_at(&self, offset: usize) -> Position;

    /// Byte offset of the end of the line containing `offset`, excluding the
    /// line break.
    fn line_end_offset(&self, offset: usize) -> usize;
}

/// Pre-computed line start byte offsets for O(log n) position lookups.
///
/// # Examples
///
/// ```
/// use deps_decor_core::{LineIndex, TextBuffer};
///
/// let text = "[dependencies]\nserde = \"1.0\" # pinned\n";
/// let index = LineIndex::new(text);
///
/// let pos = index.position_at(23);
/// assert_eq!((pos.line, pos.character), (1, 8));
/// assert_eq!(index.line_end_offset(23), 37);
/// ```
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { text, line_starts }
    }

    /// Clamps to the buffer and rounds down to a char boundary.
    fn clamp(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }

    fn line_of(&self, offset: usize) -> usize {
        self.line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }
}

impl TextBuffer for LineIndex<'_> {
    fn position_at(&self, offset: usize) -> Position {
        let offset = self.clamp(offset);
        let line = self.line_of(offset);
        let line_start = self.line_starts[line];

        let character = self.text[line_start..offset]
            .chars()
            .map(|c| c.len_utf16() as u32)
            .sum();

        Position::new(line as u32, character)
    }

    fn line_end_offset(&self, offset: usize) -> usize {
        let offset = self.clamp(offset);
        let line = self.line_of(offset);

        let end = match self.line_starts.get(line + 1) {
            Some(&next_start) => next_start - 1,
            None => self.text.len(),
        };

        if end > self.line_starts[line] && self.text.as_bytes()[end - 1] == b'\r' {
            end - 1
        } else {
            end
        }
    }
}
