//! Bounds-checked scan position over a material library buffer
//!
//! Every operation is total: on an exhausted cursor it does nothing and
//! yields an empty result, so the directive loop can never read past the
//! end of the input regardless of how the last line is truncated.

/// Read-only cursor over raw library bytes with a 1-based line counter
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the first byte of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0, line: 1 }
    }

    /// Byte at the current position, `None` at end of input
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Move one byte forward; no-op at end of input
    pub fn advance(&mut self) {
        if self.pos < self.data.len() {
            self.pos += 1;
        }
    }

    /// Move up to `count` bytes forward, stopping at end of input
    pub fn advance_by(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count).min(self.data.len());
    }

    /// Unconsumed input starting at the current position
    pub fn remaining(&self) -> &'a [u8] {
        let data = self.data;
        data.get(self.pos..).unwrap_or_default()
    }

    /// True once every byte has been consumed
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Current byte offset into the input
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Line counter, starting at 1
    pub fn line(&self) -> usize {
        self.line
    }

    /// Advance past the rest of the current line
    ///
    /// Stops after the next `\n`, or at end of input when no terminator is
    /// left. The line counter goes up by one unless the cursor was already
    /// exhausted.
    pub fn skip_to_next_line(&mut self) {
        if self.is_at_end() {
            return;
        }
        while let Some(byte) = self.peek() {
            self.advance();
            if byte == b'\n' {
                break;
            }
        }
        self.line += 1;
    }

    /// Next whitespace-delimited token on the current line
    ///
    /// Leading blanks are skipped; the token ends at whitespace, a line
    /// terminator or end of input. Never crosses into the next line, so a
    /// short directive yields empty tokens rather than stealing the
    /// following line's data.
    pub fn next_word(&mut self) -> &'a [u8] {
        self.skip_blanks();
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if byte.is_ascii_whitespace() {
                break;
            }
            self.advance();
        }
        let data = self.data;
        &data[start..self.pos]
    }

    /// Remainder of the current line with surrounding whitespace trimmed
    ///
    /// Used for material names and texture paths. The cursor is left at the
    /// line terminator.
    pub fn next_name(&mut self) -> &'a [u8] {
        self.skip_blanks();
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if is_line_end(byte) {
                break;
            }
            self.advance();
        }
        let data = self.data;
        data[start..self.pos].trim_ascii_end()
    }

    /// Skip spaces and tabs without leaving the current line
    fn skip_blanks(&mut self) {
        while let Some(byte) = self.peek() {
            if is_line_end(byte) || !byte.is_ascii_whitespace() {
                break;
            }
            self.advance();
        }
    }
}

fn is_line_end(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_advance_stop_at_end() {
        let mut cursor = Cursor::new(b"ab");
        assert_eq!(cursor.peek(), Some(b'a'));
        cursor.advance();
        assert_eq!(cursor.peek(), Some(b'b'));
        cursor.advance();
        assert_eq!(cursor.peek(), None);
        cursor.advance();
        assert_eq!(cursor.position(), 2);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_advance_by_is_bounded() {
        let mut cursor = Cursor::new(b"Kd 1");
        cursor.advance_by(2);
        assert_eq!(cursor.remaining(), b" 1");
        cursor.advance_by(100);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.remaining(), b"");
    }

    #[test]
    fn test_skip_to_next_line_counts_lines() {
        let mut cursor = Cursor::new(b"first\nsecond\nthird");
        assert_eq!(cursor.line(), 1);

        cursor.skip_to_next_line();
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.peek(), Some(b's'));

        cursor.skip_to_next_line();
        cursor.skip_to_next_line();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.line(), 4);

        // Exhausted: no-op
        cursor.skip_to_next_line();
        assert_eq!(cursor.line(), 4);
    }

    #[test]
    fn test_next_word_splits_on_whitespace() {
        let mut cursor = Cursor::new(b"Kd  1.0\t0.5 0.25\n");
        assert_eq!(cursor.next_word(), b"Kd");
        assert_eq!(cursor.next_word(), b"1.0");
        assert_eq!(cursor.next_word(), b"0.5");
        assert_eq!(cursor.next_word(), b"0.25");
        assert_eq!(cursor.next_word(), b"");
    }

    #[test]
    fn test_next_word_does_not_cross_lines() {
        let mut cursor = Cursor::new(b"Kd 1\n2 3\n");
        assert_eq!(cursor.next_word(), b"Kd");
        assert_eq!(cursor.next_word(), b"1");
        assert_eq!(cursor.next_word(), b"");
        assert_eq!(cursor.next_word(), b"");
        assert_eq!(cursor.peek(), Some(b'\n'));
    }

    #[test]
    fn test_next_word_has_no_length_limit() {
        let long = "x".repeat(4096);
        let mut cursor = Cursor::new(long.as_bytes());
        assert_eq!(cursor.next_word().len(), 4096);
    }

    #[test]
    fn test_next_name_takes_rest_of_line() {
        let mut cursor = Cursor::new(b"map_Kd   textures/brick wall.png  \r\nKd 1 1 1");
        assert_eq!(cursor.next_word(), b"map_Kd");
        assert_eq!(cursor.next_name(), b"textures/brick wall.png");
        assert_eq!(cursor.peek(), Some(b'\r'));
    }

    #[test]
    fn test_exhausted_cursor_is_total() {
        let mut cursor = Cursor::new(b"");
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.next_word(), b"");
        assert_eq!(cursor.next_name(), b"");
        cursor.skip_to_next_line();
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.position(), 0);
    }
}
