/// A cursor for byte-by-byte inline scanning with position tracking.
///
/// Operates over a string slice while tracking the absolute byte position in
/// the source document (via `base` offset).
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Base offset in the source (added to local index for absolute positions).
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Local offset of the next occurrence of `b` at or after the cursor,
    /// without moving.
    pub fn find(&self, b: u8) -> Option<usize> {
        self.s
            .as_bytes()
            .get(self.i..)?
            .iter()
            .position(|&c| c == b)
            .map(|off| self.i + off)
    }

    /// Moves to the end of input.
    pub fn bump_to_end(&mut self) {
        self.i = self.s.len();
    }
}
