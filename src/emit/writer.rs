//! Output writer that copies source ranges
//!
//! Builds emitted text from a source string by copying or skipping byte ranges in order.

/// Writer that walks a source text front to back and builds the output
pub struct SourceWriter<'a> {
    /// The text being copied from
    source: &'a str,
    /// The output buffer
    output: String,
    /// Byte offset up to which the source has been consumed
    cursor: usize,
}

impl<'a> SourceWriter<'a> {
    /// Create a new writer over `source`
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            output: String::with_capacity(source.len()),
            cursor: 0,
        }
    }

    /// Current source offset
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Copy the source up to `offset`
    pub fn copy_to(&mut self, offset: usize) {
        let offset = offset.min(self.source.len());
        if offset > self.cursor {
            self.output.push_str(&self.source[self.cursor..offset]);
            self.cursor = offset;
        }
    }

    /// Write `text` at the current position
    pub fn insert(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Skip the source up to `offset` without copying it
    pub fn skip_to(&mut self, offset: usize) {
        self.cursor = self.cursor.max(offset.min(self.source.len()));
    }

    /// Copy the rest of the source and return the output
    pub fn finish(mut self) -> String {
        self.copy_to(self.source.len());
        self.output
    }
}
