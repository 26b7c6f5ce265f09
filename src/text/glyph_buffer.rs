//! Per-glyph text accumulation.

use crate::command::CommandRecord;
use crate::diagnostics::{Diagnostic, DiagnosticLog};
use crate::fonts::map_to_ascii7;
use crate::geometry::Point;
use std::mem;

/// Collects the glyphs of one shown string into `text` records.
///
/// Opened on begin-string with the string origin, fed one glyph at a time and
/// closed on end-string. Each glyph is folded to 7-bit ASCII. Spaces are not
/// buffered; they push the pending origin right by one space width.
///
/// The buffer holds at most `capacity` characters. When a glyph arrives with
/// the buffer full, the buffered text is emitted as its own record and a new
/// buffer is opened at that glyph's pen position, so a long string continues
/// transparently across several records.
///
/// # Examples
///
/// ```
/// use pdf_impro::diagnostics::DiagnosticLog;
/// use pdf_impro::geometry::Point;
/// use pdf_impro::text::GlyphAccumulator;
///
/// let mut log = DiagnosticLog::new();
/// let mut acc = GlyphAccumulator::begin(Point::new(0.0, 0.0), 0.1, 255);
/// for c in "OK".chars() {
///     assert!(acc.push(c as u32, Point::new(0.0, 0.0), &mut log).is_none());
/// }
/// assert!(acc.finish().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct GlyphAccumulator {
    buffer: Vec<u8>,
    capacity: usize,
    origin: Point,
    space_width: f64,
}

impl GlyphAccumulator {
    /// Open a buffer for a string starting at `origin`.
    pub fn begin(origin: Point, space_width: f64, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: Vec::with_capacity(capacity),
            capacity,
            origin,
            space_width,
        }
    }

    /// Add one glyph drawn with its pen at `pen`.
    ///
    /// Returns the record flushed to make room, if the buffer was full.
    pub fn push(
        &mut self,
        unicode: u32,
        pen: Point,
        diagnostics: &mut DiagnosticLog,
    ) -> Option<CommandRecord> {
        let Some(byte) = map_to_ascii7(unicode) else {
            diagnostics.record(Diagnostic::UnmappedGlyph { unicode });
            return None;
        };

        let flushed = if self.buffer.len() >= self.capacity {
            let record = self.take_record();
            self.origin = pen;
            record
        } else {
            None
        };

        if byte == b' ' {
            self.origin.x += self.space_width;
        } else {
            self.buffer.push(byte);
        }

        flushed
    }

    /// Close the string, returning the final record if anything is buffered.
    pub fn finish(mut self) -> Option<CommandRecord> {
        self.take_record()
    }

    /// Characters currently buffered.
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    /// Origin the next record will be written at.
    pub fn origin(&self) -> Point {
        self.origin
    }

    fn take_record(&mut self) -> Option<CommandRecord> {
        if self.buffer.is_empty() {
            return None;
        }
        let text = mem::replace(&mut self.buffer, Vec::with_capacity(self.capacity));
        Some(CommandRecord::text(self.origin, text))
    }
}
