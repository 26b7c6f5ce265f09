//! Text capture for the `text` record.
//!
//! Two strategies exist, chosen once per run through
//! [`TextCaptureMode`](crate::config::TextCaptureMode):
//!
//! - [`capture_string`]: the rendering engine hands over each shown string
//!   whole, as raw bytes.
//! - [`GlyphAccumulator`]: the engine reports a string's glyphs one at a time
//!   and they are collected into one or more records.

mod glyph_buffer;
mod string_capture;

pub use glyph_buffer::GlyphAccumulator;
pub use string_capture::capture_string;
