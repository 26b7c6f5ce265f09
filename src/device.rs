//! Callback interface between a rendering engine and an output device.
//!
//! The rendering engine walks a page's content stream, applies the page
//! transformation and reports what gets drawn. It can either call the
//! [`OutputDevice`] methods directly or produce [`DrawEvent`] values and hand
//! them to [`DrawEvent::apply`]; both routes reach the same handlers.
//!
//! All coordinates are in device space (one unit per point, top-left origin).

use crate::fonts::FontDescriptor;
use crate::geometry::{Path, Point};
use serde::{Deserialize, Serialize};

/// Identity text matrix `[a b c d e f]`.
pub const IDENTITY_MATRIX: [f64; 6] = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// Receiver of drawing callbacks for one page.
///
/// Handlers are called in content stream order on a single thread and never
/// fail: problems are reported through the device's own diagnostics.
pub trait OutputDevice {
    /// Whether text should be reported glyph by glyph
    /// (`begin_string`/`draw_glyph`/`end_string`) rather than via `draw_string`.
    fn uses_glyph_events(&self) -> bool;

    /// Font or text matrix changed.
    fn update_font(&mut self, font: &FontDescriptor, font_size: f64, text_matrix: [f64; 6]);

    /// Line width changed (device units).
    fn update_line_width(&mut self, width: f64);

    /// A whole string was shown at `origin`. `None` when the engine had no string.
    fn draw_string(&mut self, origin: Point, text: Option<&[u8]>);

    /// A string starts at `origin`; its glyphs follow.
    fn begin_string(&mut self, origin: Point);

    /// One glyph of the current string, drawn with its pen at `pen`.
    fn draw_glyph(&mut self, unicode: u32, pen: Point);

    /// The current string ended.
    fn end_string(&mut self);

    /// A path was stroked with the current line width.
    fn stroke_path(&mut self, path: &Path);

    /// A path was filled with a 16-bit gray (0 = black, 65535 = white).
    fn fill_path(&mut self, path: &Path, gray: u16);
}

/// One drawing callback, as a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawEvent {
    /// See [`OutputDevice::update_font`]
    FontChanged {
        /// Current font
        font: FontDescriptor,
        /// Font size from the text state
        size: f64,
        /// Current text matrix
        #[serde(default = "identity_matrix")]
        text_matrix: [f64; 6],
    },
    /// See [`OutputDevice::update_line_width`]
    LineWidthChanged {
        /// New width
        width: f64,
    },
    /// See [`OutputDevice::draw_string`]
    DrawString {
        /// Text origin
        origin: Point,
        /// Raw string bytes
        #[serde(default, with = "latin1")]
        text: Option<Vec<u8>>,
    },
    /// See [`OutputDevice::begin_string`]
    BeginString {
        /// Text origin
        origin: Point,
    },
    /// See [`OutputDevice::draw_glyph`]
    DrawGlyph {
        /// Unicode value of the glyph
        unicode: u32,
        /// Pen position of the glyph
        pen: Point,
    },
    /// See [`OutputDevice::end_string`]
    EndString,
    /// See [`OutputDevice::stroke_path`]
    StrokePath {
        /// Flattened path
        path: Path,
    },
    /// See [`OutputDevice::fill_path`]
    FillPath {
        /// Flattened path
        path: Path,
        /// Fill gray level
        gray: u16,
    },
}

fn identity_matrix() -> [f64; 6] {
    IDENTITY_MATRIX
}

impl DrawEvent {
    /// Deliver this event to a device.
    pub fn apply<D: OutputDevice + ?Sized>(&self, device: &mut D) {
        match self {
            DrawEvent::FontChanged {
                font,
                size,
                text_matrix,
            } => device.update_font(font, *size, *text_matrix),
            DrawEvent::LineWidthChanged { width } => device.update_line_width(*width),
            DrawEvent::DrawString { origin, text } => device.draw_string(*origin, text.as_deref()),
            DrawEvent::BeginString { origin } => device.begin_string(*origin),
            DrawEvent::DrawGlyph { unicode, pen } => device.draw_glyph(*unicode, *pen),
            DrawEvent::EndString => device.end_string(),
            DrawEvent::StrokePath { path } => device.stroke_path(path),
            DrawEvent::FillPath { path, gray } => device.fill_path(path, *gray),
        }
    }
}

/// Raw string bytes carried as a JSON string, one char per byte (ISO 8859-1).
mod latin1 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        bytes: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match bytes {
            Some(bytes) => {
                let text: String = bytes.iter().map(|&b| char::from(b)).collect();
                serializer.serialize_some(&text)
            },
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        let text = Option::<String>::deserialize(deserializer)?;
        Ok(text.map(|s| {
            s.chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                .collect()
        }))
    }
}
