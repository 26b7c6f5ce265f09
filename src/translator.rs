//! Translation of drawing callbacks into the device command stream.
//!
//! A [`Translator`] is the [`OutputDevice`] for one page. It keeps a small
//! cache of the device state (font, size, style and line width) so that
//! state records are only written when something actually changes, and turns
//! every draw into zero or more records:
//!
//! | Callback | Records |
//! |---|---|
//! | font / text matrix change | `font`, when the device font differs |
//! | line width change | `lwid`, when the width differs |
//! | string, or begin/glyph/end string | `text` |
//! | stroke | one `box`, or one `hlin`/`vlin` per segment |
//! | fill | one `shade` for a box-shaped path, nothing otherwise |
//!
//! Records are appended in callback order and never revisited.
//!
//! # Example
//!
//! ```
//! use pdf_impro::config::TranslatorConfig;
//! use pdf_impro::device::OutputDevice;
//! use pdf_impro::geometry::{Path, Point};
//! use pdf_impro::translator::Translator;
//!
//! let mut out = Vec::new();
//! let mut page = Translator::new(&mut out, TranslatorConfig::default());
//! page.update_line_width(1.0);
//! page.stroke_path(&Path::polyline([Point::new(0.0, 0.0), Point::new(5.0, 0.0)]));
//! let summary = page.finish().unwrap();
//!
//! assert_eq!(summary.records, 2);
//! assert_eq!(out, b"lwid\t300\r\nhlin\t0.00\t-1.27\t12.70\r\n");
//! ```

use crate::command::{CommandRecord, CommandWriter};
use crate::config::{TextCaptureMode, TranslatorConfig};
use crate::device::{DrawEvent, OutputDevice};
use crate::diagnostics::{Diagnostic, DiagnosticLog};
use crate::error::{Error, Result};
use crate::fonts::{classify, DeviceFont, FontDescriptor, StyleModifier};
use crate::geometry::{classify_segments, try_rectangle, Path, Point};
use crate::text::{capture_string, GlyphAccumulator};
use crate::units;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path as FsPath;

/// Device state last written to the command stream.
#[derive(Debug, Clone, Default)]
pub struct DeviceState {
    /// Document font the current device font was resolved from
    source_font: Option<FontDescriptor>,
    /// Current device font, once one has been selected
    pub font: Option<DeviceFont>,
    /// Current line width in device units
    pub line_width: f64,
}

impl DeviceState {
    /// Integer size of the current font, 0 before any font is selected.
    pub fn font_size(&self) -> i32 {
        self.font.map_or(0, |f| f.size)
    }

    fn same_source(&self, font: &FontDescriptor, size: i32, style: StyleModifier) -> bool {
        self.source_font.as_ref() == Some(font)
            && self.font.is_some_and(|f| f.size == size && f.style == style)
    }
}

/// Outcome of a translated page.
#[derive(Debug, Clone)]
pub struct PageSummary {
    /// Number of records written
    pub records: usize,
    /// Diagnostics reported while translating, in order
    pub diagnostics: Vec<Diagnostic>,
}

/// Stateful translator from drawing callbacks to device commands for one page.
#[derive(Debug)]
pub struct Translator<W: Write> {
    writer: CommandWriter<W>,
    config: TranslatorConfig,
    state: DeviceState,
    glyphs: Option<GlyphAccumulator>,
    diagnostics: DiagnosticLog,
    write_error: Option<io::Error>,
}

impl Translator<BufWriter<File>> {
    /// Create a translator writing to a new file at `path`.
    ///
    /// Failing to open the destination is fatal for this page only.
    pub fn create(path: impl AsRef<FsPath>, config: TranslatorConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::OutputOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file), config))
    }
}

impl<W: Write> Translator<W> {
    /// Create a translator writing to `out`.
    pub fn new(out: W, config: TranslatorConfig) -> Self {
        Self {
            writer: CommandWriter::new(out, config.coordinate_precision),
            config,
            state: DeviceState::default(),
            glyphs: None,
            diagnostics: DiagnosticLog::new(),
            write_error: None,
        }
    }

    /// Current cached device state.
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.entries()
    }

    /// Whether a string is being accumulated glyph by glyph.
    pub fn is_accumulating(&self) -> bool {
        self.glyphs.is_some()
    }

    /// Feed a batch of events in order.
    pub fn replay<'a>(&mut self, events: impl IntoIterator<Item = &'a DrawEvent>) {
        for event in events {
            event.apply(self);
        }
    }

    /// End the page: close any open string and flush the stream.
    ///
    /// Returns the first write failure met on this page, if any.
    pub fn finish(mut self) -> Result<PageSummary> {
        if let Some(glyphs) = self.glyphs.take() {
            log::debug!("Page ended inside a string, flushing it");
            if let Some(record) = glyphs.finish() {
                self.emit(record);
            }
        }
        if let Some(err) = self.write_error.take() {
            return Err(Error::Io(err));
        }
        self.writer.flush()?;
        Ok(PageSummary {
            records: self.writer.written(),
            diagnostics: self.diagnostics.into_entries(),
        })
    }

    fn emit(&mut self, record: CommandRecord) {
        if self.write_error.is_some() {
            return;
        }
        if let Err(err) = self.writer.write(&record) {
            log::error!("Failed to write '{}' record: {}", record.keyword(), err);
            self.write_error = Some(err);
        }
    }

    fn space_width(&self) -> f64 {
        units::single_space_width(self.state.font_size())
    }

    fn glyph_mode(&self) -> bool {
        self.config.capture_mode == TextCaptureMode::PerGlyph
    }
}

impl<W: Write> OutputDevice for Translator<W> {
    fn uses_glyph_events(&self) -> bool {
        self.glyph_mode()
    }

    fn update_font(&mut self, font: &FontDescriptor, font_size: f64, text_matrix: [f64; 6]) {
        let size = (font_size * text_matrix[0]) as i32;
        let style = StyleModifier::from_font(font);
        if self.state.same_source(font, size, style) {
            return;
        }

        let (code, diagnostic) = classify(font);
        if let Some(diagnostic) = diagnostic {
            self.diagnostics.record(diagnostic);
        }
        self.state.source_font = Some(font.clone());

        let selected = DeviceFont { code, size, style };
        if self.state.font == Some(selected) {
            return;
        }
        self.state.font = Some(selected);
        self.emit(CommandRecord::FontChange(selected));
    }

    fn update_line_width(&mut self, width: f64) {
        if width == self.state.line_width {
            return;
        }
        self.state.line_width = width;
        self.emit(CommandRecord::line_width(width));
    }

    fn draw_string(&mut self, origin: Point, text: Option<&[u8]>) {
        if self.glyph_mode() {
            log::debug!("Ignoring whole string in per-glyph mode");
            return;
        }
        let space_width = self.space_width();
        if let Some(record) = capture_string(text, origin, space_width, &mut self.diagnostics) {
            self.emit(record);
        }
    }

    fn begin_string(&mut self, origin: Point) {
        if !self.glyph_mode() {
            return;
        }
        if let Some(open) = self.glyphs.take() {
            log::debug!("String begun before the previous one ended");
            if let Some(record) = open.finish() {
                self.emit(record);
            }
        }
        self.glyphs = Some(GlyphAccumulator::begin(
            origin,
            self.space_width(),
            self.config.text_buffer_capacity,
        ));
    }

    fn draw_glyph(&mut self, unicode: u32, pen: Point) {
        let Some(glyphs) = self.glyphs.as_mut() else {
            log::debug!("Ignoring glyph U+{:04X} outside of a string", unicode);
            return;
        };
        if let Some(record) = glyphs.push(unicode, pen, &mut self.diagnostics) {
            self.emit(record);
        }
    }

    fn end_string(&mut self) {
        if let Some(record) = self.glyphs.take().and_then(GlyphAccumulator::finish) {
            self.emit(record);
        }
    }

    fn stroke_path(&mut self, path: &Path) {
        if let Some(rect) = try_rectangle(path) {
            self.emit(CommandRecord::outline(&rect));
            return;
        }
        let line_width = self.state.line_width;
        for segment in classify_segments(path) {
            self.emit(CommandRecord::rule(&segment, line_width));
        }
    }

    fn fill_path(&mut self, path: &Path, gray: u16) {
        let Some(rect) = try_rectangle(path) else {
            self.diagnostics.record(Diagnostic::DegenerateFill);
            return;
        };
        match CommandRecord::shade(&rect, gray) {
            Some(record) => self.emit(record),
            None => log::debug!("Skipping blank shade (gray {})", gray),
        }
    }
}
