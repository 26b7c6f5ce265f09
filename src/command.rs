//! Device command records and their line encoding.
//!
//! Every record is one CRLF-terminated line of tab-separated fields:
//!
//! ```text
//! font    <code><size><modifier>
//! lwid    <fixed-point width>
//! text    <x> <y> <string>
//! box     <x1> <y1> <x2> <y2>
//! shade   <x1> <y1> <x2> <y2> <ink percent>
//! hlin    <x> <y> <length>
//! vlin    <x> <y> <length>
//! ```
//!
//! Lengths are in centimetres.

use crate::fonts::DeviceFont;
use crate::geometry::{Axis, AxisSegment, Point, Rect};
use crate::units;
use std::io::{self, Write};

/// One line of the device command stream.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandRecord {
    /// Select a device font (`font`)
    FontChange(DeviceFont),
    /// Set the rule width, already fixed-point encoded (`lwid`)
    LineWidthChange(i64),
    /// Print a 7-bit string with its origin at (x, y) (`text`)
    Text {
        /// Origin x in cm
        x: f64,
        /// Origin y in cm
        y: f64,
        /// Bytes to print
        text: Vec<u8>,
    },
    /// Outline a box (`box`)
    Box {
        /// Left edge in cm
        x1: f64,
        /// Top edge in cm
        y1: f64,
        /// Right edge in cm
        x2: f64,
        /// Bottom edge in cm
        y2: f64,
    },
    /// Fill a box with ink (`shade`)
    Shade {
        /// Left edge in cm
        x1: f64,
        /// Top edge in cm
        y1: f64,
        /// Right edge in cm
        x2: f64,
        /// Bottom edge in cm
        y2: f64,
        /// Ink percentage, 1-100
        intensity: u8,
    },
    /// Horizontal rule (`hlin`)
    HorizontalLine {
        /// Left end in cm
        x: f64,
        /// Top edge in cm
        y: f64,
        /// Length in cm
        length: f64,
    },
    /// Vertical rule (`vlin`)
    VerticalLine {
        /// Left edge in cm
        x: f64,
        /// Top end in cm
        y: f64,
        /// Length in cm
        length: f64,
    },
}

impl CommandRecord {
    /// `lwid` record for a device-space line width.
    pub fn line_width(width: f64) -> Self {
        CommandRecord::LineWidthChange(units::encode_line_width(width))
    }

    /// `text` record at a device-space origin.
    pub fn text(origin: Point, text: Vec<u8>) -> Self {
        CommandRecord::Text {
            x: units::to_cm(origin.x),
            y: units::to_cm(origin.y),
            text,
        }
    }

    /// `box` record for a device-space rectangle.
    pub fn outline(rect: &Rect) -> Self {
        CommandRecord::Box {
            x1: units::to_cm(rect.left()),
            y1: units::to_cm(rect.top()),
            x2: units::to_cm(rect.right()),
            y2: units::to_cm(rect.bottom()),
        }
    }

    /// `shade` record for a device-space rectangle filled with a 16-bit gray.
    ///
    /// Returns `None` when the gray converts to no ink at all.
    pub fn shade(rect: &Rect, gray: u16) -> Option<Self> {
        let intensity = units::ink_level(gray);
        if intensity == 0 {
            return None;
        }
        Some(CommandRecord::Shade {
            x1: units::to_cm(rect.left()),
            y1: units::to_cm(rect.top()),
            x2: units::to_cm(rect.right()),
            y2: units::to_cm(rect.bottom()),
            intensity,
        })
    }

    /// `hlin`/`vlin` record for a stroked segment.
    ///
    /// The coordinate across the rule is reduced by half the line width.
    pub fn rule(segment: &AxisSegment, line_width: f64) -> Self {
        let offset = units::to_cm(segment.offset() - line_width / 2.0);
        let leading = units::to_cm(segment.leading_edge());
        let length = units::to_cm(segment.length());
        match segment.axis {
            Axis::Horizontal => CommandRecord::HorizontalLine {
                x: leading,
                y: offset,
                length,
            },
            Axis::Vertical => CommandRecord::VerticalLine {
                x: offset,
                y: leading,
                length,
            },
        }
    }

    /// Record keyword, the first field of the line.
    pub fn keyword(&self) -> &'static str {
        match self {
            CommandRecord::FontChange(_) => "font",
            CommandRecord::LineWidthChange(_) => "lwid",
            CommandRecord::Text { .. } => "text",
            CommandRecord::Box { .. } => "box",
            CommandRecord::Shade { .. } => "shade",
            CommandRecord::HorizontalLine { .. } => "hlin",
            CommandRecord::VerticalLine { .. } => "vlin",
        }
    }

    /// Write this record as one line, lengths with `precision` decimals.
    pub fn write_to<W: Write>(&self, w: &mut W, precision: usize) -> io::Result<()> {
        write!(w, "{}", self.keyword())?;
        match self {
            CommandRecord::FontChange(font) => write!(w, "\t{}", font)?,
            CommandRecord::LineWidthChange(width) => write!(w, "\t{}", width)?,
            CommandRecord::Text { x, y, text } => {
                write!(w, "\t{:.p$}\t{:.p$}\t", x, y, p = precision)?;
                w.write_all(text)?;
            },
            CommandRecord::Box { x1, y1, x2, y2 } => {
                write!(w, "\t{:.p$}\t{:.p$}\t{:.p$}\t{:.p$}", x1, y1, x2, y2, p = precision)?
            },
            CommandRecord::Shade {
                x1,
                y1,
                x2,
                y2,
                intensity,
            } => write!(
                w,
                "\t{:.p$}\t{:.p$}\t{:.p$}\t{:.p$}\t{}",
                x1,
                y1,
                x2,
                y2,
                intensity,
                p = precision
            )?,
            CommandRecord::HorizontalLine { x, y, length }
            | CommandRecord::VerticalLine { x, y, length } => {
                write!(w, "\t{:.p$}\t{:.p$}\t{:.p$}", x, y, length, p = precision)?
            },
        }
        w.write_all(b"\r\n")
    }
}

/// Append-only writer of command records.
#[derive(Debug)]
pub struct CommandWriter<W: Write> {
    out: W,
    precision: usize,
    written: usize,
}

impl<W: Write> CommandWriter<W> {
    /// Wrap an output stream.
    pub fn new(out: W, precision: usize) -> Self {
        Self {
            out,
            precision,
            written: 0,
        }
    }

    /// Append one record.
    pub fn write(&mut self, record: &CommandRecord) -> io::Result<()> {
        record.write_to(&mut self.out, self.precision)?;
        self.written += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush buffered output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Unwrap the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}
