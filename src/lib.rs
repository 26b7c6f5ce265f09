//! # PDF Impro
//!
//! Translates what a PDF rendering engine draws into the line-oriented
//! command stream of Impro dot-matrix/plotter printers.
//!
//! ## Core Features
//!
//! - **Device fonts**: document fonts are mapped onto the printer's built-in
//!   serif and sans-serif faces with bold/italic styles
//! - **Text**: whole-string or per-glyph capture, folded to 7-bit ASCII
//! - **Shapes**: closed paths become `box`/`shade` records, other strokes are
//!   broken into horizontal and vertical rules
//! - **Minimal output**: font and line-width records are only written when the
//!   device state really changes
//!
//! ## Architecture
//!
//! The rendering engine (content stream interpretation, page transforms) is
//! not part of this crate. It drives a [`Translator`] through the
//! [`OutputDevice`](device::OutputDevice) callbacks, or replays recorded
//! [`DrawEvent`](device::DrawEvent)s, one translator per page.
//!
//! ## Quick Start
//!
//! ```
//! use pdf_impro::config::TranslatorConfig;
//! use pdf_impro::device::{OutputDevice, IDENTITY_MATRIX};
//! use pdf_impro::fonts::FontDescriptor;
//! use pdf_impro::geometry::Point;
//! use pdf_impro::Translator;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut out = Vec::new();
//! let mut page = Translator::new(&mut out, TranslatorConfig::default());
//!
//! page.update_font(&FontDescriptor::new(Some("Arial"), Some("Arial-BoldMT")), 10.0, IDENTITY_MATRIX);
//! page.draw_string(Point::new(72.0, 90.0), Some(b"Summary".as_slice()));
//! page.finish()?;
//!
//! assert_eq!(out, b"font\tSARIAL10B\r\ntext\t182.88\t228.60\tSummary\r\n");
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Geometry and units
pub mod geometry;
pub mod units;

// Fonts and text
pub mod fonts;
pub mod text;

// Command stream output
pub mod command;
pub mod diagnostics;
pub mod device;
pub mod translator;

// Runs over several pages
pub mod batch;
pub mod trace;

// Re-exports
pub use command::CommandRecord;
pub use config::{TextCaptureMode, TranslatorConfig};
pub use device::{DrawEvent, OutputDevice};
pub use diagnostics::Diagnostic;
pub use error::{Error, Result};
pub use translator::{PageSummary, Translator};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        // VERSION is populated from CARGO_PKG_VERSION at compile time
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "pdf_impro");
    }
}
