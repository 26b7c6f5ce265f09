//! Recoverable problems reported while translating a page.
//!
//! Diagnostics never reach the command stream. Each one is logged through the
//! `log` facade as it happens and kept on the page's [`DiagnosticLog`] so the
//! caller can inspect what was degraded or dropped.

/// A recoverable condition met while translating drawing events.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// Font family has no device font; the serif font was used
    #[error("No conversion for font family '{family}'")]
    UnmappedFontFamily {
        /// Family name as given by the font
        family: String,
    },

    /// Font has no family and its name matched no known alias; the serif font was used
    #[error("Guess failed on font without family, name: '{name}'")]
    UnguessedFontName {
        /// Raw font name
        name: String,
    },

    /// Font has neither family nor name; the serif font was used
    #[error("Font has no name")]
    MissingFontName,

    /// Fill path is not box-shaped and was dropped
    #[error("Degenerate fill path, not closed")]
    DegenerateFill,

    /// Leading byte with the high bit set was stripped from a string
    #[error("Found extended ASCII {byte} at start of string")]
    ExtendedAsciiLead {
        /// The stripped byte
        byte: u8,
    },

    /// String draw with an empty string
    #[error("Empty string")]
    EmptyString,

    /// String draw without any string
    #[error("Null string")]
    NullString,

    /// Glyph outside the 7-bit output character set was dropped
    #[error("No 7-bit mapping for U+{unicode:04X}")]
    UnmappedGlyph {
        /// Unicode scalar value of the glyph
        unicode: u32,
    },
}

/// Diagnostics recorded for one page, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a diagnostic as a warning and keep it.
    pub fn record(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic);
        self.entries.push(diagnostic);
    }

    /// Recorded diagnostics.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the log, returning its entries.
    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}
