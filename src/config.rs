//! Configuration for command stream translation.

/// How drawn text reaches the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextCaptureMode {
    /// The rendering engine hands over each shown string at once.
    #[default]
    WholeString,
    /// The rendering engine reports every glyph between begin/end string events.
    PerGlyph,
}

/// Translator configuration.
///
/// Selected once per run and handed to every page's translator.
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Text capture strategy.
    pub capture_mode: TextCaptureMode,

    /// Number of characters a single `text` record may carry in per-glyph mode.
    pub text_buffer_capacity: usize,

    /// Decimal places written for coordinates and lengths.
    pub coordinate_precision: usize,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslatorConfig {
    /// Device line buffer size.
    pub const DEFAULT_TEXT_BUFFER_CAPACITY: usize = 255;

    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            capture_mode: TextCaptureMode::WholeString,
            text_buffer_capacity: Self::DEFAULT_TEXT_BUFFER_CAPACITY,
            coordinate_precision: 2,
        }
    }

    /// Select the text capture strategy.
    pub fn with_capture_mode(mut self, mode: TextCaptureMode) -> Self {
        self.capture_mode = mode;
        self
    }

    /// Set the per-glyph buffer capacity (clamped to at least one character).
    pub fn with_text_buffer_capacity(mut self, capacity: usize) -> Self {
        self.text_buffer_capacity = capacity.max(1);
        self
    }

    /// Set the number of decimal places in emitted lengths.
    pub fn with_coordinate_precision(mut self, precision: usize) -> Self {
        self.coordinate_precision = precision;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TranslatorConfig::default();
        assert_eq!(config.capture_mode, TextCaptureMode::WholeString);
        assert_eq!(config.text_buffer_capacity, 255);
        assert_eq!(config.coordinate_precision, 2);
    }

    #[test]
    fn test_builder() {
        let config = TranslatorConfig::new()
            .with_capture_mode(TextCaptureMode::PerGlyph)
            .with_text_buffer_capacity(0)
            .with_coordinate_precision(6);
        assert_eq!(config.capture_mode, TextCaptureMode::PerGlyph);
        assert_eq!(config.text_buffer_capacity, 1);
        assert_eq!(config.coordinate_precision, 6);
    }
}
