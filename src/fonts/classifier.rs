//! Mapping of document fonts onto the device's built-in fonts.
//!
//! The device carries a serif and a sans-serif face, each in regular, bold,
//! italic and bold-italic. A font is matched by exact family name, or by a
//! best guess on its raw name when the family is missing. Anything unknown
//! falls back to the serif face with a diagnostic.

use crate::diagnostics::Diagnostic;
use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A built-in device font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceFontCode {
    /// Times-like serif face
    #[default]
    Times,
    /// Arial-like sans-serif face
    Arial,
}

impl DeviceFontCode {
    /// Code written in `font` records.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceFontCode::Times => "STMS",
            DeviceFontCode::Arial => "SARIAL",
        }
    }
}

/// Exact family name to device font.
static FAMILY_CODES: phf::Map<&'static str, DeviceFontCode> = phf_map! {
    "Times New Roman" => DeviceFontCode::Times,
    "Arial" => DeviceFontCode::Arial,
    "Courier New" => DeviceFontCode::Times,
    "Myriad Pro" => DeviceFontCode::Arial,
};

/// Name fragments tried, in order, when a font has no family.
const NAME_ALIASES: &[(&str, DeviceFontCode)] = &[
    ("Arial", DeviceFontCode::Arial),
    ("TimesNewRoman", DeviceFontCode::Times),
];

/// Style suffix appended to the device font code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleModifier {
    /// No suffix
    #[default]
    Regular,
    /// `B`
    Bold,
    /// `I`
    Italic,
    /// `BI`
    BoldItalic,
}

impl StyleModifier {
    /// Derive the style from the font flags, or from "Bold"/"Italic" in its name.
    ///
    /// Both sources are consulted since embedded subsets often drop the flags.
    pub fn from_font(font: &FontDescriptor) -> Self {
        let name = font.name.as_deref().unwrap_or("");
        let bold = font.bold || name.contains("Bold");
        let italic = font.italic || name.contains("Italic");

        match (bold, italic) {
            (true, true) => StyleModifier::BoldItalic,
            (true, false) => StyleModifier::Bold,
            (false, true) => StyleModifier::Italic,
            (false, false) => StyleModifier::Regular,
        }
    }

    /// Suffix written in `font` records.
    pub fn suffix(&self) -> &'static str {
        match self {
            StyleModifier::Regular => "",
            StyleModifier::Bold => "B",
            StyleModifier::Italic => "I",
            StyleModifier::BoldItalic => "BI",
        }
    }
}

/// What the rendering engine knows about the current font.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontDescriptor {
    /// Family name (e.g. "Times New Roman"), if the font declares one
    pub family: Option<String>,
    /// Raw font name (e.g. "ABCDEF+Arial-BoldMT")
    pub name: Option<String>,
    /// Bold flag from the font descriptor
    pub bold: bool,
    /// Italic flag from the font descriptor
    pub italic: bool,
}

impl FontDescriptor {
    /// Descriptor with a family and name and no style flags.
    pub fn new(family: Option<&str>, name: Option<&str>) -> Self {
        Self {
            family: family.map(str::to_string),
            name: name.map(str::to_string),
            bold: false,
            italic: false,
        }
    }

    /// Set the bold flag.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set the italic flag.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }
}

/// Pick the device font for a document font.
///
/// Never fails: unknown fonts come back as [`DeviceFontCode::Times`] along
/// with the diagnostic explaining why.
///
/// # Examples
///
/// ```
/// use pdf_impro::fonts::{classify, DeviceFontCode, FontDescriptor};
///
/// let (code, diagnostic) = classify(&FontDescriptor::new(Some("Arial"), None));
/// assert_eq!(code, DeviceFontCode::Arial);
/// assert!(diagnostic.is_none());
/// ```
pub fn classify(font: &FontDescriptor) -> (DeviceFontCode, Option<Diagnostic>) {
    if let Some(family) = font.family.as_deref() {
        return match FAMILY_CODES.get(family) {
            Some(&code) => (code, None),
            None => (
                DeviceFontCode::Times,
                Some(Diagnostic::UnmappedFontFamily {
                    family: family.to_string(),
                }),
            ),
        };
    }

    let Some(name) = font.name.as_deref() else {
        return (DeviceFontCode::Times, Some(Diagnostic::MissingFontName));
    };

    log::debug!("Font '{}' has no family, guessing from its name", name);
    NAME_ALIASES
        .iter()
        .find(|(fragment, _)| name.contains(fragment))
        .map(|&(_, code)| (code, None))
        .unwrap_or_else(|| {
            (
                DeviceFontCode::Times,
                Some(Diagnostic::UnguessedFontName {
                    name: name.to_string(),
                }),
            )
        })
}

/// A fully resolved device font selection, as written in `font` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceFont {
    /// Built-in face
    pub code: DeviceFontCode,
    /// Integer point size
    pub size: i32,
    /// Style suffix
    pub style: StyleModifier,
}

impl fmt::Display for DeviceFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.code.as_str(), self.size, self.style.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_families() {
        let cases = [
            ("Times New Roman", DeviceFontCode::Times),
            ("Arial", DeviceFontCode::Arial),
            ("Courier New", DeviceFontCode::Times),
            ("Myriad Pro", DeviceFontCode::Arial),
        ];
        for (family, expected) in cases {
            let (code, diagnostic) = classify(&FontDescriptor::new(Some(family), Some("X")));
            assert_eq!(code, expected, "family {}", family);
            assert!(diagnostic.is_none());
        }
    }

    #[test]
    fn test_unknown_family_falls_back() {
        let (code, diagnostic) = classify(&FontDescriptor::new(Some("Garamond"), Some("Arial")));
        assert_eq!(code, DeviceFontCode::Times);
        assert_eq!(
            diagnostic,
            Some(Diagnostic::UnmappedFontFamily {
                family: "Garamond".to_string()
            })
        );
    }

    #[test]
    fn test_family_match_is_exact() {
        let (code, diagnostic) = classify(&FontDescriptor::new(Some("arial"), None));
        assert_eq!(code, DeviceFontCode::Times);
        assert!(diagnostic.is_some());
    }

    #[test]
    fn test_name_guess() {
        let (code, diagnostic) = classify(&FontDescriptor::new(None, Some("ABCDEF+Arial-BoldMT")));
        assert_eq!(code, DeviceFontCode::Arial);
        assert!(diagnostic.is_none());

        let (code, diagnostic) = classify(&FontDescriptor::new(None, Some("TimesNewRomanPSMT")));
        assert_eq!(code, DeviceFontCode::Times);
        assert!(diagnostic.is_none());
    }

    #[test]
    fn test_name_guess_is_case_sensitive() {
        let (code, diagnostic) = classify(&FontDescriptor::new(None, Some("arialmt")));
        assert_eq!(code, DeviceFontCode::Times);
        assert_eq!(
            diagnostic,
            Some(Diagnostic::UnguessedFontName {
                name: "arialmt".to_string()
            })
        );
    }

    #[test]
    fn test_nameless_font() {
        let (code, diagnostic) = classify(&FontDescriptor::default());
        assert_eq!(code, DeviceFontCode::Times);
        assert_eq!(diagnostic, Some(Diagnostic::MissingFontName));
    }

    #[test]
    fn test_style_from_flags_or_name() {
        let plain = FontDescriptor::new(Some("Arial"), Some("ArialMT"));
        assert_eq!(StyleModifier::from_font(&plain), StyleModifier::Regular);

        let flagged = plain.clone().with_bold(true);
        assert_eq!(StyleModifier::from_font(&flagged), StyleModifier::Bold);

        let slanted = plain.clone().with_italic(true);
        assert_eq!(StyleModifier::from_font(&slanted), StyleModifier::Italic);

        let named = FontDescriptor::new(Some("Arial"), Some("Arial-Italic"));
        assert_eq!(StyleModifier::from_font(&named), StyleModifier::Italic);

        let mixed = FontDescriptor::new(Some("Arial"), Some("Arial-Italic")).with_bold(true);
        assert_eq!(StyleModifier::from_font(&mixed), StyleModifier::BoldItalic);

        let both = FontDescriptor::new(None, Some("Arial-BoldItalicMT"));
        assert_eq!(StyleModifier::from_font(&both), StyleModifier::BoldItalic);
    }

    #[test]
    fn test_device_font_token() {
        let font = DeviceFont {
            code: DeviceFontCode::Arial,
            size: 12,
            style: StyleModifier::BoldItalic,
        };
        assert_eq!(font.to_string(), "SARIAL12BI");

        let font = DeviceFont {
            code: DeviceFontCode::Times,
            size: 9,
            style: StyleModifier::Regular,
        };
        assert_eq!(font.to_string(), "STMS9");
    }
}
