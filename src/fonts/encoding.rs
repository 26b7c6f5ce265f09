//! 7-bit output character map.
//!
//! The device only prints 7-bit ASCII. Glyph Unicode values are passed
//! through when already ASCII and folded to their closest ASCII look-alike
//! otherwise. Anything left over has no device representation.

use phf::phf_map;

/// Non-ASCII code points with an ASCII stand-in.
static ASCII_FOLDS: phf::Map<u32, u8> = phf_map! {
    // Spaces
    0x00A0u32 => b' ',     // no-break space
    0x2002u32 => b' ',     // en space
    0x2003u32 => b' ',     // em space
    0x2009u32 => b' ',     // thin space
    0x202Fu32 => b' ',     // narrow no-break space
    // Punctuation
    0x00A6u32 => b'|',     // broken bar
    0x00ABu32 => b'"',     // left guillemet
    0x00ADu32 => b'-',     // soft hyphen
    0x00B4u32 => b'\'',    // acute accent
    0x00B7u32 => b'.',     // middle dot
    0x00BBu32 => b'"',     // right guillemet
    0x00D7u32 => b'x',     // multiplication sign
    0x00F7u32 => b'/',     // division sign
    0x2010u32 => b'-',     // hyphen
    0x2011u32 => b'-',     // non-breaking hyphen
    0x2012u32 => b'-',     // figure dash
    0x2013u32 => b'-',     // en dash
    0x2014u32 => b'-',     // em dash
    0x2018u32 => b'\'',    // left single quote
    0x2019u32 => b'\'',    // right single quote
    0x201Au32 => b',',     // single low quote
    0x201Cu32 => b'"',     // left double quote
    0x201Du32 => b'"',     // right double quote
    0x201Eu32 => b'"',     // double low quote
    0x2022u32 => b'*',     // bullet
    0x2032u32 => b'\'',    // prime
    0x2033u32 => b'"',     // double prime
    0x2039u32 => b'<',     // single left angle quote
    0x203Au32 => b'>',     // single right angle quote
    0x2212u32 => b'-',     // minus sign
    // Latin-1 letters
    0x00C0u32 => b'A', 0x00C1u32 => b'A', 0x00C2u32 => b'A', 0x00C3u32 => b'A', 0x00C4u32 => b'A', 0x00C5u32 => b'A',
    0x00C7u32 => b'C',
    0x00C8u32 => b'E', 0x00C9u32 => b'E', 0x00CAu32 => b'E', 0x00CBu32 => b'E',
    0x00CCu32 => b'I', 0x00CDu32 => b'I', 0x00CEu32 => b'I', 0x00CFu32 => b'I',
    0x00D1u32 => b'N',
    0x00D2u32 => b'O', 0x00D3u32 => b'O', 0x00D4u32 => b'O', 0x00D5u32 => b'O', 0x00D6u32 => b'O', 0x00D8u32 => b'O',
    0x00D9u32 => b'U', 0x00DAu32 => b'U', 0x00DBu32 => b'U', 0x00DCu32 => b'U',
    0x00DDu32 => b'Y',
    0x00E0u32 => b'a', 0x00E1u32 => b'a', 0x00E2u32 => b'a', 0x00E3u32 => b'a', 0x00E4u32 => b'a', 0x00E5u32 => b'a',
    0x00E7u32 => b'c',
    0x00E8u32 => b'e', 0x00E9u32 => b'e', 0x00EAu32 => b'e', 0x00EBu32 => b'e',
    0x00ECu32 => b'i', 0x00EDu32 => b'i', 0x00EEu32 => b'i', 0x00EFu32 => b'i',
    0x00F1u32 => b'n',
    0x00F2u32 => b'o', 0x00F3u32 => b'o', 0x00F4u32 => b'o', 0x00F5u32 => b'o', 0x00F6u32 => b'o', 0x00F8u32 => b'o',
    0x00F9u32 => b'u', 0x00FAu32 => b'u', 0x00FBu32 => b'u', 0x00FCu32 => b'u',
    0x00FDu32 => b'y', 0x00FFu32 => b'y',
};

/// Map a glyph's Unicode value to the device's 7-bit character set.
///
/// Only printable ASCII comes back. Control characters and DEL have no
/// device representation: a tab or line break inside a `text` record would
/// split its fields or end the line.
///
/// # Examples
///
/// ```
/// use pdf_impro::fonts::map_to_ascii7;
///
/// assert_eq!(map_to_ascii7('A' as u32), Some(b'A'));
/// assert_eq!(map_to_ascii7(0x2014), Some(b'-'));
/// assert_eq!(map_to_ascii7(0x4E2D), None);
/// assert_eq!(map_to_ascii7('\t' as u32), None);
/// ```
pub fn map_to_ascii7(unicode: u32) -> Option<u8> {
    match unicode {
        0x20..=0x7E => Some(unicode as u8),
        _ => ASCII_FOLDS.get(&unicode).copied(),
    }
}
