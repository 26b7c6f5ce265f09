//! Unit conversion between device space and the command stream.
//!
//! Coordinates arrive in device units and leave as centimetres, line widths
//! leave in the device's fixed-point encoding and fill grays as ink percent.

/// Centimetres written per device unit.
pub const CM_PER_UNIT: f64 = 2.54;

/// Fixed-point steps per device unit in `lwid` records.
pub const LINE_WIDTH_SCALE: f64 = 300.0;

/// Gray steps per ink percent (65536 / 100).
const GRAY_PER_PERCENT: f64 = 655.36;

/// Points per inch used to size a space character.
const POINTS_PER_INCH: f64 = 72.0;

/// Width of a space relative to the font size.
const SPACE_EM_FRACTION: f64 = 0.25;

/// Convert a device length to centimetres.
///
/// # Examples
///
/// ```
/// use pdf_impro::units::to_cm;
///
/// assert!((to_cm(10.0) - 25.4).abs() < 1e-9);
/// ```
#[inline]
pub fn to_cm(length: f64) -> f64 {
    length * CM_PER_UNIT
}

/// Encode a line width for an `lwid` record.
#[inline]
pub fn encode_line_width(width: f64) -> i64 {
    (width * LINE_WIDTH_SCALE).round() as i64
}

/// Convert a 16-bit fill gray (0 = black, 65535 = white) to an ink percentage.
///
/// The result is truncated, so near-white grays give 0 (nothing to shade).
/// It always lies in `0..=100`: `gray / 655.36` is below 100 for any `u16`.
#[inline]
pub fn ink_level(gray: u16) -> u8 {
    (100.0 - f64::from(gray) / GRAY_PER_PERCENT) as u8
}

/// Horizontal advance of one space character at the given integer font size.
#[inline]
pub fn single_space_width(font_size: i32) -> f64 {
    f64::from(font_size) * SPACE_EM_FRACTION / POINTS_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_cm() {
        assert!((to_cm(5.0) - 12.7).abs() < 1e-9);
        assert_eq!(to_cm(0.0), 0.0);
        assert!((to_cm(-1.0) + 2.54).abs() < 1e-9);
    }

    #[test]
    fn test_encode_line_width() {
        assert_eq!(encode_line_width(1.0), 300);
        assert_eq!(encode_line_width(0.5), 150);
        assert_eq!(encode_line_width(0.0), 0);
        assert_eq!(encode_line_width(0.0017), 1);
    }

    #[test]
    fn test_ink_level_extremes() {
        assert_eq!(ink_level(0), 100);
        assert_eq!(ink_level(u16::MAX), 0);
    }

    #[test]
    fn test_ink_level_mid_gray() {
        assert_eq!(ink_level(32000), 51);
        assert_eq!(ink_level(65000), 0);
        assert_eq!(ink_level(64880), 1);
    }

    #[test]
    fn test_ink_level_range() {
        let levels: Vec<u8> = (0..=u16::MAX).map(ink_level).collect();
        assert!(levels.iter().all(|&ink| ink <= 100));
        assert!(levels.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_single_space_width() {
        assert!((single_space_width(12) - 12.0 * 0.25 / 72.0).abs() < 1e-12);
        assert_eq!(single_space_width(0), 0.0);
    }
}
