//! Whole-string text capture.

use crate::command::CommandRecord;
use crate::diagnostics::{Diagnostic, DiagnosticLog};
use crate::geometry::Point;

/// Turn one shown string into at most one `text` record.
///
/// Leading spaces are not printed; each one moves the origin right by
/// `space_width` instead. A first byte with the high bit set is a stray
/// artifact of some encoders and is dropped with a diagnostic. Nothing is
/// emitted when no printable content remains.
///
/// # Examples
///
/// ```
/// use pdf_impro::command::CommandRecord;
/// use pdf_impro::diagnostics::DiagnosticLog;
/// use pdf_impro::geometry::Point;
/// use pdf_impro::text::capture_string;
///
/// let mut log = DiagnosticLog::new();
/// let record = capture_string(Some(&b"  Total"[..]), Point::new(1.0, 2.0), 0.5, &mut log).unwrap();
/// assert_eq!(record, CommandRecord::text(Point::new(2.0, 2.0), b"Total".to_vec()));
/// ```
pub fn capture_string(
    text: Option<&[u8]>,
    origin: Point,
    space_width: f64,
    diagnostics: &mut DiagnosticLog,
) -> Option<CommandRecord> {
    let Some(mut bytes) = text else {
        diagnostics.record(Diagnostic::NullString);
        return None;
    };

    match bytes.first() {
        None => {
            diagnostics.record(Diagnostic::EmptyString);
            return None;
        },
        Some(&lead) if lead & 0x80 != 0 => {
            diagnostics.record(Diagnostic::ExtendedAsciiLead { byte: lead });
            bytes = &bytes[1..];
        },
        Some(_) => {},
    }

    let spaces = bytes.iter().take_while(|&&b| b == b' ').count();
    let rest = &bytes[spaces..];
    if rest.is_empty() {
        return None;
    }

    let origin = Point::new(origin.x + spaces as f64 * space_width, origin.y);
    Some(CommandRecord::text(origin, rest.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPACE: f64 = 12.0 * 0.25 / 72.0;

    fn capture(text: Option<&[u8]>) -> (Option<CommandRecord>, Vec<Diagnostic>) {
        let mut log = DiagnosticLog::new();
        let record = capture_string(text, Point::new(10.0, 20.0), SPACE, &mut log);
        (record, log.into_entries())
    }

    #[test]
    fn test_plain_string() {
        let (record, diagnostics) = capture(Some(&b"Invoice"[..]));
        assert_eq!(record, Some(CommandRecord::text(Point::new(10.0, 20.0), b"Invoice".to_vec())));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_leading_spaces_advance_origin() {
        let (record, _) = capture(Some(&b"   Net 30"[..]));
        let origin = Point::new(10.0 + 3.0 * SPACE, 20.0);
        let expected = CommandRecord::text(origin, b"Net 30".to_vec());
        assert_eq!(record, Some(expected));
    }

    #[test]
    fn test_only_spaces_emit_nothing() {
        let (record, diagnostics) = capture(Some(&b"    "[..]));
        assert!(record.is_none());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_high_bit_lead_is_dropped() {
        let (record, diagnostics) = capture(Some(&[0xA0, b' ', b'A'][..]));
        assert_eq!(
            record,
            Some(CommandRecord::text(Point::new(10.0 + SPACE, 20.0), b"A".to_vec()))
        );
        assert_eq!(diagnostics, vec![Diagnostic::ExtendedAsciiLead { byte: 0xA0 }]);
    }

    #[test]
    fn test_lone_high_bit_byte() {
        let (record, diagnostics) = capture(Some(&[0xFF][..]));
        assert!(record.is_none());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_empty_and_null() {
        let (record, diagnostics) = capture(Some(&b""[..]));
        assert!(record.is_none());
        assert_eq!(diagnostics, vec![Diagnostic::EmptyString]);

        let (record, diagnostics) = capture(None);
        assert!(record.is_none());
        assert_eq!(diagnostics, vec![Diagnostic::NullString]);
    }
}
