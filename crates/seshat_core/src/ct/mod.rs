//! Constant-time comparison.
//!
//! Integrity tags and shared secrets are compared with [`ct_eq`] so the
//! comparison time depends only on the length, never on where the first
//! differing byte sits. Built on the audited `subtle` crate.

use subtle::ConstantTimeEq;

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` iff `a` and `b` have the same length and contents.
/// Length is treated as public information; the content comparison is
/// constant-time.
#[inline]
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ct_eq_equal() {
        assert!(ct_eq(b"same bytes", b"same bytes"));
        assert!(ct_eq(b"", b""));
    }

    #[test]
    fn test_ct_eq_differing_content() {
        assert!(!ct_eq(b"same bytes", b"same byteZ"));
    }

    #[test]
    fn test_ct_eq_differing_length() {
        assert!(!ct_eq(b"short", b"longer input"));
    }
}
