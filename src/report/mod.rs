//! Plain-text listing of unique effects.
//!
//! Each entry is printed as `{effect_id:>3}: {identifier}`. A blank line
//! separates runs of consecutive effect ids; the run before the first entry is
//! taken to end at 0, so a listing that does not start at 1 opens with a blank
//! line.

use std::io::{self, Write};

/// Format a single report line, without the trailing newline.
pub fn format_entry(effect_id: i64, identifier: &str) -> String {
    format!("{effect_id:3}: {identifier}")
}

/// True when `effect_id` does not directly follow `prev`.
pub fn breaks_run(prev: i64, effect_id: i64) -> bool {
    prev.checked_add(1) != Some(effect_id)
}

/// Write the report for `entries`, which must be in ascending effect id order.
pub fn write_report<'a, I, W>(entries: I, out: &mut W) -> io::Result<()>
where
    I: IntoIterator<Item = (i64, &'a str)>,
    W: Write + ?Sized,
{
    let mut prev = 0;
    for (effect_id, identifier) in entries {
        if breaks_run(prev, effect_id) {
            writeln!(out)?;
        }
        writeln!(out, "{}", format_entry(effect_id, identifier))?;
        prev = effect_id;
    }
    Ok(())
}

/// Render the report into a `String`.
pub fn render<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (i64, &'a str)>,
{
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(entries, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entry_pads_to_three() {
        assert_eq!(format_entry(1, "pound"), "  1: pound");
        assert_eq!(format_entry(42, "haze"), " 42: haze");
        assert_eq!(format_entry(100, "x"), "100: x");
        assert_eq!(format_entry(1234, "y"), "1234: y");
    }

    #[test]
    fn test_format_entry_counts_sign_in_width() {
        assert_eq!(format_entry(-5, "odd"), " -5: odd");
    }

    #[test]
    fn test_consecutive_run_has_no_separator() {
        let out = render([(1, "a"), (2, "b"), (3, "c")]);
        assert_eq!(out, "  1: a\n  2: b\n  3: c\n");
    }

    #[test]
    fn test_gap_inserts_blank_line() {
        let out = render([(1, "m1"), (4, "m4")]);
        assert_eq!(out, "  1: m1\n\n  4: m4\n");
    }

    #[test]
    fn test_leading_blank_when_first_is_not_one() {
        assert_eq!(render([(100, "x")]), "\n100: x\n");
        assert_eq!(render([(0, "zero")]), "\n  0: zero\n");
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(render(std::iter::empty()), "");
    }

    #[test]
    fn test_breaks_run_at_extremes() {
        assert!(breaks_run(i64::MAX, i64::MIN));
        assert!(!breaks_run(i64::MAX - 1, i64::MAX));
    }
}
