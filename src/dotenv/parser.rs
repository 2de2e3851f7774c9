//! Line parser for the `.env` format.
//!
//! One `KEY=VALUE` pair per line. Blank lines and lines whose first
//! non-whitespace character is `#` are skipped. The value is everything
//! after the first `=`, trimmed, with one layer of surrounding quotes
//! removed. No escapes, no interpolation, no multi-line values.

use super::{ParseError, RawMapping};

const QUOTES: &[char] = &['"', '\''];

/// Parse env-file content into a [`RawMapping`].
///
/// Aborts on the first line that is neither blank, a comment, nor contains
/// `=`, reporting its 1-based line number.
pub fn parse_str(content: &str) -> Result<RawMapping, ParseError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut mapping = RawMapping::new();

    for (idx, raw_line) in content.lines().enumerate() {
        if let Some((key, value)) = parse_line(raw_line, idx + 1)? {
            mapping.insert(key, value);
        }
    }

    Ok(mapping)
}

/// Parse a single line. Returns `None` for blank lines and comments.
fn parse_line(raw_line: &str, line: usize) -> Result<Option<(String, String)>, ParseError> {
    let trimmed = raw_line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (key, value) = trimmed.split_once('=').ok_or_else(|| ParseError::Format {
        line,
        content: trimmed.to_string(),
    })?;

    Ok(Some((key.trim().to_string(), strip_quotes(value.trim()).to_string())))
}

/// Remove at most one quote character from each end, independently.
fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix(QUOTES).unwrap_or(value);
    value.strip_suffix(QUOTES).unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_simple_pairs() {
        let mapping = parse_str("TEST_VAR=test_value\nANOTHER_VAR=another_value\n").unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping["TEST_VAR"], "test_value");
        assert_eq!(mapping["ANOTHER_VAR"], "another_value");
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let content = "# This is a comment\n\nTEST_VAR=test_value\n   # Indented comment\n   \nANOTHER_VAR=another_value\n";
        let mapping = parse_str(content).unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping["TEST_VAR"], "test_value");
        assert_eq!(mapping["ANOTHER_VAR"], "another_value");
    }

    #[test]
    fn strips_double_and_single_quotes() {
        let content = "QUOTED_VAR=\"quoted value\"\nSINGLE_QUOTED='single quoted value'\n";
        let mapping = parse_str(content).unwrap();
        assert_eq!(mapping["QUOTED_VAR"], "quoted value");
        assert_eq!(mapping["SINGLE_QUOTED"], "single quoted value");
    }

    #[test]
    fn strips_mismatched_quotes_per_side() {
        let mapping = parse_str("A=\"value'\nB='value\nC=value\"\n").unwrap();
        assert_eq!(mapping["A"], "value");
        assert_eq!(mapping["B"], "value");
        assert_eq!(mapping["C"], "value");
    }

    #[test]
    fn strips_only_one_layer() {
        let mapping = parse_str("NESTED=\"'inner'\"\n").unwrap();
        assert_eq!(mapping["NESTED"], "'inner'");
    }

    #[test]
    fn unquoted_values_are_trimmed_only() {
        let mapping = parse_str("  KEY  =   some value with spaces   \n").unwrap();
        assert_eq!(mapping["KEY"], "some value with spaces");
    }

    #[test]
    fn splits_on_first_equals_only() {
        let mapping = parse_str("URL=postgres://u:p@host/db?opt=1&x=2\n").unwrap();
        assert_eq!(mapping["URL"], "postgres://u:p@host/db?opt=1&x=2");
    }

    #[test]
    fn last_duplicate_wins() {
        let mapping = parse_str("KEY=first\nOTHER=x\nKEY=second\n").unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping["KEY"], "second");
    }

    #[test]
    fn empty_value_is_kept() {
        let mapping = parse_str("EMPTY=\nQUOTED_EMPTY=\"\"\n").unwrap();
        assert_eq!(mapping["EMPTY"], "");
        assert_eq!(mapping["QUOTED_EMPTY"], "");
    }

    #[test]
    fn missing_equals_reports_line_number() {
        let err = parse_str("TEST_VAR=test_value\nINVALID_LINE\n").unwrap_err();
        match err {
            ParseError::Format { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "INVALID_LINE");
            }
            other => panic!("expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn line_numbers_count_skipped_lines() {
        let err = parse_str("# header\n\nA=1\n\n  broken  \n").unwrap_err();
        assert!(err.to_string().contains("line 5: broken"), "got: {err}");
    }

    #[test]
    fn ignores_byte_order_mark() {
        let mapping = parse_str("\u{feff}KEY=value\n").unwrap();
        assert_eq!(mapping["KEY"], "value");
    }

    #[test]
    fn handles_crlf_line_endings() {
        let mapping = parse_str("A=1\r\nB=\"two\"\r\n").unwrap();
        assert_eq!(mapping["A"], "1");
        assert_eq!(mapping["B"], "two");
    }

    #[test]
    fn empty_input_is_empty_mapping() {
        assert!(parse_str("").unwrap().is_empty());
    }
}
