//! Line codec for record files.
//!
//! A record is one line of text. Fields are joined with `,` and are never
//! quoted, escaped, or trimmed. Field 0 is the record key.

/// Field delimiter.
pub const DELIMITER: char = ',';

/// Line terminator written after every record.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Line terminator written after every record.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Joins fields into a record line, without a terminator.
pub fn join_fields<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        line.push_str(field.as_ref());
    }
    line
}

/// Splits a record line into fields.
///
/// Every delimiter produces a field boundary, so an empty line yields a
/// single empty field and a trailing delimiter yields a trailing empty field.
#[must_use]
pub fn split_fields(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(str::to_owned).collect()
}

/// Returns the key field of a line (everything before the first delimiter).
#[must_use]
pub fn key_field(line: &str) -> &str {
    line.split(DELIMITER).next().unwrap_or(line)
}

/// Removes a trailing `\n` or `\r\n` from a raw line.
#[must_use]
pub fn strip_line_ending(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn join_and_split() {
        let line = join_fields(&["1", "Ana", "Lopez"]);
        assert_eq!(line, "1,Ana,Lopez");
        assert_eq!(split_fields(&line), vec!["1", "Ana", "Lopez"]);
    }

    #[test]
    fn empty_line_is_single_empty_field() {
        assert_eq!(split_fields(""), vec![String::new()]);
    }

    #[test]
    fn no_trimming() {
        assert_eq!(split_fields(" 1, a ,"), vec![" 1", " a ", ""]);
    }

    #[test]
    fn key_field_stops_at_delimiter() {
        assert_eq!(key_field("12,x,y"), "12");
        assert_eq!(key_field("12"), "12");
        assert_eq!(key_field(""), "");
    }

    #[test]
    fn strip_both_terminators() {
        assert_eq!(strip_line_ending("a,b\n"), "a,b");
        assert_eq!(strip_line_ending("a,b\r\n"), "a,b");
        assert_eq!(strip_line_ending("a,b"), "a,b");
    }

    proptest! {
        #[test]
        fn split_inverts_join(fields in prop::collection::vec("[^,\r\n]*", 1..12)) {
            let line = join_fields(&fields);
            prop_assert_eq!(split_fields(&line), fields);
        }
    }
}
