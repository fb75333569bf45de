// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Delimited record parsing for list-valued attributes.
//!
//! An attribute value is interpreted as a set of comma-separated records:
//! fields are separated by commas, records by line breaks (`\n`, `\r` or
//! `\r\n`), and a field may be wrapped in double quotes to embed commas, line
//! breaks or the quote character itself (written as a doubled `""`). The
//! element sequence produced is every field of every record in order.
//!
//! Parsing is strict about quoting: an unterminated quoted field, or any
//! content between a closing quote and the next delimiter, is an error rather
//! than a truncated result. Quote characters inside an unquoted field carry
//! no special meaning. Empty records (blank lines) are skipped, and an empty
//! input yields zero elements.

use thiserror::Error;

/// Errors produced by [`parse_record_set`]. Positions are 1-based character
/// offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordParseError {
    #[error("unterminated quoted field opened at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("unexpected character '{found}' after closing quote at position {position}")]
    InvalidCharacterAfterQuote { position: usize, found: char },
}

/// Parse a delimited record set into its ordered sequence of field values.
///
/// # Example
/// ```
/// use flowunit::record::parse_record_set;
///
/// let elements = parse_record_set("lions,tigers,bears").unwrap();
/// assert_eq!(elements, vec!["lions", "tigers", "bears"]);
///
/// let quoted = parse_record_set("\"a,b\",\"say \"\"hi\"\"\"").unwrap();
/// assert_eq!(quoted, vec!["a,b", "say \"hi\""]);
///
/// assert!(parse_record_set("\"lions,\"tigers\"").is_err());
/// ```
pub fn parse_record_set(input: &str) -> Result<Vec<String>, RecordParseError> {
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();
    let mut elements = Vec::new();
    let mut i = 0usize;

    while i < len {
        // Blank lines between records carry no fields.
        if chars[i] == '\n' {
            i += 1;
            continue;
        }
        if chars[i] == '\r' {
            i += 1;
            if i < len && chars[i] == '\n' {
                i += 1;
            }
            continue;
        }

        // One record: fields until a record break or end of input.
        loop {
            if i < len && chars[i] == '"' {
                let opened_at = i + 1;
                i += 1;
                let mut field = String::new();
                let mut closed = false;
                while i < len {
                    if chars[i] == '"' {
                        if i + 1 < len && chars[i + 1] == '"' {
                            field.push('"');
                            i += 2;
                        } else {
                            i += 1;
                            closed = true;
                            break;
                        }
                    } else {
                        field.push(chars[i]);
                        i += 1;
                    }
                }
                if !closed {
                    return Err(RecordParseError::UnterminatedQuote {
                        position: opened_at,
                    });
                }
                elements.push(field);
            } else {
                let mut field = String::new();
                while i < len && chars[i] != ',' && chars[i] != '\n' && chars[i] != '\r' {
                    field.push(chars[i]);
                    i += 1;
                }
                elements.push(field);
            }

            if i >= len {
                return Ok(elements);
            }
            match chars[i] {
                ',' => {
                    i += 1;
                }
                '\n' => {
                    i += 1;
                    break;
                }
                '\r' => {
                    i += 1;
                    if i < len && chars[i] == '\n' {
                        i += 1;
                    }
                    break;
                }
                found => {
                    // Only reachable after a closing quote; unquoted fields
                    // consume everything up to a delimiter.
                    return Err(RecordParseError::InvalidCharacterAfterQuote {
                        position: i + 1,
                        found,
                    });
                }
            }
        }
    }

    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_comma_separated_fields() {
        assert_eq!(
            parse_record_set("lions,tigers,bears").unwrap(),
            vec!["lions", "tigers", "bears"]
        );
    }

    #[test]
    fn single_field() {
        assert_eq!(parse_record_set("lions").unwrap(), vec!["lions"]);
    }

    #[test]
    fn empty_input_yields_no_elements() {
        assert!(parse_record_set("").unwrap().is_empty());
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(
            parse_record_set("a,b\n\nc\n").unwrap(),
            vec!["a", "b", "c"]
        );
        assert!(parse_record_set("\n\r\n").unwrap().is_empty());
    }

    #[test]
    fn multiple_records_flatten_in_row_major_order() {
        assert_eq!(
            parse_record_set("a,b\r\nc,d\ne").unwrap(),
            vec!["a", "b", "c", "d", "e"]
        );
    }

    #[test]
    fn empty_fields_are_preserved() {
        assert_eq!(parse_record_set("a,,b").unwrap(), vec!["a", "", "b"]);
        assert_eq!(parse_record_set("a,b,").unwrap(), vec!["a", "b", ""]);
        assert_eq!(parse_record_set(",").unwrap(), vec!["", ""]);
    }

    #[test]
    fn quoted_field_embeds_delimiters() {
        assert_eq!(
            parse_record_set("\"a,b\",c").unwrap(),
            vec!["a,b", "c"]
        );
        assert_eq!(
            parse_record_set("\"line one\nline two\",c").unwrap(),
            vec!["line one\nline two", "c"]
        );
    }

    #[test]
    fn doubled_quote_escapes_quote() {
        assert_eq!(
            parse_record_set("\"say \"\"hi\"\"\"").unwrap(),
            vec!["say \"hi\""]
        );
    }

    #[test]
    fn quote_inside_unquoted_field_is_literal() {
        assert_eq!(
            parse_record_set("it\"s,fine").unwrap(),
            vec!["it\"s", "fine"]
        );
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        assert_eq!(
            parse_record_set("\"lions"),
            Err(RecordParseError::UnterminatedQuote { position: 1 })
        );
    }

    #[test]
    fn content_after_closing_quote_is_an_error() {
        // The second field opens a quote, closes it after "lions," and then
        // hits 't' where only a comma or record break is allowed.
        assert_eq!(
            parse_record_set("\"lions,\"tigers\",\"bears\""),
            Err(RecordParseError::InvalidCharacterAfterQuote {
                position: 9,
                found: 't'
            })
        );
    }

    #[test]
    fn quoted_field_at_end_of_input() {
        assert_eq!(parse_record_set("a,\"b\"").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn parsing_is_deterministic() {
        let input = "lions,\"tigers, esp. siberian\",bears";
        assert_eq!(
            parse_record_set(input).unwrap(),
            parse_record_set(input).unwrap()
        );
    }
}
