//! Character-level tokenizer for SQL `VALUES (...)` tuples.

/// Scanner state for a single pass over a tuple body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Between fields, skipping whitespace until the next token starts.
    SkipSpace,
    /// Inside a single-quoted SQL string literal.
    QuotedString,
    /// Inside an unquoted token (number, `NULL`, ...).
    BareToken,
}

/// Splits the body of a single `VALUES (...)` tuple into raw field strings.
///
/// The scan is a single pass with no backtracking. Quoted strings are copied verbatim,
/// with the doubled-quote escape `''` decoded to one literal quote. Bare tokens run
/// until the next separator and are trimmed; their text is kept as-is, so `NULL` and
/// numbers arrive unconverted. No arity is assumed here, that is the caller's concern.
///
/// Malformed input is not detected: an unterminated string simply consumes the rest of
/// the input and becomes the final field, so the scan always terminates.
pub fn tokenize_tuple(tuple: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut buf = String::new();
    let mut state = ScanState::SkipSpace;
    // Whether the current slot already committed a (quoted) field and is waiting for
    // its separator.
    let mut slot_filled = false;

    let mut chars = tuple.chars().peekable();
    while let Some(ch) = chars.next() {
        match state {
            ScanState::SkipSpace => {
                if ch.is_whitespace() {
                    continue;
                }

                if ch == '\'' {
                    buf.clear();
                    state = ScanState::QuotedString;
                } else if ch == ',' {
                    if !slot_filled {
                        fields.push(String::new());
                    }
                    slot_filled = false;
                } else {
                    buf.clear();
                    buf.push(ch);
                    state = ScanState::BareToken;
                }
            }
            ScanState::QuotedString => {
                if ch == '\'' {
                    if chars.peek() == Some(&'\'') {
                        // Doubled quote inside the string decodes to a literal quote.
                        chars.next();
                        buf.push('\'');
                    } else {
                        fields.push(buf.clone());
                        slot_filled = true;
                        state = ScanState::SkipSpace;
                    }
                } else {
                    buf.push(ch);
                }
            }
            ScanState::BareToken => {
                if ch == ',' {
                    fields.push(buf.trim().to_string());
                    slot_filled = false;
                    state = ScanState::SkipSpace;
                } else {
                    buf.push(ch);
                }
            }
        }
    }

    // Bounded worst case: whatever is still open at end of input becomes the last field.
    match state {
        ScanState::QuotedString => fields.push(buf),
        ScanState::BareToken => fields.push(buf.trim().to_string()),
        ScanState::SkipSpace => {}
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Re-escapes a field value the way the legacy dump quotes it.
    fn escape_field(value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    #[test]
    fn tokenize_tuple_quoted_fields() {
        let fields = tokenize_tuple("'a', 'b', 'c'");
        assert_eq!(fields, vec!["a", "b", "c"]);
    }

    #[test]
    fn tokenize_tuple_escaped_quote() {
        let fields = tokenize_tuple("'it''s', 'fine'");
        assert_eq!(fields, vec!["it's", "fine"]);
    }

    #[test]
    fn tokenize_tuple_consecutive_escaped_quotes() {
        let fields = tokenize_tuple("''''''");
        assert_eq!(fields, vec!["''"]);
    }

    #[test]
    fn tokenize_tuple_bare_tokens_are_trimmed() {
        let fields = tokenize_tuple("1 ,  2,NULL , true");
        assert_eq!(fields, vec!["1", "2", "NULL", "true"]);
    }

    #[test]
    fn tokenize_tuple_mixed_quoted_and_bare() {
        let fields = tokenize_tuple("'MAT-001', 'Linear equations', 3, 5, NULL");
        assert_eq!(
            fields,
            vec!["MAT-001", "Linear equations", "3", "5", "NULL"]
        );
    }

    #[test]
    fn tokenize_tuple_comma_inside_string() {
        let fields = tokenize_tuple("'a, b', 'c'");
        assert_eq!(fields, vec!["a, b", "c"]);
    }

    #[test]
    fn tokenize_tuple_empty_quoted_field() {
        let fields = tokenize_tuple("'', 'x'");
        assert_eq!(fields, vec!["", "x"]);
    }

    #[test]
    fn tokenize_tuple_empty_slot_between_separators() {
        let fields = tokenize_tuple("'a', , 'b'");
        assert_eq!(fields, vec!["a", "", "b"]);
    }

    #[test]
    fn tokenize_tuple_empty_input() {
        assert_eq!(tokenize_tuple(""), Vec::<String>::new());
        assert_eq!(tokenize_tuple("   "), Vec::<String>::new());
    }

    #[test]
    fn tokenize_tuple_unterminated_string_is_bounded() {
        let fields = tokenize_tuple("'a', 'runs to the end");
        assert_eq!(fields, vec!["a", "runs to the end"]);
    }

    #[test]
    fn tokenize_tuple_json_payload_field() {
        let fields = tokenize_tuple(r#"'["ratio","rate"]', 2"#);
        assert_eq!(fields, vec![r#"["ratio","rate"]"#, "2"]);
    }

    #[test]
    fn tokenize_tuple_round_trips_known_fields() {
        let values = ["plain", "it's quoted", "a, b", "", "''", "  padded  "];
        let tuple = values
            .iter()
            .map(|value| escape_field(value))
            .collect::<Vec<_>>()
            .join(", ");

        assert_eq!(tokenize_tuple(&tuple), values);
    }

    #[test]
    fn tokenize_tuple_round_trips_generated_tuples() {
        // Seeded property-style check: any tuple assembled from escaped fields must
        // tokenize back to the original values, including quote-heavy ones.
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let alphabet: Vec<char> = "abcXYZ 0189,'()".chars().collect();

        for _ in 0..200 {
            let arity = rng.gen_range(1..=20);
            let values: Vec<String> = (0..arity)
                .map(|_| {
                    let len = rng.gen_range(0..12);
                    (0..len)
                        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                        .collect()
                })
                .collect();

            let tuple = values
                .iter()
                .map(|value| escape_field(value))
                .collect::<Vec<_>>()
                .join(",");

            assert_eq!(tokenize_tuple(&tuple), values, "tuple: {tuple}");
        }
    }
}
