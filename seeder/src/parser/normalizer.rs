//! Maps raw insert lines from the legacy seed file into catalog records.

use tracing::warn;

use crate::parser::tokenizer::tokenize_tuple;
use crate::types::CatalogRecord;

/// Minimum number of positional fields a tuple must carry to map into a record.
const MIN_FIELDS: usize = 15;

/// Inclusive difficulty range of the destination catalog.
///
/// Some legacy sources grade on a 1-10 scale; both bounds are clamped into this range
/// independently.
const MIN_DIFFICULTY: i32 = 1;
const MAX_DIFFICULTY: i32 = 5;

/// Fallback difficulty bounds when the raw field does not parse as an integer.
const DEFAULT_DIFFICULTY_MIN: i32 = 1;
const DEFAULT_DIFFICULTY_MAX: i32 = 3;

/// Outcome of normalizing one matching line of the legacy seed file.
///
/// The pipeline default is to tolerate bad lines silently, but the outcome keeps the
/// skip reason so callers can count, log, or assert on skips without changing that
/// behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line produced a catalog record.
    Record(CatalogRecord),
    /// The line matched the insert pattern but could not be mapped.
    Skipped(SkipReason),
}

/// Why a matching insert line did not produce a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The tuple held fewer positional fields than the catalog mapping needs.
    TooFewFields { found: usize },
}

/// Normalizes one line of the legacy seed file.
///
/// Returns [`None`] when the line does not carry the `INSERT ... VALUES (...) ON CONFLICT`
/// shape at all (comments, `SET` statements, blank lines, ...). Matching lines always
/// yield an outcome and never an error.
pub fn normalize_line(line: &str) -> Option<LineOutcome> {
    let tuple = values_tuple(line)?;
    let fields = tokenize_tuple(tuple);

    if fields.len() < MIN_FIELDS {
        return Some(LineOutcome::Skipped(SkipReason::TooFewFields {
            found: fields.len(),
        }));
    }

    Some(LineOutcome::Record(build_record(&fields)))
}

/// Returns the tuple body between `VALUES (` and the `) ON CONFLICT` clause, if the
/// line carries the legacy insert shape.
fn values_tuple(line: &str) -> Option<&str> {
    // Keyword search is ASCII case-insensitive; `to_ascii_uppercase` preserves byte
    // offsets so the indexes stay valid on the original line.
    let upper = line.to_ascii_uppercase();

    let insert = upper.find("INSERT INTO")?;
    let values = insert + upper[insert..].find("VALUES")?;
    let open = values + line[values..].find('(')?;
    let conflict = upper.rfind("ON CONFLICT")?;
    let close = line[..conflict].rfind(')')?;

    if close <= open {
        return None;
    }

    Some(&line[open + 1..close])
}

/// Builds a record from the fixed positional mapping of the legacy dump.
fn build_record(fields: &[String]) -> CatalogRecord {
    let code = text_field(fields, 0);
    let difficulty_min = difficulty_field(fields, 9, DEFAULT_DIFFICULTY_MIN);
    let difficulty_max = difficulty_field(fields, 10, DEFAULT_DIFFICULTY_MAX);

    if difficulty_min > difficulty_max {
        // Known data-quality risk: the bounds are clamped independently and an
        // inverted pair is preserved rather than corrected.
        warn!(
            code = %code,
            difficulty_min,
            difficulty_max,
            "inverted difficulty range in legacy source"
        );
    }

    CatalogRecord {
        code,
        name: text_field(fields, 1),
        description: text_field(fields, 2),
        solution_method: text_field(fields, 3),
        subject: text_field(fields, 4),
        area: text_field(fields, 5),
        standard_code: text_field(fields, 6),
        standard_content: text_field(fields, 7),
        cognitive_tag: text_field(fields, 8),
        difficulty_min,
        difficulty_max,
        keywords: keywords_field(fields, 11),
        school_level: text_field(fields, 12),
        level_code: text_field(fields, 13),
        domain_code: text_field(fields, 14),
        is_active: true,
    }
}

/// Returns the text at `index`, with missing, blank, and `NULL` slots normalized to the
/// empty string.
fn text_field(fields: &[String], index: usize) -> String {
    let value = fields.get(index).map(String::as_str).unwrap_or("");
    if value.is_empty() || value.eq_ignore_ascii_case("null") {
        String::new()
    } else {
        value.to_string()
    }
}

/// Parses a difficulty bound, falling back to `default` and clamping into the catalog
/// range.
fn difficulty_field(fields: &[String], index: usize, default: i32) -> i32 {
    fields
        .get(index)
        .and_then(|raw| raw.trim().parse::<i32>().ok())
        .unwrap_or(default)
        .clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}

/// Decodes the embedded JSON keyword array; any failure or non-array yields an empty
/// sequence, never an error.
fn keywords_field(fields: &[String], index: usize) -> Vec<String> {
    fields
        .get(index)
        .and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a matching insert line around the given tuple body.
    fn insert_line(tuple: &str) -> String {
        format!(
            "INSERT INTO expanded_problem_types (code, name) VALUES ({tuple}) ON CONFLICT (code) DO UPDATE SET name = EXCLUDED.name;"
        )
    }

    /// A well-formed 15-field tuple with the given code, difficulties, and keywords.
    fn tuple(code: &str, min: &str, max: &str, keywords: &str) -> String {
        format!(
            "'{code}', 'Linear equations', 'Solve for x', 'isolate the variable', 'Algebra', \
             'Equations', 'CCSS.6.EE.B.7', 'Solve x + p = q', 'procedural', {min}, {max}, \
             '{keywords}', 'middle', 'MS-1', 'EE'"
        )
    }

    fn record_from(line: &str) -> CatalogRecord {
        match normalize_line(line) {
            Some(LineOutcome::Record(record)) => record,
            other => panic!("expected a record, got {other:?}"),
        }
    }

    #[test]
    fn normalize_line_ignores_non_insert_lines() {
        assert_eq!(normalize_line(""), None);
        assert_eq!(normalize_line("-- legacy dump"), None);
        assert_eq!(normalize_line("SET search_path = public;"), None);
        // An insert without the conflict clause is not part of the legacy shape.
        assert_eq!(
            normalize_line("INSERT INTO expanded_problem_types (code) VALUES ('X');"),
            None
        );
    }

    #[test]
    fn normalize_line_maps_positional_fields() {
        let record = record_from(&insert_line(&tuple(
            "ALG1-LEQ-001",
            "2",
            "4",
            r#"["equation","one-step"]"#,
        )));

        assert_eq!(record.code, "ALG1-LEQ-001");
        assert_eq!(record.name, "Linear equations");
        assert_eq!(record.description, "Solve for x");
        assert_eq!(record.solution_method, "isolate the variable");
        assert_eq!(record.subject, "Algebra");
        assert_eq!(record.area, "Equations");
        assert_eq!(record.standard_code, "CCSS.6.EE.B.7");
        assert_eq!(record.standard_content, "Solve x + p = q");
        assert_eq!(record.cognitive_tag, "procedural");
        assert_eq!(record.difficulty_min, 2);
        assert_eq!(record.difficulty_max, 4);
        assert_eq!(record.keywords, vec!["equation", "one-step"]);
        assert_eq!(record.school_level, "middle");
        assert_eq!(record.level_code, "MS-1");
        assert_eq!(record.domain_code, "EE");
        assert!(record.is_active);
    }

    #[test]
    fn normalize_line_skips_short_tuples() {
        // 14 fields: one short of the positional mapping.
        let fourteen = (0..14)
            .map(|i| format!("'f{i}'"))
            .collect::<Vec<_>>()
            .join(", ");

        assert_eq!(
            normalize_line(&insert_line(&fourteen)),
            Some(LineOutcome::Skipped(SkipReason::TooFewFields {
                found: 14
            }))
        );
    }

    #[test]
    fn normalize_line_accepts_exactly_fifteen_fields() {
        let record = record_from(&insert_line(&tuple("X", "1", "3", "[]")));
        assert_eq!(record.code, "X");
    }

    #[test]
    fn difficulty_bounds_are_clamped_independently() {
        let cases = [
            (("0", "1"), (1, 1)),
            (("3", "12"), (3, 5)),
            (("-5", "7"), (1, 5)),
        ];

        for ((raw_min, raw_max), (expected_min, expected_max)) in cases {
            let record = record_from(&insert_line(&tuple("X", raw_min, raw_max, "[]")));
            assert_eq!(
                (record.difficulty_min, record.difficulty_max),
                (expected_min, expected_max),
                "raw bounds ({raw_min}, {raw_max})"
            );
        }
    }

    #[test]
    fn unparsable_difficulties_fall_back_to_defaults() {
        let record = record_from(&insert_line(&tuple("X", "'low'", "NULL", "[]")));
        assert_eq!(record.difficulty_min, DEFAULT_DIFFICULTY_MIN);
        assert_eq!(record.difficulty_max, DEFAULT_DIFFICULTY_MAX);
    }

    #[test]
    fn inverted_difficulty_range_is_preserved() {
        let record = record_from(&insert_line(&tuple("X", "5", "1", "[]")));
        assert_eq!((record.difficulty_min, record.difficulty_max), (5, 1));
    }

    #[test]
    fn keywords_fall_back_to_empty_on_bad_json() {
        let not_json = record_from(&insert_line(&tuple("X", "1", "3", "not json")));
        assert!(not_json.keywords.is_empty());

        // A JSON object is valid JSON but not an array.
        let object = record_from(&insert_line(&tuple("X", "1", "3", r#"{"a":1}"#)));
        assert!(object.keywords.is_empty());

        let array = record_from(&insert_line(&tuple("X", "1", "3", r#"["a","b"]"#)));
        assert_eq!(array.keywords, vec!["a", "b"]);
    }

    #[test]
    fn null_and_blank_text_fields_default_to_empty() {
        let body = "'X', NULL, '', 'method', NULL, 'area', NULL, NULL, NULL, 1, 3, '[]', NULL, NULL, NULL";
        let record = record_from(&insert_line(body));

        assert_eq!(record.code, "X");
        assert_eq!(record.name, "");
        assert_eq!(record.description, "");
        assert_eq!(record.solution_method, "method");
        assert_eq!(record.school_level, "");
        assert_eq!(record.domain_code, "");
    }

    #[test]
    fn escaped_quotes_survive_normalization() {
        let record = record_from(&insert_line(&tuple("X''s code", "1", "3", "[]")));
        assert_eq!(record.code, "X's code");
    }

    #[test]
    fn lowercase_keywords_in_line_still_match() {
        let line = format!(
            "insert into expanded_problem_types (code) values ({}) on conflict (code) do update set name = excluded.name;",
            tuple("X", "1", "3", "[]")
        );
        assert_eq!(record_from(&line).code, "X");
    }
}
