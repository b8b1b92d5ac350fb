use regex::Regex;
use std::sync::OnceLock;

/// Utility for parsing PostgreSQL constraint violation messages.
///
/// Extracts structured information (table, column, offending value) from the
/// text PostgreSQL attaches to integrity errors.
pub struct ConstraintParser;

/// Compiled regex patterns, cached for the lifetime of the process
struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    table_name: Regex,
    varchar_limit: Regex,
}

impl RegexPatterns {
    fn new() -> Self {
        Self {
            // "Key (field)=(value)"
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").expect("valid key/value regex"),
            column_name: Regex::new(r#"column "([^"]+)""#).expect("valid column regex"),
            // Postgres says `table "x"` or `relation "x"` depending on the error
            table_name: Regex::new(r#"(?:table|relation) "([^"]+)""#).expect("valid table regex"),
            // "value too long for type character varying(100)"
            varchar_limit: Regex::new(r"value too long for type character varying\((\d+)\)")
                .expect("valid varchar regex"),
        }
    }
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(RegexPatterns::new)
    }

    /// Parses a unique constraint violation into `(entity, field, value)`.
    ///
    /// The constraint name (`employee_pkey`, `employee_name_key`) gives the
    /// entity; the `DETAIL` line gives field and value.
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let (field, value) = Self::extract_key_value_from_message(message)?;
        let entity = constraint_name
            .and_then(Self::entity_from_constraint_name)
            .or_else(|| Self::extract_table_from_message(message))
            .unwrap_or_else(|| "resource".to_string());
        Some((entity, field, value))
    }

    /// Parses a not-null violation into `(entity, field)`.
    pub fn parse_not_null_violation(message: &str) -> Option<(String, String)> {
        let field = Self::extract_column_from_message(message)?;
        let entity =
            Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
        Some((entity, field))
    }

    /// Returns the declared length when a value overflowed a `VARCHAR(n)` column.
    pub fn parse_length_violation(message: &str) -> Option<usize> {
        Self::patterns()
            .varchar_limit
            .captures(message)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// First underscore-separated segment of a constraint name.
    ///
    /// `employee_pkey` -> `employee`, `employee_name_key` -> `employee`
    pub fn entity_from_constraint_name(constraint_name: &str) -> Option<String> {
        let (entity, rest) = constraint_name.split_once('_')?;
        if entity.is_empty() || rest.is_empty() {
            return None;
        }
        Some(entity.to_string())
    }

    pub fn extract_column_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .column_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    pub fn extract_table_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .table_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    pub fn extract_key_value_from_message(message: &str) -> Option<(String, String)> {
        Self::patterns().key_value.captures(message).and_then(|caps| {
            let field = caps.get(1)?.as_str().to_string();
            let value = caps.get(2)?.as_str().to_string();
            Some((field, value))
        })
    }
}
