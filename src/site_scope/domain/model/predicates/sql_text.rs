pub fn quote_identifier(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

/// Renders `value` as a Postgres string literal.
///
/// Single quotes are doubled. A value containing a backslash is emitted as an
/// `E''` literal with backslashes doubled so the result does not depend on
/// `standard_conforming_strings`. NUL bytes cannot be stored in text columns
/// and are dropped.
pub fn escape_literal(value: &str) -> String {
    let cleaned = value.chars().filter(|c| *c != '\0').collect::<String>();
    let quoted = cleaned.replace('\'', "''");

    if quoted.contains('\\') {
        format!("E'{}'", quoted.replace('\\', "\\\\"))
    } else {
        format!("'{}'", quoted)
    }
}

pub fn literal_list(values: &[String]) -> String {
    values
        .iter()
        .map(|value| escape_literal(value))
        .collect::<Vec<_>>()
        .join(",")
}
