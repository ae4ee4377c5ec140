//! Common utilities for output formatters

use chrono::DateTime;
use serde::Serialize;

/// Pretty-print a serializable value as JSON
pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}

/// Print a serializable value as YAML
pub fn print_yaml<T: Serialize>(data: &T) {
    match serde_yml::to_string(data) {
        Ok(yaml) => println!("{}", yaml),
        Err(e) => eprintln!("Error serializing to YAML: {}", e),
    }
}

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render an RFC 3339 timestamp for table output
///
/// Falls back to the raw value when it does not parse.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_csv_simple() {
        assert_eq!(escape_csv("simple"), "simple");
    }

    #[test]
    fn test_escape_csv_with_comma() {
        assert_eq!(escape_csv("has,comma"), "\"has,comma\"");
    }

    #[test]
    fn test_escape_csv_with_quotes() {
        assert_eq!(escape_csv("has\"quote"), "\"has\"\"quote\"");
    }

    #[test]
    fn test_escape_csv_with_newline() {
        assert_eq!(escape_csv("has\nnewline"), "\"has\nnewline\"");
    }

    #[test]
    fn test_escape_csv_empty() {
        assert_eq!(escape_csv(""), "");
    }

    #[test]
    fn test_format_timestamp_valid() {
        assert_eq!(format_timestamp("2025-06-01T12:30:00Z"), "2025-06-01 12:30");
    }

    #[test]
    fn test_format_timestamp_invalid_passthrough() {
        assert_eq!(format_timestamp("not-a-date"), "not-a-date");
    }
}
