mod types;

pub use types::*;

use once_cell::sync::Lazy;
use regex::Regex;

// Identifier format: <anything>[<digits>].json, anchored at the end
// Examples: "Server - Channel - Title[123456].json", "[123456].json"
static IDENTIFIER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([0-9]+)\]\.json$").unwrap());

/// Extract the trailing bracketed identifier from an archive file name
pub fn extract_identifier(name: &str) -> Option<String> {
    IDENTIFIER_REGEX
        .captures(name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Build the compact file name for an identifier
pub fn target_file_name(identifier: &str) -> String {
    format!("[{}].json", identifier)
}

/// Parse a file name, returning `None` when no identifier is present
pub fn parse_file_name(name: &str) -> Option<ParsedFileName> {
    let identifier = extract_identifier(name)?;

    Some(ParsedFileName {
        identifier,
        original_name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_long_name() {
        let name = "Server ΟΔΥΣΣΕΙΑ - 🎃︱Archive - Some Title[1234567890123].json";
        assert_eq!(extract_identifier(name), Some("1234567890123".to_string()));
    }

    #[test]
    fn test_extract_from_target_name() {
        assert_eq!(extract_identifier("[42].json"), Some("42".to_string()));
    }

    #[test]
    fn test_extract_uses_trailing_brackets() {
        let name = "Archive [2023] - Title [v2][98765].json";
        assert_eq!(extract_identifier(name), Some("98765".to_string()));
    }

    #[test]
    fn test_extract_requires_json_suffix_at_end() {
        assert_eq!(extract_identifier("Title[123].json.bak"), None);
        assert_eq!(extract_identifier("Title[123].txt"), None);
        assert_eq!(extract_identifier("Title[123].JSON"), None);
    }

    #[test]
    fn test_extract_requires_brackets_adjacent_to_suffix() {
        assert_eq!(extract_identifier("Title[123] .json"), None);
        assert_eq!(extract_identifier("Title[123]x.json"), None);
        assert_eq!(extract_identifier("Title 123.json"), None);
    }

    #[test]
    fn test_extract_requires_digits() {
        assert_eq!(extract_identifier("Title[].json"), None);
        assert_eq!(extract_identifier("Title[abc].json"), None);
        assert_eq!(extract_identifier("Title[12a].json"), None);
        assert_eq!(extract_identifier("Title[-12].json"), None);
    }

    #[test]
    fn test_extract_rejects_non_ascii_digits() {
        assert_eq!(extract_identifier("Title[١٢٣].json"), None);
    }

    #[test]
    fn test_extract_keeps_leading_zeros() {
        assert_eq!(extract_identifier("Title[007].json"), Some("007".to_string()));
    }

    #[test]
    fn test_target_file_name() {
        assert_eq!(target_file_name("123"), "[123].json");
    }

    #[test]
    fn test_parsed_file_name_methods() {
        let long = parse_file_name("Archive - Title[42].json").unwrap();
        assert_eq!(long.identifier, "42");
        assert_eq!(long.target_name(), "[42].json");
        assert!(!long.is_target_format());

        let compact = parse_file_name("[42].json").unwrap();
        assert!(compact.is_target_format());

        assert!(parse_file_name("no identifier.json").is_none());
    }
}
