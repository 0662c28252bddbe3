//! Input validation for chat and predictor forms.

/// Split a comma-separated symptom list into cleaned symptom names.
///
/// Whitespace around each entry is trimmed and empty entries are dropped, so
/// `"fever, , headache,"` yields `["fever", "headache"]`.
pub fn parse_symptoms(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validates a backend server URL.
pub fn validate_server_url(url: &str) -> Result<(), String> {
    let url = url.trim();
    if url.is_empty() {
        return Err("Server URL cannot be empty".to_string());
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("Server URL must start with http:// or https://".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symptoms_trims_and_drops_empties() {
        assert_eq!(
            parse_symptoms(" fever , headache,, chills ,"),
            vec!["fever", "headache", "chills"]
        );
        assert!(parse_symptoms("").is_empty());
        assert!(parse_symptoms(" , ,").is_empty());
    }

    #[test]
    fn test_parse_symptoms_keeps_inner_spaces() {
        assert_eq!(parse_symptoms("joint pain"), vec!["joint pain"]);
    }

    #[test]
    fn test_validate_server_url() {
        assert!(validate_server_url("http://127.0.0.1:5000").is_ok());
        assert!(validate_server_url("https://medical.example.org").is_ok());
        assert!(validate_server_url("").is_err());
        assert!(validate_server_url("   ").is_err());
        assert!(validate_server_url("ftp://host").is_err());
        assert!(validate_server_url("localhost:5000").is_err());
    }
}
