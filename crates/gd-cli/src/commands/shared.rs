use std::io::Read;
use std::path::Path;

use anyhow::Context;
use gd_core::responses::GoodDatesResult;

/// Read a file, or stdin when `input` is `-`.
pub fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(buffer);
    }

    std::fs::read_to_string(Path::new(input)).with_context(|| format!("failed to read '{input}'"))
}

/// Parse a good-dates response body.
pub fn parse_response(body: &str, source: &str) -> anyhow::Result<GoodDatesResult> {
    serde_json::from_str(body)
        .with_context(|| format!("'{source}' is not a valid good-dates response"))
}

pub fn load_response(input: &str) -> anyhow::Result<GoodDatesResult> {
    let body = read_input(input)?;
    parse_response(&body, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_file_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("response.json");
        std::fs::write(
            &path,
            r#"{"dates":["2024-01-01"],"numerology_number":1,"number_meaning":"New beginnings","total_matches":1}"#,
        )
        .unwrap();

        let result = load_response(path.to_str().unwrap()).unwrap();
        assert_eq!(result.dates, vec!["2024-01-01"]);
        assert!(result.zodiac_sign.is_none());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_input("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }

    #[test]
    fn malformed_body_is_reported() {
        let err = parse_response("{\"dates\": 3}", "inline").unwrap_err();
        assert!(err.to_string().contains("inline"));
    }
}
