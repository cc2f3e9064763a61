/// Parses `KEY=VALUE` lines from a project `.env` file.
///
/// The key and value are split at the first `=` and trimmed. There is no
/// quoting or escaping. Blank lines and `#` comments are ignored. Lines
/// without `=` or with an empty key are skipped with a warning. Pairs come
/// back in file order, so applying them in sequence lets later lines win.
#[must_use]
pub fn parse_dotenv(content: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                pairs.push((key.trim().to_string(), value.trim().to_string()));
            }
            _ => {
                tracing::warn!(line = index + 1, "skipping malformed .env line");
            }
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_trims_keys_and_values() {
        assert_eq!(
            parse_dotenv("FOO = 1\nBAR=2"),
            pairs(&[("FOO", "1"), ("BAR", "2")])
        );
    }

    #[test]
    fn test_blank_lines_and_comments_ignored() {
        assert_eq!(
            parse_dotenv("\nFOO=1\n   \n# BAR=2\r\nBAZ=3\r\n"),
            pairs(&[("FOO", "1"), ("BAZ", "3")])
        );
    }

    #[test]
    fn test_first_equals_wins() {
        assert_eq!(
            parse_dotenv("URL=postgres://u:p@h/db?sslmode=require"),
            pairs(&[("URL", "postgres://u:p@h/db?sslmode=require")])
        );
        assert_eq!(parse_dotenv("EMPTY="), pairs(&[("EMPTY", "")]));
    }

    #[test]
    fn test_malformed_lines_skipped() {
        assert_eq!(
            parse_dotenv("JUSTAKEY\n=value\nOK=yes"),
            pairs(&[("OK", "yes")])
        );
    }

    #[test]
    fn test_no_quote_handling() {
        assert_eq!(
            parse_dotenv("QUOTED=\"a b\""),
            pairs(&[("QUOTED", "\"a b\"")])
        );
    }

    #[test]
    fn test_later_lines_kept_in_order() {
        assert_eq!(
            parse_dotenv("FOO=1\nFOO=2"),
            pairs(&[("FOO", "1"), ("FOO", "2")])
        );
    }
}
