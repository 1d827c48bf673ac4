use once_cell::sync::Lazy;
use regex::Regex;

use cvparse_core::{Pos, Token};

use crate::config::ParsingConfig;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^@|\s]+@[^@]+\.[^@|\s]+").unwrap());

/// Extract the first email address from text.
///
/// The first whitespace token of the match is kept and trailing semicolons
/// are stripped (addresses in contact lines often end with one).
pub fn extract_email(text: &str) -> Option<String> {
    extract_email_with_config(text, &ParsingConfig::default())
}

/// Config-aware version of [`extract_email`].
pub(crate) fn extract_email_with_config(text: &str, config: &ParsingConfig) -> Option<String> {
    let re = config.email_re.as_ref().unwrap_or(&EMAIL_RE);
    let matched = re.find(text)?;
    let first = matched.as_str().split_whitespace().next()?;
    Some(first.trim_end_matches(';').to_string())
}

/// Extract a full name as the first pair of consecutive proper nouns.
///
/// Spans whose text contains "name" are skipped: those are form-field
/// labels ("Full Name"), not the name itself.
pub fn extract_name(tokens: &[Token]) -> Option<String> {
    for window in tokens.windows(2) {
        if window[0].pos == Pos::ProperNoun && window[1].pos == Pos::ProperNoun {
            let candidate = format!("{} {}", window[0].text, window[1].text);
            if !candidate.to_lowercase().contains("name") {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proper(text: &str) -> Token {
        Token::new(text, false, Pos::ProperNoun)
    }

    fn word(text: &str) -> Token {
        Token::new(text, false, Pos::Other)
    }

    #[test]
    fn test_extract_email_basic() {
        assert_eq!(
            extract_email("reach me at a.b@example.com today"),
            Some("a.b@example.com".to_string())
        );
    }

    #[test]
    fn test_extract_email_none() {
        assert_eq!(extract_email("no email here"), None);
    }

    #[test]
    fn test_extract_email_strips_trailing_semicolon() {
        assert_eq!(
            extract_email("contact: jane@acme.io;"),
            Some("jane@acme.io".to_string())
        );
    }

    #[test]
    fn test_extract_email_first_of_many() {
        assert_eq!(
            extract_email("a@x.com b@y.com"),
            Some("a@x.com".to_string())
        );
    }

    #[test]
    fn test_extract_name_basic() {
        let tokens = vec![proper("Jane"), proper("Doe"), word("Engineer")];
        assert_eq!(extract_name(&tokens), Some("Jane Doe".to_string()));
    }

    #[test]
    fn test_extract_name_skips_field_labels() {
        // "Full Name" is a form label; the real name follows.
        let tokens = vec![
            proper("Full"),
            proper("Name"),
            proper("Jane"),
            proper("Doe"),
        ];
        // The "Name Jane" window also contains "name" and is skipped.
        assert_eq!(extract_name(&tokens), Some("Jane Doe".to_string()));
    }

    #[test]
    fn test_extract_name_requires_consecutive_proper_nouns() {
        let tokens = vec![proper("Jane"), word("the"), proper("Engineer")];
        assert_eq!(extract_name(&tokens), None);
    }

    #[test]
    fn test_extract_name_empty_tokens() {
        assert_eq!(extract_name(&[]), None);
    }
}
