use regex::Regex;

/// Basic email shape check: `local@domain.tld` with no whitespace and a
/// single `@`. Not RFC 5322; it only catches obvious mistakes.
pub fn is_email(s: &str) -> bool {
    let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    re.is_match(s)
}

/// Split a delimited list of addresses on runs of whitespace, commas or
/// semicolons, dropping empty tokens.
pub fn split_emails(raw: &str) -> Vec<&str> {
    let re = Regex::new(r"[\s,;]+").unwrap();
    re.split(raw).filter(|token| !token.is_empty()).collect()
}

/// Tokens of a delimited list that are not email-shaped, in input order
pub fn invalid_emails(raw: &str) -> Vec<&str> {
    split_emails(raw)
        .into_iter()
        .filter(|token| !is_email(token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_email_accepts_basic_shape() {
        assert!(is_email("a@x.com"));
        assert!(is_email("first.last@sub.example.org"));
    }

    #[test]
    fn test_is_email_rejects_malformed() {
        assert!(!is_email(""));
        assert!(!is_email("bad-email"));
        assert!(!is_email("a@x"));
        assert!(!is_email("a@@x.com"));
        assert!(!is_email("a b@x.com"));
        assert!(!is_email("@x.com"));
        assert!(!is_email("a@x."));
    }

    #[test]
    fn test_split_emails_mixed_delimiters() {
        let tokens = split_emails("a@x.com, bad-email; c@y.org");
        assert_eq!(tokens, vec!["a@x.com", "bad-email", "c@y.org"]);
    }

    #[test]
    fn test_split_emails_drops_empty_tokens() {
        assert_eq!(split_emails(" ;, \n a@x.com ;;"), vec!["a@x.com"]);
        assert!(split_emails(" , ; ").is_empty());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(invalid_emails("a@x.com, bad-email; c@y.org"), vec!["bad-email"]);
        assert!(invalid_emails("a@x.com c@y.org").is_empty());
    }
}
