//! Rich-text escaping for free-text profile fields.
//!
//! Not idempotent: sanitize exactly once, when a field is ingested.

/// Characters that carry meaning in the chat front end's rich-text markup
const SPECIAL_CHARS: &[char] = &[
    '*', '_', '`', '[', ']', '(', ')', '~', '>', '#', '+', '=', '|', '{', '}', '.', '!', '-',
];

const ESCAPE: char = '\\';

/// Prefix every rich-text-significant character with a backslash
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        if SPECIAL_CHARS.contains(&c) {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Undo one round of [`sanitize`].
///
/// Used before pattern mining so that dots and dashes inside emails and
/// phone numbers are seen as typed.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            if let Some(&next) = chars.peek() {
                if SPECIAL_CHARS.contains(&next) {
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_special_chars() {
        assert_eq!(sanitize("a.b-c!"), r"a\.b\-c\!");
        assert_eq!(sanitize("*bold* _it_"), r"\*bold\* \_it\_");
        assert_eq!(sanitize("plain text"), "plain text");
    }

    #[test]
    fn test_not_idempotent() {
        for s in ["hi!", "a.b", "(x)", "#tag"] {
            let once = sanitize(s);
            assert_ne!(sanitize(&once), once, "{s}");
        }
    }

    #[test]
    fn test_unescape_reverses_one_round() {
        let raw = "mail a.b@example.com or call 555-123-4567 (office)";
        assert_eq!(unescape(&sanitize(raw)), raw);
        assert_eq!(unescape(r"back\slash"), r"back\slash");
    }
}
