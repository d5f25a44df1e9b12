//! Whitespace normalization of single lines.

use std::borrow::Cow;

/// Canonicalize one line for comparison.
///
/// Lines that are not valid UTF-8 are returned unchanged. Decodable lines are
/// trimmed and every internal run of whitespace becomes a single ASCII space.
pub fn normalize_line(line: &[u8]) -> Cow<'_, [u8]> {
    match std::str::from_utf8(line) {
        Ok(text) => match normalize_str(text) {
            Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
            Cow::Owned(s) => Cow::Owned(s.into_bytes()),
        },
        Err(_) => Cow::Borrowed(line),
    }
}

/// [`normalize_line`] for text already known to be UTF-8.
pub fn normalize_str(text: &str) -> Cow<'_, str> {
    let trimmed = text.trim();
    if is_collapsed(trimmed) {
        return Cow::Borrowed(trimmed);
    }

    let mut out = String::with_capacity(trimmed.len());
    for (i, word) in trimmed.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(word);
    }
    Cow::Owned(out)
}

// True if the only whitespace is single ASCII spaces.
fn is_collapsed(text: &str) -> bool {
    let mut prev_space = false;
    for c in text.chars() {
        if c == ' ' {
            if prev_space {
                return false;
            }
            prev_space = true;
        } else if c.is_whitespace() {
            return false;
        } else {
            prev_space = false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn trims_and_collapses() {
        assert_eq!(
            normalize_line(b"  www   IN\tA \t 192.0.2.1 \r\n").as_ref(),
            b"www IN A 192.0.2.1"
        );
    }

    #[test]
    fn unicode_whitespace_is_collapsed() {
        assert_eq!(normalize_str("a\u{3000}\u{a0}b"), "a b");
    }

    #[test]
    fn blank_line_becomes_empty() {
        assert_eq!(normalize_line(b" \t\n").as_ref(), b"");
    }

    #[test]
    fn already_normal_line_is_borrowed() {
        assert!(matches!(normalize_str("a b c"), Cow::Borrowed("a b c")));
    }

    #[test]
    fn invalid_utf8_is_untouched() {
        let raw: &[u8] = b"  \xff\xfe  spaced  \n";
        let out = normalize_line(raw);
        assert_eq!(out.as_ref(), raw);
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn distinct_tokens_stay_distinct() {
        assert_ne!(normalize_str("ab c"), normalize_str("a bc"));
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(line in "[ \t\u{a0}a-z0-9;]{0,40}") {
            let once = normalize_str(&line).into_owned();
            let twice = normalize_str(&once).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn byte_normalization_is_idempotent(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let once = normalize_line(&bytes).into_owned();
            let twice = normalize_line(&once).into_owned();
            prop_assert_eq!(once, twice);
        }
    }
}
