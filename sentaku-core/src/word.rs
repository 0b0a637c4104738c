//! Word-character classification and span growth
//!
//! UI-oriented "word" semantics for click-to-translate: a run of ASCII
//! alphanumerics plus apostrophe and hyphen, so contractions ("don't")
//! and hyphenated compounds ("well-known") resolve as one word.

/// Check if the character belongs to a word run
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '\'' | '-')
}

/// The character starting at byte `offset`, if any
#[inline]
pub fn char_at(text: &str, offset: usize) -> Option<char> {
    text.get(offset..)?.chars().next()
}

/// The character ending at byte `offset`, if any
#[inline]
pub fn char_before(text: &str, offset: usize) -> Option<char> {
    text.get(..offset)?.chars().next_back()
}

/// Grow a word span around the character at byte `offset`
///
/// Returns the half-open byte range of the maximal word-character run
/// containing `offset`, or `None` when the character there is not a word
/// character.
pub fn word_span_at(text: &str, offset: usize) -> Option<(usize, usize)> {
    let ch = char_at(text, offset)?;
    if !is_word_char(ch) {
        return None;
    }

    let mut start = offset;
    while let Some(prev) = char_before(text, start) {
        if !is_word_char(prev) {
            break;
        }
        start -= prev.len_utf8();
    }

    let mut end = offset + ch.len_utf8();
    while let Some(next) = char_at(text, end) {
        if !is_word_char(next) {
            break;
        }
        end += next.len_utf8();
    }

    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_char_class() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(is_word_char('\''));
        assert!(is_word_char('-'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('.'));
        assert!(!is_word_char('你'));
    }

    #[test]
    fn test_span_middle_of_word() {
        let text = "the quick fox";
        assert_eq!(word_span_at(text, 6), Some((4, 9))); // inside "quick"
        assert_eq!(&text[4..9], "quick");
    }

    #[test]
    fn test_span_at_word_edges() {
        let text = "alpha beta";
        assert_eq!(word_span_at(text, 0), Some((0, 5)));
        assert_eq!(word_span_at(text, 6), Some((6, 10)));
        assert_eq!(word_span_at(text, 5), None); // the space
    }

    #[test]
    fn test_span_contraction_and_hyphen() {
        let text = "don't well-known";
        assert_eq!(word_span_at(text, 1), Some((0, 5)));
        assert_eq!(word_span_at(text, 8), Some((6, 16)));
    }

    #[test]
    fn test_char_helpers() {
        let text = "héllo";
        assert_eq!(char_at(text, 1), Some('é'));
        assert_eq!(char_at(text, 2), None); // mid-codepoint
        assert_eq!(char_before(text, 3), Some('é'));
        assert_eq!(char_before(text, 0), None);
    }
}
