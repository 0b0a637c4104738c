//! Unicode script classification for suppression heuristics
//!
//! Codepoint-range checks for the scripts the suppression classifier can
//! recognize without a detection round-trip. CJK scripts lack whitespace
//! word delimiters, so text length is judged in characters for CJK and in
//! words otherwise.

/// Minimum character count for a CJK span to stand on its own
pub const CJK_SHORT_CHARS: usize = 5;

/// Minimum word count for a space-delimited span to stand on its own
pub const SHORT_WORD_COUNT: usize = 3;

/// Check if the character is a Han (CJK ideograph) codepoint
#[inline]
pub fn is_han(ch: char) -> bool {
    matches!(ch,
        '\u{4E00}'..='\u{9FFF}'     // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}'   // Extension A
        | '\u{F900}'..='\u{FAFF}'   // Compatibility Ideographs
        | '\u{20000}'..='\u{2A6DF}' // Extension B
    )
}

/// Check if the character is Hiragana
#[inline]
pub fn is_hiragana(ch: char) -> bool {
    matches!(ch, '\u{3040}'..='\u{309F}')
}

/// Check if the character is Katakana (fullwidth or halfwidth)
#[inline]
pub fn is_katakana(ch: char) -> bool {
    matches!(ch, '\u{30A0}'..='\u{30FF}' | '\u{FF66}'..='\u{FF9D}')
}

/// Check if the character is Kana of either syllabary
///
/// Kana is unique to Japanese among the CJK scripts handled here, which
/// makes it a conclusive signal where Han alone is ambiguous.
#[inline]
pub fn is_kana(ch: char) -> bool {
    is_hiragana(ch) || is_katakana(ch)
}

/// Check if the character is Hangul (syllables or jamo)
#[inline]
pub fn is_hangul(ch: char) -> bool {
    matches!(ch,
        '\u{AC00}'..='\u{D7AF}'   // Syllables
        | '\u{1100}'..='\u{11FF}' // Jamo
        | '\u{3130}'..='\u{318F}' // Compatibility Jamo
    )
}

/// Check if the character is Cyrillic
#[inline]
pub fn is_cyrillic(ch: char) -> bool {
    matches!(ch, '\u{0400}'..='\u{04FF}' | '\u{0500}'..='\u{052F}')
}

/// Check if the character belongs to any CJK script
#[inline]
pub fn is_cjk(ch: char) -> bool {
    is_han(ch) || is_kana(ch) || is_hangul(ch)
}

/// Check if the text contains any Kana codepoint
pub fn contains_kana(text: &str) -> bool {
    text.chars().any(is_kana)
}

/// Check if the text contains any Han codepoint
pub fn contains_han(text: &str) -> bool {
    text.chars().any(is_han)
}

/// Check if the text contains any Hangul codepoint
pub fn contains_hangul(text: &str) -> bool {
    text.chars().any(is_hangul)
}

/// Check if the text contains any Cyrillic codepoint
pub fn contains_cyrillic(text: &str) -> bool {
    text.chars().any(is_cyrillic)
}

/// Ratio of Han codepoints to total character count
///
/// Returns 0.0 for empty text.
pub fn han_ratio(text: &str) -> f64 {
    let mut total = 0usize;
    let mut han = 0usize;
    for ch in text.chars() {
        total += 1;
        if is_han(ch) {
            han += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    han as f64 / total as f64
}

/// Judge whether a candidate span is too short to carry enough meaning
///
/// CJK text is measured in characters, everything else in tokens that
/// contain at least one alphanumeric character.
pub fn is_short_fragment(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return true;
    }
    if trimmed.chars().any(is_cjk) {
        trimmed.chars().count() < CJK_SHORT_CHARS
    } else {
        let words = trimmed
            .split_whitespace()
            .filter(|tok| tok.chars().any(|c| c.is_alphanumeric()))
            .count();
        words < SHORT_WORD_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_han_detection() {
        assert!(is_han('你'));
        assert!(is_han('世'));
        assert!(!is_han('a'));
        assert!(!is_han('あ'));
        assert!(!is_han('한'));
    }

    #[test]
    fn test_kana_detection() {
        assert!(is_kana('あ'));
        assert!(is_kana('ア'));
        assert!(is_kana('ｱ')); // halfwidth
        assert!(!is_kana('你'));
        assert!(!is_kana('a'));
    }

    #[test]
    fn test_hangul_detection() {
        assert!(is_hangul('한'));
        assert!(is_hangul('안'));
        assert!(!is_hangul('你'));
        assert!(!is_hangul('a'));
    }

    #[test]
    fn test_cyrillic_detection() {
        assert!(is_cyrillic('д'));
        assert!(is_cyrillic('Я'));
        assert!(!is_cyrillic('a'));
    }

    #[test]
    fn test_han_ratio() {
        assert_eq!(han_ratio(""), 0.0);
        assert_eq!(han_ratio("abcd"), 0.0);
        assert_eq!(han_ratio("你好"), 1.0);
        // 1 Han out of 20 chars = exactly 0.05
        let text = "你aaaaaaaaaaaaaaaaaaa";
        assert_eq!(text.chars().count(), 20);
        assert!((han_ratio(text) - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_short_fragment_words() {
        assert!(is_short_fragment(""));
        assert!(is_short_fragment("   "));
        assert!(is_short_fragment("hello"));
        assert!(is_short_fragment("hello world"));
        assert!(!is_short_fragment("hello wide world"));
        // Punctuation-only tokens do not count as words
        assert!(is_short_fragment("hello , world"));
    }

    #[test]
    fn test_short_fragment_cjk() {
        assert!(is_short_fragment("你好"));
        assert!(is_short_fragment("你好世界"));
        assert!(!is_short_fragment("你好世界和平"));
        // Mixed text with any CJK is measured in characters
        assert!(!is_short_fragment("你好ab三"));
    }
}
