//! Native-language suppression classification
//!
//! Decides whether offering a translation is useful or whether the text
//! already appears to be in the user's target language. Script-unique
//! codepoint checks are synchronous and cover the common cases (a Chinese
//! reader re-selecting Chinese prose); the async detection service is
//! consulted only where scripts overlap (Han) or the target has no unique
//! codepoint signature, trading a round-trip for accuracy only when
//! necessary.

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use sentaku_core::script;
use tracing::debug;

/// Han-character ratio above which text counts as Chinese prose
pub const HAN_RATIO_THRESHOLD: f64 = 0.05;

/// Opaque async language-detection service
///
/// Returns an ISO 639-1 code (region subtags permitted) or `None` when
/// the input is inconclusive. Implementations receive a plain string
/// copy; no document positions cross this boundary.
pub trait LanguageDetector: Send + Sync {
    /// Detect the dominant language of `text`
    fn detect<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Option<String>>;
}

/// Detector that never produces an answer
///
/// Keeps the engine usable without a detection backend; every undecided
/// case fails open toward showing the translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDetector;

impl LanguageDetector for NullDetector {
    fn detect<'a>(&'a self, _text: &'a str) -> BoxFuture<'a, Option<String>> {
        Box::pin(async { None })
    }
}

/// Classifies text against the user's target language
#[derive(Clone)]
pub struct SuppressionClassifier {
    detector: Arc<dyn LanguageDetector>,
}

impl fmt::Debug for SuppressionClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuppressionClassifier").finish_non_exhaustive()
    }
}

impl Default for SuppressionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip the region subtag and lowercase: `zh-CN` and `zh_TW` both
/// normalize to `zh`
fn base_code(code: &str) -> String {
    code.split(['-', '_'])
        .next()
        .unwrap_or(code)
        .trim()
        .to_ascii_lowercase()
}

impl SuppressionClassifier {
    /// Create a classifier with no detection backend
    pub fn new() -> Self {
        Self {
            detector: Arc::new(NullDetector),
        }
    }

    /// Create a classifier backed by a detection service
    pub fn with_detector(detector: Arc<dyn LanguageDetector>) -> Self {
        Self { detector }
    }

    /// Decide whether translation should be offered
    ///
    /// `true` means "proceed"; `false` means the text already appears to
    /// be in the target language. `context` is surrounding prose used
    /// only for the async fallback and is consumed as a plain string.
    pub async fn should_show(&self, text: &str, target: &str, context: Option<&str>) -> bool {
        let target = base_code(target);
        let show = match target.as_str() {
            "zh" => self.should_show_chinese(text, context).await,
            // Kana is unique to Japanese; Han-only text stays ambiguous
            // with Chinese and is not suppressed
            "ja" => !script::contains_kana(text),
            "ko" => !script::contains_hangul(text),
            "ru" => !script::contains_cyrillic(text),
            // No suppression path for English targets
            "en" => true,
            other => match self.detect_context(context).await {
                Some(detected) => base_code(&detected) != other,
                None => true,
            },
        };
        if !show {
            debug!(target = %target, "suppressing native-language text");
        }
        show
    }

    async fn should_show_chinese(&self, text: &str, context: Option<&str>) -> bool {
        // Any Kana means Japanese text, not Chinese
        if script::contains_kana(text) {
            return true;
        }
        let ratio = script::han_ratio(text);
        if ratio > HAN_RATIO_THRESHOLD {
            return false;
        }
        // Some Han below the threshold is inconclusive; ask the
        // detector about the surrounding prose. Text with no Han at all
        // is conclusively not Chinese.
        if ratio > 0.0 {
            if let Some(detected) = self.detect_context(context).await {
                if base_code(&detected) == "zh" {
                    return false;
                }
            }
        }
        true
    }

    async fn detect_context(&self, context: Option<&str>) -> Option<String> {
        let context = context?.trim();
        if context.is_empty() {
            return None;
        }
        self.detector.detect(context).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Detector answering with a fixed code
    struct FixedDetector(Option<&'static str>);

    impl LanguageDetector for FixedDetector {
        fn detect<'a>(&'a self, _text: &'a str) -> BoxFuture<'a, Option<String>> {
            let answer = self.0.map(str::to_string);
            Box::pin(async move { answer })
        }
    }

    #[test]
    fn test_base_code_normalization() {
        assert_eq!(base_code("zh-CN"), "zh");
        assert_eq!(base_code("zh_TW"), "zh");
        assert_eq!(base_code("EN"), "en");
        assert_eq!(base_code("ja"), "ja");
    }

    #[tokio::test]
    async fn test_chinese_ratio_threshold() {
        let classifier = SuppressionClassifier::new();

        assert!(!classifier.should_show("你好世界", "zh", None).await);

        // Exactly at the threshold: 1 Han in 20 chars is not suppressed
        let at = "你aaaaaaaaaaaaaaaaaaa";
        assert!(classifier.should_show(at, "zh", None).await);

        // Just above: 3 Han in 50 chars
        let above = format!("你好吗{}", "a".repeat(47));
        assert!(!classifier.should_show(&above, "zh", None).await);
    }

    #[tokio::test]
    async fn test_kana_overrides_han_for_chinese_target() {
        let classifier = SuppressionClassifier::new();

        // Japanese prose is mostly Han plus Kana; never suppress for zh
        assert!(classifier.should_show("日本語のテスト", "zh", None).await);
    }

    #[tokio::test]
    async fn test_chinese_inconclusive_consults_context() {
        let detector = Arc::new(FixedDetector(Some("zh-CN")));
        let classifier = SuppressionClassifier::with_detector(detector);

        // One Han in plenty of Latin text: below the ratio, so the
        // context decides
        let text = "你aaaaaaaaaaaaaaaaaaa";
        assert!(!classifier.should_show(text, "zh", Some("周围的中文上下文")).await);
        // Without context the classifier fails open
        assert!(classifier.should_show(text, "zh", None).await);
        // Pure Latin text never reaches the detector
        assert!(classifier.should_show("plain english", "zh", Some("context")).await);
    }

    #[tokio::test]
    async fn test_japanese_kana_is_conclusive() {
        let classifier = SuppressionClassifier::new();

        assert!(!classifier.should_show("ひらがな", "ja", None).await);
        assert!(!classifier.should_show("カタカナ", "ja", None).await);
        // Han-only text is ambiguous with Chinese and stays shown
        assert!(classifier.should_show("漢字", "ja", None).await);
        assert!(classifier.should_show("english", "ja", None).await);
    }

    #[tokio::test]
    async fn test_korean_and_russian_scripts() {
        let classifier = SuppressionClassifier::new();

        assert!(classifier.should_show("test", "ko", None).await);
        assert!(!classifier.should_show("안녕", "ko", None).await);
        assert!(!classifier.should_show("한국어 test", "ko", None).await);

        assert!(!classifier.should_show("привет", "ru", None).await);
        assert!(classifier.should_show("hello", "ru", None).await);
    }

    #[tokio::test]
    async fn test_english_target_never_suppresses() {
        let classifier = SuppressionClassifier::new();

        assert!(classifier.should_show("hello", "en", None).await);
        assert!(classifier.should_show("你好", "en", None).await);
    }

    #[tokio::test]
    async fn test_other_target_uses_detection() {
        let detector = Arc::new(FixedDetector(Some("de")));
        let classifier = SuppressionClassifier::with_detector(detector);

        assert!(!classifier.should_show("hallo welt", "de", Some("umgebender text")).await);
        assert!(classifier.should_show("bonjour", "fr", Some("texte")).await);
        // No context defaults to showing
        assert!(classifier.should_show("hallo welt", "de", None).await);
    }

    #[tokio::test]
    async fn test_detection_failure_fails_open() {
        let detector = Arc::new(FixedDetector(None));
        let classifier = SuppressionClassifier::with_detector(detector);

        assert!(classifier.should_show("hallo welt", "de", Some("kontext")).await);
    }

    #[tokio::test]
    async fn test_region_subtag_stripped() {
        let classifier = SuppressionClassifier::new();

        assert!(!classifier.should_show("你好世界", "zh-CN", None).await);
        assert!(!classifier.should_show("ひらがな", "ja-JP", None).await);
    }
}
