//! Data Transfer Objects for API consumers
//!
//! Flat, serializable mirrors of the engine's verdict for messaging
//! layers that cannot carry document handles across process boundaries.

use sentaku_engine::{TextRange, Verdict};

/// A range as plain numbers (FFI-safe DTO)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeDTO {
    /// Handle of the start leaf
    pub start_leaf: u32,
    /// Byte offset within the start leaf
    pub start_offset: usize,
    /// Handle of the end leaf
    pub end_leaf: u32,
    /// Byte offset within the end leaf
    pub end_offset: usize,
}

impl From<&TextRange> for RangeDTO {
    fn from(range: &TextRange) -> Self {
        Self {
            start_leaf: range.start.leaf.0,
            start_offset: range.start.offset,
            end_leaf: range.end.leaf.0,
            end_offset: range.end.offset,
        }
    }
}

/// A pipeline verdict as plain data
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerdictDTO {
    /// Whether the gesture resolved to translatable text
    pub is_valid: bool,
    /// Extracted text, empty for rejections
    pub text: String,
    /// Resolved range, absent for rejections
    pub range: Option<RangeDTO>,
    /// Machine-readable reason, `"ok"` for valid verdicts
    pub reason: String,
    /// Whether transient UI must be torn down
    pub should_cleanup: bool,
}

impl From<&Verdict> for VerdictDTO {
    fn from(verdict: &Verdict) -> Self {
        match verdict {
            Verdict::Valid(resolved) => Self {
                is_valid: true,
                text: resolved.text.clone(),
                range: Some(RangeDTO::from(&resolved.range)),
                reason: "ok".to_string(),
                should_cleanup: false,
            },
            Verdict::Invalid { reason, cleanup } => Self {
                is_valid: false,
                text: String::new(),
                range: None,
                reason: reason.as_str().to_string(),
                should_cleanup: *cleanup,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentaku_engine::RejectReason;

    #[test]
    fn test_invalid_verdict_dto() {
        let verdict = Verdict::Invalid {
            reason: RejectReason::SuppressedNative,
            cleanup: true,
        };
        let dto = VerdictDTO::from(&verdict);
        assert!(!dto.is_valid);
        assert_eq!(dto.reason, "suppressed-native");
        assert!(dto.should_cleanup);
        assert!(dto.range.is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_dto_serializes() {
        let verdict = Verdict::Invalid {
            reason: RejectReason::TooLong,
            cleanup: true,
        };
        let json = serde_json::to_string(&VerdictDTO::from(&verdict)).unwrap();
        assert!(json.contains("\"too-long\""));
    }
}
