use wasm_bindgen::{JsCast, JsValue};

/// Errors raised while acquiring a stylesheet or committing rules to it.
///
/// Only [`Environment`](StyleError::Environment),
/// [`UninitializedStyleSheet`](StyleError::UninitializedStyleSheet) and
/// [`Dom`](StyleError::Dom) ever reach a caller of the injector.
/// [`RuleRejected`](StyleError::RuleRejected) is produced by hosts and
/// dropped by the injector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// No browser document is available to attach a stylesheet to.
    #[error("stylesheet injection is only supported inside a browser document")]
    Environment,

    /// The style element exists but the host never produced its `sheet`.
    #[error("expected the style element to expose a stylesheet (`sheet` is null)")]
    UninitializedStyleSheet,

    /// The host refused a rule passed to native insertion.
    #[error("rule `{rule}` was rejected: {reason}")]
    RuleRejected { rule: String, reason: String },

    /// Any other exception thrown by the host document.
    #[error("DOM error: {0}")]
    Dom(String),
}

impl StyleError {
    pub fn rule_rejected(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RuleRejected {
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom(message.into())
    }
}

/// Extracts a readable message from a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}

impl From<JsValue> for StyleError {
    fn from(value: JsValue) -> Self {
        StyleError::Dom(js_message(&value))
    }
}

pub type StyleResult<T> = Result<T, StyleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = StyleError::rule_rejected(".a::-moz-focus-inner{}", "unknown pseudo-element");
        assert_eq!(
            err.to_string(),
            "rule `.a::-moz-focus-inner{}` was rejected: unknown pseudo-element"
        );
        assert_eq!(StyleError::dom("boom").to_string(), "DOM error: boom");
    }
}
