use nanostyle_core::error::js_message;
use nanostyle_core::{StyleError, StyleResult};
use wasm_bindgen::JsCast;
use web_sys::{CssStyleSheet, Document, HtmlElement, HtmlHeadElement, HtmlStyleElement, Node, Window};

use crate::host::{RuleSheet, StyleHost, StyleResource};

// --- Window & Document Access ---

thread_local! {
    static CURRENT: BrowserHost = BrowserHost::lookup();
}

/// The global browser document, accessed through `web-sys`.
///
/// Off `wasm32` there is no window to find, so the host reports that it is
/// not a document and injector construction fails cleanly instead of
/// panicking inside `wasm-bindgen`.
#[derive(Debug, Clone)]
pub struct BrowserHost {
    window: Option<Window>,
    document: Option<Document>,
}

impl BrowserHost {
    /// Returns the host for the global `window.document`, looked up once per thread.
    pub fn current() -> Self {
        CURRENT.with(|host| host.clone())
    }

    /// Wraps a specific document, e.g. the content document of an iframe.
    pub fn from_document(document: Document) -> Self {
        Self {
            window: document.default_view(),
            document: Some(document),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn lookup() -> Self {
        let window = web_sys::window();
        let document = window.as_ref().and_then(|w| w.document());
        Self { window, document }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn lookup() -> Self {
        Self {
            window: None,
            document: None,
        }
    }

    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    fn head(&self) -> StyleResult<HtmlHeadElement> {
        self.document
            .as_ref()
            .and_then(|doc| doc.head())
            .ok_or(StyleError::Environment)
    }
}

impl StyleHost for BrowserHost {
    type Resource = HtmlStyleElement;

    fn is_document(&self) -> bool {
        // XML and bare SVG documents have a non-HTML root and no usable <head>.
        self.window.is_some()
            && self
                .document
                .as_ref()
                .and_then(|doc| doc.document_element())
                .is_some_and(|root| root.dyn_ref::<HtmlElement>().is_some())
    }

    fn create_style(&self) -> StyleResult<HtmlStyleElement> {
        let doc = self.document.as_ref().ok_or(StyleError::Environment)?;
        doc.create_element("style")?
            .dyn_into::<HtmlStyleElement>()
            .map_err(|_| StyleError::dom("created element is not a <style> element"))
    }

    fn head_contains(&self, style: &HtmlStyleElement) -> bool {
        let node: &Node = style.as_ref();
        self.head()
            .map(|head| head.contains(Some(node)))
            .unwrap_or(false)
    }

    fn append_to_head(&self, style: &HtmlStyleElement) -> StyleResult<()> {
        let node: &Node = style.as_ref();
        self.head()?.append_child(node)?;
        Ok(())
    }
}

impl StyleResource for HtmlStyleElement {
    type Sheet = CssStyleSheet;

    fn sheet(&self) -> Option<CssStyleSheet> {
        HtmlStyleElement::sheet(self).and_then(|sheet| sheet.dyn_into::<CssStyleSheet>().ok())
    }

    fn append_text(&self, text: &str) -> StyleResult<()> {
        let doc = self
            .owner_document()
            .ok_or_else(|| StyleError::dom("style element has no owner document"))?;
        let node = doc.create_text_node(text);
        self.append_child(&node)?;
        Ok(())
    }
}

impl RuleSheet for CssStyleSheet {
    fn rule_count(&self) -> u32 {
        // Cross-origin sheets throw on `cssRules`; they also reject insertRule.
        self.css_rules().map(|rules| rules.length()).unwrap_or(0)
    }

    fn insert_rule(&self, rule: &str, index: u32) -> StyleResult<u32> {
        self.insert_rule_with_index(rule, index)
            .map_err(|err| StyleError::rule_rejected(rule, js_message(&err)))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_no_document_off_wasm() {
        let host = BrowserHost::current();
        assert!(!host.is_document());
        assert!(host.window().is_none());
        assert!(host.document().is_none());
        assert_eq!(host.create_style().unwrap_err(), StyleError::Environment);
    }
}
