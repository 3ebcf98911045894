//! An in-memory document for running injectors without a browser.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use nanostyle_core::{StyleError, StyleResult};

use crate::host::{RuleSheet, StyleHost, StyleResource};

#[derive(Debug, Default)]
struct DocumentState {
    detached: bool,
    css_disabled: bool,
    rejected: Vec<String>,
    head: Vec<Rc<RefCell<StyleState>>>,
}

#[derive(Debug)]
struct StyleState {
    // Weak: the document's head holds its styles strongly.
    owner: Weak<RefCell<DocumentState>>,
    attached: bool,
    text: Vec<String>,
    rules: Vec<String>,
}

/// A document that records every mutation made through the host traits.
///
/// Clones share the same document.
///
/// ```rust
/// use nanostyle_dom::{MemoryDocument, RuleSheet, StyleHost, StyleResource};
///
/// let doc = MemoryDocument::new();
/// let style = doc.create_style().unwrap();
/// assert!(style.sheet().is_none());
///
/// doc.append_to_head(&style).unwrap();
/// let sheet = style.sheet().unwrap();
/// sheet.insert_rule(".a{color:red}", 0).unwrap();
/// assert_eq!(style.rules(), vec![".a{color:red}"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    state: Rc<RefCell<DocumentState>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host that is not a browser document, as on a server or in a worker.
    pub fn detached() -> Self {
        let doc = Self::new();
        doc.state.borrow_mut().detached = true;
        doc
    }

    /// A document whose style elements never produce a `sheet`.
    pub fn without_css() -> Self {
        let doc = Self::new();
        doc.state.borrow_mut().css_disabled = true;
        doc
    }

    /// Makes native insertion reject every rule containing `pattern`, the way
    /// a browser rejects selectors it does not understand.
    pub fn rejecting(self, pattern: impl Into<String>) -> Self {
        self.state.borrow_mut().rejected.push(pattern.into());
        self
    }

    /// Number of style elements currently in `<head>`.
    pub fn head_len(&self) -> usize {
        self.state.borrow().head.len()
    }
}

impl StyleHost for MemoryDocument {
    type Resource = MemoryStyle;

    fn is_document(&self) -> bool {
        !self.state.borrow().detached
    }

    fn create_style(&self) -> StyleResult<MemoryStyle> {
        Ok(MemoryStyle {
            state: Rc::new(RefCell::new(StyleState {
                owner: Rc::downgrade(&self.state),
                attached: false,
                text: Vec::new(),
                rules: Vec::new(),
            })),
        })
    }

    fn head_contains(&self, style: &MemoryStyle) -> bool {
        self.state
            .borrow()
            .head
            .iter()
            .any(|entry| Rc::ptr_eq(entry, &style.state))
    }

    fn append_to_head(&self, style: &MemoryStyle) -> StyleResult<()> {
        let mut doc = self.state.borrow_mut();
        if doc.detached {
            return Err(StyleError::dom("document has no <head>"));
        }
        doc.head.retain(|entry| !Rc::ptr_eq(entry, &style.state));
        doc.head.push(style.state.clone());

        let mut st = style.state.borrow_mut();
        st.attached = true;
        st.owner = Rc::downgrade(&self.state);
        Ok(())
    }
}

/// A `<style>` element owned by a [`MemoryDocument`].
#[derive(Debug, Clone)]
pub struct MemoryStyle {
    state: Rc<RefCell<StyleState>>,
}

impl PartialEq for MemoryStyle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Eq for MemoryStyle {}

impl MemoryStyle {
    pub fn is_attached(&self) -> bool {
        self.state.borrow().attached
    }

    /// Rules inserted natively, in sheet order.
    pub fn rules(&self) -> Vec<String> {
        self.state.borrow().rules.clone()
    }

    /// Text node children, in document order.
    pub fn text_fragments(&self) -> Vec<String> {
        self.state.borrow().text.clone()
    }

    /// `textContent` of the element.
    pub fn text_content(&self) -> String {
        self.state.borrow().text.concat()
    }
}

impl StyleResource for MemoryStyle {
    type Sheet = MemorySheet;

    fn sheet(&self) -> Option<MemorySheet> {
        let st = self.state.borrow();
        let css_enabled = st.owner.upgrade().is_some_and(|doc| {
            let doc = doc.borrow();
            !doc.css_disabled
        });
        if !st.attached || !css_enabled {
            return None;
        }
        Some(MemorySheet {
            style: self.state.clone(),
        })
    }

    fn append_text(&self, text: &str) -> StyleResult<()> {
        self.state.borrow_mut().text.push(text.to_string());
        Ok(())
    }
}

/// The rule list of an attached [`MemoryStyle`].
#[derive(Debug, Clone)]
pub struct MemorySheet {
    style: Rc<RefCell<StyleState>>,
}

impl RuleSheet for MemorySheet {
    fn rule_count(&self) -> u32 {
        self.style.borrow().rules.len() as u32
    }

    fn insert_rule(&self, rule: &str, index: u32) -> StyleResult<u32> {
        let mut st = self.style.borrow_mut();
        if index as usize > st.rules.len() {
            return Err(StyleError::rule_rejected(
                rule,
                format!(
                    "IndexSizeError: index {} is larger than the rule count {}",
                    index,
                    st.rules.len()
                ),
            ));
        }

        let normalized = rule.trim();
        if let Some(reason) = syntax_problem(normalized) {
            return Err(StyleError::rule_rejected(
                rule,
                format!("SyntaxError: {}", reason),
            ));
        }

        let rejected = st.owner.upgrade().is_some_and(|doc| {
            let doc = doc.borrow();
            doc.rejected
                .iter()
                .any(|pattern| normalized.contains(pattern.as_str()))
        });
        if rejected {
            return Err(StyleError::rule_rejected(
                rule,
                "SyntaxError: unsupported selector or at-rule",
            ));
        }

        st.rules.insert(index as usize, normalized.to_string());
        Ok(index)
    }
}

/// A shallow well-formedness check: exactly one rule, braces balanced.
fn syntax_problem(rule: &str) -> Option<&'static str> {
    if rule.is_empty() {
        return Some("empty rule");
    }

    // Statement at-rules: `@import url(a.css);`, `@layer base;`
    if rule.starts_with('@') && rule.ends_with(';') && !rule.contains('{') {
        return None;
    }

    let mut depth = 0usize;
    let mut blocks = 0usize;
    for c in rule.chars() {
        match c {
            '{' => depth += 1,
            '}' => {
                if depth == 0 {
                    return Some("unbalanced braces");
                }
                depth -= 1;
                if depth == 0 {
                    blocks += 1;
                }
            }
            _ if depth == 0 && blocks > 0 && !c.is_whitespace() => {
                return Some("only one rule can be inserted at a time");
            }
            _ => {}
        }
    }

    match (depth, blocks) {
        (0, 0) => Some("missing declaration block"),
        (0, 1) => None,
        (0, _) => Some("only one rule can be inserted at a time"),
        _ => Some("unbalanced braces"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached(doc: &MemoryDocument) -> MemoryStyle {
        let style = doc.create_style().unwrap();
        doc.append_to_head(&style).unwrap();
        style
    }

    #[test]
    fn test_sheet_requires_attachment() {
        let doc = MemoryDocument::new();
        let style = doc.create_style().unwrap();
        assert!(style.sheet().is_none());
        assert!(!doc.head_contains(&style));

        doc.append_to_head(&style).unwrap();
        assert!(style.sheet().is_some());
        assert!(doc.head_contains(&style));
        assert_eq!(doc.head_len(), 1);
    }

    #[test]
    fn test_append_is_idempotent_for_same_element() {
        let doc = MemoryDocument::new();
        let style = attached(&doc);
        doc.append_to_head(&style).unwrap();
        assert_eq!(doc.head_len(), 1);
    }

    #[test]
    fn test_head_keeps_styles_alive() {
        let doc = MemoryDocument::new();
        let style = attached(&doc);
        style.sheet().unwrap().insert_rule(".a{}", 0).unwrap();
        let sheet = style.sheet().unwrap();
        drop(style);

        assert_eq!(doc.head_len(), 1);
        assert_eq!(sheet.rule_count(), 1);
    }

    #[test]
    fn test_without_css_never_builds_sheet() {
        let doc = MemoryDocument::without_css();
        let style = attached(&doc);
        assert!(style.is_attached());
        assert!(style.sheet().is_none());
    }

    #[test]
    fn test_detached_has_no_head() {
        let doc = MemoryDocument::detached();
        assert!(!doc.is_document());
        let style = doc.create_style().unwrap();
        assert!(matches!(doc.append_to_head(&style), Err(StyleError::Dom(_))));
    }

    #[test]
    fn test_insert_at_index() {
        let doc = MemoryDocument::new();
        let style = attached(&doc);
        let sheet = style.sheet().unwrap();

        assert_eq!(sheet.insert_rule(".b{}", 0).unwrap(), 0);
        assert_eq!(sheet.insert_rule(".a{}", 0).unwrap(), 0);
        assert_eq!(sheet.insert_rule("  .c{}  ", 2).unwrap(), 2);
        assert_eq!(style.rules(), vec![".a{}", ".b{}", ".c{}"]);
        assert_eq!(sheet.rule_count(), 3);
    }

    #[test]
    fn test_index_past_end_is_rejected() {
        let doc = MemoryDocument::new();
        let style = attached(&doc);
        let sheet = style.sheet().unwrap();
        let err = sheet.insert_rule(".a{}", 1).unwrap_err();
        assert!(matches!(err, StyleError::RuleRejected { .. }));
        assert_eq!(sheet.rule_count(), 0);
    }

    #[test]
    fn test_malformed_rules_are_rejected() {
        let doc = MemoryDocument::new();
        let style = attached(&doc);
        let sheet = style.sheet().unwrap();

        for rule in ["", "   ", "color:red", ".a{", ".a}", ".a{}.b{}", ".a{}}"] {
            assert!(sheet.insert_rule(rule, 0).is_err(), "accepted {:?}", rule);
        }
        assert_eq!(sheet.rule_count(), 0);
    }

    #[test]
    fn test_at_rules_are_accepted() {
        let doc = MemoryDocument::new();
        let style = attached(&doc);
        let sheet = style.sheet().unwrap();

        sheet.insert_rule("@import url(a.css);", 0).unwrap();
        sheet
            .insert_rule("@media (min-width: 600px){.a{color:red}}", 1)
            .unwrap();
        assert_eq!(sheet.rule_count(), 2);
    }

    #[test]
    fn test_rejecting_pattern() {
        let doc = MemoryDocument::new().rejecting(":-moz-");
        let style = attached(&doc);
        let sheet = style.sheet().unwrap();

        let err = sheet.insert_rule("input:-moz-placeholder{color:red}", 0).unwrap_err();
        assert_eq!(
            err,
            StyleError::rule_rejected(
                "input:-moz-placeholder{color:red}",
                "SyntaxError: unsupported selector or at-rule"
            )
        );
        sheet.insert_rule("input::placeholder{color:red}", 0).unwrap();
        assert_eq!(style.rules(), vec!["input::placeholder{color:red}"]);
    }

    #[test]
    fn test_text_content_concatenates_fragments() {
        let doc = MemoryDocument::new();
        let style = doc.create_style().unwrap();
        style.append_text(".a{}").unwrap();
        style.append_text(".b{}").unwrap();
        assert_eq!(style.text_fragments(), vec![".a{}", ".b{}"]);
        assert_eq!(style.text_content(), ".a{}.b{}");
    }
}
