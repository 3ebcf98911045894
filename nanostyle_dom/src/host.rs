use nanostyle_core::StyleResult;

/// The slice of a document an injector needs: a way to make `<style>`
/// elements and a `<head>` to hang them on.
///
/// [`BrowserHost`](crate::BrowserHost) drives a real DOM through `web-sys`;
/// [`MemoryDocument`](crate::MemoryDocument) keeps everything in memory so
/// the injection logic can run off the browser.
pub trait StyleHost {
    type Resource: StyleResource;

    /// Whether this host is a live browser document.
    fn is_document(&self) -> bool;

    /// Creates a new, unattached style element.
    fn create_style(&self) -> StyleResult<Self::Resource>;

    /// Whether `style` is a descendant of the document head.
    fn head_contains(&self, style: &Self::Resource) -> bool;

    /// Appends `style` as the last child of the document head.
    fn append_to_head(&self, style: &Self::Resource) -> StyleResult<()>;
}

/// A style element.
pub trait StyleResource: Clone {
    type Sheet: RuleSheet;

    /// The native rule-access handle. `None` until the element is attached,
    /// or when the host declines to build a sheet (CSS disabled).
    fn sheet(&self) -> Option<Self::Sheet>;

    /// Appends `text` as a new text node child of the element.
    fn append_text(&self, text: &str) -> StyleResult<()>;
}

/// The parsed rule list behind a style element.
pub trait RuleSheet {
    fn rule_count(&self) -> u32;

    /// Parses `rule` and inserts it at `index`, returning the index used.
    ///
    /// Rejections are reported as
    /// [`StyleError::RuleRejected`](nanostyle_core::StyleError::RuleRejected).
    fn insert_rule(&self, rule: &str, index: u32) -> StyleResult<u32>;
}
