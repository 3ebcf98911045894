use std::fmt;

use nanostyle_core::{BuildMode, StyleError, StyleResult};
use nanostyle_dom::{BrowserHost, HtmlStyleElement, RuleSheet, StyleHost, StyleResource};

use crate::options::InjectorOptions;

/// How rules reach the stylesheet. Fixed for the life of an injector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertionMode {
    /// `CSSStyleSheet.insertRule`. Fast, but the rules don't show up in the
    /// style editor of most devtools.
    FastInsert,
    /// A text node per rule. Slower, fully inspectable.
    TextAppend,
}

impl InsertionMode {
    /// An explicit choice wins; otherwise production inserts natively and
    /// development appends text.
    pub fn resolve(use_insert_rule: Option<bool>, mode: BuildMode) -> Self {
        if use_insert_rule.unwrap_or(mode.is_production()) {
            InsertionMode::FastInsert
        } else {
            InsertionMode::TextAppend
        }
    }
}

/// Owns one `<style>` element in the document head and commits raw CSS rules to it.
///
/// Rules are appended in call order and never deduplicated. A rule the
/// browser refuses to parse is dropped without an error, so one unsupported
/// selector cannot take down the rest of the styling.
///
/// # Example
///
/// ```rust,ignore
/// use nanostyle_css::{Injector, InjectorOptions};
///
/// let injector = Injector::new(InjectorOptions::new())?;
/// injector.insert_rule(".nano-1{color:red}");
/// ```
pub struct Injector<H: StyleHost = BrowserHost> {
    host: H,
    style_sheet: H::Resource,
    insertion_mode: InsertionMode,
    build_mode: BuildMode,
    prefix: Option<String>,
}

impl Injector<BrowserHost> {
    /// Creates an injector on the global browser document.
    pub fn new(options: InjectorOptions<HtmlStyleElement>) -> StyleResult<Self> {
        Self::with_host(BrowserHost::current(), options)
    }
}

impl<H: StyleHost> Injector<H> {
    /// Creates an injector on `host`.
    ///
    /// Fails with [`StyleError::Environment`] if `host` is not a document and
    /// with [`StyleError::UninitializedStyleSheet`] if the style element has
    /// no sheet once attached.
    pub fn with_host(host: H, options: InjectorOptions<H::Resource>) -> StyleResult<Self> {
        if !host.is_document() {
            return Err(StyleError::Environment);
        }

        let style_sheet = match options.style_sheet {
            Some(style) => style,
            None => host.create_style()?,
        };
        if !host.head_contains(&style_sheet) {
            host.append_to_head(&style_sheet)?;
        }
        if style_sheet.sheet().is_none() {
            return Err(StyleError::UninitializedStyleSheet);
        }

        let build_mode = options.build_mode.unwrap_or_else(BuildMode::detect);
        let insertion_mode = InsertionMode::resolve(options.use_insert_rule, build_mode);
        nanostyle_core::debug!("injector ready: {} build, {:?}", build_mode, insertion_mode);

        Ok(Self {
            host,
            style_sheet,
            insertion_mode,
            build_mode,
            prefix: options.prefix,
        })
    }

    /// Commits `rule` to the stylesheet.
    ///
    /// Never fails: rules the host rejects are dropped.
    pub fn insert_rule(&self, rule: &str) {
        let result = match self.insertion_mode {
            InsertionMode::FastInsert => self.insert_native(rule),
            InsertionMode::TextAppend => self.style_sheet.append_text(rule),
        };
        if let Err(err) = result {
            nanostyle_core::debug!("dropped rule: {}", err);
        }
    }

    fn insert_native(&self, rule: &str) -> StyleResult<()> {
        let sheet = self
            .style_sheet
            .sheet()
            .ok_or(StyleError::UninitializedStyleSheet)?;
        sheet.insert_rule(rule, sheet.rule_count())?;
        Ok(())
    }

    pub fn style_sheet(&self) -> &H::Resource {
        &self.style_sheet
    }

    pub fn insertion_mode(&self) -> InsertionMode {
        self.insertion_mode
    }

    pub fn uses_insert_rule(&self) -> bool {
        self.insertion_mode == InsertionMode::FastInsert
    }

    pub fn build_mode(&self) -> BuildMode {
        self.build_mode
    }

    pub fn is_development(&self) -> bool {
        self.build_mode.is_development()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H> fmt::Debug for Injector<H>
where
    H: StyleHost + fmt::Debug,
    H::Resource: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Injector")
            .field("host", &self.host)
            .field("style_sheet", &self.style_sheet)
            .field("insertion_mode", &self.insertion_mode)
            .field("build_mode", &self.build_mode)
            .field("prefix", &self.prefix)
            .finish()
    }
}
