use nanostyle_core::BuildMode;
use nanostyle_dom::HtmlStyleElement;

/// Construction options for an [`Injector`](crate::Injector).
///
/// `R` is the host's style element type; for the browser host it is
/// [`HtmlStyleElement`].
#[derive(Debug, Clone)]
pub struct InjectorOptions<R = HtmlStyleElement> {
    /// Class-name prefix for the naming layer. The injector only stores it.
    pub prefix: Option<String>,
    /// An existing style element to write into instead of creating one.
    pub style_sheet: Option<R>,
    /// Forces native insertion (`true`) or text append (`false`).
    pub use_insert_rule: Option<bool>,
    /// Build mode to use instead of reading `NODE_ENV`.
    pub build_mode: Option<BuildMode>,
}

impl<R> Default for InjectorOptions<R> {
    fn default() -> Self {
        Self {
            prefix: None,
            style_sheet: None,
            use_insert_rule: None,
            build_mode: None,
        }
    }
}

impl<R> InjectorOptions<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn style_sheet(mut self, style: R) -> Self {
        self.style_sheet = Some(style);
        self
    }

    pub fn use_insert_rule(mut self, enabled: bool) -> Self {
        self.use_insert_rule = Some(enabled);
        self
    }

    pub fn build_mode(mut self, mode: BuildMode) -> Self {
        self.build_mode = Some(mode);
        self
    }

    /// Builds options from the serializable part of the configuration.
    #[cfg(feature = "serde")]
    pub fn from_config(config: InjectorConfig) -> Self {
        Self {
            prefix: config.prefix,
            style_sheet: None,
            use_insert_rule: config.use_insert_rule,
            build_mode: config.build_mode,
        }
    }
}

/// The options that can be loaded from JSON or any other serde format.
/// Style elements are live handles and are always supplied in code.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InjectorConfig {
    pub prefix: Option<String>,
    pub use_insert_rule: Option<bool>,
    pub build_mode: Option<BuildMode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanostyle_dom::MemoryStyle;

    #[test]
    fn test_builder() {
        let opts = InjectorOptions::<MemoryStyle>::new()
            .prefix("nano-")
            .use_insert_rule(false)
            .build_mode(BuildMode::Production);
        assert_eq!(opts.prefix.as_deref(), Some("nano-"));
        assert_eq!(opts.use_insert_rule, Some(false));
        assert_eq!(opts.build_mode, Some(BuildMode::Production));
        assert!(opts.style_sheet.is_none());
    }

    #[test]
    fn test_default_is_empty() {
        let opts = InjectorOptions::<MemoryStyle>::default();
        assert!(opts.prefix.is_none());
        assert!(opts.use_insert_rule.is_none());
        assert!(opts.build_mode.is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_config() {
        let config: InjectorConfig =
            serde_json::from_str(r#"{"prefix":"x-","useInsertRule":true,"buildMode":"production"}"#)
                .unwrap();
        let opts = InjectorOptions::<MemoryStyle>::from_config(config);
        assert_eq!(opts.prefix.as_deref(), Some("x-"));
        assert_eq!(opts.use_insert_rule, Some(true));
        assert_eq!(opts.build_mode, Some(BuildMode::Production));

        let empty: InjectorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, InjectorConfig::default());
    }
}
