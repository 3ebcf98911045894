use std::fmt;

/// Name of the process-wide variable that selects the build mode.
pub const MODE_VAR: &str = "NODE_ENV";

/// The literal value of [`MODE_VAR`] that selects production mode.
pub const PRODUCTION: &str = "production";

/// Development or production, resolved once and then carried as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

impl BuildMode {
    /// Only the exact string `"production"` selects production; anything
    /// else, including a missing value, is development.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(PRODUCTION) => BuildMode::Production,
            _ => BuildMode::Development,
        }
    }

    /// Reads [`MODE_VAR`] from the process environment.
    ///
    /// Targets without a process environment (`wasm32-unknown-unknown`) fall
    /// back to the value captured when the crate was compiled.
    pub fn detect() -> Self {
        let runtime = std::env::var(MODE_VAR).ok();
        let value = runtime.as_deref().or(option_env!("NODE_ENV"));
        Self::from_value(value)
    }

    pub fn is_development(self) -> bool {
        self == BuildMode::Development
    }

    pub fn is_production(self) -> bool {
        self == BuildMode::Production
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => PRODUCTION,
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
