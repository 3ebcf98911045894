pub mod browser;
pub mod host;
pub mod memory;

pub use browser::BrowserHost;
pub use host::{RuleSheet, StyleHost, StyleResource};
pub use memory::{MemoryDocument, MemorySheet, MemoryStyle};

// Handles callers pass in as `style_sheet` for the browser host.
pub use web_sys::{CssStyleSheet, HtmlStyleElement};
