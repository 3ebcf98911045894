//! Browser stylesheet injection.
//!
//! An [`Injector`] owns one `<style>` element in the document head. In
//! production it feeds rules through `CSSStyleSheet.insertRule`; in
//! development it appends them as text so they stay visible in devtools.
//!
//! ```rust
//! use nanostyle::prelude::*;
//! use nanostyle::dom::MemoryDocument;
//!
//! let doc = MemoryDocument::new().rejecting(":not-a-pseudo");
//! let injector = Injector::with_host(
//!     doc,
//!     InjectorOptions::new().build_mode(BuildMode::Production),
//! )
//! .unwrap();
//!
//! injector.insert_rule(".nano-a{color:red}");
//! injector.insert_rule(".nano-b:not-a-pseudo{color:red}");
//! // The unsupported rule is dropped without an error.
//! assert_eq!(injector.style_sheet().rules(), vec![".nano-a{color:red}"]);
//! ```

pub use nanostyle_css as css;
pub use nanostyle_dom as dom;

pub use nanostyle_core::{BuildMode, StyleError, StyleResult, debug};
pub use nanostyle_css::{Injector, InjectorOptions, InsertionMode};

pub mod prelude {
    pub use nanostyle_core::prelude::*;
    pub use nanostyle_css::prelude::*;
}
