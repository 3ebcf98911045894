pub mod injector;
pub mod options;

pub use injector::{Injector, InsertionMode};
#[cfg(feature = "serde")]
pub use options::InjectorConfig;
pub use options::InjectorOptions;

pub mod prelude {
    pub use crate::injector::{Injector, InsertionMode};
    pub use crate::options::InjectorOptions;
    pub use nanostyle_core::{BuildMode, StyleError, StyleResult};
}
