pub mod error;
pub mod log;
pub mod mode;

pub use error::{StyleError, StyleResult};
pub use mode::BuildMode;

pub mod prelude {
    pub use crate::log::*;
    pub use crate::mode::BuildMode;
    pub use crate::{StyleError, StyleResult};
}
