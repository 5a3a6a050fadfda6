//! Layouts - template lookup and the component wrapper element.
//!
//! - [`Template`] / [`Owner`]: opaque templates and name-based lookup
//! - [`LayoutResolver`]: definition → instance layout → `layoutName` → default
//! - [`CompiledLayout`]: template plus wrapper tag, role and base class

mod compiled;
mod resolver;
mod template;

pub use compiled::*;
pub use resolver::*;
pub use template::*;
