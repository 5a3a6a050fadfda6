//! References and revision tags.
//!
//! The expression system hands the lifecycle core lazily-revalidated
//! values. This module provides the minimal contract the core relies on:
//! - [`Tag`] / [`Revision`]: comparable change markers
//! - [`ValueRef`]: a value that can be re-read, paired with its tag

mod tag;
mod value_ref;

pub use tag::*;
pub use value_ref::*;
