//! Arguments - evaluation snapshots, merging, validation and processing.
//!
//! - [`EvaluatedArgs`]: positional + named references of one invocation
//! - [`merge_args`]: overlay a new invocation onto carried-over args
//! - [`validate_positional_parameters`]: reject positional/named collisions
//! - [`process_args`]: map args onto `attrs` / `props`

mod evaluated;
mod merge;
mod process;

pub use evaluated::*;
pub use merge::*;
pub use process::*;
