//! Argument merging and positional/named conflict validation.
//!
//! A definition may carry arguments from an earlier invocation (curried
//! components). New positional values overlay the old ones from index 0;
//! new named values override old ones key by key.

use std::collections::BTreeMap;

use super::evaluated::{EvaluatedArgs, NamedArgs, PositionalArgs};
use crate::environment::ValidationMode;
use crate::error::ValidationError;
use crate::reference::ValueRef;

// =============================================================================
// Positional Parameter Declaration
// =============================================================================

/// How a component class names its positional parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PositionalParams {
    /// No positional parameters declared.
    #[default]
    None,
    /// All positional values collected into one list property.
    Rest(String),
    /// One property name per position.
    Named(Vec<String>),
}

impl PositionalParams {
    pub fn rest(name: impl Into<String>) -> Self {
        PositionalParams::Rest(name.into())
    }

    pub fn named<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        PositionalParams::Named(names.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// Merge
// =============================================================================

/// Overlay `new` onto `old` starting at index 0.
///
/// `merge_positional([a, b, c], [x, y]) == [x, y, c]`
pub fn merge_positional(old: &[ValueRef], new: &[ValueRef]) -> Vec<ValueRef> {
    let mut merged = old.to_vec();
    let overlap = new.len().min(merged.len());
    merged.splice(0..overlap, new.iter().cloned());
    merged
}

/// Shallow union with `new` winning on collisions.
pub fn merge_named(
    old: &BTreeMap<String, ValueRef>,
    new: &BTreeMap<String, ValueRef>,
) -> BTreeMap<String, ValueRef> {
    let mut merged = old.clone();
    merged.extend(new.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Merge a fresh invocation's args with a definition's carried-over args.
///
/// Without carried-over args the new set passes through unchanged.
pub fn merge_args(new: &EvaluatedArgs, old: Option<&EvaluatedArgs>) -> EvaluatedArgs {
    let Some(old) = old else {
        return new.clone();
    };

    let positional = merge_positional(old.positional().values(), new.positional().values());
    let named = merge_named(old.named().map(), new.named().map());

    EvaluatedArgs::new(PositionalArgs::new(positional), NamedArgs::new(named))
}

// =============================================================================
// Validation
// =============================================================================

/// Reject invocations that pass the same name positionally and by name.
///
/// Only positions actually supplied are checked. Never fails in
/// production mode.
pub fn validate_positional_parameters(
    named: &NamedArgs,
    positional: &PositionalArgs,
    params: &PositionalParams,
    mode: ValidationMode,
) -> Result<(), ValidationError> {
    if !mode.is_development() || positional.is_empty() {
        return Ok(());
    }

    match params {
        PositionalParams::None => Ok(()),
        PositionalParams::Rest(name) => {
            if named.has(name) {
                return Err(ValidationError::PositionalRestConflict { name: name.clone() });
            }
            Ok(())
        }
        PositionalParams::Named(names) => {
            for (position, name) in names.iter().take(positional.len()).enumerate() {
                if named.has(name) {
                    return Err(ValidationError::PositionalParamConflict {
                        position,
                        name: name.clone(),
                    });
                }
            }
            Ok(())
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
