//! Errors raised by the lifecycle core.
//!
//! Validation failures only exist in development mode: every check that
//! produces a [`ValidationError`] is skipped entirely when the environment
//! runs in [`ValidationMode::Production`](crate::environment::ValidationMode).

use thiserror::Error;

/// Development-mode validation failure.
///
/// These are fatal to the current render operation and are propagated to
/// the caller, never swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("classNameBindings must not have spaces in them: {component} (`{binding}`)")]
    ClassNameBindingHasSpaces { component: String, binding: String },

    #[error("You cannot use `classNameBindings` on a tag-less component: {component}")]
    TaglessClassNameBindings { component: String },

    #[error("You cannot use `elementId` on a tag-less component: {component}")]
    TaglessElementId { component: String },

    #[error("You cannot use `attributeBindings` on a tag-less component: {component}")]
    TaglessAttributeBindings { component: String },

    #[error("You cannot specify positional parameters and the hash argument `{name}`.")]
    PositionalRestConflict { name: String },

    #[error("You cannot specify both a positional param (at position {position}) and the hash argument `{name}`.")]
    PositionalParamConflict { position: usize, name: String },

    #[error("You cannot invoke a component with both 'id' and 'elementId' at the same time.")]
    IdAndElementId,

    #[error("You cannot use `class` as an attributeBinding, use `classNameBindings` instead: {component}")]
    ClassAttributeBinding { component: String },
}

/// Crate-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A definition was handed to a manager that cannot instantiate it.
    #[error("component definition `{name}` cannot be created by the {manager} manager")]
    DefinitionMismatch { name: String, manager: &'static str },
}

impl Error {
    /// The validation failure behind this error, if any.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
