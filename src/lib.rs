//! # spark-lifecycle
//!
//! Component lifecycle manager for declarative UI rendering runtimes.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! A renderer hands the lifecycle core a [`ComponentDefinition`] and the
//! evaluated arguments of an invocation. The definition's
//! [`ComponentManager`] instantiates the component, fires its lifecycle
//! notifications and returns a [`ComponentStateBucket`] the renderer keeps
//! for every later phase:
//!
//! ```text
//! create → did_create_element → did_render_layout → did_create
//!        → (update → did_update_layout → did_update)* → destroy
//! ```
//!
//! Change detection is revision based. Every [`ValueRef`] carries a [`Tag`];
//! `update` compares the argument tag with the revision recorded at the last
//! sync and only re-dispatches attributes when it moved.
//!
//! The core never touches elements. Attributes are described to an
//! [`ElementOperations`] sink; templates are opaque handles resolved through
//! an [`Owner`].
//!
//! ## Modules
//!
//! - [`types`] - Values, elements, phases, notifications
//! - [`error`] - Validation failures and the crate error
//! - [`reference`] - Revision tags and lazily read references
//! - [`args`] - Argument snapshots, merging, validation, processing
//! - [`component`] - The component capability interface and `ViewComponent`
//! - [`bindings`] - Attribute, class name and visibility bindings
//! - [`layout`] - Template lookup and compiled wrapper layouts
//! - [`environment`] - Configuration, instrumentation, dynamic scope
//! - [`manager`] - Definitions, state buckets and the lifecycle managers

pub mod args;
pub mod bindings;
pub mod component;
pub mod environment;
pub mod error;
pub mod layout;
pub mod manager;
pub mod reference;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{Error, Result, ValidationError};

pub use reference::{CellRef, DirtyableTag, Revision, SignalRef, Tag, ValueRef, current_revision};

pub use args::{
    EvaluatedArgs, NamedArgs, PositionalArgs, PositionalParams, ProcessedArgs, ProcessedValue,
    merge_args, process_args, validate_positional_parameters,
};

pub use component::{
    COMPONENT_INTERFACE_VERSION, Component, ComponentClass, ComponentHandle, DispatchContext,
    InitProps, RootRef, ViewClass, ViewComponent,
};

pub use bindings::{
    AttributeBinding, AttributeRecorder, ClassNameBinding, ElementOperations, IsVisibleBinding,
    apply_attribute_bindings,
};

pub use layout::{CompiledLayout, LayoutResolver, LayoutSource, Owner, Template, TemplateRegistry};

pub use environment::{
    DynamicScope, EnvFlags, Environment, Finalizer, InstrumentDetails, Instrumentation,
    LifecycleConfig, NoopInstrumentation, TracingInstrumentation, ValidationMode,
};

pub use manager::{
    ComponentDefinition, ComponentManager, ComponentSource, ComponentStateBucket, Destructor,
    ManagerKind,
};
