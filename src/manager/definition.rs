//! Component definitions - immutable descriptors paired with a manager kind.

use std::fmt;
use std::rc::Rc;

use super::ManagerKind;
use crate::args::{EvaluatedArgs, PositionalParams};
use crate::component::{ComponentClass, ComponentHandle};
use crate::layout::Template;

/// What a definition instantiates from.
#[derive(Clone)]
pub enum ComponentSource {
    /// A class constructing a fresh instance per invocation.
    Class(Rc<dyn ComponentClass>),
    /// An already constructed instance (root components).
    Instance(ComponentHandle),
}

/// Immutable descriptor of a component kind.
///
/// Created once when a template is compiled and shared read-only by
/// every invocation of it.
#[derive(Clone)]
pub struct ComponentDefinition {
    name: String,
    kind: ManagerKind,
    source: ComponentSource,
    template: Option<Template>,
    args: Option<EvaluatedArgs>,
}

impl ComponentDefinition {
    /// Definition of a nested component.
    pub fn curly(
        name: impl Into<String>,
        class: Rc<dyn ComponentClass>,
        template: Option<Template>,
        args: Option<EvaluatedArgs>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: ManagerKind::Curly,
            source: ComponentSource::Class(class),
            template,
            args,
        }
    }

    /// Definition of the top-level component.
    pub fn root(instance: ComponentHandle) -> Self {
        Self {
            name: "-root".to_string(),
            kind: ManagerKind::Root,
            source: ComponentSource::Instance(instance),
            template: None,
            args: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ManagerKind {
        self.kind
    }

    pub fn source(&self) -> &ComponentSource {
        &self.source
    }

    /// Explicit layout template, if the definition carries one.
    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    /// Carried-over args merged into every invocation.
    pub fn args(&self) -> Option<&EvaluatedArgs> {
        self.args.as_ref()
    }

    /// Positional parameter declaration of the underlying class.
    pub fn positional_params(&self) -> PositionalParams {
        match &self.source {
            ComponentSource::Class(class) => class.positional_params().clone(),
            ComponentSource::Instance(_) => PositionalParams::None,
        }
    }
}

impl fmt::Debug for ComponentDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDefinition")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("template", &self.template)
            .field("has_args", &self.args.is_some())
            .finish()
    }
}
