//! Compiled layouts - a template wrapped in the component's own element.
//!
//! Beyond the template, a compiled layout knows how to open the wrapper
//! element: its tag name (none for tag-less components), a dynamic `role`
//! bound to the component's `ariaRole`, and the static base class every
//! component element carries.

use crate::bindings::ElementOperations;
use crate::component::{Component, RootRef};
use crate::environment::LifecycleConfig;
use crate::reference::ValueRef;
use crate::types::{Element, Value};

use super::template::Template;

/// A layout template plus its wrapper element description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledLayout {
    template: Template,
    default_tag_name: String,
    base_class_name: String,
}

impl CompiledLayout {
    pub fn compile(template: Template, config: &LifecycleConfig) -> Self {
        Self {
            template,
            default_tag_name: config.default_tag_name.clone(),
            base_class_name: config.base_class_name.clone(),
        }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn base_class_name(&self) -> &str {
        &self.base_class_name
    }

    /// Wrapper tag for `component`, or `None` for tag-less components.
    pub fn tag_name(&self, component: &dyn Component) -> Option<String> {
        match component.tag_name() {
            Some("") => None,
            Some(tag) => Some(tag.to_string()),
            None => Some(self.default_tag_name.clone()),
        }
    }

    /// Reference to the component's `ariaRole`.
    pub fn role(&self, self_ref: &RootRef) -> ValueRef {
        self_ref.get("ariaRole")
    }

    /// Install the wrapper's own attributes: `role` and the base class.
    pub fn install_wrapper_attributes(
        &self,
        element: Element,
        self_ref: &RootRef,
        operations: &mut dyn ElementOperations,
    ) {
        operations.add_dynamic_attribute(element, "role", self.role(self_ref));
        operations.add_static_attribute(element, "class", Value::from(self.base_class_name.as_str()));
    }
}
