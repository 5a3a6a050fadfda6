//! Layout resolution - which template a component renders with.
//!
//! Sources are consulted in priority order and the first hit wins:
//! 1. an explicit template on the definition
//! 2. the instance's own `layout`
//! 3. the instance's `layoutName`, looked up as `template:<layoutName>`
//! 4. the default layout the resolver was constructed with
//!
//! The last source is always present, so resolution never fails.

use tracing::{debug, warn};

use super::template::{Owner, Template};
use crate::component::Component;

/// Which source a layout was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutSource {
    Definition,
    ComponentLayout,
    LayoutName,
    Default,
}

/// Resolves component layouts against an owner.
#[derive(Debug, Clone)]
pub struct LayoutResolver {
    default_layout: Template,
}

impl LayoutResolver {
    pub fn new(default_layout: Template) -> Self {
        Self { default_layout }
    }

    /// Resolve the default layout through `owner` once, up front.
    ///
    /// A missing default is replaced with an empty template of that key.
    pub fn from_owner(owner: &dyn Owner, default_key: &str) -> Self {
        let default_layout = match owner.lookup_template(default_key) {
            Some(template) => template,
            None => {
                warn!(key = default_key, "default layout not registered, using an empty template");
                Template::new(default_key)
            }
        };
        Self::new(default_layout)
    }

    pub fn default_layout(&self) -> &Template {
        &self.default_layout
    }

    /// Resolve the layout for a component instance.
    pub fn resolve(
        &self,
        definition_template: Option<&Template>,
        component: &dyn Component,
        owner: &dyn Owner,
    ) -> (Template, LayoutSource) {
        if let Some(template) = definition_template {
            return (template.clone(), LayoutSource::Definition);
        }
        self.template_for(component, owner)
    }

    /// Resolve from the instance alone, ignoring the definition.
    pub fn template_for(&self, component: &dyn Component, owner: &dyn Owner) -> (Template, LayoutSource) {
        if let Some(template) = component.layout() {
            return (template, LayoutSource::ComponentLayout);
        }

        if let Some(layout_name) = component.layout_name() {
            let key = format!("template:{layout_name}");
            if let Some(template) = owner.lookup_template(&key) {
                return (template, LayoutSource::LayoutName);
            }
            debug!(component = component.name(), key = %key, "layoutName not found, falling back");
        }

        (self.default_layout.clone(), LayoutSource::Default)
    }
}
