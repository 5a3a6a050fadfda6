//! Environment - everything a lifecycle operation needs from its host.
//!
//! An [`Environment`] bundles:
//! - [`LifecycleConfig`]: DOM presence, validation mode, default layout
//! - an [`Owner`] resolving template names
//! - an [`Instrumentation`] sink for render measurements
//! - a [`LayoutResolver`] seeded with the default layout
//! - a cache of [`CompiledLayout`]s keyed by template
//!
//! [`DynamicScope`] is the separate, per-subtree ambient context.

mod config;
mod instrumentation;
mod scope;

pub use config::*;
pub use instrumentation::*;
pub use scope::*;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::layout::{CompiledLayout, LayoutResolver, Owner, Template};

bitflags::bitflags! {
    /// Capabilities of the rendering environment.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EnvFlags: u8 {
        /// A real DOM is present.
        const HAS_DOM = 1 << 0;
        /// Development-mode validation runs.
        const VALIDATE = 1 << 1;
    }
}

impl EnvFlags {
    fn from_config(config: &LifecycleConfig) -> Self {
        let mut flags = EnvFlags::empty();
        flags.set(EnvFlags::HAS_DOM, config.has_dom);
        flags.set(EnvFlags::VALIDATE, config.validation.is_development());
        flags
    }
}

/// Host environment of a render.
pub struct Environment {
    config: LifecycleConfig,
    flags: EnvFlags,
    owner: Rc<dyn Owner>,
    instrumentation: Rc<dyn Instrumentation>,
    layouts: LayoutResolver,
    compiled: RefCell<HashMap<Template, Rc<CompiledLayout>>>,
}

impl Environment {
    /// Create an environment instrumented through `tracing`.
    pub fn new(config: LifecycleConfig, owner: Rc<dyn Owner>) -> Self {
        let layouts = LayoutResolver::from_owner(&*owner, &config.default_layout_key);
        Self {
            flags: EnvFlags::from_config(&config),
            config,
            owner,
            instrumentation: Rc::new(TracingInstrumentation),
            layouts,
            compiled: RefCell::new(HashMap::new()),
        }
    }

    pub fn with_instrumentation(mut self, instrumentation: Rc<dyn Instrumentation>) -> Self {
        self.instrumentation = instrumentation;
        self
    }

    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    pub fn flags(&self) -> EnvFlags {
        self.flags
    }

    pub fn has_dom(&self) -> bool {
        self.flags.contains(EnvFlags::HAS_DOM)
    }

    pub fn validation(&self) -> ValidationMode {
        if self.flags.contains(EnvFlags::VALIDATE) {
            ValidationMode::Development
        } else {
            ValidationMode::Production
        }
    }

    pub fn owner(&self) -> &dyn Owner {
        &*self.owner
    }

    pub fn instrumentation(&self) -> &dyn Instrumentation {
        &*self.instrumentation
    }

    pub fn layouts(&self) -> &LayoutResolver {
        &self.layouts
    }

    /// Compiled wrapper layout for `template`, compiled once per environment.
    pub fn compiled_layout(&self, template: &Template) -> Rc<CompiledLayout> {
        if let Some(compiled) = self.compiled.borrow().get(template) {
            return compiled.clone();
        }
        let compiled = Rc::new(CompiledLayout::compile(template.clone(), &self.config));
        self.compiled
            .borrow_mut()
            .insert(template.clone(), compiled.clone());
        compiled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TemplateRegistry;

    #[test]
    fn test_flags_from_config() {
        let owner = Rc::new(TemplateRegistry::new());
        let env = Environment::new(
            LifecycleConfig::default()
                .with_has_dom(false)
                .with_validation(ValidationMode::Development),
            owner,
        );
        assert!(!env.has_dom());
        assert_eq!(env.flags(), EnvFlags::VALIDATE);
        assert_eq!(env.validation(), ValidationMode::Development);

        let prod = Environment::new(
            LifecycleConfig::default().with_validation(ValidationMode::Production),
            Rc::new(TemplateRegistry::new()),
        );
        assert_eq!(prod.flags(), EnvFlags::HAS_DOM);
        assert_eq!(prod.validation(), ValidationMode::Production);
    }

    #[test]
    fn test_compiled_layout_cached() {
        let owner = Rc::new(TemplateRegistry::new());
        let env = Environment::new(LifecycleConfig::default(), owner);
        let template = Template::new("t");

        let a = env.compiled_layout(&template);
        let b = env.compiled_layout(&template);
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_default_layout_resolved_from_owner() {
        let owner = Rc::new(
            TemplateRegistry::new().with("template:components/-default", Template::new("fallback")),
        );
        let env = Environment::new(LifecycleConfig::default(), owner);
        assert_eq!(env.layouts().default_layout().id(), "fallback");
    }
}
