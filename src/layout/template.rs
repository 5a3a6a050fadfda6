//! Templates and the owner lookup they are resolved through.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Opaque handle to a compiled-elsewhere template.
///
/// Identity is the template id; clones are cheap.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Template {
    id: Rc<str>,
}

impl Template {
    pub fn new(id: &str) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Template({})", self.id)
    }
}

/// Resolves template keys such as `template:<layoutName>`.
pub trait Owner {
    fn lookup_template(&self, key: &str) -> Option<Template>;
}

/// In-memory [`Owner`] keyed by full lookup key.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: impl Into<String>, template: Template) {
        self.templates.insert(key.into(), template);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, key: impl Into<String>, template: Template) -> Self {
        self.register(key, template);
        self
    }
}

impl Owner for TemplateRegistry {
    fn lookup_template(&self, key: &str) -> Option<Template> {
        self.templates.get(key).cloned()
    }
}
