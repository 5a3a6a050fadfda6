//! Dynamic scope - ambient rendering context.
//!
//! The renderer threads one scope per subtree. `create` publishes the new
//! component into the `view` slot; the renderer restores the parent's scope
//! once the subtree completes by discarding the child scope.

use std::fmt;

use crate::component::ComponentHandle;

/// Stack-scoped rendering context.
#[derive(Clone, Default)]
pub struct DynamicScope {
    view: Option<ComponentHandle>,
}

impl DynamicScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Component currently rendering, if any.
    pub fn view(&self) -> Option<&ComponentHandle> {
        self.view.as_ref()
    }

    pub fn set_view(&mut self, view: Option<ComponentHandle>) {
        self.view = view;
    }

    /// Scope for a nested subtree, starting from this scope's values.
    pub fn child(&self) -> Self {
        self.clone()
    }
}

impl fmt::Debug for DynamicScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view.as_ref().map(|v| v.borrow().name().to_string());
        f.debug_struct("DynamicScope").field("view", &view).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ViewClass;
    use crate::types::Props;
    use std::rc::Rc;

    #[test]
    fn test_child_scope_does_not_leak() {
        let parent = ViewClass::new("parent").instantiate(Props::new());
        let child = ViewClass::new("child").instantiate(Props::new());

        let mut scope = DynamicScope::new();
        scope.set_view(Some(parent.clone()));

        let mut nested = scope.child();
        nested.set_view(Some(child.clone()));

        assert!(Rc::ptr_eq(nested.view().unwrap(), &child));
        assert!(Rc::ptr_eq(scope.view().unwrap(), &parent));
    }
}
