//! Component lifecycle managers.
//!
//! A [`ComponentManager`] drives one component instance through
//!
//! ```text
//! create → did_create_element → did_render_layout → did_create
//!        → (update → did_update_layout → did_update)* → destroy
//! ```
//!
//! The renderer guarantees that order; the manager never sees two calls
//! for the same bucket at once.
//!
//! Two kinds of managers exist. [`ManagerKind::Curly`] instantiates nested
//! components from their class and arguments; [`ManagerKind::Root`] adopts
//! the already constructed top-level component. Only creation differs, so
//! each kind contributes its `create` through a hook table and every other
//! phase is shared.

mod assertions;
mod bucket;
mod curly;
mod definition;
mod root;

pub use assertions::*;
pub use bucket::*;
pub use definition::*;

use std::rc::Rc;

use tracing::{debug, trace};

use crate::args::{EvaluatedArgs, ProcessedValue, merge_args, validate_positional_parameters};
use crate::bindings::{ClassNameBinding, ElementOperations, IsVisibleBinding, apply_attribute_bindings};
use crate::component::{Component, ComponentHandle, DispatchContext, RootRef};
use crate::environment::{DynamicScope, Environment};
use crate::error::Result;
use crate::layout::{CompiledLayout, Template};
use crate::reference::{Tag, ValueRef};
use crate::types::{Bounds, Element, Notification, NotificationKind, Phase, Value};

// =============================================================================
// Manager Kinds
// =============================================================================

/// Which manager instantiates a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManagerKind {
    /// Nested components invoked from a template.
    Curly,
    /// The single top-level component.
    Root,
}

type CreateHook = fn(
    &Rc<Environment>,
    &ComponentDefinition,
    &EvaluatedArgs,
    &mut DynamicScope,
    &ValueRef,
    bool,
) -> Result<ComponentStateBucket>;

/// Per-kind behavior.
struct ManagerHooks {
    label: &'static str,
    create: CreateHook,
}

static CURLY_HOOKS: ManagerHooks = ManagerHooks {
    label: "curly",
    create: curly::create,
};

static ROOT_HOOKS: ManagerHooks = ManagerHooks {
    label: "root",
    create: root::create,
};

impl ManagerKind {
    fn hooks(self) -> &'static ManagerHooks {
        match self {
            ManagerKind::Curly => &CURLY_HOOKS,
            ManagerKind::Root => &ROOT_HOOKS,
        }
    }

    pub fn label(self) -> &'static str {
        self.hooks().label
    }
}

impl ComponentDefinition {
    /// The manager responsible for instances of this definition.
    pub fn manager(&self) -> ComponentManager {
        ComponentManager::new(self.kind())
    }
}

// =============================================================================
// Destructor
// =============================================================================

/// Destructible handle handed to the renderer.
#[derive(Clone)]
pub struct Destructor {
    component: ComponentHandle,
}

impl Destructor {
    pub fn component(&self) -> &ComponentHandle {
        &self.component
    }

    pub fn destroy(&self) {
        let mut component = self.component.borrow_mut();
        trace!(component = component.name(), "destroy");
        component.destroy();
    }
}

// =============================================================================
// Component Manager
// =============================================================================

/// Drives component instances through their lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentManager {
    kind: ManagerKind,
}

impl ComponentManager {
    pub fn new(kind: ManagerKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ManagerKind {
        self.kind
    }

    /// Validate `args` against the class's positional parameters and merge
    /// them over the definition's carried-over args.
    pub fn prepare_args(
        &self,
        environment: &Environment,
        definition: &ComponentDefinition,
        args: &EvaluatedArgs,
    ) -> Result<EvaluatedArgs> {
        validate_positional_parameters(
            args.named(),
            args.positional(),
            &definition.positional_params(),
            environment.validation(),
        )?;
        Ok(merge_args(args, definition.args()))
    }

    /// Instantiate a component and fire its initial notifications.
    ///
    /// Publishes the new component as `scope`'s view. The caller owns
    /// `scope` and discards it once the component's subtree is done.
    pub fn create(
        &self,
        environment: &Rc<Environment>,
        definition: &ComponentDefinition,
        args: &EvaluatedArgs,
        scope: &mut DynamicScope,
        caller_self: &ValueRef,
        has_block: bool,
    ) -> Result<ComponentStateBucket> {
        (self.kind.hooks().create)(environment, definition, args, scope, caller_self, has_block)
    }

    /// Compiled layout the component renders with.
    pub fn layout_for(&self, definition: &ComponentDefinition, bucket: &ComponentStateBucket) -> Rc<CompiledLayout> {
        let environment = &bucket.environment;
        let component = bucket.component.borrow();
        let (template, source) =
            environment
                .layouts()
                .resolve(definition.template(), &*component, environment.owner());
        debug!(component = component.name(), template = template.id(), ?source, "layout resolved");
        environment.compiled_layout(&template)
    }

    /// Layout template from the instance alone.
    pub fn template_for(&self, component: &dyn Component, environment: &Environment) -> Template {
        environment.layouts().template_for(component, environment.owner()).0
    }

    /// The component's `self` reference for template evaluation.
    pub fn get_self(&self, bucket: &ComponentStateBucket) -> RootRef {
        RootRef::new(bucket.component.clone())
    }

    /// Install attributes on the component's freshly created element.
    pub fn did_create_element(
        &self,
        bucket: &ComponentStateBucket,
        element: Element,
        operations: &mut dyn ElementOperations,
    ) -> Result<()> {
        let component = &bucket.component;
        let config = bucket.environment.config();

        component.borrow_mut().set_element(element);

        let (attribute_bindings, class_names, class_name_bindings, element_id) = {
            let instance = component.borrow();
            (
                instance.attribute_bindings().to_vec(),
                instance.class_names().to_vec(),
                instance.class_name_bindings().to_vec(),
                instance.element_id().map(str::to_string),
            )
        };

        if attribute_bindings.is_empty() {
            operations.add_static_attribute(element, "id", Value::from(element_id));
            IsVisibleBinding::install(element, component, config, operations);
        } else {
            apply_attribute_bindings(element, &attribute_bindings, component, config, operations)?;
        }

        if let Some(class_ref) = &bucket.class_ref {
            operations.add_dynamic_attribute(element, "class", class_ref.clone());
        }

        for name in class_names {
            operations.add_static_attribute(element, "class", Value::from(name));
        }

        for binding in &class_name_bindings {
            ClassNameBinding::install(element, component, binding, operations);
        }

        component.borrow_mut().transition_to(Phase::HasElement);
        Ok(())
    }

    pub fn did_render_layout(&self, bucket: &mut ComponentStateBucket, bounds: Bounds) {
        bucket.component.borrow_mut().set_bounds(bounds);
        bucket.finalize();
    }

    /// Tag the renderer checks to decide whether an update pass is needed.
    pub fn get_tag(&self, bucket: &ComponentStateBucket) -> Tag {
        bucket.component.borrow().dirty_tag()
    }

    pub fn did_create(&self, bucket: &ComponentStateBucket) {
        if !bucket.environment.has_dom() {
            return;
        }
        dispatch(&bucket.component, Notification::bare(NotificationKind::DidInsertElement));
        dispatch(&bucket.component, Notification::bare(NotificationKind::DidRender));
        bucket.component.borrow_mut().transition_to(Phase::InDom);
    }

    /// Re-sync the component with its arguments.
    ///
    /// Attributes are only re-dispatched when the argument tag moved past
    /// the revision recorded at the last sync. `willUpdate` and
    /// `willRender` fire on every pass.
    pub fn update(&self, bucket: &mut ComponentStateBucket, _scope: &DynamicScope) {
        let finalizer = {
            let instance = bucket.component.borrow();
            bucket
                .environment
                .instrumentation()
                .start("render.component", &|| instance.instrument_details(false))
        };
        bucket.set_finalizer(finalizer);

        let tag = bucket.args.tag();
        if tag.validate(bucket.args_revision) {
            debug!(
                component = bucket.component.borrow().name(),
                revision = bucket.args_revision,
                "arguments unchanged"
            );
        } else {
            let ProcessedValue { attrs, props } = bucket.args.value();
            bucket.args_revision = tag.value();

            let old_attrs = {
                let mut component = bucket.component.borrow_mut();
                let old_attrs = component.attrs();
                component.set_attrs(attrs.clone());
                component.set_properties(props, DispatchContext::ATTRS);
                old_attrs
            };

            debug!(
                component = bucket.component.borrow().name(),
                revision = bucket.args_revision,
                "arguments changed"
            );

            dispatch(
                &bucket.component,
                Notification::with_change(NotificationKind::DidUpdateAttrs, old_attrs.clone(), attrs.clone()),
            );
            dispatch(
                &bucket.component,
                Notification::with_change(NotificationKind::DidReceiveAttrs, old_attrs, attrs),
            );
        }

        dispatch(&bucket.component, Notification::bare(NotificationKind::WillUpdate));
        dispatch(&bucket.component, Notification::bare(NotificationKind::WillRender));
    }

    pub fn did_update_layout(&self, bucket: &mut ComponentStateBucket) {
        bucket.finalize();
    }

    pub fn did_update(&self, bucket: &ComponentStateBucket) {
        dispatch(&bucket.component, Notification::bare(NotificationKind::DidUpdate));
        dispatch(&bucket.component, Notification::bare(NotificationKind::DidRender));
    }

    pub fn get_destructor(&self, bucket: &ComponentStateBucket) -> Destructor {
        Destructor {
            component: bucket.component.clone(),
        }
    }
}

/// Deliver one notification to a component.
pub(crate) fn dispatch(component: &ComponentHandle, notification: Notification) {
    let mut component = component.borrow_mut();
    trace!(component = component.name(), notification = %notification.kind, "notify");
    component.notify(notification);
}

// =============================================================================
// Tests
// =============================================================================
