//! Components - the capability interface the lifecycle core drives.
//!
//! The core never reflects over component objects. Every component type
//! implements [`Component`], a closed set of capabilities:
//! - declarative metadata (`tag_name`, `class_names`, bindings, ...)
//! - property reads and writes ([`Component::get`], [`Component::set_properties`])
//! - lifecycle notifications ([`Component::notify`])
//! - phase transitions ([`Component::transition_to`])
//!
//! Component classes implement [`ComponentClass`] to construct instances
//! from [`InitProps`].
//!
//! # Ownership
//!
//! Instances live behind a [`ComponentHandle`] (`Rc<RefCell<dyn Component>>`).
//! The state bucket owns the handle; parents hold strong handles to their
//! children and children hold weak links back.

mod view;

pub use view::*;

use std::cell::RefCell;
use std::rc::Rc;

use crate::args::PositionalParams;
use crate::environment::InstrumentDetails;
use crate::layout::Template;
use crate::reference::{Tag, ValueRef};
use crate::types::{Attrs, Bounds, Element, Notification, Phase, Props, Value};

/// Version of the [`Component`] capability interface.
pub const COMPONENT_INTERFACE_VERSION: u32 = 1;

/// Shared handle to a live component instance.
pub type ComponentHandle = Rc<RefCell<dyn Component>>;

// =============================================================================
// Dispatch Context
// =============================================================================

bitflags::bitflags! {
    /// Why a property assignment is happening.
    ///
    /// Observers use this to tell attribute dispatch from the renderer
    /// apart from ordinary mutation by application code.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DispatchContext: u8 {
        /// Properties are being assigned from re-evaluated arguments.
        const ATTRS = 1 << 0;
        /// Properties are being assigned at construction.
        const INIT = 1 << 1;
    }
}

// =============================================================================
// Component Capability Interface
// =============================================================================

/// The capabilities a component exposes to the lifecycle core.
pub trait Component {
    /// Human-readable name used in diagnostics.
    fn name(&self) -> &str;

    // -------------------------------------------------------------------------
    // Declarative metadata
    // -------------------------------------------------------------------------

    /// Wrapper tag. `None` means "use the default tag", `Some("")` means
    /// the component renders no wrapper element.
    fn tag_name(&self) -> Option<&str>;

    fn element_id(&self) -> Option<&str>;

    fn class_names(&self) -> &[String];

    fn class_name_bindings(&self) -> &[String];

    fn attribute_bindings(&self) -> &[String];

    /// Explicit layout template carried by the instance.
    fn layout(&self) -> Option<Template>;

    /// Name of a layout to look up through the owner.
    fn layout_name(&self) -> Option<String> {
        match self.get("layoutName") {
            Value::Str(name) if !name.is_empty() => Some(name),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    /// Read a property. Unknown properties read as `Null`.
    fn get(&self, key: &str) -> Value;

    fn set_properties(&mut self, props: Props, ctx: DispatchContext);

    /// Attribute snapshot received with the latest arguments.
    fn attrs(&self) -> Attrs;

    fn set_attrs(&mut self, attrs: Attrs);

    /// Tag dirtied whenever any property changes.
    fn dirty_tag(&self) -> Tag;

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    fn notify(&mut self, notification: Notification);

    fn phase(&self) -> Phase;

    fn transition_to(&mut self, phase: Phase);

    fn element(&self) -> Option<Element>;

    fn set_element(&mut self, element: Element);

    fn bounds(&self) -> Option<Bounds>;

    fn set_bounds(&mut self, bounds: Bounds);

    // -------------------------------------------------------------------------
    // Tree
    // -------------------------------------------------------------------------

    fn parent_view(&self) -> Option<ComponentHandle>;

    fn children(&self) -> Vec<ComponentHandle>;

    fn append_child(&mut self, child: ComponentHandle);

    // -------------------------------------------------------------------------
    // Misc
    // -------------------------------------------------------------------------

    fn instrument_details(&self, initial_render: bool) -> InstrumentDetails {
        InstrumentDetails {
            name: self.name().to_string(),
            initial_render,
        }
    }

    /// Tear the instance down.
    fn destroy(&mut self);
}

// =============================================================================
// Component Class
// =============================================================================

/// Constructor properties assembled by the lifecycle manager.
pub struct InitProps {
    pub attrs: Attrs,
    pub props: Props,
    pub parent_view: Option<ComponentHandle>,
    pub has_block: bool,
    /// Resolved `self` of the invoking template.
    pub target: Value,
}

/// A factory for component instances.
pub trait ComponentClass {
    fn name(&self) -> &str;

    fn positional_params(&self) -> &PositionalParams;

    fn create(&self, init: InitProps) -> ComponentHandle;
}

// =============================================================================
// Root Reference
// =============================================================================

/// The canonical `self` reference of a component, as seen by templates.
#[derive(Clone)]
pub struct RootRef {
    component: ComponentHandle,
}

impl RootRef {
    pub fn new(component: ComponentHandle) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &ComponentHandle {
        &self.component
    }

    /// Reference to one property of the component.
    pub fn get(&self, key: &str) -> ValueRef {
        ValueRef::property(self.component.clone(), key)
    }

    pub fn tag(&self) -> Tag {
        self.component.borrow().dirty_tag()
    }
}
