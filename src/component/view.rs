//! ViewComponent - a property-bag component driven by declarative metadata.
//!
//! [`ViewClass`] describes a component kind (tag, classes, bindings,
//! positional params, default properties, notification listeners);
//! [`ViewComponent`] is one live instance of it.
//!
//! # Example
//!
//! ```ignore
//! use spark_lifecycle::component::ViewClass;
//! use spark_lifecycle::types::NotificationKind;
//!
//! let class = ViewClass::new("user-card")
//!     .with_tag_name("article")
//!     .with_class_name_bindings(["isActive"])
//!     .with_attribute_bindings(["title"])
//!     .with_listener(NotificationKind::DidRender, |_, _| println!("rendered"));
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use super::{Component, ComponentClass, ComponentHandle, DispatchContext, InitProps};
use crate::args::PositionalParams;
use crate::layout::Template;
use crate::reference::{DirtyableTag, Tag};
use crate::types::{
    Attrs, Bounds, Element, Notification, NotificationKind, Phase, Props, Value,
};

/// Notification listener, handed the instance being notified.
pub type NotificationListener = Rc<dyn Fn(&mut ViewComponent, &Notification)>;

/// Property observer, told why the property changed.
///
/// Runs while the instance is mutably borrowed: it must not read the
/// component back through its handle (`PropertyRef`, `RootRef`).
pub type PropertyObserver = Rc<dyn Fn(&Value, DispatchContext)>;

thread_local! {
    /// Counter for generating element IDs.
    static ELEMENT_ID_COUNTER: Cell<usize> = const { Cell::new(0) };
}

fn next_element_id() -> String {
    ELEMENT_ID_COUNTER.with(|counter| {
        let id = counter.get();
        counter.set(id + 1);
        format!("spark{id}")
    })
}

// =============================================================================
// ViewClass
// =============================================================================

/// Blueprint for [`ViewComponent`] instances.
#[derive(Clone, Default)]
pub struct ViewClass {
    name: String,
    tag_name: Option<String>,
    class_names: Vec<String>,
    class_name_bindings: Vec<String>,
    attribute_bindings: Vec<String>,
    positional_params: PositionalParams,
    layout: Option<Template>,
    defaults: Props,
    listeners: Vec<(NotificationKind, NotificationListener)>,
    observers: Vec<(String, PropertyObserver)>,
}

impl ViewClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = Some(tag_name.into());
        self
    }

    pub fn with_class_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.class_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_class_name_bindings<S: Into<String>>(
        mut self,
        bindings: impl IntoIterator<Item = S>,
    ) -> Self {
        self.class_name_bindings = bindings.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_attribute_bindings<S: Into<String>>(
        mut self,
        bindings: impl IntoIterator<Item = S>,
    ) -> Self {
        self.attribute_bindings = bindings.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_positional_params(mut self, params: PositionalParams) -> Self {
        self.positional_params = params;
        self
    }

    pub fn with_layout(mut self, layout: Template) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Default value of a property, overridden by arguments.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    /// Run `listener` whenever a `kind` notification arrives.
    ///
    /// The listener gets the instance itself. The instance's handle is
    /// mutably borrowed for the duration, so reach the component through
    /// the argument, never through `PropertyRef` or `RootRef`.
    pub fn with_listener(
        mut self,
        kind: NotificationKind,
        listener: impl Fn(&mut ViewComponent, &Notification) + 'static,
    ) -> Self {
        self.listeners.push((kind, Rc::new(listener)));
        self
    }

    /// Run `observer` whenever `key` changes. See [`PropertyObserver`].
    pub fn with_observer(
        mut self,
        key: impl Into<String>,
        observer: impl Fn(&Value, DispatchContext) + 'static,
    ) -> Self {
        self.observers.push((key.into(), Rc::new(observer)));
        self
    }

    /// Instantiate without going through a lifecycle manager.
    ///
    /// Used for root components, which are created by the host before
    /// rendering starts.
    pub fn instantiate(&self, props: Props) -> ComponentHandle {
        self.create(InitProps {
            attrs: Attrs::new(),
            props,
            parent_view: None,
            has_block: false,
            target: Value::Null,
        })
    }
}

impl ComponentClass for ViewClass {
    fn name(&self) -> &str {
        &self.name
    }

    fn positional_params(&self) -> &PositionalParams {
        &self.positional_params
    }

    fn create(&self, init: InitProps) -> ComponentHandle {
        let component = ViewComponent::new(self, init);
        Rc::new(RefCell::new(component))
    }
}

// =============================================================================
// ViewComponent
// =============================================================================

/// A live component instance backed by a property bag.
pub struct ViewComponent {
    name: String,
    tag_name: Option<String>,
    element_id: Option<String>,
    class_names: Vec<String>,
    class_name_bindings: Vec<String>,
    attribute_bindings: Vec<String>,
    layout: Option<Template>,

    properties: Props,
    attrs: Attrs,
    tag: DirtyableTag,

    parent: Option<Weak<RefCell<dyn Component>>>,
    children: Vec<ComponentHandle>,
    has_block: bool,
    target: Value,

    element: Option<Element>,
    bounds: Option<Bounds>,
    phase: Phase,

    listeners: Vec<(NotificationKind, NotificationListener)>,
    observers: HashMap<String, Vec<PropertyObserver>>,
    destroy_callbacks: Vec<Box<dyn FnOnce()>>,
}

impl ViewComponent {
    fn new(class: &ViewClass, init: InitProps) -> Self {
        let mut observers: HashMap<String, Vec<PropertyObserver>> = HashMap::new();
        for (key, observer) in &class.observers {
            observers.entry(key.clone()).or_default().push(observer.clone());
        }

        let mut component = Self {
            name: class.name.clone(),
            tag_name: class.tag_name.clone(),
            element_id: None,
            class_names: class.class_names.clone(),
            class_name_bindings: class.class_name_bindings.clone(),
            attribute_bindings: class.attribute_bindings.clone(),
            layout: class.layout.clone(),
            properties: class.defaults.clone(),
            attrs: init.attrs,
            tag: DirtyableTag::new(),
            parent: init.parent_view.as_ref().map(Rc::downgrade),
            children: Vec::new(),
            has_block: init.has_block,
            target: init.target,
            element: None,
            bounds: None,
            phase: Phase::Uninitialized,
            listeners: class.listeners.clone(),
            observers,
            destroy_callbacks: Vec::new(),
        };

        component.set_properties(init.props, DispatchContext::INIT);

        // Components with a wrapper element always get an id
        if component.element_id.is_none() && component.tag_name.as_deref() != Some("") {
            component.element_id = Some(next_element_id());
        }

        component
    }

    /// Set a single property as ordinary application code would.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let mut props = Props::new();
        props.insert(key.to_string(), value.into());
        self.set_properties(props, DispatchContext::empty());
    }

    pub fn has_block(&self) -> bool {
        self.has_block
    }

    /// Resolved `self` of the invoking template.
    pub fn target(&self) -> &Value {
        &self.target
    }

    /// Register a callback to run when the component is destroyed.
    pub fn on_destroy(&mut self, callback: impl FnOnce() + 'static) {
        self.destroy_callbacks.push(Box::new(callback));
    }

    /// Write one property, returning whether it changed.
    fn assign(&mut self, key: String, value: Value) -> bool {
        match key.as_str() {
            "elementId" => {
                let id = value.to_attribute_string();
                let changed = self.element_id != id;
                self.element_id = id;
                changed
            }
            "tagName" => {
                let tag_name = value.as_str().map(str::to_string);
                let changed = self.tag_name != tag_name;
                self.tag_name = tag_name;
                changed
            }
            _ => {
                if self.properties.get(&key) == Some(&value) {
                    return false;
                }
                self.properties.insert(key, value);
                true
            }
        }
    }
}

impl Component for ViewComponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn tag_name(&self) -> Option<&str> {
        self.tag_name.as_deref()
    }

    fn element_id(&self) -> Option<&str> {
        self.element_id.as_deref()
    }

    fn class_names(&self) -> &[String] {
        &self.class_names
    }

    fn class_name_bindings(&self) -> &[String] {
        &self.class_name_bindings
    }

    fn attribute_bindings(&self) -> &[String] {
        &self.attribute_bindings
    }

    fn layout(&self) -> Option<Template> {
        self.layout.clone()
    }

    fn get(&self, key: &str) -> Value {
        match key {
            "elementId" => Value::from(self.element_id.clone()),
            "tagName" => Value::from(self.tag_name.clone()),
            _ => self.properties.get(key).cloned().unwrap_or_default(),
        }
    }

    fn set_properties(&mut self, props: Props, ctx: DispatchContext) {
        let mut changed = Vec::new();
        for (key, value) in props {
            if self.assign(key.clone(), value) {
                changed.push(key);
            }
        }

        if changed.is_empty() {
            return;
        }
        self.tag.dirty();

        for key in changed {
            let Some(observers) = self.observers.get(&key) else { continue };
            let value = self.get(&key);
            for observer in observers {
                observer(&value, ctx);
            }
        }
    }

    fn attrs(&self) -> Attrs {
        self.attrs.clone()
    }

    fn set_attrs(&mut self, attrs: Attrs) {
        self.attrs = attrs;
    }

    fn dirty_tag(&self) -> Tag {
        Tag::Dirtyable(self.tag.clone())
    }

    fn notify(&mut self, notification: Notification) {
        let listeners: Vec<NotificationListener> = self
            .listeners
            .iter()
            .filter(|(kind, _)| *kind == notification.kind)
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(self, &notification);
        }
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn transition_to(&mut self, phase: Phase) {
        self.phase = phase;
    }

    fn element(&self) -> Option<Element> {
        self.element
    }

    fn set_element(&mut self, element: Element) {
        self.element = Some(element);
    }

    fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
    }

    fn parent_view(&self) -> Option<ComponentHandle> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    fn children(&self) -> Vec<ComponentHandle> {
        self.children.clone()
    }

    fn append_child(&mut self, child: ComponentHandle) {
        self.children.push(child);
    }

    fn destroy(&mut self) {
        if self.phase == Phase::Destroyed {
            return;
        }
        self.phase = Phase::Destroyed;
        self.children.clear();
        for callback in self.destroy_callbacks.drain(..) {
            callback();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
