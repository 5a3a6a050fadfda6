//! Value references - lazily read values paired with a revision tag.
//!
//! A [`ValueRef`] is what arguments and dynamic attributes are made of. The
//! renderer reads `value()` whenever it needs the current value and uses
//! `tag()` to skip work when nothing changed.
//!
//! # Variants
//!
//! - `Const` - a literal, never changes
//! - `Cell` - a mutable slot, dirtied on every effective write
//! - `Signal` - a `spark_signals::Signal<Value>` mirrored into a tag
//! - `Property` - a named property read off a live component
//! - `Derived` - a computation over another reference

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use spark_signals::{effect, Signal};

use super::tag::{DirtyableTag, Tag};
use crate::component::ComponentHandle;
use crate::types::Value;

// =============================================================================
// CellRef
// =============================================================================

/// A mutable, two-way bindable value slot.
#[derive(Clone)]
pub struct CellRef {
    inner: Rc<CellInner>,
}

struct CellInner {
    value: RefCell<Value>,
    tag: DirtyableTag,
}

impl CellRef {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            inner: Rc::new(CellInner {
                value: RefCell::new(value.into()),
                tag: DirtyableTag::new(),
            }),
        }
    }

    pub fn get(&self) -> Value {
        self.inner.value.borrow().clone()
    }

    /// Write a new value. The tag is only dirtied when the value changes.
    pub fn set(&self, value: impl Into<Value>) {
        let value = value.into();
        let changed = *self.inner.value.borrow() != value;
        if changed {
            *self.inner.value.borrow_mut() = value;
            self.inner.tag.dirty();
        }
    }

    pub fn tag(&self) -> Tag {
        Tag::Dirtyable(self.inner.tag.clone())
    }
}

// =============================================================================
// SignalRef
// =============================================================================

/// A reference backed by a spark signal.
///
/// An effect subscribed to the signal dirties the reference's tag on every
/// change, so signal-driven values take part in revision tracking without
/// polling.
#[derive(Clone)]
pub struct SignalRef {
    inner: Rc<SignalBinding>,
}

struct SignalBinding {
    signal: Signal<Value>,
    tag: DirtyableTag,
    stop: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl Drop for SignalBinding {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.get_mut().take() {
            stop();
        }
    }
}

impl SignalRef {
    pub fn new(signal: Signal<Value>) -> Self {
        let tag = DirtyableTag::new();

        let tracked = signal.clone();
        let effect_tag = tag.clone();
        let mut initial = true;
        let stop = effect(move || {
            // Read to subscribe; the first run only establishes the dependency
            let _ = tracked.get();
            if initial {
                initial = false;
                return;
            }
            effect_tag.dirty();
        });

        Self {
            inner: Rc::new(SignalBinding {
                signal,
                tag,
                stop: RefCell::new(Some(Box::new(stop))),
            }),
        }
    }

    pub fn get(&self) -> Value {
        self.inner.signal.get()
    }

    pub fn tag(&self) -> Tag {
        Tag::Dirtyable(self.inner.tag.clone())
    }
}

// =============================================================================
// PropertyRef
// =============================================================================

/// A named property of a live component.
///
/// Tagged with the component's dirty tag: any property change on the
/// component invalidates every property reference into it.
#[derive(Clone)]
pub struct PropertyRef {
    component: ComponentHandle,
    key: Rc<str>,
}

impl PropertyRef {
    pub fn new(component: ComponentHandle, key: &str) -> Self {
        Self {
            component,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> Value {
        self.component.borrow().get(&self.key)
    }

    pub fn tag(&self) -> Tag {
        self.component.borrow().dirty_tag()
    }
}

// =============================================================================
// ValueRef
// =============================================================================

/// A lazily read, tagged value.
#[derive(Clone)]
pub enum ValueRef {
    Const(Value),
    Cell(CellRef),
    Signal(SignalRef),
    Property(PropertyRef),
    Derived {
        compute: Rc<dyn Fn() -> Value>,
        tag: Tag,
    },
}

impl ValueRef {
    /// Literal reference.
    pub fn constant(value: impl Into<Value>) -> Self {
        ValueRef::Const(value.into())
    }

    /// Fresh mutable cell reference.
    pub fn cell(value: impl Into<Value>) -> Self {
        ValueRef::Cell(CellRef::new(value))
    }

    /// Reference mirroring a spark signal.
    pub fn signal(signal: Signal<Value>) -> Self {
        ValueRef::Signal(SignalRef::new(signal))
    }

    /// Reference to `key` on a live component.
    pub fn property(component: ComponentHandle, key: &str) -> Self {
        ValueRef::Property(PropertyRef::new(component, key))
    }

    /// Current value.
    pub fn value(&self) -> Value {
        match self {
            ValueRef::Const(v) => v.clone(),
            ValueRef::Cell(cell) => cell.get(),
            ValueRef::Signal(sig) => sig.get(),
            ValueRef::Property(prop) => prop.get(),
            ValueRef::Derived { compute, .. } => compute(),
        }
    }

    /// Tag invalidated whenever `value()` may have changed.
    pub fn tag(&self) -> Tag {
        match self {
            ValueRef::Const(_) => Tag::Constant,
            ValueRef::Cell(cell) => cell.tag(),
            ValueRef::Signal(sig) => sig.tag(),
            ValueRef::Property(prop) => prop.tag(),
            ValueRef::Derived { tag, .. } => tag.clone(),
        }
    }

    pub fn is_const(&self) -> bool {
        matches!(self, ValueRef::Const(_))
    }

    /// Whether the referenced value can be written back by the receiver.
    pub fn is_mutable(&self) -> bool {
        matches!(self, ValueRef::Cell(_))
    }

    /// Derive a new reference by transforming this one's value.
    ///
    /// Constants are folded eagerly.
    pub fn map(&self, f: impl Fn(Value) -> Value + 'static) -> ValueRef {
        if let ValueRef::Const(v) = self {
            return ValueRef::Const(f(v.clone()));
        }
        let source = self.clone();
        let tag = source.tag();
        ValueRef::Derived {
            compute: Rc::new(move || f(source.value())),
            tag,
        }
    }

    /// Combine two references into one.
    pub fn zip(&self, other: &ValueRef, f: impl Fn(Value, Value) -> Value + 'static) -> ValueRef {
        let left = self.clone();
        let right = other.clone();
        let tag = Tag::combine([left.tag(), right.tag()]);
        ValueRef::Derived {
            compute: Rc::new(move || f(left.value(), right.value())),
            tag,
        }
    }
}

impl From<Value> for ValueRef {
    fn from(value: Value) -> Self {
        ValueRef::Const(value)
    }
}

impl From<CellRef> for ValueRef {
    fn from(cell: CellRef) -> Self {
        ValueRef::Cell(cell)
    }
}

impl fmt::Debug for ValueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueRef::Const(v) => f.debug_tuple("Const").field(v).finish(),
            ValueRef::Cell(cell) => f.debug_tuple("Cell").field(&cell.get()).finish(),
            ValueRef::Signal(_) => f.write_str("Signal(..)"),
            ValueRef::Property(prop) => f.debug_tuple("Property").field(&prop.key()).finish(),
            ValueRef::Derived { tag, .. } => f.debug_struct("Derived").field("tag", tag).finish(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    #[test]
    fn test_const_ref() {
        let r = ValueRef::constant("hello");
        assert_eq!(r.value(), Value::from("hello"));
        assert!(r.tag().is_constant());
        assert!(!r.is_mutable());
    }

    #[test]
    fn test_cell_ref_dirties_on_change_only() {
        let cell = CellRef::new(1);
        let r = ValueRef::from(cell.clone());
        let snapshot = r.tag().value();

        cell.set(1);
        assert!(r.tag().validate(snapshot), "same value must not dirty");

        cell.set(2);
        assert!(!r.tag().validate(snapshot));
        assert_eq!(r.value(), Value::Int(2));
        assert!(r.is_mutable());
    }

    #[test]
    fn test_map_follows_source() {
        let cell = CellRef::new(2);
        let doubled = ValueRef::from(cell.clone()).map(|v| match v {
            Value::Int(i) => Value::Int(i * 2),
            other => other,
        });
        assert_eq!(doubled.value(), Value::Int(4));

        let snapshot = doubled.tag().value();
        cell.set(5);
        assert!(!doubled.tag().validate(snapshot));
        assert_eq!(doubled.value(), Value::Int(10));
    }

    #[test]
    fn test_map_folds_constants() {
        let r = ValueRef::constant(false).map(|v| Value::Bool(!v.is_truthy()));
        assert!(r.is_const());
        assert_eq!(r.value(), Value::Bool(true));
    }

    #[test]
    fn test_signal_ref_tracks_signal() {
        let source = signal(Value::from("a"));
        let r = ValueRef::signal(source.clone());
        assert_eq!(r.value(), Value::from("a"));

        let snapshot = r.tag().value();
        assert!(r.tag().validate(snapshot));

        source.set(Value::from("b"));
        assert!(!r.tag().validate(snapshot));
        assert_eq!(r.value(), Value::from("b"));
    }
}
