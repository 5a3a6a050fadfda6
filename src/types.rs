//! Core types for spark-lifecycle.
//!
//! These types define the vocabulary shared by every lifecycle subsystem:
//! the dynamic values that flow through arguments and properties, the
//! opaque element handles the renderer hands us, and the notifications
//! a component receives as it moves through its lifecycle.

use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Value
// =============================================================================

/// A dynamic value carried by arguments, properties and attributes.
///
/// Truthiness follows the rules of the template language: `Null`, `false`,
/// `0`, `NaN` and the empty string are falsy, everything else is truthy
/// (lists included, even when empty).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    /// Check whether this value is `Null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Template-language truthiness.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::List(_) => true,
        }
    }

    /// Borrow the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Render this value as an attribute string.
    ///
    /// `None` means "attribute absent": `Null` and `false` remove the
    /// attribute, `true` renders as an empty (presence-only) attribute.
    pub fn to_attribute_string(&self) -> Option<String> {
        match self {
            Value::Null | Value::Bool(false) => None,
            Value::Bool(true) => Some(String::new()),
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Str(s) => Some(s.clone()),
            Value::List(items) => Some(
                items
                    .iter()
                    .filter_map(Value::to_attribute_string)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

// =============================================================================
// Elements
// =============================================================================

/// Opaque handle to an element created by the renderer.
///
/// The lifecycle core never touches elements directly; it only passes
/// handles to the operations sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Element(pub usize);

/// Node range a component's layout rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub parent: Element,
    pub first: usize,
    pub last: usize,
}

// =============================================================================
// Lifecycle Phase
// =============================================================================

/// Lifecycle phase of a component instance.
///
/// `Uninitialized → HasElement → InDom` with a real DOM,
/// `Uninitialized → HasElement` when rendering headless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Uninitialized,
    HasElement,
    InDom,
    Destroyed,
}

// =============================================================================
// Attributes and Properties
// =============================================================================

/// A single entry of a component's `attrs` snapshot.
///
/// `mutable` marks attributes whose argument was bound to a two-way
/// reference, so the component may write back through it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttrValue {
    pub value: Value,
    pub mutable: bool,
}

impl AttrValue {
    pub fn new(value: Value, mutable: bool) -> Self {
        Self { value, mutable }
    }
}

/// Attribute snapshot handed to lifecycle notifications.
pub type Attrs = BTreeMap<String, AttrValue>;

/// Property bag assigned onto a component at construction and update.
pub type Props = BTreeMap<String, Value>;

// =============================================================================
// Notifications
// =============================================================================

/// The lifecycle notifications a component can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    DidInitAttrs,
    DidReceiveAttrs,
    WillInsertElement,
    WillRender,
    DidInsertElement,
    DidRender,
    DidUpdateAttrs,
    WillUpdate,
    DidUpdate,
}

impl NotificationKind {
    /// Event name as seen by component authors.
    pub const fn event_name(self) -> &'static str {
        match self {
            NotificationKind::DidInitAttrs => "didInitAttrs",
            NotificationKind::DidReceiveAttrs => "didReceiveAttrs",
            NotificationKind::WillInsertElement => "willInsertElement",
            NotificationKind::WillRender => "willRender",
            NotificationKind::DidInsertElement => "didInsertElement",
            NotificationKind::DidRender => "didRender",
            NotificationKind::DidUpdateAttrs => "didUpdateAttrs",
            NotificationKind::WillUpdate => "willUpdate",
            NotificationKind::DidUpdate => "didUpdate",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

/// A lifecycle notification together with its attribute payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub old_attrs: Option<Attrs>,
    pub new_attrs: Option<Attrs>,
}

impl Notification {
    /// Notification without payload.
    pub fn bare(kind: NotificationKind) -> Self {
        Self {
            kind,
            old_attrs: None,
            new_attrs: None,
        }
    }

    /// Notification carrying only the new attribute snapshot.
    pub fn with_attrs(kind: NotificationKind, new_attrs: Attrs) -> Self {
        Self {
            kind,
            old_attrs: None,
            new_attrs: Some(new_attrs),
        }
    }

    /// Notification carrying both the previous and the new snapshot.
    pub fn with_change(kind: NotificationKind, old_attrs: Attrs, new_attrs: Attrs) -> Self {
        Self {
            kind,
            old_attrs: Some(old_attrs),
            new_attrs: Some(new_attrs),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
