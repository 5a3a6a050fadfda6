//! Element operations sink.
//!
//! The lifecycle core never mutates elements. It describes attributes to an
//! [`ElementOperations`] sink, which the renderer applies (and re-applies
//! when dynamic references change).

use std::collections::BTreeMap;

use crate::reference::ValueRef;
use crate::types::{Element, Value};

/// Receives attribute installs for freshly created elements.
pub trait ElementOperations {
    fn add_static_attribute(&mut self, element: Element, name: &str, value: Value);

    fn add_dynamic_attribute(&mut self, element: Element, name: &str, reference: ValueRef);
}

/// One recorded attribute install.
#[derive(Debug, Clone)]
pub enum AttributeOp {
    Static { name: String, value: Value },
    Dynamic { name: String, reference: ValueRef },
}

impl AttributeOp {
    pub fn name(&self) -> &str {
        match self {
            AttributeOp::Static { name, .. } | AttributeOp::Dynamic { name, .. } => name,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, AttributeOp::Dynamic { .. })
    }

    /// Current value of this install.
    pub fn value(&self) -> Value {
        match self {
            AttributeOp::Static { value, .. } => value.clone(),
            AttributeOp::Dynamic { reference, .. } => reference.value(),
        }
    }
}

/// [`ElementOperations`] sink that records installs in order.
///
/// `flush` folds the recorded installs into final attribute strings:
/// `class` values are space-joined in install order, every other attribute
/// is last-write-wins, and absent values (null / false) drop the attribute.
#[derive(Debug, Default)]
pub struct AttributeRecorder {
    ops: Vec<(Element, AttributeOp)>,
}

impl AttributeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every install, in order.
    pub fn ops(&self) -> &[(Element, AttributeOp)] {
        &self.ops
    }

    /// Installs targeting `element`, in order.
    pub fn ops_for(&self, element: Element) -> impl Iterator<Item = &AttributeOp> {
        self.ops
            .iter()
            .filter(move |(target, _)| *target == element)
            .map(|(_, op)| op)
    }

    /// How many installs targeted `name` on `element`.
    pub fn count(&self, element: Element, name: &str) -> usize {
        self.ops_for(element).filter(|op| op.name() == name).count()
    }

    /// Fold the installs for `element` into final attribute values.
    pub fn flush(&self, element: Element) -> BTreeMap<String, String> {
        let mut attributes = BTreeMap::new();
        let mut classes: Vec<String> = Vec::new();

        for op in self.ops_for(element) {
            let value = op.value().to_attribute_string();
            if op.name() == "class" {
                if let Some(class) = value.filter(|c| !c.is_empty()) {
                    classes.push(class);
                }
                continue;
            }
            match value {
                Some(value) => {
                    attributes.insert(op.name().to_string(), value);
                }
                None => {
                    attributes.remove(op.name());
                }
            }
        }

        if !classes.is_empty() {
            attributes.insert("class".to_string(), classes.join(" "));
        }
        attributes
    }
}

impl ElementOperations for AttributeRecorder {
    fn add_static_attribute(&mut self, element: Element, name: &str, value: Value) {
        self.ops.push((
            element,
            AttributeOp::Static {
                name: name.to_string(),
                value,
            },
        ));
    }

    fn add_dynamic_attribute(&mut self, element: Element, name: &str, reference: ValueRef) {
        self.ops.push((
            element,
            AttributeOp::Dynamic {
                name: name.to_string(),
                reference,
            },
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::CellRef;

    #[test]
    fn test_flush_joins_classes() {
        let mut recorder = AttributeRecorder::new();
        let el = Element(0);
        recorder.add_static_attribute(el, "class", Value::from("a"));
        recorder.add_dynamic_attribute(el, "class", ValueRef::constant(Value::Null));
        recorder.add_static_attribute(el, "class", Value::from("b"));

        assert_eq!(recorder.flush(el)["class"], "a b");
    }

    #[test]
    fn test_flush_last_write_wins() {
        let mut recorder = AttributeRecorder::new();
        let el = Element(0);
        recorder.add_static_attribute(el, "title", Value::from("first"));
        recorder.add_static_attribute(el, "title", Value::from("second"));

        assert_eq!(recorder.flush(el)["title"], "second");
    }

    #[test]
    fn test_flush_reads_dynamic_values_lazily() {
        let mut recorder = AttributeRecorder::new();
        let el = Element(3);
        let cell = CellRef::new(Value::Null);
        recorder.add_dynamic_attribute(el, "title", cell.clone().into());

        assert!(!recorder.flush(el).contains_key("title"));
        cell.set("now");
        assert_eq!(recorder.flush(el)["title"], "now");
    }

    #[test]
    fn test_flush_separates_elements() {
        let mut recorder = AttributeRecorder::new();
        recorder.add_static_attribute(Element(1), "id", Value::from("one"));
        recorder.add_static_attribute(Element(2), "id", Value::from("two"));

        assert_eq!(recorder.flush(Element(1))["id"], "one");
        assert_eq!(recorder.count(Element(2), "id"), 1);
    }
}
