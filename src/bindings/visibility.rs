//! Default visibility binding.

use crate::component::ComponentHandle;
use crate::environment::LifecycleConfig;
use crate::reference::ValueRef;
use crate::types::{Element, Value};

use super::operations::ElementOperations;

/// Inline style applied to hidden components.
pub const HIDDEN_STYLE: &str = "display: none;";

/// Hides the element while the visibility property is exactly `false`.
pub struct IsVisibleBinding;

impl IsVisibleBinding {
    pub fn install(
        element: Element,
        component: &ComponentHandle,
        config: &LifecycleConfig,
        operations: &mut dyn ElementOperations,
    ) {
        let reference = ValueRef::property(component.clone(), &config.visibility_property).map(|visible| {
            if visible == Value::Bool(false) {
                Value::from(HIDDEN_STYLE)
            } else {
                Value::Null
            }
        });
        operations.add_dynamic_attribute(element, "style", reference);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::AttributeRecorder;
    use crate::component::ViewClass;
    use crate::types::Props;

    #[test]
    fn test_visible_by_default() {
        let component = ViewClass::new("x").instantiate(Props::new());
        let mut recorder = AttributeRecorder::new();
        IsVisibleBinding::install(Element(0), &component, &LifecycleConfig::default(), &mut recorder);

        assert!(!recorder.flush(Element(0)).contains_key("style"));
    }

    #[test]
    fn test_hidden_tracks_property() {
        let component = ViewClass::new("x").instantiate(Props::new());
        let mut recorder = AttributeRecorder::new();
        IsVisibleBinding::install(Element(0), &component, &LifecycleConfig::default(), &mut recorder);

        let mut props = Props::new();
        props.insert("isVisible".to_string(), Value::Bool(false));
        component
            .borrow_mut()
            .set_properties(props, crate::component::DispatchContext::empty());

        assert_eq!(recorder.flush(Element(0))["style"], HIDDEN_STYLE);
    }
}
