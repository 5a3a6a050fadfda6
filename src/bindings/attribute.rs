//! Attribute bindings - `attributeBindings` micro-syntax.
//!
//! - `"title"` binds attribute `title` to property `title`
//! - `"isDisabled:disabled"` binds attribute `disabled` to `isDisabled`
//!
//! Two targets are special: `id` is installed once, statically, and
//! `style` is merged with the visibility binding.

use crate::component::ComponentHandle;
use crate::environment::LifecycleConfig;
use crate::reference::ValueRef;
use crate::types::{Element, Value};

use super::operations::ElementOperations;
use super::visibility::HIDDEN_STYLE;

/// A parsed attribute binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeBinding {
    /// Component property the value is read from.
    pub property: String,
    /// Attribute written on the element.
    pub attribute: String,
    /// `true` when written without a colon (`"title"`).
    pub is_simple: bool,
}

impl AttributeBinding {
    pub fn parse(microsyntax: &str) -> Self {
        match microsyntax.split_once(':') {
            Some((property, attribute)) => Self {
                property: property.trim().to_string(),
                attribute: attribute.trim().to_string(),
                is_simple: false,
            },
            None => {
                let name = microsyntax.trim().to_string();
                Self {
                    property: name.clone(),
                    attribute: name,
                    is_simple: true,
                }
            }
        }
    }

    /// Install this binding on `element`.
    pub fn install(
        &self,
        element: Element,
        component: &ComponentHandle,
        config: &LifecycleConfig,
        operations: &mut dyn ElementOperations,
    ) {
        match self.attribute.as_str() {
            "id" => {
                let value = {
                    let component = component.borrow();
                    match component.get(&self.property) {
                        Value::Null => Value::from(component.element_id()),
                        value => value,
                    }
                };
                operations.add_static_attribute(element, "id", value);
            }
            "style" => {
                let reference = style_reference(component, &self.property, config);
                operations.add_dynamic_attribute(element, "style", reference);
            }
            attribute => {
                let reference = ValueRef::property(component.clone(), &self.property);
                operations.add_dynamic_attribute(element, attribute, reference);
            }
        }
    }
}

/// Bound `style` that also hides the element when it is not visible.
fn style_reference(component: &ComponentHandle, property: &str, config: &LifecycleConfig) -> ValueRef {
    let style = ValueRef::property(component.clone(), property);
    let visible = ValueRef::property(component.clone(), &config.visibility_property);

    style.zip(&visible, |style, visible| {
        if visible != Value::Bool(false) {
            return style;
        }
        match style.to_attribute_string().filter(|s| !s.is_empty()) {
            Some(style) => Value::from(format!("{style} {HIDDEN_STYLE}")),
            None => Value::from(HIDDEN_STYLE),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::AttributeRecorder;
    use crate::component::ViewClass;
    use crate::types::Props;

    #[test]
    fn test_parse_simple() {
        let binding = AttributeBinding::parse("title");
        assert_eq!(binding.property, "title");
        assert_eq!(binding.attribute, "title");
        assert!(binding.is_simple);
    }

    #[test]
    fn test_parse_aliased() {
        let binding = AttributeBinding::parse("isDisabled:disabled");
        assert_eq!(binding.property, "isDisabled");
        assert_eq!(binding.attribute, "disabled");
        assert!(!binding.is_simple);
    }

    #[test]
    fn test_install_dynamic_attribute() {
        let component = ViewClass::new("x").with_property("label", "Save").instantiate(Props::new());
        let mut recorder = AttributeRecorder::new();

        AttributeBinding::parse("label:aria-label").install(
            Element(0),
            &component,
            &LifecycleConfig::default(),
            &mut recorder,
        );

        assert_eq!(recorder.flush(Element(0))["aria-label"], "Save");
    }

    #[test]
    fn test_install_id_falls_back_to_element_id() {
        let mut props = Props::new();
        props.insert("elementId".to_string(), Value::from("fallback"));
        let component = ViewClass::new("x").instantiate(props);
        let mut recorder = AttributeRecorder::new();

        AttributeBinding::parse("customId:id").install(
            Element(0),
            &component,
            &LifecycleConfig::default(),
            &mut recorder,
        );

        assert_eq!(recorder.flush(Element(0))["id"], "fallback");
    }

    #[test]
    fn test_style_hides_when_invisible() {
        let component = ViewClass::new("x")
            .with_property("style", "color: red;")
            .with_property("isVisible", false)
            .instantiate(Props::new());
        let mut recorder = AttributeRecorder::new();

        AttributeBinding::parse("style").install(
            Element(0),
            &component,
            &LifecycleConfig::default(),
            &mut recorder,
        );

        assert_eq!(recorder.flush(Element(0))["style"], "color: red; display: none;");
    }
}
