//! Development-mode structural checks run at component creation.

use crate::args::NamedArgs;
use crate::component::Component;
use crate::environment::ValidationMode;
use crate::error::ValidationError;
use crate::types::{Props, Value};

/// Alias a named `id` argument to `elementId`.
///
/// Passing both is rejected in development mode; in production the `id`
/// value silently wins.
pub fn alias_id_to_element_id(
    named: &NamedArgs,
    props: &mut Props,
    mode: ValidationMode,
) -> Result<(), ValidationError> {
    if !named.has("id") {
        return Ok(());
    }
    if mode.is_development() && named.has("elementId") {
        return Err(ValidationError::IdAndElementId);
    }
    let id = props.get("id").cloned().unwrap_or_default();
    props.insert("elementId".to_string(), id);
    Ok(())
}

/// Check metadata a freshly created component must satisfy.
///
/// - no `classNameBindings` entry contains a space
/// - tag-less components carry no `classNameBindings`, `attributeBindings`
///   or `elementId` (other than the one requested through `id`)
pub fn check_component_initialization(
    component: &dyn Component,
    props: &Props,
    mode: ValidationMode,
) -> Result<(), ValidationError> {
    if !mode.is_development() {
        return Ok(());
    }

    let name = component.name();

    if let Some(binding) = component
        .class_name_bindings()
        .iter()
        .find(|binding| binding.split(' ').count() > 1)
    {
        return Err(ValidationError::ClassNameBindingHasSpaces {
            component: name.to_string(),
            binding: binding.clone(),
        });
    }

    if component.tag_name() != Some("") {
        return Ok(());
    }

    if !component.class_name_bindings().is_empty() {
        return Err(ValidationError::TaglessClassNameBindings {
            component: name.to_string(),
        });
    }

    if let Some(element_id) = component.element_id() {
        let requested = props.get("id").and_then(Value::to_attribute_string);
        if requested.as_deref() != Some(element_id) {
            return Err(ValidationError::TaglessElementId {
                component: name.to_string(),
            });
        }
    }

    if !component.attribute_bindings().is_empty() {
        return Err(ValidationError::TaglessAttributeBindings {
            component: name.to_string(),
        });
    }

    Ok(())
}
