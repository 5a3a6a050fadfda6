//! Bindings - computed attributes installed on a component's element.
//!
//! - [`ElementOperations`]: the sink attributes are described to
//! - [`AttributeBinding`]: `attributeBindings` micro-syntax
//! - [`ClassNameBinding`]: `classNameBindings` micro-syntax
//! - [`IsVisibleBinding`]: the default `style` visibility binding
//! - [`apply_attribute_bindings`]: right-to-left application with `id` and
//!   visibility defaults

mod attribute;
mod class_name;
mod operations;
mod visibility;

pub use attribute::*;
pub use class_name::*;
pub use operations::*;
pub use visibility::*;

use crate::component::ComponentHandle;
use crate::environment::LifecycleConfig;
use crate::error::ValidationError;
use crate::types::{Element, Value};

/// Apply `bindings` to `element`.
///
/// Bindings are scanned right to left and the first binding seen for an
/// attribute wins, so the last-declared binding of an attribute takes
/// effect. Afterwards a static `id` is added unless a binding targeted
/// `id`, and the visibility binding is added unless one targeted `style`.
pub fn apply_attribute_bindings(
    element: Element,
    bindings: &[String],
    component: &ComponentHandle,
    config: &LifecycleConfig,
    operations: &mut dyn ElementOperations,
) -> Result<(), ValidationError> {
    let mut seen: Vec<String> = Vec::with_capacity(bindings.len());

    for microsyntax in bindings.iter().rev() {
        let parsed = AttributeBinding::parse(microsyntax);

        if config.validation.is_development() && parsed.attribute == "class" {
            return Err(ValidationError::ClassAttributeBinding {
                component: component.borrow().name().to_string(),
            });
        }

        if seen.contains(&parsed.attribute) {
            continue;
        }
        parsed.install(element, component, config, operations);
        seen.push(parsed.attribute);
    }

    if !seen.iter().any(|attr| attr == "id") {
        let element_id = Value::from(component.borrow().element_id());
        operations.add_static_attribute(element, "id", element_id);
    }

    if !seen.iter().any(|attr| attr == "style") {
        IsVisibleBinding::install(element, component, config, operations);
    }

    Ok(())
}
