//! Class name bindings - `classNameBindings` micro-syntax.
//!
//! | Binding             | Class applied                                         |
//! |---------------------|-------------------------------------------------------|
//! | `":static"`         | always `static`                                       |
//! | `"isActive"`        | `is-active` when `true`, the value itself when truthy |
//! | `"isActive:on"`     | `on` when truthy                                      |
//! | `"isActive:on:off"` | `on` when truthy, `off` otherwise                     |

use crate::component::ComponentHandle;
use crate::reference::ValueRef;
use crate::types::{Element, Value};

use super::operations::ElementOperations;

/// A parsed class name binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNameBinding {
    /// Property path; empty for static classes.
    pub path: String,
    pub truthy: Option<String>,
    pub falsy: Option<String>,
}

impl ClassNameBinding {
    pub fn parse(microsyntax: &str) -> Self {
        let mut parts = microsyntax.split(':');
        let path = parts.next().unwrap_or_default().to_string();
        let truthy = parts.next().map(str::to_string);
        let falsy = parts.next().map(str::to_string);
        Self { path, truthy, falsy }
    }

    pub fn is_static(&self) -> bool {
        self.path.is_empty()
    }

    /// Parse `microsyntax` and install it on `element`.
    pub fn install(
        element: Element,
        component: &ComponentHandle,
        microsyntax: &str,
        operations: &mut dyn ElementOperations,
    ) {
        let binding = Self::parse(microsyntax);

        if binding.is_static() {
            if let Some(class) = binding.truthy {
                operations.add_static_attribute(element, "class", Value::from(class));
            }
            return;
        }

        let source = ValueRef::property(component.clone(), &binding.path);
        let reference = match binding.truthy {
            Some(truthy) => {
                let falsy = binding.falsy;
                source.map(move |value| {
                    if value.is_truthy() {
                        Value::from(truthy.clone())
                    } else {
                        Value::from(falsy.clone())
                    }
                })
            }
            None => {
                let class_for_true = dasherize(binding.path.rsplit('.').next().unwrap_or_default());
                source.map(move |value| match value {
                    Value::Bool(true) => Value::from(class_for_true.clone()),
                    falsy if !falsy.is_truthy() => Value::Null,
                    other => Value::from(other.to_attribute_string()),
                })
            }
        };
        operations.add_dynamic_attribute(element, "class", reference);
    }
}

/// `isActive` → `is-active`, `is_active` → `is-active`.
///
/// A dash is only inserted where a lowercase letter or digit is followed by
/// an uppercase letter, so runs of capitals stay together (`URLPath` →
/// `urlpath`).
pub fn dasherize(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for ch in name.chars() {
        let boundary = prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
        if ch.is_uppercase() && boundary {
            out.push('-');
        }
        if ch == '_' || ch == ' ' {
            out.push('-');
        } else {
            out.extend(ch.to_lowercase());
        }
        prev = Some(ch);
    }
    out
}
