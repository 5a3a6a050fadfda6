//! Creation of the top-level component.
//!
//! The instance already exists: no argument processing, no parent and no
//! DOM gate on `willInsertElement`.

use std::rc::Rc;

use tracing::debug;

use super::assertions::check_component_initialization;
use super::bucket::ComponentStateBucket;
use super::definition::{ComponentDefinition, ComponentSource};
use super::dispatch;
use crate::args::{EvaluatedArgs, PositionalParams, process_args};
use crate::environment::{DynamicScope, Environment};
use crate::error::{Error, Result};
use crate::reference::ValueRef;
use crate::types::{Notification, NotificationKind, Props};

pub(super) fn create(
    environment: &Rc<Environment>,
    definition: &ComponentDefinition,
    args: &EvaluatedArgs,
    scope: &mut DynamicScope,
    _caller_self: &ValueRef,
    _has_block: bool,
) -> Result<ComponentStateBucket> {
    let ComponentSource::Instance(component) = definition.source() else {
        return Err(Error::DefinitionMismatch {
            name: definition.name().to_string(),
            manager: "root",
        });
    };
    let component = component.clone();

    let finalizer = {
        let instance = component.borrow();
        environment
            .instrumentation()
            .start("render.component", &|| instance.instrument_details(true))
    };

    scope.set_view(Some(component.clone()));

    debug!(component = component.borrow().name(), "root component created");

    for kind in [
        NotificationKind::DidInitAttrs,
        NotificationKind::DidReceiveAttrs,
        NotificationKind::WillInsertElement,
        NotificationKind::WillRender,
    ] {
        dispatch(&component, Notification::bare(kind));
    }

    check_component_initialization(&*component.borrow(), &Props::new(), environment.validation())?;

    let args = process_args(args, &PositionalParams::None);
    Ok(ComponentStateBucket::new(environment.clone(), component, args, finalizer))
}
