//! Creation of nested (curly) components.

use std::rc::Rc;

use tracing::debug;

use super::assertions::{alias_id_to_element_id, check_component_initialization};
use super::bucket::ComponentStateBucket;
use super::definition::{ComponentDefinition, ComponentSource};
use super::dispatch;
use crate::args::{EvaluatedArgs, ProcessedValue, process_args};
use crate::component::InitProps;
use crate::environment::{DynamicScope, Environment};
use crate::error::{Error, Result};
use crate::reference::ValueRef;
use crate::types::{Notification, NotificationKind};

pub(super) fn create(
    environment: &Rc<Environment>,
    definition: &ComponentDefinition,
    args: &EvaluatedArgs,
    scope: &mut DynamicScope,
    caller_self: &ValueRef,
    has_block: bool,
) -> Result<ComponentStateBucket> {
    let ComponentSource::Class(class) = definition.source() else {
        return Err(Error::DefinitionMismatch {
            name: definition.name().to_string(),
            manager: "curly",
        });
    };

    let parent_view = scope.view().cloned();

    let processed = process_args(args, class.positional_params());
    let ProcessedValue { attrs, mut props } = processed.value();

    alias_id_to_element_id(args.named(), &mut props, environment.validation())?;

    let component = class.create(InitProps {
        attrs: attrs.clone(),
        props: props.clone(),
        parent_view: parent_view.clone(),
        has_block,
        target: caller_self.value(),
    });

    let finalizer = {
        let instance = component.borrow();
        environment
            .instrumentation()
            .start("render.component", &|| instance.instrument_details(true))
    };

    scope.set_view(Some(component.clone()));
    if let Some(parent) = &parent_view {
        parent.borrow_mut().append_child(component.clone());
    }

    debug!(
        component = definition.name(),
        has_parent = parent_view.is_some(),
        has_block,
        "component created"
    );

    dispatch(&component, Notification::with_attrs(NotificationKind::DidInitAttrs, attrs.clone()));
    dispatch(&component, Notification::with_attrs(NotificationKind::DidReceiveAttrs, attrs));
    if environment.has_dom() {
        dispatch(&component, Notification::bare(NotificationKind::WillInsertElement));
    }
    dispatch(&component, Notification::bare(NotificationKind::WillRender));

    let mut bucket = ComponentStateBucket::new(environment.clone(), component, processed, finalizer);
    bucket.class_ref = args.named().get("class").cloned();

    check_component_initialization(&*bucket.component.borrow(), &props, environment.validation())?;

    Ok(bucket)
}
