//! Argument processing - evaluated args to `attrs` and `props`.
//!
//! `attrs` is the snapshot handed to lifecycle notifications; `props` is
//! what gets assigned onto the component. Positional values are mapped
//! onto the class's declared positional parameter names.

use super::evaluated::EvaluatedArgs;
use super::merge::PositionalParams;
use crate::reference::Tag;
use crate::types::{AttrValue, Attrs, Props, Value};

/// The pair produced by reading processed arguments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcessedValue {
    pub attrs: Attrs,
    pub props: Props,
}

/// Arguments bound to a positional parameter declaration, read lazily.
#[derive(Clone, Debug, Default)]
pub struct ProcessedArgs {
    args: EvaluatedArgs,
    positional_params: PositionalParams,
}

/// Bind `args` to a class's positional parameter declaration.
pub fn process_args(args: &EvaluatedArgs, positional_params: &PositionalParams) -> ProcessedArgs {
    ProcessedArgs {
        args: args.clone(),
        positional_params: positional_params.clone(),
    }
}

impl ProcessedArgs {
    pub fn args(&self) -> &EvaluatedArgs {
        &self.args
    }

    pub fn tag(&self) -> Tag {
        self.args.tag()
    }

    /// Read the current `attrs` / `props` pair.
    pub fn value(&self) -> ProcessedValue {
        let mut attrs = Attrs::new();
        let mut props = Props::new();

        for (name, reference) in self.args.named().map() {
            let value = reference.value();
            attrs.insert(name.clone(), AttrValue::new(value.clone(), reference.is_mutable()));
            props.insert(name.clone(), value);
        }

        let positional = self.args.positional();
        if positional.is_empty() {
            return ProcessedValue { attrs, props };
        }

        match &self.positional_params {
            PositionalParams::None => {}
            PositionalParams::Rest(name) => {
                let list = Value::List(positional.value());
                attrs.insert(name.clone(), AttrValue::new(list.clone(), false));
                props.insert(name.clone(), list);
            }
            PositionalParams::Named(names) => {
                for (name, reference) in names.iter().zip(positional.values()) {
                    let value = reference.value();
                    attrs.insert(name.clone(), AttrValue::new(value.clone(), reference.is_mutable()));
                    props.insert(name.clone(), value);
                }
            }
        }

        ProcessedValue { attrs, props }
    }
}
