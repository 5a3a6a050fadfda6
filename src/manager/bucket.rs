//! Component state bucket - the per-instance lifecycle record.

use std::mem;
use std::rc::Rc;

use crate::args::ProcessedArgs;
use crate::component::ComponentHandle;
use crate::environment::{Environment, Finalizer};
use crate::reference::{Revision, ValueRef};

/// Mutable lifecycle record of one live component.
///
/// Owns the component handle, the arguments it was last synced from, the
/// argument revision observed at that sync, and the pending
/// instrumentation finalizer.
pub struct ComponentStateBucket {
    pub(crate) environment: Rc<Environment>,
    pub(crate) component: ComponentHandle,
    pub(crate) class_ref: Option<ValueRef>,
    pub(crate) args: ProcessedArgs,
    pub(crate) args_revision: Revision,
    finalizer: Finalizer,
}

impl ComponentStateBucket {
    pub(crate) fn new(
        environment: Rc<Environment>,
        component: ComponentHandle,
        args: ProcessedArgs,
        finalizer: Finalizer,
    ) -> Self {
        let args_revision = args.tag().value();
        Self {
            environment,
            component,
            class_ref: None,
            args,
            args_revision,
            finalizer,
        }
    }

    pub fn environment(&self) -> &Rc<Environment> {
        &self.environment
    }

    pub fn component(&self) -> &ComponentHandle {
        &self.component
    }

    /// Dynamic `class` argument captured at creation.
    pub fn class_ref(&self) -> Option<&ValueRef> {
        self.class_ref.as_ref()
    }

    pub fn args(&self) -> &ProcessedArgs {
        &self.args
    }

    /// Argument revision observed at the last sync.
    pub fn args_revision(&self) -> Revision {
        self.args_revision
    }

    /// Install the finalizer of a new measurement.
    pub(crate) fn set_finalizer(&mut self, finalizer: Finalizer) {
        self.finalizer = finalizer;
    }

    /// Run the pending finalizer. Later calls are no-ops until a new
    /// finalizer is installed.
    pub fn finalize(&mut self) {
        let finalizer = mem::replace(&mut self.finalizer, Box::new(|| {}));
        finalizer();
    }
}
