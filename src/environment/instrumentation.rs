//! Render instrumentation.
//!
//! `start` opens a measurement and returns a single-use finalizer closing
//! it. The lifecycle core guarantees each finalizer runs at most once.

use std::time::Instant;

use tracing::{debug_span, trace};

/// What a component reports about itself when a measurement starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentDetails {
    pub name: String,
    pub initial_render: bool,
}

/// Closes a measurement opened by [`Instrumentation::start`].
pub type Finalizer = Box<dyn FnOnce()>;

/// Instrumentation sink.
pub trait Instrumentation {
    /// Open a measurement for `event`.
    ///
    /// `details` is only evaluated if the sink actually records something.
    fn start(&self, event: &'static str, details: &dyn Fn() -> InstrumentDetails) -> Finalizer;
}

/// Records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInstrumentation;

impl Instrumentation for NoopInstrumentation {
    fn start(&self, _event: &'static str, _details: &dyn Fn() -> InstrumentDetails) -> Finalizer {
        Box::new(|| {})
    }
}

/// Opens a `tracing` span per measurement and logs its duration on close.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingInstrumentation;

impl Instrumentation for TracingInstrumentation {
    fn start(&self, event: &'static str, details: &dyn Fn() -> InstrumentDetails) -> Finalizer {
        let details = details();
        let span = debug_span!(
            "instrument",
            event,
            component = %details.name,
            initial_render = details.initial_render
        );
        let started = Instant::now();

        Box::new(move || {
            let _entered = span.enter();
            trace!(elapsed_us = started.elapsed().as_micros() as u64, "{event} finished");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_noop_skips_details() {
        let evaluated = Cell::new(false);
        let finalizer = NoopInstrumentation.start("render.component", &|| {
            evaluated.set(true);
            InstrumentDetails {
                name: "x".to_string(),
                initial_render: true,
            }
        });
        finalizer();
        assert!(!evaluated.get());
    }

    #[test]
    fn test_tracing_finalizer_runs() {
        let finalizer = TracingInstrumentation.start("render.component", &|| InstrumentDetails {
            name: "x".to_string(),
            initial_render: false,
        });
        finalizer();
    }
}
