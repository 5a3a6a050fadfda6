//! End-to-end lifecycle of a component tree.
//!
//! Drives a root component and a nested child through the full renderer
//! sequence using only the public API:
//! create → did_create_element → did_render_layout → did_create
//! → update → did_update_layout → did_update → destroy
//!
//! Run with: cargo test --test lifecycle

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_lifecycle::{
    AttributeRecorder, Bounds, CellRef, ComponentDefinition, DynamicScope, Element, Environment,
    EvaluatedArgs, Finalizer, InstrumentDetails, Instrumentation, LifecycleConfig, NotificationKind,
    Phase, Template, TemplateRegistry, ValidationMode, Value, ValueRef, ViewClass,
};
use spark_signals::signal;

// =============================================================================
// PROBES
// =============================================================================

type Log = Rc<RefCell<Vec<(String, NotificationKind)>>>;

const KINDS: [NotificationKind; 9] = [
    NotificationKind::DidInitAttrs,
    NotificationKind::DidReceiveAttrs,
    NotificationKind::WillInsertElement,
    NotificationKind::WillRender,
    NotificationKind::DidInsertElement,
    NotificationKind::DidRender,
    NotificationKind::DidUpdateAttrs,
    NotificationKind::WillUpdate,
    NotificationKind::DidUpdate,
];

fn logged(class: ViewClass, name: &str, log: &Log) -> ViewClass {
    KINDS.iter().fold(class, |class, kind| {
        let log = log.clone();
        let name = name.to_string();
        class.with_listener(*kind, move |_, n| log.borrow_mut().push((name.clone(), n.kind)))
    })
}

fn drain(log: &Log, name: &str) -> Vec<NotificationKind> {
    let mut log = log.borrow_mut();
    let (mine, rest): (Vec<_>, Vec<_>) = log.drain(..).partition(|(who, _)| who == name);
    *log = rest;
    mine.into_iter().map(|(_, kind)| kind).collect()
}

#[derive(Default)]
struct Measurements {
    open: Rc<Cell<i32>>,
    initial: Cell<usize>,
    rerender: Cell<usize>,
}

impl Instrumentation for Measurements {
    fn start(&self, _event: &'static str, details: &dyn Fn() -> InstrumentDetails) -> Finalizer {
        if details().initial_render {
            self.initial.set(self.initial.get() + 1);
        } else {
            self.rerender.set(self.rerender.get() + 1);
        }
        self.open.set(self.open.get() + 1);
        let open = self.open.clone();
        Box::new(move || open.set(open.get() - 1))
    }
}

fn environment(measurements: Rc<Measurements>) -> Rc<Environment> {
    let owner = TemplateRegistry::new()
        .with("template:components/-default", Template::new("default"))
        .with("template:cards/user", Template::new("user-card"));
    let config = LifecycleConfig::default().with_validation(ValidationMode::Development);
    Rc::new(Environment::new(config, Rc::new(owner)).with_instrumentation(measurements))
}

fn bounds(parent: usize) -> Bounds {
    Bounds {
        parent: Element(parent),
        first: 0,
        last: 0,
    }
}

// =============================================================================
// FULL SEQUENCE
// =============================================================================

#[test]
fn test_root_and_child_full_lifecycle() {
    let log = Log::default();
    let measurements = Rc::new(Measurements::default());
    let env = environment(measurements.clone());

    // Root
    let app = logged(ViewClass::new("application"), "app", &log).instantiate(Default::default());
    let root_def = ComponentDefinition::root(app.clone());
    let root_manager = root_def.manager();

    let mut scope = DynamicScope::new();
    let mut root = root_manager
        .create(&env, &root_def, &EvaluatedArgs::empty(), &mut scope, &ValueRef::constant(Value::Null), false)
        .unwrap();

    // Child, rendered inside the root's scope
    let user = CellRef::new("ada");
    let child_class = logged(
        ViewClass::new("user-card")
            .with_class_names(["card"])
            .with_class_name_bindings(["isAdmin:admin"])
            .with_attribute_bindings(["name:data-user"])
            .with_property("layoutName", "cards/user"),
        "card",
        &log,
    );
    let child_def = ComponentDefinition::curly("user-card", Rc::new(child_class), None, None);
    let child_manager = child_def.manager();
    let args = EvaluatedArgs::from_parts(
        vec![],
        [("name", ValueRef::Cell(user.clone())), ("isAdmin", ValueRef::constant(true))],
    );
    let args = child_manager.prepare_args(&env, &child_def, &args).unwrap();

    let mut child_scope = scope.child();
    let mut card = child_manager
        .create(&env, &child_def, &args, &mut child_scope, &root_manager.get_self(&root).get("title"), true)
        .unwrap();

    assert_eq!(app.borrow().children().len(), 1);
    assert!(Rc::ptr_eq(scope.view().unwrap(), &app));
    assert_eq!(
        drain(&log, "card"),
        vec![
            NotificationKind::DidInitAttrs,
            NotificationKind::DidReceiveAttrs,
            NotificationKind::WillInsertElement,
            NotificationKind::WillRender,
        ]
    );

    // Layouts
    let layout = child_manager.layout_for(&child_def, &card);
    assert_eq!(layout.template().id(), "user-card");
    assert_eq!(root_manager.layout_for(&root_def, &root).template().id(), "default");

    // Elements
    let mut ops = AttributeRecorder::new();
    let app_el = Element(1);
    let card_el = Element(2);
    root_manager.did_create_element(&root, app_el, &mut ops).unwrap();
    child_manager.did_create_element(&card, card_el, &mut ops).unwrap();
    layout.install_wrapper_attributes(card_el, &child_manager.get_self(&card), &mut ops);

    let card_attrs = ops.flush(card_el);
    assert_eq!(card_attrs["data-user"], "ada");
    assert_eq!(card_attrs["class"], "card admin spark-view");
    assert!(card_attrs.contains_key("id"));
    assert!(!card_attrs.contains_key("style"));

    // Layout rendered: both initial measurements closed
    child_manager.did_render_layout(&mut card, bounds(2));
    root_manager.did_render_layout(&mut root, bounds(1));
    assert_eq!(measurements.initial.get(), 2);
    assert_eq!(measurements.open.get(), 0);

    child_manager.did_create(&card);
    root_manager.did_create(&root);
    assert_eq!(card.component().borrow().phase(), Phase::InDom);
    assert_eq!(app.borrow().phase(), Phase::InDom);
    assert_eq!(
        drain(&log, "card"),
        vec![NotificationKind::DidInsertElement, NotificationKind::DidRender]
    );

    // Re-render with unchanged args
    child_manager.update(&mut card, &child_scope);
    child_manager.did_update_layout(&mut card);
    child_manager.did_update(&card);
    assert_eq!(
        drain(&log, "card"),
        vec![
            NotificationKind::WillUpdate,
            NotificationKind::WillRender,
            NotificationKind::DidUpdate,
            NotificationKind::DidRender,
        ]
    );

    // Re-render after an argument changed
    user.set("grace");
    child_manager.update(&mut card, &child_scope);
    child_manager.did_update_layout(&mut card);
    child_manager.did_update(&card);
    assert_eq!(
        drain(&log, "card"),
        vec![
            NotificationKind::DidUpdateAttrs,
            NotificationKind::DidReceiveAttrs,
            NotificationKind::WillUpdate,
            NotificationKind::WillRender,
            NotificationKind::DidUpdate,
            NotificationKind::DidRender,
        ]
    );
    assert_eq!(card.component().borrow().get("name"), Value::from("grace"));
    assert_eq!(ops.flush(card_el)["data-user"], "grace");
    assert_eq!(measurements.rerender.get(), 2);
    assert_eq!(measurements.open.get(), 0);

    // Teardown
    child_manager.get_destructor(&card).destroy();
    root_manager.get_destructor(&root).destroy();
    assert_eq!(card.component().borrow().phase(), Phase::Destroyed);
    assert_eq!(app.borrow().phase(), Phase::Destroyed);
    assert!(app.borrow().children().is_empty());
}

// =============================================================================
// SIGNAL-DRIVEN ARGUMENTS
// =============================================================================

#[test]
fn test_signal_argument_triggers_update() {
    let log = Log::default();
    let env = environment(Rc::new(Measurements::default()));

    let count = signal(Value::Int(1));
    let definition = ComponentDefinition::curly(
        "counter",
        Rc::new(logged(ViewClass::new("counter"), "counter", &log)),
        None,
        None,
    );
    let manager = definition.manager();
    let args = EvaluatedArgs::from_parts(vec![], [("count", ValueRef::signal(count.clone()))]);

    let mut bucket = manager
        .create(&env, &definition, &args, &mut DynamicScope::new(), &ValueRef::constant(Value::Null), false)
        .unwrap();
    drain(&log, "counter");

    count.set(Value::Int(2));
    manager.update(&mut bucket, &DynamicScope::new());

    assert_eq!(bucket.component().borrow().get("count"), Value::Int(2));
    assert_eq!(
        drain(&log, "counter"),
        vec![
            NotificationKind::DidUpdateAttrs,
            NotificationKind::DidReceiveAttrs,
            NotificationKind::WillUpdate,
            NotificationKind::WillRender,
        ]
    );
}

// =============================================================================
// BUILD-MODE GATING
// =============================================================================

#[test]
fn test_tagless_misuse_only_fails_in_development() {
    let class = Rc::new(
        ViewClass::new("fragment")
            .with_tag_name("")
            .with_class_name_bindings(["isActive"]),
    );
    let definition = ComponentDefinition::curly("fragment", class, None, None);

    for (mode, should_fail) in [(ValidationMode::Development, true), (ValidationMode::Production, false)] {
        let owner = Rc::new(TemplateRegistry::new());
        let env = Rc::new(Environment::new(LifecycleConfig::default().with_validation(mode), owner));
        let result = definition.manager().create(
            &env,
            &definition,
            &EvaluatedArgs::empty(),
            &mut DynamicScope::new(),
            &ValueRef::constant(Value::Null),
            false,
        );
        assert_eq!(result.is_err(), should_fail, "{mode:?}");
    }
}
