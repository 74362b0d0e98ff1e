use collapsible::dom::{Document, Element, EventKind, Event, Listener};
use collapsible::{CollapsibleError, PartialOptions, Registry};

fn panel(id: &str) -> Element {
    Element::div()
        .id(id)
        .class("collapsible")
        .child(Element::text("Header").id(format!("{id}-header")))
        .child(Element::text("Content"))
}

fn three_panels() -> Document {
    Document::new(
        Element::div()
            .id("page")
            .child(panel("a"))
            .child(Element::div().child(panel("b")))
            .child(panel("c"))
            .child(Element::div().id("plain").child(Element::text("x"))),
    )
}

// ============================================================================
// Binding
// ============================================================================

#[test]
fn test_second_bind_is_noop() {
    let mut doc = three_panels();
    let a = doc.by_id("a").unwrap();
    let header = doc.by_id("a-header").unwrap();
    let mut widgets = Registry::new();

    assert!(widgets.bind(&mut doc, a, None).unwrap());
    let classes = doc.classes(a);
    let listeners = doc.listeners(header).len();
    doc.take_notifications();

    let rebind = widgets.bind(&mut doc, a, Some(PartialOptions::new().collapsed(true)));
    assert!(!rebind.unwrap());

    assert_eq!(widgets.len(), 1);
    assert_eq!(doc.classes(a), classes);
    assert_eq!(doc.listeners(header).len(), listeners);
    assert!(!widgets.get(a).unwrap().is_collapsed());
    assert!(doc.notifications().is_empty());
}

#[test]
fn test_bind_binds_pointer_and_key_listeners() {
    let mut doc = three_panels();
    let a = doc.by_id("a").unwrap();
    let header = doc.by_id("a-header").unwrap();
    let mut widgets = Registry::new();
    widgets.bind(&mut doc, a, None).unwrap();

    let kinds: Vec<EventKind> = doc.listeners(header).iter().map(|(kind, _)| *kind).collect();
    assert_eq!(kinds, vec![EventKind::Click, EventKind::KeyDown]);
    assert!(
        doc.listeners(header)
            .iter()
            .all(|(_, listener)| listener.owner == a && listener.namespace == "collapsible")
    );
}

#[test]
fn test_bind_unknown_element_fails() {
    let mut doc = three_panels();
    let a = doc.by_id("a").unwrap();
    doc.remove(a);
    let mut widgets = Registry::new();

    let err = widgets.bind(&mut doc, a, None).unwrap_err();
    assert!(matches!(err, CollapsibleError::UnknownElement(id) if id == a));
    assert!(widgets.is_empty());
}

// ============================================================================
// Enhance
// ============================================================================

#[test]
fn test_enhance_binds_only_unbound_matches() {
    let mut doc = three_panels();
    let root = doc.root();
    let a = doc.by_id("a").unwrap();
    let b = doc.by_id("b").unwrap();
    let c = doc.by_id("c").unwrap();
    let a_header = doc.by_id("a-header").unwrap();

    let mut widgets = Registry::new();
    widgets
        .bind(&mut doc, b, Some(PartialOptions::new().collapsed(true)))
        .unwrap();
    let b_header = doc.by_id("b-header").unwrap();
    let b_classes = doc.classes(b);
    doc.take_notifications();

    let bound = widgets.enhance_default(&mut doc, root).unwrap();

    assert_eq!(bound, vec![a, c]);
    assert_eq!(widgets.len(), 3);
    assert!(widgets.is_bound(a));
    assert!(!widgets.is_bound(doc.by_id("plain").unwrap()));

    // The pre-bound panel keeps its state and listeners
    assert!(widgets.get(b).unwrap().is_collapsed());
    assert_eq!(doc.classes(b), b_classes);
    assert_eq!(doc.listeners(b_header).len(), 2);
    assert_eq!(doc.listeners(a_header).len(), 2);

    let inits: Vec<_> = doc
        .notifications()
        .iter()
        .filter(|n| n.name == "init")
        .map(|n| n.target)
        .collect();
    assert_eq!(inits, vec![a, c]);
}

#[test]
fn test_enhance_twice_binds_nothing_new() {
    let mut doc = three_panels();
    let root = doc.root();
    let mut widgets = Registry::new();

    assert_eq!(widgets.enhance_default(&mut doc, root).unwrap().len(), 3);
    assert!(widgets.enhance_default(&mut doc, root).unwrap().is_empty());
    assert_eq!(widgets.len(), 3);
}

#[test]
fn test_enhance_includes_matching_scope() {
    let mut doc = three_panels();
    let a = doc.by_id("a").unwrap();
    let mut widgets = Registry::new();

    assert_eq!(widgets.enhance_default(&mut doc, a).unwrap(), vec![a]);
}

#[test]
fn test_enhance_limited_to_scope() {
    let mut doc = three_panels();
    let b = doc.by_id("b").unwrap();
    let wrapper = doc.parent(b).unwrap();
    let mut widgets = Registry::new();

    assert_eq!(widgets.enhance_default(&mut doc, wrapper).unwrap(), vec![b]);
    assert_eq!(widgets.len(), 1);
}

#[test]
fn test_enhance_with_custom_selector() {
    let mut doc = Document::new(
        Element::div()
            .child(
                Element::div()
                    .id("x")
                    .attr("data-role", "accordion")
                    .child(Element::text("h"))
                    .child(Element::text("c")),
            )
            .child(panel("y")),
    );
    let root = doc.root();
    let x = doc.by_id("x").unwrap();
    let mut widgets = Registry::new();

    let bound = widgets
        .enhance(&mut doc, root, "[data-role=accordion]")
        .unwrap();
    assert_eq!(bound, vec![x]);
    // Binding applies the base class even to elements found another way
    assert!(doc.has_class(x, "collapsible"));
}

#[test]
fn test_enhance_rejects_bad_selector() {
    let mut doc = three_panels();
    let root = doc.root();
    let mut widgets = Registry::new();

    let err = widgets.enhance(&mut doc, root, "..").unwrap_err();
    assert!(matches!(err, CollapsibleError::Selector(_)));
    assert!(widgets.is_empty());
}

// ============================================================================
// Release and prune
// ============================================================================

#[test]
fn test_release_stops_input_handling() {
    let mut doc = three_panels();
    let a = doc.by_id("a").unwrap();
    let header = doc.by_id("a-header").unwrap();
    let mut widgets = Registry::new();
    widgets.bind(&mut doc, a, None).unwrap();

    assert!(widgets.release(&mut doc, a));
    assert!(!widgets.release(&mut doc, a));
    assert!(doc.listeners(header).is_empty());

    let outcome = widgets.dispatch(&mut doc, &Event::click(header));
    assert_eq!(outcome.toggled, 0);
    assert!(!outcome.default_prevented);

    // Markup stays; binding again works
    assert!(doc.has_class(a, "collapsible-enhanced"));
    assert!(widgets.bind(&mut doc, a, None).unwrap());
}

#[test]
fn test_prune_drops_detached_instances() {
    let mut doc = three_panels();
    let root = doc.root();
    let a = doc.by_id("a").unwrap();
    let b = doc.by_id("b").unwrap();
    let mut widgets = Registry::new();
    widgets.enhance_default(&mut doc, root).unwrap();

    // Removing the wrapper takes `b` with it
    let wrapper = doc.parent(b).unwrap();
    doc.remove(a);
    doc.remove(wrapper);

    assert_eq!(widgets.len(), 3);
    assert_eq!(widgets.prune(&mut doc), 2);
    assert_eq!(widgets.len(), 1);
    assert!(widgets.is_bound(doc.by_id("c").unwrap()));
    assert_eq!(widgets.prune(&mut doc), 0);
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_dispatch_ignores_foreign_listeners() {
    let mut doc = three_panels();
    let a = doc.by_id("a").unwrap();
    let header = doc.by_id("a-header").unwrap();
    let mut widgets = Registry::new();
    widgets.bind(&mut doc, a, None).unwrap();
    doc.bind(header, EventKind::Click, Listener::new("analytics", a));

    let outcome = widgets.dispatch(&mut doc, &Event::click(header));
    assert_eq!(outcome.toggled, 1);
    assert!(widgets.get(a).unwrap().is_collapsed());
}

#[test]
fn test_iter_visits_every_instance() {
    let mut doc = three_panels();
    let root = doc.root();
    let mut widgets = Registry::new();
    widgets.enhance_default(&mut doc, root).unwrap();

    let mut elements: Vec<_> = widgets.iter().map(|w| w.element()).collect();
    elements.sort();
    let mut expected = vec![
        doc.by_id("a").unwrap(),
        doc.by_id("b").unwrap(),
        doc.by_id("c").unwrap(),
    ];
    expected.sort();
    assert_eq!(elements, expected);
}
