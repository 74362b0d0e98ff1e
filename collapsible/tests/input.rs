use collapsible::dom::{Document, Element, ElementId, Event, Key, Modifiers, MouseButton};
use collapsible::{Dispatch, PointerStrategy, Registry};

struct Fixture {
    doc: Document,
    widgets: Registry,
    panel: ElementId,
    header: ElementId,
    content: ElementId,
}

fn fixture(with_gestures: bool) -> Fixture {
    let mut doc = Document::new(
        Element::div().child(
            Element::div()
                .id("panel")
                .child(
                    Element::div()
                        .id("header")
                        .child(Element::text("Title").id("title")),
                )
                .child(Element::div().id("content")),
        ),
    );
    if with_gestures {
        doc.install_gesture_provider();
    }

    let panel = doc.by_id("panel").unwrap();
    let header = doc.by_id("header").unwrap();
    let content = doc.by_id("content").unwrap();
    let mut widgets = Registry::new();
    widgets.bind(&mut doc, panel, None).unwrap();
    doc.take_notifications();

    Fixture {
        doc,
        widgets,
        panel,
        header,
        content,
    }
}

impl Fixture {
    fn send(&mut self, event: Event) -> Dispatch {
        self.widgets.dispatch(&mut self.doc, &event)
    }

    fn collapsed(&self) -> bool {
        self.widgets.get(self.panel).unwrap().is_collapsed()
    }

    fn notifications(&self) -> Vec<&str> {
        self.doc
            .notifications()
            .iter()
            .map(|n| n.name.as_str())
            .collect()
    }
}

const TOGGLED: Dispatch = Dispatch {
    toggled: 1,
    default_prevented: true,
};

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_space_toggles_once() {
    let mut f = fixture(false);
    let header = f.header;

    assert_eq!(f.send(Event::key(header, Key::Space)), TOGGLED);
    assert!(f.collapsed());
    assert_eq!(f.notifications(), vec!["collapse"]);
}

#[test]
fn test_enter_toggles_once() {
    let mut f = fixture(false);
    let header = f.header;

    assert_eq!(f.send(Event::key(header, Key::Enter)), TOGGLED);
    assert!(f.collapsed());
    assert_eq!(f.send(Event::key(header, Key::Enter)), TOGGLED);
    assert!(!f.collapsed());
    assert_eq!(f.notifications(), vec!["collapse", "expand"]);
}

#[test]
fn test_other_keys_do_nothing() {
    let mut f = fixture(false);
    let header = f.header;

    for key in [Key::Char('a'), Key::Escape, Key::Tab, Key::Down, Key::F(1)] {
        assert_eq!(f.send(Event::key(header, key)), Dispatch::default());
    }
    assert!(!f.collapsed());
    assert!(f.notifications().is_empty());
}

#[test]
fn test_modifiers_do_not_block_activation() {
    let mut f = fixture(false);
    let event = Event::Key {
        target: f.header,
        key: Key::Enter,
        modifiers: Modifiers::shift(),
    };

    assert_eq!(f.send(event), TOGGLED);
    assert!(f.collapsed());
}

#[test]
fn test_keys_on_content_are_ignored() {
    let mut f = fixture(false);
    let content = f.content;

    assert_eq!(f.send(Event::key(content, Key::Enter)), Dispatch::default());
    assert!(!f.collapsed());
}

// ============================================================================
// Pointer
// ============================================================================

#[test]
fn test_click_toggles_without_gesture_provider() {
    let mut f = fixture(false);
    let header = f.header;
    assert_eq!(
        f.widgets.get(f.panel).unwrap().pointer(),
        PointerStrategy::Click
    );

    assert_eq!(f.send(Event::click(header)), TOGGLED);
    assert!(f.collapsed());
    assert_eq!(f.send(Event::tap(header)), Dispatch::default());
    assert!(f.collapsed());
}

#[test]
fn test_click_on_header_descendant_bubbles() {
    let mut f = fixture(false);
    let title = f.doc.by_id("title").unwrap();

    assert_eq!(f.send(Event::click(title)), TOGGLED);
    assert!(f.collapsed());
}

#[test]
fn test_click_outside_header_is_ignored() {
    let mut f = fixture(false);
    let content = f.content;
    let panel = f.panel;

    assert_eq!(f.send(Event::click(content)), Dispatch::default());
    assert_eq!(f.send(Event::click(panel)), Dispatch::default());
    assert!(!f.collapsed());
}

#[test]
fn test_any_button_activates() {
    let mut f = fixture(false);
    let event = Event::Click {
        target: f.header,
        button: MouseButton::Right,
    };

    assert_eq!(f.send(event), TOGGLED);
}

#[test]
fn test_tap_preferred_with_gesture_provider() {
    let mut f = fixture(true);
    let header = f.header;
    assert_eq!(
        f.widgets.get(f.panel).unwrap().pointer(),
        PointerStrategy::Tap
    );

    assert_eq!(f.send(Event::click(header)), Dispatch::default());
    assert!(!f.collapsed());
    assert_eq!(f.send(Event::tap(header)), TOGGLED);
    assert!(f.collapsed());
}

#[test]
fn test_strategy_fixed_at_bind_time() {
    let mut f = fixture(false);
    let header = f.header;
    f.doc.install_gesture_provider();

    assert_eq!(f.send(Event::tap(header)), Dispatch::default());
    assert_eq!(f.send(Event::click(header)), TOGGLED);
}

// ============================================================================
// Nesting
// ============================================================================

#[test]
fn test_nested_panels_toggle_independently() {
    let mut doc = Document::new(
        Element::div().child(
            Element::div()
                .id("outer")
                .class("collapsible")
                .child(Element::text("Outer").id("outer-header"))
                .child(
                    Element::div().id("outer-content").child(
                        Element::div()
                            .id("inner")
                            .class("collapsible")
                            .child(Element::text("Inner").id("inner-header"))
                            .child(Element::text("Body")),
                    ),
                ),
        ),
    );
    let root = doc.root();
    let mut widgets = Registry::new();
    widgets.enhance_default(&mut doc, root).unwrap();

    let outer = doc.by_id("outer").unwrap();
    let inner = doc.by_id("inner").unwrap();
    let inner_header = doc.by_id("inner-header").unwrap();

    let outcome = widgets.dispatch(&mut doc, &Event::click(inner_header));
    assert_eq!(outcome.toggled, 1);
    assert!(widgets.get(inner).unwrap().is_collapsed());
    assert!(!widgets.get(outer).unwrap().is_collapsed());
}
