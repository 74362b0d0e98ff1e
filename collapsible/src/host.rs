//! The DOM capabilities a widget needs from its host.

use collapsible_dom::{
    Document, ElementId, Event, EventKind, Listener, ListenerHit, Selector,
};

/// DOM access used by [`Collapsible`](crate::Collapsible).
///
/// Operations on ids the host does not know must be no-ops (or report
/// absence), never panic.
pub trait Host {
    fn contains(&self, element: ElementId) -> bool;

    /// Whether `element` is still part of the live document.
    fn is_attached(&self, element: ElementId) -> bool;

    fn children(&self, element: ElementId) -> Vec<ElementId>;

    /// Direct children of `element` matching `selector`.
    fn select_children(&self, element: ElementId, selector: &Selector) -> Vec<ElementId>;

    fn next_sibling(&self, element: ElementId) -> Option<ElementId>;

    fn matches(&self, element: ElementId, selector: &Selector) -> bool;

    /// Descendants of `scope` matching `selector`, in document order.
    fn query_all(&self, scope: ElementId, selector: &Selector) -> Vec<ElementId>;

    fn has_class(&self, element: ElementId, class: &str) -> bool;
    fn add_class(&mut self, element: ElementId, class: &str);
    fn remove_class(&mut self, element: ElementId, class: &str);

    fn attr(&self, element: ElementId, name: &str) -> Option<&str>;
    fn has_attr(&self, element: ElementId, name: &str) -> bool {
        self.attr(element, name).is_some()
    }
    fn set_attr(&mut self, element: ElementId, name: &str, value: &str);

    fn bind(&mut self, element: ElementId, kind: EventKind, listener: Listener);
    /// Drop all listeners in `namespace` bound on `element`.
    fn unbind(&mut self, element: ElementId, namespace: &str);
    /// Listeners `event` reaches, innermost first.
    fn dispatch(&self, event: &Event) -> Vec<ListenerHit>;

    /// Raise a named notification on `element`.
    fn emit(&mut self, element: ElementId, name: &str);

    /// Whether a tap-gesture detector is installed.
    fn has_gesture_provider(&self) -> bool;
}

/// How pointer activation reaches the header.
///
/// Picked once when the widget binds; later changes to the host's gesture
/// support do not affect an existing instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerStrategy {
    Tap,
    Click,
}

impl PointerStrategy {
    pub fn detect<H: Host + ?Sized>(host: &H) -> Self {
        if host.has_gesture_provider() {
            Self::Tap
        } else {
            Self::Click
        }
    }

    pub fn event_kind(self) -> EventKind {
        match self {
            Self::Tap => EventKind::Tap,
            Self::Click => EventKind::Click,
        }
    }
}

impl Host for Document {
    fn contains(&self, element: ElementId) -> bool {
        Document::contains(self, element)
    }

    fn is_attached(&self, element: ElementId) -> bool {
        Document::is_attached(self, element)
    }

    fn children(&self, element: ElementId) -> Vec<ElementId> {
        Document::children(self, element)
    }

    fn select_children(&self, element: ElementId, selector: &Selector) -> Vec<ElementId> {
        Document::select_children(self, element, selector)
    }

    fn next_sibling(&self, element: ElementId) -> Option<ElementId> {
        Document::next_sibling(self, element)
    }

    fn matches(&self, element: ElementId, selector: &Selector) -> bool {
        Document::matches(self, element, selector)
    }

    fn query_all(&self, scope: ElementId, selector: &Selector) -> Vec<ElementId> {
        Document::query_all(self, scope, selector)
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        Document::has_class(self, element, class)
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        Document::add_class(self, element, class)
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        Document::remove_class(self, element, class)
    }

    fn attr(&self, element: ElementId, name: &str) -> Option<&str> {
        Document::attr(self, element, name)
    }

    fn set_attr(&mut self, element: ElementId, name: &str, value: &str) {
        Document::set_attr(self, element, name, value)
    }

    fn bind(&mut self, element: ElementId, kind: EventKind, listener: Listener) {
        Document::bind(self, element, kind, listener)
    }

    fn unbind(&mut self, element: ElementId, namespace: &str) {
        Document::unbind(self, element, namespace)
    }

    fn dispatch(&self, event: &Event) -> Vec<ListenerHit> {
        Document::dispatch(self, event)
    }

    fn emit(&mut self, element: ElementId, name: &str) {
        Document::emit(self, element, name)
    }

    fn has_gesture_provider(&self) -> bool {
        Document::has_gesture_provider(self)
    }
}
