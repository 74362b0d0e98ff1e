use crate::element::ElementId;
use crate::event::EventKind;

/// A bound input handler.
///
/// The document never runs code itself: dispatch reports which listeners
/// an event reached, and the owner of the namespace acts on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Listener {
    /// Groups listeners so they can be unbound together.
    pub namespace: String,
    /// Element whose behavior this listener drives.
    pub owner: ElementId,
}

impl Listener {
    pub fn new(namespace: impl Into<String>, owner: ElementId) -> Self {
        Self {
            namespace: namespace.into(),
            owner,
        }
    }
}

/// One listener reached by a dispatched event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerHit {
    /// Element the listener is bound on (the target or an ancestor).
    pub current: ElementId,
    pub kind: EventKind,
    pub listener: Listener,
}

/// A named lifecycle notification raised on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub target: ElementId,
    pub name: String,
}

impl Notification {
    pub fn new(target: ElementId, name: impl Into<String>) -> Self {
        Self {
            target,
            name: name.into(),
        }
    }
}
