pub mod document;
pub mod element;
pub mod event;
pub mod listener;
pub mod selector;

pub use document::Document;
pub use element::{find_element, Element, ElementId, Node};
pub use event::{Event, EventKind, Key, Modifiers, MouseButton};
pub use listener::{Listener, ListenerHit, Notification};
pub use selector::{Selector, SelectorError};
