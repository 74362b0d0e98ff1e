//! Collapsible panels over a DOM host.
//!
//! A bound element's first header child toggles the visibility of its
//! content region on click/tap or Enter/Space, with ARIA attributes kept in
//! step and `init`/`expand`/`collapse` notifications raised on the root.
//!
//! ```
//! use collapsible::{Registry, dom::{Document, Element, Event}};
//!
//! let mut doc = Document::new(
//!     Element::div().child(
//!         Element::div()
//!             .id("faq")
//!             .class("collapsible")
//!             .child(Element::text("Question"))
//!             .child(Element::text("Answer")),
//!     ),
//! );
//! let mut widgets = Registry::new();
//! let root = doc.root();
//! widgets.enhance_default(&mut doc, root).unwrap();
//!
//! let faq = doc.by_id("faq").unwrap();
//! let header = widgets.get(faq).unwrap().header().unwrap();
//! widgets.dispatch(&mut doc, &Event::click(header));
//! assert!(widgets.get(faq).unwrap().is_collapsed());
//! ```

pub mod error;
pub mod host;
pub mod options;
pub mod registry;
pub mod widget;

pub use collapsible_dom as dom;

pub use error::{CollapsibleError, Result};
pub use host::{Host, PointerStrategy};
pub use options::{Options, OptionsError, PartialOptions};
pub use registry::{Dispatch, Registry};
pub use widget::{Collapsible, EVENT_COLLAPSE, EVENT_EXPAND, EVENT_INIT};

/// Base name for classes, listener namespace and the default enhance
/// selector.
pub const PLUGIN_NAME: &str = "collapsible";
