//! The collapsible widget: one instance per bound element.

use collapsible_dom::{ElementId, Event, EventKind, Key, Listener, Selector};

use crate::host::{Host, PointerStrategy};
use crate::options::{Options, PartialOptions};
use crate::PLUGIN_NAME;

/// Raised once on the root after setup.
pub const EVENT_INIT: &str = "init";
/// Raised on every `expand`, including when already expanded.
pub const EVENT_EXPAND: &str = "expand";
/// Raised on every `collapse`, including when already collapsed.
pub const EVENT_COLLAPSE: &str = "collapse";

/// A panel whose content is shown or hidden by activating its header.
///
/// The root element carries the state: while collapsed it has the
/// collapsed class, lacks the expanded class and has
/// `aria-expanded="false"`; while expanded the reverse.
#[derive(Debug, Clone)]
pub struct Collapsible {
    element: ElementId,
    header: Option<ElementId>,
    content: Option<ElementId>,
    options: Options,
    collapsed: bool,
    pointer: PointerStrategy,
}

impl Collapsible {
    /// Resolve options, mark up `element` and bind its input listeners.
    ///
    /// The initial state is applied without a notification. `init` is left
    /// to the caller, which raises it once the instance is stored.
    pub(crate) fn new<H: Host + ?Sized>(
        host: &mut H,
        element: ElementId,
        explicit: Option<&PartialOptions>,
    ) -> Self {
        let data = PartialOptions::from_data_attributes(&*host, element);
        let mut options = Options::resolve(std::iter::once(&data).chain(explicit));

        if host.has_class(element, &options.collapsed_class) {
            options.collapsed = true;
        }

        let header = host
            .select_children(element, &Selector::class(options.header_class.as_str()))
            .first()
            .copied()
            .or_else(|| host.children(element).first().copied());

        let content = host
            .select_children(element, &Selector::class(options.content_class.as_str()))
            .first()
            .copied()
            .or_else(|| header.and_then(|header| host.next_sibling(header)));

        if header.is_none() {
            log::warn!("[collapsible] {element} has no children; nothing to activate");
        }

        let mut widget = Self {
            element,
            header,
            content,
            collapsed: options.collapsed,
            pointer: PointerStrategy::detect(&*host),
            options,
        };
        widget.add_attributes(host);
        widget.bind_events(host);
        widget
    }

    fn add_attributes<H: Host + ?Sized>(&self, host: &mut H) {
        host.add_class(self.element, &self.options.plugin_class);
        host.add_class(self.element, &self.options.enhanced_class);

        if let Some(header) = self.header {
            host.add_class(header, &self.options.header_class);
            if !self.options.instructions.is_empty() {
                host.set_attr(header, "aria-label", &self.options.instructions);
            }
            host.set_attr(header, "role", "button");
            host.set_attr(header, "tabindex", "0");
        }

        if let Some(content) = self.content {
            host.add_class(content, &self.options.content_class);
        }
    }

    fn bind_events<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(header) = self.header {
            let listener = Listener::new(PLUGIN_NAME, self.element);
            host.bind(header, self.pointer.event_kind(), listener.clone());
            host.bind(header, EventKind::KeyDown, listener);
        }

        if self.collapsed {
            self.set_collapsed(host);
        } else {
            self.set_expanded(host);
        }
    }

    // Silent transitions, shared by initialisation and the public operations.

    fn set_expanded<H: Host + ?Sized>(&mut self, host: &mut H) {
        host.remove_class(self.element, &self.options.collapsed_class);
        host.add_class(self.element, &self.options.expanded_class);
        host.set_attr(self.element, "aria-expanded", "true");
        self.collapsed = false;
    }

    fn set_collapsed<H: Host + ?Sized>(&mut self, host: &mut H) {
        host.add_class(self.element, &self.options.collapsed_class);
        host.remove_class(self.element, &self.options.expanded_class);
        host.set_attr(self.element, "aria-expanded", "false");
        self.collapsed = true;
    }

    pub fn expand<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.set_expanded(host);
        host.emit(self.element, EVENT_EXPAND);
    }

    pub fn collapse<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.set_collapsed(host);
        host.emit(self.element, EVENT_COLLAPSE);
    }

    pub fn toggle<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.collapsed {
            self.expand(host);
        } else {
            self.collapse(host);
        }
    }

    /// React to an event that reached one of this widget's listeners.
    ///
    /// Returns true when the event toggled the widget, in which case its
    /// default action should be suppressed.
    pub fn handle<H: Host + ?Sized>(&mut self, host: &mut H, event: &Event) -> bool {
        let activated = match event {
            Event::Key {
                key: Key::Enter | Key::Space,
                ..
            } => true,
            Event::Key { .. } => false,
            other => other.kind() == self.pointer.event_kind(),
        };

        if activated {
            log::debug!(
                "[collapsible] {} on {} toggles {}",
                event.kind(),
                event.target(),
                self.element
            );
            self.toggle(host);
        }
        activated
    }

    /// Drop the input listeners this widget bound. Classes and attributes
    /// stay in place.
    pub(crate) fn unbind<H: Host + ?Sized>(&self, host: &mut H) {
        if let Some(header) = self.header {
            host.unbind(header, PLUGIN_NAME);
        }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn header(&self) -> Option<ElementId> {
        self.header
    }

    pub fn content(&self) -> Option<ElementId> {
        self.content
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn pointer(&self) -> PointerStrategy {
        self.pointer
    }
}
