//! Instance registry: the association from element to widget.

use std::collections::HashMap;

use collapsible_dom::{ElementId, Event, Selector};

use crate::error::{CollapsibleError, Result};
use crate::host::Host;
use crate::options::PartialOptions;
use crate::widget::{Collapsible, EVENT_INIT};
use crate::PLUGIN_NAME;

/// Outcome of routing one input event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// How many widgets the event toggled.
    pub toggled: usize,
    /// Whether the host should suppress the event's default action.
    pub default_prevented: bool,
}

/// Owns every bound widget, keyed by its root element.
///
/// An element holds at most one widget. Instances stay registered until
/// [`release`](Self::release) or [`prune`](Self::prune) drops them; removing
/// an element from the document does not do so by itself.
#[derive(Debug, Default)]
pub struct Registry {
    instances: HashMap<ElementId, Collapsible>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a widget to `element`.
    ///
    /// Returns `Ok(false)` without touching the document when `element`
    /// already has one.
    pub fn bind<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        element: ElementId,
        options: Option<PartialOptions>,
    ) -> Result<bool> {
        if !host.contains(element) {
            return Err(CollapsibleError::UnknownElement(element));
        }
        if self.instances.contains_key(&element) {
            log::trace!("[collapsible] {element} already bound");
            return Ok(false);
        }

        let widget = Collapsible::new(host, element, options.as_ref());
        log::debug!(
            "[collapsible] Bound {} (header {:?}, content {:?}, {:?}, collapsed: {})",
            element,
            widget.header(),
            widget.content(),
            widget.pointer(),
            widget.is_collapsed()
        );
        self.instances.insert(element, widget);
        host.emit(element, EVENT_INIT);
        Ok(true)
    }

    pub fn get(&self, element: ElementId) -> Option<&Collapsible> {
        self.instances.get(&element)
    }

    pub fn get_mut(&mut self, element: ElementId) -> Option<&mut Collapsible> {
        self.instances.get_mut(&element)
    }

    pub fn is_bound(&self, element: ElementId) -> bool {
        self.instances.contains_key(&element)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collapsible> {
        self.instances.values()
    }

    /// Expand the widget bound to `element`. Returns false if there is none.
    pub fn expand<H: Host + ?Sized>(&mut self, host: &mut H, element: ElementId) -> bool {
        self.with_instance(element, |widget| widget.expand(host))
    }

    /// Collapse the widget bound to `element`. Returns false if there is none.
    pub fn collapse<H: Host + ?Sized>(&mut self, host: &mut H, element: ElementId) -> bool {
        self.with_instance(element, |widget| widget.collapse(host))
    }

    /// Toggle the widget bound to `element`. Returns false if there is none.
    pub fn toggle<H: Host + ?Sized>(&mut self, host: &mut H, element: ElementId) -> bool {
        self.with_instance(element, |widget| widget.toggle(host))
    }

    fn with_instance(&mut self, element: ElementId, f: impl FnOnce(&mut Collapsible)) -> bool {
        match self.instances.get_mut(&element) {
            Some(widget) => {
                f(widget);
                true
            }
            None => false,
        }
    }

    /// Deliver `event` through the host and let every widget whose listener
    /// it reached react.
    pub fn dispatch<H: Host + ?Sized>(&mut self, host: &mut H, event: &Event) -> Dispatch {
        let mut outcome = Dispatch::default();

        for hit in host.dispatch(event) {
            if hit.listener.namespace != PLUGIN_NAME {
                continue;
            }
            let Some(widget) = self.instances.get_mut(&hit.listener.owner) else {
                log::trace!(
                    "[collapsible] Listener on {} has no instance for {}",
                    hit.current,
                    hit.listener.owner
                );
                continue;
            };
            if widget.handle(host, event) {
                outcome.toggled += 1;
                outcome.default_prevented = true;
            }
        }

        outcome
    }

    /// Bind every unbound element matching `selector` within `scope`,
    /// `scope` included, using default options.
    ///
    /// Returns the newly bound elements in document order.
    pub fn enhance<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        scope: ElementId,
        selector: &str,
    ) -> Result<Vec<ElementId>> {
        let selector = Selector::parse(selector)?;
        self.enhance_matching(host, scope, &selector)
    }

    /// [`enhance`](Self::enhance) with the widget's base class as selector.
    pub fn enhance_default<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        scope: ElementId,
    ) -> Result<Vec<ElementId>> {
        self.enhance_matching(host, scope, &Selector::class(PLUGIN_NAME))
    }

    pub fn enhance_matching<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        scope: ElementId,
        selector: &Selector,
    ) -> Result<Vec<ElementId>> {
        if !host.contains(scope) {
            return Err(CollapsibleError::UnknownElement(scope));
        }

        let mut candidates = Vec::new();
        if host.matches(scope, selector) {
            candidates.push(scope);
        }
        candidates.extend(host.query_all(scope, selector));

        let mut bound = Vec::new();
        for element in candidates {
            if self.bind(host, element, None)? {
                bound.push(element);
            }
        }

        log::debug!(
            "[collapsible] Enhance under {} bound {} element(s)",
            scope,
            bound.len()
        );
        Ok(bound)
    }

    /// Drop the widget bound to `element` and its input listeners.
    ///
    /// Returns false when nothing was bound.
    pub fn release<H: Host + ?Sized>(&mut self, host: &mut H, element: ElementId) -> bool {
        match self.instances.remove(&element) {
            Some(widget) => {
                widget.unbind(host);
                log::debug!("[collapsible] Released {element}");
                true
            }
            None => false,
        }
    }

    /// Drop every widget whose root has left the document.
    ///
    /// Returns how many were dropped.
    pub fn prune<H: Host + ?Sized>(&mut self, host: &mut H) -> usize {
        let detached: Vec<ElementId> = self
            .instances
            .keys()
            .copied()
            .filter(|element| !host.is_attached(*element))
            .collect();

        for element in &detached {
            self.release(host, *element);
        }
        detached.len()
    }
}
