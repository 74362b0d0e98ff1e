use std::collections::HashMap;

use crate::element::{Element, ElementId, Node};
use crate::event::{Event, EventKind};
use crate::listener::{Listener, ListenerHit, Notification};
use crate::selector::Selector;

/// An in-memory element tree with listeners and a notification queue.
///
/// Mutations on ids the document does not know are ignored, the way an
/// empty element set absorbs them in a browser DOM library.
#[derive(Debug)]
pub struct Document {
    root: ElementId,
    nodes: HashMap<ElementId, Node>,
    listeners: HashMap<ElementId, Vec<(EventKind, Listener)>>,
    notifications: Vec<Notification>,
    gesture_provider: bool,
}

impl Document {
    /// Build a document whose root is `root`.
    pub fn new(root: Element) -> Self {
        let mut nodes = HashMap::new();
        let root = insert_tree(&mut nodes, &root, None);
        Self {
            root,
            nodes,
            listeners: HashMap::new(),
            notifications: Vec::new(),
            gesture_provider: false,
        }
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn get(&self, id: ElementId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Find the first node, in document order, whose `id` attribute is `id`.
    pub fn by_id(&self, id: &str) -> Option<ElementId> {
        self.descendants(self.root)
            .into_iter()
            .find(|el| self.attr(*el, "id") == Some(id))
    }

    // ------------------------------------------------------------------
    // Tree structure
    // ------------------------------------------------------------------

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(&id)?.parent
    }

    pub fn children(&self, id: ElementId) -> Vec<ElementId> {
        self.nodes
            .get(&id)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    /// The sibling directly after `id` under the same parent.
    pub fn next_sibling(&self, id: ElementId) -> Option<ElementId> {
        let parent = self.parent(id)?;
        let siblings = &self.nodes.get(&parent)?.children;
        let idx = siblings.iter().position(|sibling| *sibling == id)?;
        siblings.get(idx + 1).copied()
    }

    /// Whether `id` is reachable from the root.
    pub fn is_attached(&self, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(el) = current {
            if el == self.root {
                return true;
            }
            current = self.parent(el);
        }
        false
    }

    /// All descendants of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        self.collect_descendants(id, &mut out);
        out
    }

    fn collect_descendants(&self, id: ElementId, out: &mut Vec<ElementId>) {
        if let Some(node) = self.nodes.get(&id) {
            for child in &node.children {
                out.push(*child);
                self.collect_descendants(*child, out);
            }
        }
    }

    /// Insert `element` (and its subtree) as the last child of `parent`.
    ///
    /// Returns `None` when `parent` is not in the document.
    pub fn append_child(&mut self, parent: ElementId, element: Element) -> Option<ElementId> {
        if !self.contains(parent) {
            log::warn!("[dom] append_child to unknown parent {parent}");
            return None;
        }
        let id = insert_tree(&mut self.nodes, &element, Some(parent));
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(id);
        }
        Some(id)
    }

    /// Remove `id` and its subtree, dropping their listeners.
    ///
    /// Returns the removed ids. The root cannot be removed.
    pub fn remove(&mut self, id: ElementId) -> Vec<ElementId> {
        if id == self.root || !self.contains(id) {
            return Vec::new();
        }

        if let Some(parent) = self.parent(id) {
            if let Some(node) = self.nodes.get_mut(&parent) {
                node.children.retain(|child| *child != id);
            }
        }

        let mut removed = vec![id];
        removed.extend(self.descendants(id));
        for el in &removed {
            self.nodes.remove(el);
            self.listeners.remove(el);
        }
        log::debug!("[dom] Removed {} node(s) under {}", removed.len(), id);
        removed
    }

    // ------------------------------------------------------------------
    // Classes and attributes
    // ------------------------------------------------------------------

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.nodes.get(&id).is_some_and(|node| node.has_class(class))
    }

    pub fn classes(&self, id: ElementId) -> Vec<String> {
        self.nodes
            .get(&id)
            .map(|node| node.classes.clone())
            .unwrap_or_default()
    }

    /// Add `class` unless already present. Empty class names are ignored.
    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if class.is_empty() {
            return;
        }
        if let Some(node) = self.nodes.get_mut(&id) {
            if !node.has_class(class) {
                node.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.classes.retain(|c| c != class);
        }
    }

    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.nodes.get(&id)?.attr(name)
    }

    pub fn has_attr(&self, id: ElementId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    pub fn set_attr(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn remove_attr(&mut self, id: ElementId, name: &str) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.attributes.remove(name);
        }
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn matches(&self, id: ElementId, selector: &Selector) -> bool {
        self.nodes
            .get(&id)
            .is_some_and(|node| selector.matches(node))
    }

    /// Descendants of `scope` matching `selector`, in document order.
    pub fn query_all(&self, scope: ElementId, selector: &Selector) -> Vec<ElementId> {
        self.descendants(scope)
            .into_iter()
            .filter(|el| self.matches(*el, selector))
            .collect()
    }

    /// Direct children of `id` matching `selector`.
    pub fn select_children(&self, id: ElementId, selector: &Selector) -> Vec<ElementId> {
        self.children(id)
            .into_iter()
            .filter(|child| self.matches(*child, selector))
            .collect()
    }

    // ------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------

    pub fn bind(&mut self, target: ElementId, kind: EventKind, listener: Listener) {
        if !self.contains(target) {
            return;
        }
        log::trace!(
            "[dom] Bind {} listener {:?} on {}",
            kind,
            listener.namespace,
            target
        );
        self.listeners
            .entry(target)
            .or_default()
            .push((kind, listener));
    }

    /// Drop every listener in `namespace` bound on `target`.
    pub fn unbind(&mut self, target: ElementId, namespace: &str) {
        if let Some(bound) = self.listeners.get_mut(&target) {
            bound.retain(|(_, listener)| listener.namespace != namespace);
            if bound.is_empty() {
                self.listeners.remove(&target);
            }
        }
    }

    /// Listeners bound on `target` itself.
    pub fn listeners(&self, target: ElementId) -> &[(EventKind, Listener)] {
        self.listeners
            .get(&target)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Collect the listeners `event` reaches, bubbling from its target up
    /// through every ancestor.
    pub fn dispatch(&self, event: &Event) -> Vec<ListenerHit> {
        let kind = event.kind();
        let mut hits = Vec::new();
        let mut current = Some(event.target()).filter(|el| self.contains(*el));

        while let Some(el) = current {
            for (bound_kind, listener) in self.listeners(el) {
                if *bound_kind == kind {
                    hits.push(ListenerHit {
                        current: el,
                        kind,
                        listener: listener.clone(),
                    });
                }
            }
            current = self.parent(el);
        }

        log::trace!(
            "[dom] Dispatch {} on {} reached {} listener(s)",
            kind,
            event.target(),
            hits.len()
        );
        hits
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub fn emit(&mut self, target: ElementId, name: &str) {
        log::debug!("[dom] Notification {name:?} on {target}");
        self.notifications.push(Notification::new(target, name));
    }

    /// Notifications emitted since the last [`take_notifications`](Self::take_notifications).
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    // ------------------------------------------------------------------
    // Gesture provider
    // ------------------------------------------------------------------

    /// Mark that tap gestures are detected; hosts then deliver
    /// [`Event::Tap`] for touch activation.
    pub fn install_gesture_provider(&mut self) {
        self.gesture_provider = true;
    }

    pub fn uninstall_gesture_provider(&mut self) {
        self.gesture_provider = false;
    }

    pub fn has_gesture_provider(&self) -> bool {
        self.gesture_provider
    }
}

fn insert_tree(
    nodes: &mut HashMap<ElementId, Node>,
    element: &Element,
    parent: Option<ElementId>,
) -> ElementId {
    let id = ElementId::generate();
    nodes.insert(id, Node::from_element(element, parent));

    let children: Vec<ElementId> = element
        .children
        .iter()
        .map(|child| insert_tree(nodes, child, Some(id)))
        .collect();

    if let Some(node) = nodes.get_mut(&id) {
        node.children = children;
    }
    id
}
