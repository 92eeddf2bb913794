//! Event listener registry and dispatch.
//!
//! Dispatch follows the DOM bubble phase: listeners on the target element run
//! first, then those on each ancestor up to the root, then document-level
//! listeners. Within one node, listeners run in the order they were added.

use crate::document::Document;
use crate::event::{Event, EventType};

/// Where a listener is attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    Document,
    Element(String),
}

impl ListenerTarget {
    pub fn element(id: impl Into<String>) -> Self {
        Self::Element(id.into())
    }
}

/// Handle returned by [`Listeners::add`], used to remove the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Per-dispatch state handed to each listener.
#[derive(Debug)]
pub struct EventContext<'a> {
    event: &'a Event,
    current_target: &'a ListenerTarget,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl<'a> EventContext<'a> {
    pub fn event(&self) -> &'a Event {
        self.event
    }

    /// ID of the element the event was dispatched at.
    pub fn target(&self) -> Option<&'a str> {
        self.event.target()
    }

    /// The node whose listener is currently running.
    pub fn current_target(&self) -> &'a ListenerTarget {
        self.current_target
    }

    /// Suppress the host's default action (navigation, find bar, ...).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stop the event from reaching ancestors. Remaining listeners on the
    /// current node still run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// Result of dispatching one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Number of listeners invoked.
    pub handled: usize,
    pub default_prevented: bool,
}

impl DispatchOutcome {
    pub fn is_handled(&self) -> bool {
        self.handled > 0
    }
}

pub type Handler = Box<dyn FnMut(&mut Document, &mut EventContext<'_>)>;

struct Entry {
    id: ListenerId,
    target: ListenerTarget,
    event_type: EventType,
    handler: Handler,
}

/// Registered listeners for one page.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<Entry>,
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        target: ListenerTarget,
        event_type: EventType,
        handler: impl FnMut(&mut Document, &mut EventContext<'_>) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            target,
            event_type,
            handler: Box::new(handler),
        });
        id
    }

    /// Remove a listener. Returns true if it was registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of listeners for `event_type` attached to `target`.
    pub fn count_for(&self, target: &ListenerTarget, event_type: EventType) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.event_type == event_type && entry.target == *target)
            .count()
    }

    /// Dispatch `event` through the bubble path.
    pub fn dispatch(&mut self, document: &mut Document, event: &Event) -> DispatchOutcome {
        let event_type = event.event_type();
        let mut path: Vec<ListenerTarget> = event
            .target()
            .and_then(|id| document.ancestors(id))
            .unwrap_or_default()
            .into_iter()
            .map(ListenerTarget::Element)
            .collect();
        path.push(ListenerTarget::Document);

        let mut outcome = DispatchOutcome::default();
        for node in &path {
            let mut cx = EventContext {
                event,
                current_target: node,
                default_prevented: outcome.default_prevented,
                propagation_stopped: false,
            };

            for entry in self
                .entries
                .iter_mut()
                .filter(|entry| entry.event_type == event_type && entry.target == *node)
            {
                (entry.handler)(document, &mut cx);
                outcome.handled += 1;
            }

            outcome.default_prevented = cx.default_prevented;
            if cx.propagation_stopped {
                log::trace!("[dispatch] {event_type:?} stopped at {node:?}");
                break;
            }
        }

        log::trace!(
            "[dispatch] {:?} target={:?} handled={} default_prevented={}",
            event_type,
            event.target(),
            outcome.handled,
            outcome.default_prevented
        );
        outcome
    }
}
