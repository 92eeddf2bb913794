use crate::document::Document;
use crate::event::{Event, EventType, Key, Modifiers};
use crate::listener::{DispatchOutcome, EventContext, ListenerId, ListenerTarget, Listeners};

/// A document together with the listeners attached to it.
///
/// This is the handle setup code receives: it queries and mutates the
/// document, registers listeners, and hosts (or tests) feed events through
/// [`Page::dispatch`].
#[derive(Debug)]
pub struct Page {
    document: Document,
    listeners: Listeners,
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            listeners: Listeners::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    pub fn listen(
        &mut self,
        target: ListenerTarget,
        event_type: EventType,
        handler: impl FnMut(&mut Document, &mut EventContext<'_>) + 'static,
    ) -> ListenerId {
        self.listeners.add(target, event_type, handler)
    }

    pub fn unlisten(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn dispatch(&mut self, event: &Event) -> DispatchOutcome {
        self.listeners.dispatch(&mut self.document, event)
    }

    // Convenience dispatchers

    pub fn click(&mut self, target: &str) -> DispatchOutcome {
        self.dispatch(&Event::click(target))
    }

    pub fn key_down(
        &mut self,
        target: Option<&str>,
        key: Key,
        modifiers: Modifiers,
    ) -> DispatchOutcome {
        self.dispatch(&Event::key_down(target.map(str::to_string), key, modifiers))
    }

    pub fn key_up(
        &mut self,
        target: Option<&str>,
        key: Key,
        modifiers: Modifiers,
    ) -> DispatchOutcome {
        self.dispatch(&Event::key_up(target.map(str::to_string), key, modifiers))
    }
}
