pub mod document;
pub mod element;
pub mod event;
pub mod listener;
pub mod page;
pub mod selector;

pub use document::{Document, DocumentError, Location, ScrollBlock, ScrollRequest};
pub use element::{Content, Element};
pub use event::{Event, EventType, Key, Modifiers};
pub use listener::{DispatchOutcome, EventContext, ListenerId, ListenerTarget, Listeners};
pub use page::Page;
pub use selector::{Selector, SelectorError};
