//! Readme panel expand/collapse.
//!
//! Every trigger (expand buttons, collapse button, interaction with the
//! truncated content or outline, the find shortcut, the initial URL fragment)
//! is reduced to a [`DisclosureEvent`] and fed through one
//! [`ReadmeDisclosure`] machine. DOM effects such as default-prevention and
//! scrolling stay in the listeners.

mod controller;
mod state;

pub use controller::{ReadmeBinding, ReadmeController, ReadmeSections};
pub use state::{DisclosureEvent, DisclosureState, ReadmeDisclosure, Transition};
