/// Event kinds listeners can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    KeyDown,
    KeyUp,
}

/// High-level events with element targeting.
///
/// A `None` target means the event was dispatched with no element focused;
/// only document-level listeners see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Primary-button click on an element
    Click { target: Option<String> },
    /// Key pressed, targeted at the focused element
    KeyDown {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Key released, targeted at the focused element
    KeyUp {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
}

impl Event {
    /// Primary-button click on `target`.
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
        }
    }

    pub fn key_down(target: Option<String>, key: Key, modifiers: Modifiers) -> Self {
        Self::KeyDown {
            target,
            key,
            modifiers,
        }
    }

    pub fn key_up(target: Option<String>, key: Key, modifiers: Modifiers) -> Self {
        Self::KeyUp {
            target,
            key,
            modifiers,
        }
    }

    pub fn event_type(&self) -> EventType {
        match self {
            Self::Click { .. } => EventType::Click,
            Self::KeyDown { .. } => EventType::KeyDown,
            Self::KeyUp { .. } => EventType::KeyUp,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Click { target }
            | Self::KeyDown { target, .. }
            | Self::KeyUp { target, .. } => target.as_deref(),
        }
    }

    /// Key and modifiers for keyboard events.
    pub fn key(&self) -> Option<(Key, Modifiers)> {
        match self {
            Self::KeyDown { key, modifiers, .. } | Self::KeyUp { key, modifiers, .. } => {
                Some((*key, *modifiers))
            }
            Self::Click { .. } => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Tab,
}

/// Key modifiers. `meta` is the Command key on macOS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Default::default()
        }
    }

    /// Ctrl or Command held, the platform "command" modifier.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}
