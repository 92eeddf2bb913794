//! Readme disclosure state machine.

/// Whether the readme panel is showing its full content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisclosureState {
    #[default]
    Collapsed,
    Expanded,
}

impl DisclosureState {
    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }
}

/// Logical events every readme trigger is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisclosureEvent {
    RequestExpand,
    RequestCollapse,
}

/// The state before and after one call to [`ReadmeDisclosure::transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: DisclosureState,
    pub to: DisclosureState,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Two-state machine for one readme panel.
///
/// Both events are valid from both states; an event that names the current
/// state is a no-op.
#[derive(Debug, Clone, Default)]
pub struct ReadmeDisclosure {
    state: DisclosureState,
}

impl ReadmeDisclosure {
    pub fn new(initial: DisclosureState) -> Self {
        Self { state: initial }
    }

    pub fn state(&self) -> DisclosureState {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    pub fn transition(&mut self, event: DisclosureEvent) -> Transition {
        let from = self.state;
        self.state = match event {
            DisclosureEvent::RequestExpand => DisclosureState::Expanded,
            DisclosureEvent::RequestCollapse => DisclosureState::Collapsed,
        };
        Transition {
            from,
            to: self.state,
        }
    }
}
