use std::cell::RefCell;
use std::rc::Rc;

use pagedom::{
    Document, EventContext, EventType, Key, ListenerId, ListenerTarget, Page, ScrollBlock,
};

use super::state::{DisclosureEvent, DisclosureState, ReadmeDisclosure, Transition};
use crate::config::{CompiledSelectors, UnitPageConfig};

/// Element IDs of the readme panel and its controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeSections {
    pub panel: String,
    pub content: String,
    pub outline: String,
    /// Every expand control, in document order. Never empty.
    pub expand: Vec<String>,
    pub collapse: String,
}

impl ReadmeSections {
    /// Resolve all readme elements. Returns None unless every one is present.
    pub fn resolve(document: &Document, selectors: &CompiledSelectors) -> Option<Self> {
        let panel = document.query_selector(&selectors.readme)?;
        let content = document.query_selector(&selectors.readme_content)?;
        let outline = document.query_selector(&selectors.readme_outline)?;
        let expand = document.query_selector_all(&selectors.readme_expand);
        if expand.is_empty() {
            return None;
        }
        let collapse = document.query_selector(&selectors.readme_collapse)?;

        Some(Self {
            panel,
            content,
            outline,
            expand,
            collapse,
        })
    }

    /// The second expand control, the scroll anchor after collapsing.
    /// There is no fallback to the first one.
    pub fn secondary_expand(&self) -> Option<&str> {
        self.expand.get(1).map(String::as_str)
    }
}

/// Owns the disclosure state of one readme panel and mirrors it onto the
/// panel's expanded class.
///
/// The class is the source of truth: other scripts may toggle it, so every
/// transition starts from the class as currently rendered.
#[derive(Debug)]
pub struct ReadmeController {
    sections: ReadmeSections,
    disclosure: ReadmeDisclosure,
    expanded_class: String,
}

impl ReadmeController {
    /// The initial state follows the panel's class as rendered.
    pub fn new(
        sections: ReadmeSections,
        expanded_class: impl Into<String>,
        document: &Document,
    ) -> Self {
        let mut controller = Self {
            sections,
            disclosure: ReadmeDisclosure::default(),
            expanded_class: expanded_class.into(),
        };
        controller.sync(document);
        controller
    }

    /// State as of the last transition or sync.
    pub fn state(&self) -> DisclosureState {
        self.disclosure.state()
    }

    /// Reload the state from the panel's class.
    pub fn sync(&mut self, document: &Document) -> DisclosureState {
        let rendered = if document.has_class(&self.sections.panel, &self.expanded_class) {
            DisclosureState::Expanded
        } else {
            DisclosureState::Collapsed
        };
        if rendered != self.disclosure.state() {
            log::debug!("[readme] panel class changed externally, now {rendered:?}");
            self.disclosure = ReadmeDisclosure::new(rendered);
        }
        rendered
    }

    pub fn sections(&self) -> &ReadmeSections {
        &self.sections
    }

    /// Sync from the panel class, run one transition, and write the class back.
    pub fn apply(&mut self, document: &mut Document, event: DisclosureEvent) -> Transition {
        self.sync(document);
        let transition = self.disclosure.transition(event);
        let panel = &self.sections.panel;
        match transition.to {
            DisclosureState::Expanded => document.add_class(panel, &self.expanded_class),
            DisclosureState::Collapsed => document.remove_class(panel, &self.expanded_class),
        };

        if transition.changed() {
            log::debug!(
                "[readme] {event:?}: {:?} -> {:?}",
                transition.from,
                transition.to
            );
        }
        transition
    }
}

/// A readme controller wired into a page.
#[derive(Debug)]
pub struct ReadmeBinding {
    controller: Rc<RefCell<ReadmeController>>,
    listeners: Vec<ListenerId>,
}

impl ReadmeBinding {
    /// Apply the initial hash check and register every trigger.
    pub fn install(page: &mut Page, sections: ReadmeSections, config: &UnitPageConfig) -> Self {
        let controller = Rc::new(RefCell::new(ReadmeController::new(
            sections.clone(),
            config.expanded_class.as_str(),
            page.document(),
        )));

        if page.document().location().hash().contains(&config.hash_marker) {
            log::debug!(
                "[readme] fragment {:?} requests expansion",
                page.document().location().hash()
            );
            controller
                .borrow_mut()
                .apply(page.document_mut(), DisclosureEvent::RequestExpand);
        }

        let mut binding = Self {
            controller,
            listeners: Vec::new(),
        };

        for expand in &sections.expand {
            let panel = sections.panel.clone();
            binding.on(page, ListenerTarget::element(expand), EventType::Click, move |rx, doc, cx| {
                cx.prevent_default();
                rx.apply(doc, DisclosureEvent::RequestExpand);
                doc.scroll_into_view(&panel, ScrollBlock::Start);
            });
        }

        let anchor = sections.secondary_expand().map(str::to_string);
        binding.on(
            page,
            ListenerTarget::element(&sections.collapse),
            EventType::Click,
            move |rx, doc, cx| {
                cx.prevent_default();
                rx.apply(doc, DisclosureEvent::RequestCollapse);
                if let Some(anchor) = &anchor {
                    doc.scroll_into_view(anchor, ScrollBlock::Center);
                }
            },
        );

        let content = ListenerTarget::element(&sections.content);
        binding.on(page, content.clone(), EventType::KeyUp, expand_on_interaction);
        binding.on(page, content, EventType::Click, expand_on_interaction);
        binding.on(
            page,
            ListenerTarget::element(&sections.outline),
            EventType::Click,
            expand_on_interaction,
        );

        let find_key = config.find_key;
        binding.on(page, ListenerTarget::Document, EventType::KeyDown, move |rx, doc, cx| {
            if let Some((Key::Char(key), modifiers)) = cx.event().key()
                && key == find_key
                && modifiers.command()
            {
                rx.apply(doc, DisclosureEvent::RequestExpand);
            }
        });

        log::debug!(
            "[readme] installed {} listeners on {}",
            binding.listeners.len(),
            sections.panel
        );
        binding
    }

    fn on(
        &mut self,
        page: &mut Page,
        target: ListenerTarget,
        event_type: EventType,
        mut handler: impl FnMut(&mut ReadmeController, &mut Document, &mut EventContext<'_>)
            + 'static,
    ) {
        let controller = Rc::clone(&self.controller);
        let id = page.listen(target, event_type, move |doc, cx| {
            handler(&mut *controller.borrow_mut(), doc, cx);
        });
        self.listeners.push(id);
    }

    /// State as of the last handled trigger. The panel class may have been
    /// changed since; [`ReadmeController::sync`] runs before each transition.
    pub fn state(&self) -> DisclosureState {
        self.controller.borrow().state()
    }

    pub fn sections(&self) -> ReadmeSections {
        self.controller.borrow().sections().clone()
    }

    pub fn listeners(&self) -> &[ListenerId] {
        &self.listeners
    }

    /// Remove every listener this binding registered. Returns how many were removed.
    pub fn dispose(self, page: &mut Page) -> usize {
        self.listeners
            .into_iter()
            .filter(|id| page.unlisten(*id))
            .count()
    }
}

fn expand_on_interaction(rx: &mut ReadmeController, doc: &mut Document, _: &mut EventContext<'_>) {
    rx.apply(doc, DisclosureEvent::RequestExpand);
}
