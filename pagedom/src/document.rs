use std::collections::HashSet;

use crate::element::{ancestor_path, find_element, find_element_mut, walk, Element};
use crate::selector::Selector;

/// The part of the page URL the page model cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    hash: String,
}

impl Location {
    /// Build a location from a fragment. A missing leading `#` is added.
    pub fn with_hash(hash: impl Into<String>) -> Self {
        let hash = hash.into();
        let hash = if hash.is_empty() || hash.starts_with('#') {
            hash
        } else {
            format!("#{hash}")
        };
        Self { hash }
    }

    /// The fragment including its leading `#`, or an empty string.
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

/// Vertical alignment for scroll-into-view requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
}

/// Error returned when a tree cannot become a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// Element IDs are the only handle listeners and queries hold, so each
    /// must name exactly one element.
    #[error("duplicate element id '{id}'")]
    DuplicateId { id: String },
}

/// A recorded scroll-into-view request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: String,
    pub block: ScrollBlock,
}

/// An element tree plus the page state around it.
///
/// Scrolling is headless: requests are journaled in order so a host (or a
/// test) can replay them.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    location: Location,
    scrolls: Vec<ScrollRequest>,
}

impl Document {
    /// Build a document, rejecting trees where two elements share an ID.
    pub fn new(root: Element) -> Result<Self, DocumentError> {
        let mut seen = HashSet::new();
        let mut duplicate = None;
        walk(&root, &mut |element: &Element| {
            if duplicate.is_none() && !seen.insert(element.id.clone()) {
                duplicate = Some(element.id.clone());
            }
        });
        if let Some(id) = duplicate {
            return Err(DocumentError::DuplicateId { id });
        }

        Ok(Self {
            root,
            location: Location::default(),
            scrolls: Vec::new(),
        })
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    // Private so element IDs cannot be renamed after the uniqueness check.
    fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    // Queries

    /// ID of the first element in document order matching `selector`.
    pub fn query_selector(&self, selector: &Selector) -> Option<String> {
        let mut found = None;
        walk(&self.root, &mut |element: &Element| {
            if found.is_none() && selector.matches(element) {
                found = Some(element.id.clone());
            }
        });
        found
    }

    /// IDs of all elements matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &Selector) -> Vec<String> {
        let mut found = Vec::new();
        walk(&self.root, &mut |element: &Element| {
            if selector.matches(element) {
                found.push(element.id.clone());
            }
        });
        found
    }

    /// Whether `node` is `ancestor` itself or one of its descendants.
    pub fn contains(&self, ancestor: &str, node: &str) -> bool {
        self.get(ancestor)
            .is_some_and(|element| find_element(element, node).is_some())
    }

    /// IDs from `id` up to the root, target first.
    pub fn ancestors(&self, id: &str) -> Option<Vec<String>> {
        ancestor_path(&self.root, id)
    }

    // Mutation. Each returns true if the document changed.

    pub fn add_class(&mut self, id: &str, class: &str) -> bool {
        self.get_mut(id).is_some_and(|element| element.add_class(class))
    }

    pub fn remove_class(&mut self, id: &str, class: &str) -> bool {
        self.get_mut(id).is_some_and(|element| element.remove_class(class))
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|element| element.has_class(class))
    }

    pub fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool {
        let Some(element) = self.get_mut(id) else {
            return false;
        };
        let previous = element
            .attributes
            .insert(name.to_string(), value.to_string());
        previous.as_deref() != Some(value)
    }

    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.get(id)?.get_attribute(name)
    }

    // Scrolling

    /// Request that `id` be scrolled into view. Unknown IDs are ignored.
    pub fn scroll_into_view(&mut self, id: &str, block: ScrollBlock) {
        if !self.contains_id(id) {
            log::trace!("[scroll_into_view] unknown element {id}");
            return;
        }
        log::trace!("[scroll_into_view] {id} block={block:?}");
        self.scrolls.push(ScrollRequest {
            target: id.to_string(),
            block,
        });
    }

    /// Scroll requests made so far, oldest first.
    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scrolls
    }

    /// Drain the scroll journal.
    pub fn take_scroll_requests(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.scrolls)
    }
}
