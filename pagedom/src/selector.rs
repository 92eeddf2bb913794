//! Compound selectors: an optional tag name followed by `.class` and `#id`
//! components, e.g. `.js-readme`, `button.js-readmeExpand`, `#main.Unit`.
//!
//! Combinators, attribute selectors and pseudo-classes are not supported.

use std::fmt;
use std::str::FromStr;

use crate::element::Element;

/// Error returned when a selector string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("selector is empty")]
    Empty,

    #[error("expected a name after '{marker}' at position {position}")]
    EmptyName { marker: char, position: usize },

    #[error("unexpected character '{found}' at position {position}")]
    Unexpected { found: char, position: usize },

    #[error("selector has more than one id component")]
    DuplicateId,
}

impl SelectorError {
    fn unexpected(found: char, position: usize) -> Self {
        Self::Unexpected { found, position }
    }
}

/// A parsed compound selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        input.parse()
    }

    /// Shorthand for a single-class selector. The name is taken as is.
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            classes: vec![name.into()],
            ..Default::default()
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether `element` satisfies every component of the selector.
    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag
            && !tag.eq_ignore_ascii_case(&element.tag)
        {
            return false;
        }
        if let Some(id) = &self.id
            && *id != element.id
        {
            return false;
        }
        self.classes.iter().all(|class| element.has_class(class))
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Read a name starting at byte `start`. Returns the name and the byte just past it.
fn read_name(input: &str, start: usize) -> (&str, usize) {
    let end = input[start..]
        .char_indices()
        .find(|&(_, c)| !is_name_char(c))
        .map_or(input.len(), |(offset, _)| start + offset);
    (&input[start..end], end)
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut selector = Selector::default();
        let (tag, mut pos) = read_name(input, 0);
        if !tag.is_empty() {
            selector.tag = Some(tag.to_ascii_lowercase());
        }

        while let Some(marker) = input[pos..].chars().next() {
            if marker != '.' && marker != '#' {
                return Err(SelectorError::unexpected(marker, pos));
            }

            let (name, end) = read_name(input, pos + 1);
            if name.is_empty() {
                return Err(SelectorError::EmptyName {
                    marker,
                    position: pos,
                });
            }

            if marker == '.' {
                selector.classes.push(name.to_string());
            } else if selector.id.replace(name.to_string()).is_some() {
                return Err(SelectorError::DuplicateId);
            }
            pos = end;
        }

        Ok(selector)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            write!(f, "{tag}")?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}
