use pagedom::SelectorError;

/// Error returned by [`crate::init`].
///
/// Only configuration can fail; a page missing optional sections is not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("invalid selector for '{field}': {source}")]
    Selector {
        field: &'static str,
        #[source]
        source: SelectorError,
    },
}

impl SetupError {
    pub fn selector(field: &'static str, source: SelectorError) -> Self {
        Self::Selector { field, source }
    }
}
