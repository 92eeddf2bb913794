//! Expandable directory table activation.

use pagedom::{Page, Selector};

/// Builds the row expand/collapse controller for a table.
///
/// `expand_all` is the optional "expand all" control; implementors must
/// accept `None`.
pub trait TableActivator {
    fn activate(&mut self, page: &mut Page, table: &str, expand_all: Option<&str>);
}

impl<F> TableActivator for F
where
    F: FnMut(&mut Page, &str, Option<&str>),
{
    fn activate(&mut self, page: &mut Page, table: &str, expand_all: Option<&str>) {
        self(page, table, expand_all)
    }
}

/// Activate every table matching `table_selector`, each sharing the first
/// `expand_all_selector` match. Returns the activated table IDs.
pub fn activate_expandable_tables(
    page: &mut Page,
    table_selector: &Selector,
    expand_all_selector: &Selector,
    activator: &mut impl TableActivator,
) -> Vec<String> {
    let tables = page.document().query_selector_all(table_selector);
    if tables.is_empty() {
        return tables;
    }

    let expand_all = page.document().query_selector(expand_all_selector);
    for table in &tables {
        activator.activate(page, table, expand_all.as_deref());
    }
    log::debug!(
        "[table] activated {} tables, expand_all={expand_all:?}",
        tables.len()
    );
    tables
}
