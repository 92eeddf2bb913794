use pagedom::Page;

use crate::clipboard::{activate_copy_controls, ClipboardActivator};
use crate::config::UnitPageConfig;
use crate::error::SetupError;
use crate::gate::{apply_feature_gates, GateOutcome};
use crate::readme::{DisclosureState, ReadmeBinding, ReadmeSections};
use crate::table::{activate_expandable_tables, TableActivator};

/// What [`init`] set up on a page.
#[derive(Debug)]
pub struct UnitPage {
    tables: Vec<String>,
    copy_controls: Vec<String>,
    readme: Option<ReadmeBinding>,
    gates: Vec<GateOutcome>,
}

/// Wire up the unit page: expandable tables, copy controls, the readme
/// panel and the feature gates, in that order.
///
/// The document is queried once here; elements added later are not picked
/// up. Missing sections are skipped silently.
pub fn init(
    page: &mut Page,
    config: &UnitPageConfig,
    clipboard: &mut impl ClipboardActivator,
    table_activator: &mut impl TableActivator,
) -> Result<UnitPage, SetupError> {
    let selectors = config.selectors.compile()?;

    let tables = activate_expandable_tables(
        page,
        &selectors.expandable_table,
        &selectors.expand_all_directories,
        table_activator,
    );
    let copy_controls = activate_copy_controls(page, &selectors.copy_to_clipboard, clipboard);

    let readme = match ReadmeSections::resolve(page.document(), &selectors) {
        Some(sections) => Some(ReadmeBinding::install(page, sections, config)),
        None => {
            log::debug!("[init] readme sections incomplete, no readme listeners");
            None
        }
    };

    let gates = apply_feature_gates(page.document_mut(), &selectors);

    Ok(UnitPage {
        tables,
        copy_controls,
        readme,
        gates,
    })
}

impl UnitPage {
    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    pub fn copy_controls(&self) -> &[String] {
        &self.copy_controls
    }

    pub fn readme(&self) -> Option<&ReadmeBinding> {
        self.readme.as_ref()
    }

    /// Current readme state, None when the page has no readme.
    pub fn readme_state(&self) -> Option<DisclosureState> {
        self.readme.as_ref().map(ReadmeBinding::state)
    }

    pub fn gates(&self) -> &[GateOutcome] {
        &self.gates
    }

    pub fn gate(&self, name: &str) -> Option<&GateOutcome> {
        self.gates.iter().find(|gate| gate.name == name)
    }

    /// Remove the listeners registered by [`init`]. Collaborator listeners
    /// are left alone, as are disabled attributes and the panel class.
    pub fn dispose(self, page: &mut Page) -> usize {
        self.readme.map_or(0, |readme| readme.dispose(page))
    }
}
