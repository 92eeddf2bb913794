//! Disables view options whose page section is missing.

use pagedom::{Document, Selector};

use crate::config::CompiledSelectors;

/// An optional page section and the control that depends on it.
#[derive(Debug, Clone, Copy)]
pub struct FeatureGate<'a> {
    pub name: &'static str,
    pub section: &'a Selector,
    pub control: &'a Selector,
}

/// What one gate found and did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateOutcome {
    pub name: &'static str,
    pub section_present: bool,
    pub control: Option<String>,
    pub disabled: bool,
}

impl FeatureGate<'_> {
    /// Disable the control if the section is absent. Never touches an
    /// enabled control otherwise.
    pub fn apply(&self, document: &mut Document) -> GateOutcome {
        let section_present = document.query_selector(self.section).is_some();
        let control = document.query_selector(self.control);

        let disabled = match &control {
            Some(id) if !section_present => {
                document.set_attribute(id, "disabled", "true");
                log::debug!("[feature_gate] {} absent, disabled {id}", self.name);
                true
            }
            _ => false,
        };

        GateOutcome {
            name: self.name,
            section_present,
            control,
            disabled,
        }
    }
}

/// The unit page's gates: readme view and directories view.
pub fn unit_gates(selectors: &CompiledSelectors) -> [FeatureGate<'_>; 2] {
    [
        FeatureGate {
            name: "readme",
            section: &selectors.readme,
            control: &selectors.readme_option,
        },
        FeatureGate {
            name: "directories",
            section: &selectors.unit_directories,
            control: &selectors.directories_option,
        },
    ]
}

/// Apply every unit page gate once.
pub fn apply_feature_gates(
    document: &mut Document,
    selectors: &CompiledSelectors,
) -> Vec<GateOutcome> {
    unit_gates(selectors)
        .iter()
        .map(|gate| gate.apply(document))
        .collect()
}
