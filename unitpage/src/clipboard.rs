//! Copy-to-clipboard control activation.

use pagedom::{Page, Selector};

/// Builds one copy controller for one control element.
///
/// Reading the copy target, writing the clipboard and any confirmation
/// feedback belong to the implementor.
pub trait ClipboardActivator {
    fn activate(&mut self, page: &mut Page, control: &str);
}

impl<F> ClipboardActivator for F
where
    F: FnMut(&mut Page, &str),
{
    fn activate(&mut self, page: &mut Page, control: &str) {
        self(page, control)
    }
}

/// Activate every control matching `selector`, in document order.
/// Returns the activated control IDs.
pub fn activate_copy_controls(
    page: &mut Page,
    selector: &Selector,
    activator: &mut impl ClipboardActivator,
) -> Vec<String> {
    let controls = page.document().query_selector_all(selector);
    for control in &controls {
        activator.activate(page, control);
    }
    log::debug!("[clipboard] activated {} controls", controls.len());
    controls
}
