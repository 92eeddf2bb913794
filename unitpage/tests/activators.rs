mod common;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use common::{no_clipboard, no_tables, PageBuilder};
use pagedom::{EventType, ListenerTarget, Page, Selector};
use unitpage::{activate_copy_controls, activate_expandable_tables, init, UnitPageConfig};

type Clipboard = Rc<RefCell<Vec<String>>>;

/// A copy controller that writes its control's `data-to-copy` on click and
/// counts its own copies.
fn copy_on_click(
    clipboard: &Clipboard,
    counts: &Rc<RefCell<HashMap<String, usize>>>,
) -> impl FnMut(&mut Page, &str) {
    let clipboard = Rc::clone(clipboard);
    let counts = Rc::clone(counts);
    move |page: &mut Page, control: &str| {
        let clipboard = Rc::clone(&clipboard);
        let counts = Rc::clone(&counts);
        let id = control.to_string();
        page.listen(ListenerTarget::element(control), EventType::Click, move |doc, _| {
            if let Some(text) = doc.attribute(&id, "data-to-copy") {
                clipboard.borrow_mut().push(text.to_string());
            }
            *counts.borrow_mut().entry(id.clone()).or_default() += 1;
        });
    }
}

// ============================================================================
// Copy-to-clipboard
// ============================================================================

#[test]
fn test_one_activation_per_copy_control() {
    let mut page = PageBuilder::new().copy_controls(3).build();
    let mut seen = Vec::new();

    let activated = activate_copy_controls(
        &mut page,
        &Selector::class("js-copyToClipboard"),
        &mut |_: &mut Page, control: &str| seen.push(control.to_string()),
    );

    assert_eq!(activated, ["copy-0", "copy-1", "copy-2"]);
    assert_eq!(seen, activated);
}

#[test]
fn test_copy_controllers_are_independent() {
    let mut page = PageBuilder::new().copy_controls(2).build();
    let clipboard = Clipboard::default();
    let counts = Rc::new(RefCell::new(HashMap::new()));

    let unit = init(
        &mut page,
        &UnitPageConfig::default(),
        &mut copy_on_click(&clipboard, &counts),
        &mut no_tables(),
    )
    .unwrap();
    assert_eq!(unit.copy_controls().len(), 2);

    page.click("copy-1");
    page.click("copy-1");
    page.click("copy-0");

    assert_eq!(
        *clipboard.borrow(),
        ["example.com/mod/v1", "example.com/mod/v1", "example.com/mod/v0"]
    );
    assert_eq!(counts.borrow()["copy-0"], 1);
    assert_eq!(counts.borrow()["copy-1"], 2);
}

#[test]
fn test_no_copy_controls() {
    let mut page = PageBuilder::new().copy_controls(0).build();
    let mut calls = 0;

    let activated = activate_copy_controls(
        &mut page,
        &Selector::class("js-copyToClipboard"),
        &mut |_: &mut Page, _: &str| calls += 1,
    );

    assert!(activated.is_empty());
    assert_eq!(calls, 0);
}

// ============================================================================
// Expandable tables
// ============================================================================

fn table_selectors() -> (Selector, Selector) {
    (
        Selector::class("js-expandableTable"),
        Selector::class("js-expandAllDirectories"),
    )
}

#[test]
fn test_table_gets_expand_all_control() {
    let mut page = PageBuilder::new().build();
    let (table, expand_all) = table_selectors();
    let mut calls = Vec::new();

    let activated = activate_expandable_tables(
        &mut page,
        &table,
        &expand_all,
        &mut |_: &mut Page, table: &str, expand_all: Option<&str>| {
            calls.push((table.to_string(), expand_all.map(str::to_string)));
        },
    );

    assert_eq!(activated, ["dir-table"]);
    assert_eq!(calls, [("dir-table".to_string(), Some("expand-all".to_string()))]);
}

#[test]
fn test_table_without_expand_all_control() {
    let builder = PageBuilder {
        expand_all: false,
        ..PageBuilder::new()
    };
    let mut page = builder.build();
    let (table, expand_all) = table_selectors();
    let mut calls = Vec::new();

    activate_expandable_tables(
        &mut page,
        &table,
        &expand_all,
        &mut |_: &mut Page, table: &str, expand_all: Option<&str>| {
            calls.push((table.to_string(), expand_all.map(str::to_string)));
        },
    );

    assert_eq!(calls, [("dir-table".to_string(), None)]);
}

#[test]
fn test_no_table_no_activation() {
    let mut page = PageBuilder::new().without_directories().build();
    let mut calls = 0;

    let unit = init(
        &mut page,
        &UnitPageConfig::default(),
        &mut no_clipboard(),
        &mut |_: &mut Page, _: &str, _: Option<&str>| calls += 1,
    )
    .unwrap();

    assert_eq!(calls, 0);
    assert!(unit.tables().is_empty());
}

#[test]
fn test_table_controller_listeners_are_its_own() {
    let mut page = PageBuilder::new().without_readme().build();
    let expanded = Rc::new(RefCell::new(false));
    let flag = Rc::clone(&expanded);

    init(
        &mut page,
        &UnitPageConfig::default(),
        &mut no_clipboard(),
        &mut move |page: &mut Page, _: &str, expand_all: Option<&str>| {
            if let Some(control) = expand_all {
                let flag = Rc::clone(&flag);
                page.listen(ListenerTarget::element(control), EventType::Click, move |_, _| {
                    *flag.borrow_mut() = true;
                });
            }
        },
    )
    .unwrap();

    page.click("expand-all");
    assert!(*expanded.borrow());
}
