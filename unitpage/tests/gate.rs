mod common;

use common::{setup, PageBuilder};
use pagedom::{Key, Modifiers};
use unitpage::{apply_feature_gates, GateOutcome, Selectors};

fn disabled(page: &pagedom::Page, id: &str) -> bool {
    page.document().get(id).unwrap().is_disabled()
}

// ============================================================================
// Feature gates
// ============================================================================

#[test]
fn test_full_page_leaves_options_enabled() {
    let (page, unit) = setup(&PageBuilder::new());

    assert!(!disabled(&page, "readme-option"));
    assert!(!disabled(&page, "directories-option"));
    assert!(unit.gates().iter().all(|gate| gate.section_present && !gate.disabled));
}

#[test]
fn test_missing_readme_disables_readme_option() {
    let (page, unit) = setup(&PageBuilder::new().without_readme());

    assert!(disabled(&page, "readme-option"));
    assert_eq!(page.document().attribute("readme-option", "disabled"), Some("true"));
    assert!(!disabled(&page, "directories-option"));
    assert_eq!(
        unit.gate("readme"),
        Some(&GateOutcome {
            name: "readme",
            section_present: false,
            control: Some("readme-option".to_string()),
            disabled: true,
        })
    );
}

#[test]
fn test_missing_directories_disables_directories_option() {
    let (page, unit) = setup(&PageBuilder::new().without_directories());

    assert!(disabled(&page, "directories-option"));
    assert!(!disabled(&page, "readme-option"));
    assert!(unit.gate("directories").unwrap().disabled);
}

#[test]
fn test_missing_both_sections() {
    let (page, unit) = setup(&PageBuilder::new().without_readme().without_directories());

    assert!(disabled(&page, "readme-option"));
    assert!(disabled(&page, "directories-option"));
    assert!(unit.gates().iter().all(|gate| gate.disabled));
}

#[test]
fn test_missing_control_is_not_an_error() {
    let builder = PageBuilder {
        readme_option: false,
        directories_option: false,
        ..PageBuilder::new().without_readme().without_directories()
    };
    let (_, unit) = setup(&builder);

    for gate in unit.gates() {
        assert_eq!(gate.control, None, "{}", gate.name);
        assert!(!gate.disabled, "{}", gate.name);
    }
}

#[test]
fn test_gates_are_idempotent() {
    let mut page = PageBuilder::new().without_readme().build();
    let selectors = Selectors::default().compile().unwrap();

    let first = apply_feature_gates(page.document_mut(), &selectors);
    let snapshot = page.document().root().clone();
    let second = apply_feature_gates(page.document_mut(), &selectors);

    assert_eq!(first, second);
    assert_eq!(page.document().root(), &snapshot);
}

#[test]
fn test_incomplete_readme_keeps_option_enabled() {
    // The gate only looks at the panel; the controller needs every part.
    let builder = PageBuilder {
        outline: false,
        ..PageBuilder::new()
    };
    let (page, unit) = setup(&builder);

    assert!(!disabled(&page, "readme-option"));
    assert_eq!(unit.readme_state(), None);
}

// ============================================================================
// Absent readme
// ============================================================================

#[test]
fn test_no_readme_registers_no_listeners() {
    let (mut page, unit) = setup(&PageBuilder::new().without_readme());

    assert!(unit.readme().is_none());
    assert!(page.listeners().is_empty());

    let outcome = page.key_down(None, Key::Char('f'), Modifiers::ctrl());
    assert!(!outcome.is_handled());
    assert!(!page.click("outline-link").is_handled());
    assert!(!page.click("readme-expand-0").is_handled());
}

#[test]
fn test_each_missing_readme_part_skips_controller() {
    let variants = [
        PageBuilder {
            content: false,
            ..PageBuilder::new()
        },
        PageBuilder {
            outline: false,
            ..PageBuilder::new()
        },
        PageBuilder {
            collapse: false,
            ..PageBuilder::new()
        },
        PageBuilder::new().expand_controls(0),
    ];

    for builder in &variants {
        let (page, unit) = setup(builder);
        assert!(unit.readme().is_none(), "{builder:?}");
        assert!(page.listeners().is_empty(), "{builder:?}");
    }
}
