use std::fs::File;

use pagedom::{Document, Element, Key, Location, Modifiers, Page};
use simplelog::{Config, LevelFilter, WriteLogger};
use unitpage::{init, UnitPageConfig};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("readme_walkthrough.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let hash = std::env::args().nth(1).unwrap_or_default();
    let document = Document::new(ui()).expect("element ids are unique");
    let mut page = Page::new(document.with_location(Location::with_hash(hash)));

    let unit = init(
        &mut page,
        &UnitPageConfig::default(),
        &mut |_: &mut Page, control: &str| println!("copy control ready: {control}"),
        &mut |_: &mut Page, table: &str, expand_all: Option<&str>| {
            println!("directory table ready: {table} (expand all: {expand_all:?})");
        },
    )
    .expect("default selectors are valid");

    for gate in unit.gates() {
        println!(
            "{:<12} present={:<5} disabled={}",
            gate.name, gate.section_present, gate.disabled
        );
    }
    println!("on load: {:?}", unit.readme_state());

    page.key_down(None, Key::Char('f'), Modifiers::ctrl());
    println!("after Ctrl+F: {:?}", unit.readme_state());

    page.click("collapse");
    println!("after collapse: {:?}", unit.readme_state());

    page.click("summary-link");
    println!("after summary link: {:?}", unit.readme_state());

    for request in page.document().scroll_requests() {
        println!("scrolled {} ({:?})", request.target, request.block);
    }

    Ok(())
}

fn ui() -> Element {
    Element::div()
        .id("unit")
        .child(
            Element::nav()
                .id("views")
                .child(Element::option("readme").class("js-readmeOption"))
                .child(Element::option("directories").class("js-directoriesOption")),
        )
        .child(Element::link("#section-readme").id("summary-link").class("js-readmeExpand"))
        .child(Element::button().id("copy-path").class("js-copyToClipboard"))
        .child(
            Element::section()
                .id("readme")
                .class("UnitReadme")
                .class("js-readme")
                .child(
                    Element::div()
                        .id("readme-content")
                        .class("js-readmeContent")
                        .child(Element::text("A module for demonstrating the readme panel.")),
                )
                .child(Element::button().id("expand").class("js-readmeExpand"))
                .child(Element::button().id("collapse").class("js-readmeCollapse")),
        )
        .child(
            Element::nav()
                .id("outline")
                .class("js-readmeOutline")
                .child(Element::link("#readme-usage")),
        )
}
